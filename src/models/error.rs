//! Errors for schedule loading and selection validation.

/// Errors that can occur when loading a schedule or validating a selection.
///
/// Dirty source data is never an error: rows with missing tags, incomplete
/// courts, and out-of-range player indices are skipped where they occur so
/// the app stays usable with a partially-dirty schedule file.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScheduleError {
    /// Requested player count must be positive.
    InvalidPlayerCount,
    /// Requested court count must be positive.
    InvalidCourtCount,
    /// Requested number of rounds must be positive.
    InvalidRoundBudget,
    /// The schedule CSV could not be decoded.
    Csv(String),
    /// The schedule file could not be read.
    Io(String),
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScheduleError::InvalidPlayerCount => write!(f, "Player count must be positive"),
            ScheduleError::InvalidCourtCount => write!(f, "Court count must be positive"),
            ScheduleError::InvalidRoundBudget => write!(f, "Number of rounds must be positive"),
            ScheduleError::Csv(msg) => write!(f, "Schedule CSV error: {}", msg),
            ScheduleError::Io(msg) => write!(f, "Schedule file error: {}", msg),
        }
    }
}

impl From<std::io::Error> for ScheduleError {
    fn from(e: std::io::Error) -> Self {
        ScheduleError::Io(e.to_string())
    }
}

impl From<csv::Error> for ScheduleError {
    fn from(e: csv::Error) -> Self {
        ScheduleError::Csv(e.to_string())
    }
}
