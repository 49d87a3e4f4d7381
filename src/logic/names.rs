//! Display-name resolution for 1-based player indices.

use crate::models::PlayerIndex;

/// The display name for 1-based `index`: the user-supplied name at
/// `names[index - 1]`, trimmed, when present and non-blank; otherwise the
/// index itself in decimal. Never fails.
///
/// Presentation-only: the matrix arithmetic stays index-keyed, so renaming
/// players never forces a rebuild.
pub fn resolve_name(index: PlayerIndex, names: &[String]) -> String {
    index
        .checked_sub(1)
        .and_then(|i| names.get(i as usize))
        .map(|name| name.trim())
        .filter(|name| !name.is_empty())
        .map_or_else(|| index.to_string(), str::to_string)
}
