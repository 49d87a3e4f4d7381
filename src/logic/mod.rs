//! Pure schedule engine: schema discovery, extraction, filtering, matrix.

mod extract;
mod filter;
mod matrix;
mod names;
mod schema;

pub use extract::extract_round;
pub use filter::{
    court_count_options, filter_rounds, player_count_options, round_count_options,
};
pub use matrix::build_matrix;
pub use names::resolve_name;
pub use schema::court_ids;
