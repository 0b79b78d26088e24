//! Bracket engine logic: construction, path tracing, progress.

mod bracket;
mod path;
mod progress;

pub use bracket::{build_bracket, resolve_team, round_name};
pub use path::{trace_team_path, TeamPath};
pub use progress::{champion, completion_percentage, BracketView};
