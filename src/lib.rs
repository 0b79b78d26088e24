//! Single-elimination bracket engine: library with models and bracket logic.

pub mod logic;
pub mod models;

pub use logic::{
    build_bracket, champion, completion_percentage, resolve_team, round_name, trace_team_path,
    BracketView, TeamPath,
};
pub use models::{
    BracketMatch, GameMatch, MatchId, MatchStatus, ProgressionLink, Round, SlotPosition,
    SnapshotError, Team, TeamId, TeamSlot, Tournament, TournamentFormat, TournamentId,
    TBD_TEAM_NAME, UNKNOWN_TEAM_NAME,
};
