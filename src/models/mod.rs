//! Data structures for the bracket engine: teams, matches, rounds, tournament snapshot.

mod game;
mod round;
mod team;
mod tournament;

pub use game::{GameMatch, MatchId, MatchStatus, ProgressionLink, SlotPosition};
pub use round::{BracketMatch, Round};
pub use team::{Team, TeamId, TeamSlot, TBD_TEAM_NAME, UNKNOWN_TEAM_NAME};
pub use tournament::{SnapshotError, Tournament, TournamentFormat, TournamentId};
