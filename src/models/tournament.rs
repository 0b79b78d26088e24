//! Tournament snapshot and SnapshotError.

use crate::models::game::{GameMatch, MatchId};
use crate::models::round::Round;
use crate::models::team::Team;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

/// Errors that can occur while ingesting a tournament snapshot.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SnapshotError {
    /// The payload does not match the tournament/match/team shapes.
    Malformed(String),
    /// Two matches in the snapshot share an id.
    DuplicateMatchId(MatchId),
}

impl std::fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SnapshotError::Malformed(msg) => write!(f, "Malformed tournament snapshot: {}", msg),
            SnapshotError::DuplicateMatchId(id) => {
                write!(f, "Match id {} appears more than once", id)
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

/// Unique identifier for a tournament.
pub type TournamentId = Uuid;

/// Format label shown on the tournament page.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TournamentFormat {
    #[default]
    SingleElimination,
    DoubleElimination,
    RoundRobin,
    Swiss,
}

impl TournamentFormat {
    pub fn label(self) -> &'static str {
        match self {
            TournamentFormat::SingleElimination => "Single Elimination",
            TournamentFormat::DoubleElimination => "Double Elimination",
            TournamentFormat::RoundRobin => "Round Robin",
            TournamentFormat::Swiss => "Swiss",
        }
    }

    /// Only single elimination has progression logic; other formats are labels.
    pub fn has_bracket_engine(self) -> bool {
        self == TournamentFormat::SingleElimination
    }
}

/// Read-only snapshot of a tournament: metadata, matches, and registered teams.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    #[serde(default)]
    pub format: TournamentFormat,
    #[serde(default)]
    pub matches: Vec<GameMatch>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

impl Tournament {
    /// Create an empty single-elimination tournament.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            format: TournamentFormat::SingleElimination,
            matches: Vec::new(),
            teams: Vec::new(),
        }
    }

    pub fn with_entries(name: impl Into<String>, matches: Vec<GameMatch>, teams: Vec<Team>) -> Self {
        Self {
            matches,
            teams,
            ..Self::new(name)
        }
    }

    /// Parse a snapshot from JSON and reject repeated match ids.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let tournament: Tournament =
            serde_json::from_str(json).map_err(|e| SnapshotError::Malformed(e.to_string()))?;
        tournament.check_match_ids()?;
        Ok(tournament)
    }

    /// Reject snapshots where two matches share an id.
    pub fn check_match_ids(&self) -> Result<(), SnapshotError> {
        let mut seen = HashSet::new();
        for m in &self.matches {
            if !seen.insert(m.id) {
                return Err(SnapshotError::DuplicateMatchId(m.id));
            }
        }
        Ok(())
    }

    /// Build the single-elimination bracket for this snapshot.
    pub fn bracket(&self) -> Vec<Round> {
        crate::logic::build_bracket(&self.matches, &self.teams)
    }

    /// Percentage of matches completed (0-100).
    pub fn completion(&self) -> f64 {
        crate::logic::completion_percentage(&self.matches)
    }
}
