//! Match records, match status, and the progression link between rounds.

use crate::models::team::TeamId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a match within a tournament.
pub type MatchId = i64;

/// Lifecycle of a match: scheduled -> in_progress -> completed.
/// Transitions happen in scoring workflows; the engine only reads the value.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    InProgress,
    Completed,
}

impl MatchStatus {
    pub fn is_completed(self) -> bool {
        self == MatchStatus::Completed
    }

    pub fn label(self) -> &'static str {
        match self {
            MatchStatus::Scheduled => "Scheduled",
            MatchStatus::InProgress => "In Progress",
            MatchStatus::Completed => "Completed",
        }
    }
}

/// Which feeder slot of the next match a winner lands in.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotPosition {
    Top,
    Bottom,
}

impl SlotPosition {
    /// Even sorted index feeds the top slot, odd feeds the bottom.
    pub fn from_index(index: usize) -> Self {
        if index % 2 == 0 {
            SlotPosition::Top
        } else {
            SlotPosition::Bottom
        }
    }
}

/// Where the winner of a match advances to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionLink {
    pub next_match_id: MatchId,
    pub position: SlotPosition,
}

/// A single bracket match as supplied by the data layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMatch {
    pub id: MatchId,
    /// Bracket depth, starting at 1.
    pub round: u32,
    /// Ordering key within the round; absent is treated as 0.
    #[serde(default)]
    pub match_number: Option<i32>,
    /// None means the slot is not determined yet.
    #[serde(default)]
    pub team1_id: Option<TeamId>,
    #[serde(default)]
    pub team2_id: Option<TeamId>,
    #[serde(default)]
    pub team1_score: Option<f64>,
    #[serde(default)]
    pub team2_score: Option<f64>,
    /// Should equal team1_id or team2_id when present.
    #[serde(default)]
    pub winner_id: Option<TeamId>,
    #[serde(default)]
    pub status: MatchStatus,
    #[serde(default)]
    pub scheduled_time: Option<DateTime<Utc>>,
}

impl GameMatch {
    /// A scheduled match with both slots empty.
    pub fn new(id: MatchId, round: u32, match_number: i32) -> Self {
        Self {
            id,
            round,
            match_number: Some(match_number),
            team1_id: None,
            team2_id: None,
            team1_score: None,
            team2_score: None,
            winner_id: None,
            status: MatchStatus::Scheduled,
            scheduled_time: None,
        }
    }

    pub fn with_teams(mut self, team1: Option<TeamId>, team2: Option<TeamId>) -> Self {
        self.team1_id = team1;
        self.team2_id = team2;
        self
    }

    /// Mark the match completed with the given winner and scores.
    pub fn completed(mut self, winner: TeamId, scores: (u32, u32)) -> Self {
        self.winner_id = Some(winner);
        self.team1_score = Some(f64::from(scores.0));
        self.team2_score = Some(f64::from(scores.1));
        self.status = MatchStatus::Completed;
        self
    }

    pub fn with_status(mut self, status: MatchStatus) -> Self {
        self.status = status;
        self
    }

    /// Sort key within a round.
    pub fn sort_key(&self) -> i32 {
        self.match_number.unwrap_or(0)
    }

    pub fn involves(&self, team: TeamId) -> bool {
        self.team1_id == Some(team) || self.team2_id == Some(team)
    }

    /// True when a winner is recorded and it occupies one of the slots.
    pub fn is_decided(&self) -> bool {
        self.winner_id.is_some_and(|w| self.involves(w))
    }

    /// The team in the other slot from the winner, if the match is decided.
    pub fn loser_id(&self) -> Option<TeamId> {
        let winner = self.winner_id?;
        if self.team1_id == Some(winner) {
            self.team2_id
        } else if self.team2_id == Some(winner) {
            self.team1_id
        } else {
            None
        }
    }
}
