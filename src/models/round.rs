//! Derived bracket structure: rounds of matches with resolved teams and links.

use crate::models::game::{GameMatch, MatchId, ProgressionLink};
use crate::models::team::TeamSlot;
use serde::{Deserialize, Serialize};

/// A match placed in the bracket: the raw record plus display data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketMatch {
    #[serde(rename = "match")]
    pub game: GameMatch,
    pub team1: TeamSlot,
    pub team2: TeamSlot,
    /// None in the last round and for matches a malformed next round cannot absorb.
    pub progression: Option<ProgressionLink>,
}

impl BracketMatch {
    pub fn id(&self) -> MatchId {
        self.game.id
    }
}

/// One depth level of the bracket.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub round_number: u32,
    pub name: String,
    /// Sorted by match number ascending, ties in input order.
    pub matches: Vec<BracketMatch>,
}

impl Round {
    pub fn find_match(&self, match_id: MatchId) -> Option<&BracketMatch> {
        self.matches.iter().find(|m| m.id() == match_id)
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }
}
