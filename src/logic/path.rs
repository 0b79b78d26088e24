//! Team path tracing: follow one team's wins through the bracket.

use crate::models::{MatchId, Round, TeamId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// The matches a team has played or will play next, in round order.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamPath {
    pub team_id: TeamId,
    pub match_ids: Vec<MatchId>,
}

impl TeamPath {
    pub fn contains(&self, match_id: MatchId) -> bool {
        self.match_ids.contains(&match_id)
    }

    /// Match ids as a set, for highlighting match cards.
    pub fn highlights(&self) -> HashSet<MatchId> {
        self.match_ids.iter().copied().collect()
    }

    pub fn is_empty(&self) -> bool {
        self.match_ids.is_empty()
    }

    /// The elimination match, or the pending match the team is waiting on.
    pub fn last_match_id(&self) -> Option<MatchId> {
        self.match_ids.last().copied()
    }
}

/// Trace a team through the rounds.
///
/// Rounds are visited by ascending round number. In each round the first match
/// (in sorted order) involving the team is recorded. The team continues only if it
/// is that match's winner; a loss or an undecided match ends the path after recording
/// it. A round in which the team does not appear ends the path too.
pub fn trace_team_path(rounds: &[Round], team_id: TeamId) -> TeamPath {
    let mut ordered: Vec<&Round> = rounds.iter().collect();
    ordered.sort_by_key(|r| r.round_number);

    let mut match_ids = Vec::new();
    let mut current: Option<TeamId> = Some(team_id);

    for round in ordered {
        let Some(team) = current else {
            break;
        };
        let Some(found) = round.matches.iter().find(|m| m.game.involves(team)) else {
            log::trace!("team {} absent from round {}", team, round.round_number);
            break;
        };
        match_ids.push(found.id());
        if found.game.winner_id != Some(team) {
            log::trace!(
                "team {} path ends at match {} in round {}",
                team,
                found.id(),
                round.round_number
            );
            current = None;
        }
    }

    TeamPath { team_id, match_ids }
}
