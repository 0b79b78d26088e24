//! Tournament-wide progress: completion ratio, champion, and the render summary.

use crate::logic::bracket::build_bracket;
use crate::models::{GameMatch, Round, TeamId, Tournament};
use serde::{Deserialize, Serialize};

/// Percentage (0-100) of matches with status completed. Zero matches gives 0.
pub fn completion_percentage(matches: &[GameMatch]) -> f64 {
    if matches.is_empty() {
        return 0.0;
    }
    let completed = matches.iter().filter(|m| m.status.is_completed()).count();
    100.0 * completed as f64 / matches.len() as f64
}

/// Winner of the tournament, once the single final match is completed.
pub fn champion(rounds: &[Round]) -> Option<TeamId> {
    let finals = rounds.iter().max_by_key(|r| r.round_number)?;
    let [final_match] = finals.matches.as_slice() else {
        return None;
    };
    let game = &final_match.game;
    if game.status.is_completed() && game.is_decided() {
        game.winner_id
    } else {
        None
    }
}

/// Everything a bracket renderer needs for one snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketView {
    /// False while no matches exist yet.
    pub ready: bool,
    pub total_rounds: u32,
    pub completion: f64,
    pub champion_id: Option<TeamId>,
    pub rounds: Vec<Round>,
}

impl BracketView {
    pub fn from_tournament(tournament: &Tournament) -> Self {
        let rounds = build_bracket(&tournament.matches, &tournament.teams);
        let total_rounds = rounds.last().map(|r| r.round_number).unwrap_or(0);
        Self {
            ready: !rounds.is_empty(),
            total_rounds,
            completion: completion_percentage(&tournament.matches),
            champion_id: champion(&rounds),
            rounds,
        }
    }
}
