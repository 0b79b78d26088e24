//! Bracket construction: partition matches into rounds, order them, link winners forward, name rounds.

use crate::models::{
    BracketMatch, GameMatch, ProgressionLink, Round, SlotPosition, Team, TeamId, TeamSlot,
};
use std::collections::{BTreeMap, HashMap};

/// Build the ordered rounds of a single-elimination bracket from a flat match list.
///
/// 1. Group matches by their `round` value (gaps allowed).
/// 2. Stable-sort each round by match number (absent = 0).
/// 3. Link sorted index `i` in round `r` to index `i / 2` in round `r + 1`.
/// 4. Name each round relative to the highest round present.
///
/// Empty input yields no rounds, which callers treat as "bracket not yet available".
/// Malformed shapes never fail; the affected matches just get no progression link.
pub fn build_bracket(matches: &[GameMatch], teams: &[Team]) -> Vec<Round> {
    if matches.is_empty() {
        return Vec::new();
    }

    let mut by_round: BTreeMap<u32, Vec<&GameMatch>> = BTreeMap::new();
    for m in matches {
        by_round.entry(m.round).or_default().push(m);
    }
    for round_matches in by_round.values_mut() {
        // sort_by_key is stable: equal match numbers keep input order
        round_matches.sort_by_key(|m| m.sort_key());
    }

    let total_rounds = by_round.keys().next_back().copied().unwrap_or(0);
    let mut roster: HashMap<TeamId, &Team> = HashMap::with_capacity(teams.len());
    for t in teams {
        // first roster entry wins, matching resolve_team
        roster.entry(t.id).or_insert(t);
    }

    let rounds: Vec<Round> = by_round
        .iter()
        .map(|(&round_number, round_matches)| {
            let next_round = if round_number < total_rounds {
                by_round.get(&(round_number + 1))
            } else {
                None
            };
            let matches = round_matches
                .iter()
                .enumerate()
                .map(|(index, m)| {
                    let progression = next_round.and_then(|next| link_to_next(index, next));
                    if round_number < total_rounds && progression.is_none() {
                        log::debug!(
                            "match {} in round {} has no slot in round {}",
                            m.id,
                            round_number,
                            round_number + 1
                        );
                    }
                    BracketMatch {
                        game: (*m).clone(),
                        team1: resolve_with(m.team1_id, |id| roster.get(&id).copied()),
                        team2: resolve_with(m.team2_id, |id| roster.get(&id).copied()),
                        progression,
                    }
                })
                .collect();
            Round {
                round_number,
                name: round_name(round_number, total_rounds),
                matches,
            }
        })
        .collect();

    log::debug!(
        "built bracket: {} round(s), {} match(es), final round {}",
        rounds.len(),
        matches.len(),
        total_rounds
    );
    rounds
}

/// Where the match at sorted `index` advances, given the next round's sorted matches.
fn link_to_next(index: usize, next_round: &[&GameMatch]) -> Option<ProgressionLink> {
    let next = next_round.get(index / 2)?;
    Some(ProgressionLink {
        next_match_id: next.id,
        position: SlotPosition::from_index(index),
    })
}

/// Display name for a round, purely from its number and the highest round number.
pub fn round_name(round_number: u32, total_rounds: u32) -> String {
    match total_rounds.checked_sub(round_number) {
        Some(0) => "Finals".to_string(),
        Some(1) => "Semi-Finals".to_string(),
        Some(2) => "Quarter-Finals".to_string(),
        _ => format!("Round {}", round_number),
    }
}

/// Resolve a team reference against the roster. Never fails.
/// The first roster entry with a given id is used.
pub fn resolve_team(team_id: Option<TeamId>, teams: &[Team]) -> TeamSlot {
    resolve_with(team_id, |id| teams.iter().find(|t| t.id == id))
}

/// Sentinel handling shared by the slice and roster-map lookups.
fn resolve_with<'a>(
    team_id: Option<TeamId>,
    lookup: impl FnOnce(TeamId) -> Option<&'a Team>,
) -> TeamSlot {
    match team_id {
        None => TeamSlot::to_be_determined(),
        Some(id) => lookup(id)
            .map(TeamSlot::from_team)
            .unwrap_or_else(|| TeamSlot::unknown(id)),
    }
}
