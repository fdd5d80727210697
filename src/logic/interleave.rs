//! Fair round-robin interleave of match lists across tournaments.

use chrono::{DateTime, Utc};

use crate::models::{Match, MatchState, StateFilter, TournamentData};

/// Most recent `updated_at` among a tournament's completed matches.
///
/// Tournaments with no completed match get the minimum timestamp so they
/// sort before every tournament that has progressed.
pub fn most_recent_completed(matches: &[Match]) -> DateTime<Utc> {
    matches
        .iter()
        .filter(|m| m.state == MatchState::Complete)
        .filter_map(|m| m.updated_at)
        .max()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

/// Merge the tournaments' match lists into one fair viewing order.
///
/// 1. Keep only matches admitted by `filter`, each group sorted ascending by
///    `suggested_play_order` (stable sort, so fetch order breaks ties).
/// 2. Order the groups by their most recent completed match, stalled
///    tournaments first.
/// 3. Take one match from each group in that order, round after round,
///    skipping exhausted groups, until every group is empty. No placeholder
///    entries for short groups.
///
/// Pure function of its input: running it twice yields identical output.
pub fn interleave_matches(tournaments: &[TournamentData], filter: StateFilter) -> Vec<Match> {
    let mut groups: Vec<(DateTime<Utc>, Vec<Match>)> = tournaments
        .iter()
        .map(|t| {
            let mut group: Vec<Match> = t
                .matches
                .iter()
                .filter(|m| filter.admits(m.state))
                .cloned()
                .collect();
            group.sort_by_key(|m| m.suggested_play_order);
            (most_recent_completed(&t.matches), group)
        })
        .collect();
    groups.sort_by_key(|(latest, _)| *latest);

    let total = groups.iter().map(|(_, g)| g.len()).sum();
    let rounds = groups.iter().map(|(_, g)| g.len()).max().unwrap_or(0);
    let mut merged = Vec::with_capacity(total);
    for i in 0..rounds {
        for (_, group) in &groups {
            if let Some(m) = group.get(i) {
                merged.push(m.clone());
            }
        }
    }
    merged
}
