//! Projected-time schedule assembly for the display endpoints.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use chrono_tz::Tz;

use crate::logic::interleave::interleave_matches;
use crate::logic::next_opponent::resolve_next_opponent;
use crate::models::{Match, MatchState, ScheduleEntry, StateFilter, TournamentData, TournamentId};

/// Build the display schedule: interleave the tournaments, resolve each open
/// match's next opponent, and assign projected wall-clock times.
///
/// The first entry is projected at `now + lead`; every following entry adds
/// `delay`. This is a display heuristic assuming constant match duration,
/// not a prediction model.
pub fn build_schedule(
    tournaments: &[TournamentData],
    filter: StateFilter,
    now: DateTime<Utc>,
    timezone: Tz,
    lead: Duration,
    delay: Duration,
) -> Vec<ScheduleEntry> {
    let tournament_names: HashMap<TournamentId, &str> = tournaments
        .iter()
        .map(|t| (t.tournament.id, t.tournament.name.as_str()))
        .collect();
    // The resolver scans pending matches regardless of the display filter.
    let all_matches: Vec<Match> = tournaments
        .iter()
        .flat_map(|t| t.matches.iter().cloned())
        .collect();

    let mut start = now + lead;
    let mut entries = Vec::new();
    for m in interleave_matches(tournaments, filter) {
        let next = if m.state == MatchState::Open {
            resolve_next_opponent(&m, &all_matches)
        } else {
            None
        };
        entries.push(ScheduleEntry {
            id: m.id,
            time: format_display_time(start, timezone),
            player1: m.player1_display().to_string(),
            player2: m.player2_display().to_string(),
            tournament: tournament_names
                .get(&m.tournament_id)
                .copied()
                .unwrap_or("???")
                .to_string(),
            status: m.state,
            next_match_id: next.as_ref().map(|n| n.match_id),
            next_opponent_label: next.and_then(|n| n.opponent_name).unwrap_or_default(),
            round: m.round,
            suggested_play_order: m.suggested_play_order,
            underway_at: m.underway_at,
        });
        start += delay;
    }
    entries
}

/// Localized 12-hour time with AM/PM and zone abbreviation, e.g. "02:35 PM PDT".
pub fn format_display_time(t: DateTime<Utc>, timezone: Tz) -> String {
    t.with_timezone(&timezone).format("%I:%M %p %Z").to_string()
}
