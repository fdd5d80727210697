//! ScheduleEntry: one row of the venue display, derived per request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::matches::{MatchId, MatchState};

/// A match enriched for display: resolved names, tournament name, projected
/// start time, and the next-opponent lookup result. Never persisted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub id: MatchId,
    /// Projected start, localized 12-hour string with AM/PM and zone, e.g.
    /// "02:35 PM PDT".
    pub time: String,
    pub player1: String,
    pub player2: String,
    pub tournament: String,
    pub status: MatchState,
    /// Pending match the winner advances into, when known.
    pub next_match_id: Option<MatchId>,
    /// Display name of the opponent waiting there; empty when unknown.
    pub next_opponent_label: String,
    pub round: i64,
    pub suggested_play_order: Option<i64>,
    pub underway_at: Option<DateTime<Utc>>,
}
