//! Match data: player slots, prerequisite links, and bracket sequencing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::participant::ParticipantId;
use crate::models::tournament::TournamentId;

/// Unique identifier for a match (numeric id from the bracket API).
pub type MatchId = u64;

/// Shown for a player slot that has no resolved participant yet.
pub const UNKNOWN_PLAYER: &str = "???";

/// Lifecycle of a match. Transitions only move forward:
/// pending -> open -> complete.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchState {
    /// Waiting on one or both prerequisite matches.
    Pending,
    /// Both players known; ready to be called to a table/arena.
    Open,
    /// Winner recorded.
    Complete,
}

/// State subset requested by a display endpoint.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateFilter {
    All,
    #[default]
    Open,
    Pending,
}

impl StateFilter {
    /// Whether a match in `state` belongs in this view.
    pub fn admits(self, state: MatchState) -> bool {
        match self {
            StateFilter::All => true,
            StateFilter::Open => state == MatchState::Open,
            StateFilter::Pending => state == MatchState::Pending,
        }
    }

    /// Value for the upstream `state` query parameter.
    pub fn as_query(self) -> &'static str {
        match self {
            StateFilter::All => "all",
            StateFilter::Open => "open",
            StateFilter::Pending => "pending",
        }
    }
}

/// A single bracket match, normalized from the upstream record and joined
/// with participant display names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub state: MatchState,
    /// Resolved participant for slot 1; `None` while waiting on a prerequisite.
    pub player1_id: Option<ParticipantId>,
    pub player2_id: Option<ParticipantId>,
    /// Prior match whose winner fills slot 1; cleared once that match completes.
    pub player1_prereq_match_id: Option<MatchId>,
    pub player2_prereq_match_id: Option<MatchId>,
    /// Display names joined from the participant roster.
    pub player1_name: Option<String>,
    pub player2_name: Option<String>,
    /// Intended intra-bracket sequencing index, unique within a tournament.
    pub suggested_play_order: Option<i64>,
    pub round: i64,
    /// Last state-transition time.
    pub updated_at: Option<DateTime<Utc>>,
    /// Set once the match has started live.
    pub underway_at: Option<DateTime<Utc>>,
}

impl Match {
    /// Slot 1 display name, or "???" when unresolved.
    pub fn player1_display(&self) -> &str {
        self.player1_name.as_deref().unwrap_or(UNKNOWN_PLAYER)
    }

    /// Slot 2 display name, or "???" when unresolved.
    pub fn player2_display(&self) -> &str {
        self.player2_name.as_deref().unwrap_or(UNKNOWN_PLAYER)
    }
}
