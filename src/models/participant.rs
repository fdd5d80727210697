//! Participant: one entrant, scoped to a single tournament.

use serde::{Deserialize, Serialize};

use crate::models::tournament::TournamentId;

/// Unique identifier for a participant (numeric id from the bracket API).
pub type ParticipantId = u64;

/// A tournament entrant, used only for name lookups when joining matches.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub tournament_id: TournamentId,
    pub name: String,
}
