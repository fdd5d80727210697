//! Tournament metadata and the per-request fetched bundle.

use serde::{Deserialize, Serialize};

use crate::models::matches::Match;

/// Unique identifier for a tournament (numeric id from the bracket API).
/// Requests address tournaments by their URL slug; records carry this id.
pub type TournamentId = u64;

/// Tournament metadata as shown on the display.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tournament {
    pub id: TournamentId,
    pub name: String,
    /// URL slug the tournament was requested by.
    pub url: String,
    /// Time zone the bracket was configured with upstream, if any.
    pub timezone: Option<String>,
}

/// One tournament with its full, name-joined match list. Built fresh per
/// request; nothing here is cached or written back.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TournamentData {
    pub tournament: Tournament,
    pub matches: Vec<Match>,
}
