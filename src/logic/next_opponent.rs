//! "Who plays the winner next" lookup across pending bracket matches.

use crate::models::{Match, MatchId, MatchState};

/// The pending match a winner advances into, and who is waiting there.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NextOpponent {
    pub match_id: MatchId,
    /// Display name of the already-seated opponent; `None` while that slot
    /// has no participant yet.
    pub opponent_name: Option<String>,
}

/// Find the pending match the winner of `open_match` advances into.
///
/// A pending match qualifies when exactly one of its prerequisite slots
/// references `open_match` and the other slot carries no prerequisite, i.e.
/// it is already resolved to a concrete participant. A well-formed
/// elimination bracket yields at most one candidate; should the upstream
/// data produce several, the lowest match id wins so the answer stays
/// deterministic.
pub fn resolve_next_opponent(open_match: &Match, all_matches: &[Match]) -> Option<NextOpponent> {
    let next = all_matches
        .iter()
        .filter(|n| n.state == MatchState::Pending)
        .filter(|n| qualifies(open_match.id, n))
        .min_by_key(|n| n.id)?;
    let opponent_name = if next.player1_prereq_match_id == Some(open_match.id) {
        next.player2_name.clone()
    } else {
        next.player1_name.clone()
    };
    Some(NextOpponent {
        match_id: next.id,
        opponent_name,
    })
}

/// Exactly one prerequisite slot references `open_id`, and the other slot
/// has no pending link of its own.
fn qualifies(open_id: MatchId, pending: &Match) -> bool {
    let refs_1 = pending.player1_prereq_match_id == Some(open_id);
    let refs_2 = pending.player2_prereq_match_id == Some(open_id);
    match (refs_1, refs_2) {
        (true, false) => pending.player2_prereq_match_id.is_none(),
        (false, true) => pending.player1_prereq_match_id.is_none(),
        _ => false,
    }
}
