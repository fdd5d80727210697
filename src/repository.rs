//! Fetch-and-join layer: pulls tournaments, match lists, and rosters from
//! the bracket API and produces name-resolved `TournamentData` bundles.

use std::collections::HashMap;

use crate::challonge::{ApiError, BracketApi};
use crate::models::{Match, Participant, ParticipantId, StateFilter, TournamentData};

/// One tournament id's fetch outcome: data, or the reason it was skipped.
pub type FetchResult = Result<TournamentData, FetchError>;

/// Fetch failure tagged with the tournament id it belongs to.
#[derive(Debug, thiserror::Error)]
#[error("failed to load tournament {tournament_id}: {source}")]
pub struct FetchError {
    pub tournament_id: String,
    #[source]
    pub source: ApiError,
}

/// Fetch every requested tournament with its full match list and roster,
/// joining participant names into each match. Fetches run sequentially and
/// failures stay isolated per tournament: one bad id yields an `Err` entry,
/// the rest still load.
///
/// Matches are always fetched with `state=all` so the scheduler can see
/// completed matches for group priority; display filtering happens later.
pub async fn load_tournaments<A: BracketApi>(
    api: &A,
    tournament_ids: &[String],
) -> Vec<FetchResult> {
    let mut results = Vec::with_capacity(tournament_ids.len());
    for tournament_id in tournament_ids {
        let result = load_one(api, tournament_id).await.map_err(|source| FetchError {
            tournament_id: tournament_id.clone(),
            source,
        });
        results.push(result);
    }
    results
}

async fn load_one<A: BracketApi>(api: &A, tournament_id: &str) -> Result<TournamentData, ApiError> {
    let tournament = api.get_tournament(tournament_id).await?;
    let matches = api.list_matches(tournament_id, StateFilter::All).await?;
    let participants = api.list_participants(tournament_id).await?;
    Ok(TournamentData {
        tournament,
        matches: attach_player_names(matches, &participants),
    })
}

/// Join participant display names into each match's player slots. A slot
/// whose participant is unknown (still pending, or missing from the roster)
/// keeps `None` and renders as "???".
pub fn attach_player_names(mut matches: Vec<Match>, participants: &[Participant]) -> Vec<Match> {
    let by_id: HashMap<ParticipantId, &str> = participants
        .iter()
        .map(|p| (p.id, p.name.as_str()))
        .collect();
    for m in &mut matches {
        m.player1_name = m
            .player1_id
            .and_then(|id| by_id.get(&id).map(|name| name.to_string()));
        m.player2_name = m
            .player2_id
            .and_then(|id| by_id.get(&id).map(|name| name.to_string()));
    }
    matches
}

/// Collapse per-tournament results according to the failure policy: strict
/// mode surfaces the first error, lenient mode logs the failure and keeps
/// the tournaments that did load.
pub fn collect_tournaments(
    results: Vec<FetchResult>,
    strict: bool,
) -> Result<Vec<TournamentData>, FetchError> {
    let mut data = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Ok(t) => data.push(t),
            Err(e) if strict => return Err(e),
            Err(e) => log::warn!("{e}"),
        }
    }
    Ok(data)
}
