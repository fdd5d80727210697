//! Minimal Challonge v1 REST client: tournaments, matches, participants.
//!
//! Records come back wrapped one level deep (`{"match": {...}}`); the raw
//! types here mirror that envelope and convert into the internal models via
//! explicit field mapping, so unexpected upstream shapes fail at this
//! boundary instead of deep in the display code.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::{Match, MatchState, Participant, StateFilter, Tournament};

/// Base URL for the hosted Challonge API.
const BASE_URL: &str = "https://api.challonge.com/v1";

/// Failure talking to or decoding from the bracket API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("tournament {0} not found")]
    NotFound(String),
    #[error("bracket API returned HTTP {status} for tournament {tournament}")]
    Status {
        tournament: String,
        status: reqwest::StatusCode,
    },
}

/// Read access to the bracket-management API. The repository talks to this
/// trait so tests can substitute a canned in-memory implementation.
#[allow(async_fn_in_trait)]
pub trait BracketApi {
    async fn get_tournament(&self, tournament_id: &str) -> Result<Tournament, ApiError>;
    async fn list_matches(
        &self,
        tournament_id: &str,
        state: StateFilter,
    ) -> Result<Vec<Match>, ApiError>;
    async fn list_participants(&self, tournament_id: &str) -> Result<Vec<Participant>, ApiError>;
}

/// reqwest-backed client for the hosted Challonge API (HTTP basic auth).
/// Credentials are passed in at construction; there is no global state.
pub struct ChallongeClient {
    http: reqwest::Client,
    username: String,
    api_key: String,
}

impl ChallongeClient {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            username: username.into(),
            api_key: api_key.into(),
        }
    }

    async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        tournament_id: &str,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T, ApiError> {
        let url = format!("{BASE_URL}/{path}");
        let response = self
            .http
            .get(&url)
            .basic_auth(&self.username, Some(&self.api_key))
            .query(query)
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            Ok(response.json::<T>().await?)
        } else if status == reqwest::StatusCode::NOT_FOUND {
            Err(ApiError::NotFound(tournament_id.to_string()))
        } else {
            Err(ApiError::Status {
                tournament: tournament_id.to_string(),
                status,
            })
        }
    }
}

impl BracketApi for ChallongeClient {
    async fn get_tournament(&self, tournament_id: &str) -> Result<Tournament, ApiError> {
        let envelope: TournamentEnvelope = self
            .get_json(
                tournament_id,
                &format!("tournaments/{tournament_id}.json"),
                &[],
            )
            .await?;
        Ok(envelope.tournament.into())
    }

    async fn list_matches(
        &self,
        tournament_id: &str,
        state: StateFilter,
    ) -> Result<Vec<Match>, ApiError> {
        let envelopes: Vec<MatchEnvelope> = self
            .get_json(
                tournament_id,
                &format!("tournaments/{tournament_id}/matches.json"),
                &[("state", state.as_query())],
            )
            .await?;
        Ok(envelopes.into_iter().map(|e| e.inner.into()).collect())
    }

    async fn list_participants(&self, tournament_id: &str) -> Result<Vec<Participant>, ApiError> {
        let envelopes: Vec<ParticipantEnvelope> = self
            .get_json(
                tournament_id,
                &format!("tournaments/{tournament_id}/participants.json"),
                &[],
            )
            .await?;
        Ok(envelopes.into_iter().map(|e| e.participant.into()).collect())
    }
}

#[derive(Debug, Deserialize)]
struct TournamentEnvelope {
    tournament: RawTournament,
}

#[derive(Debug, Deserialize)]
struct RawTournament {
    id: u64,
    name: String,
    url: String,
    #[serde(default)]
    timezone: Option<String>,
}

impl From<RawTournament> for Tournament {
    fn from(raw: RawTournament) -> Self {
        Tournament {
            id: raw.id,
            name: raw.name,
            url: raw.url,
            timezone: raw.timezone,
        }
    }
}

#[derive(Debug, Deserialize)]
struct MatchEnvelope {
    #[serde(rename = "match")]
    inner: RawMatch,
}

#[derive(Debug, Deserialize)]
struct RawMatch {
    id: u64,
    tournament_id: u64,
    state: MatchState,
    #[serde(default)]
    player1_id: Option<u64>,
    #[serde(default)]
    player2_id: Option<u64>,
    #[serde(default)]
    player1_prereq_match_id: Option<u64>,
    #[serde(default)]
    player2_prereq_match_id: Option<u64>,
    #[serde(default)]
    suggested_play_order: Option<i64>,
    #[serde(default)]
    round: i64,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    underway_at: Option<DateTime<Utc>>,
}

impl From<RawMatch> for Match {
    fn from(raw: RawMatch) -> Self {
        Match {
            id: raw.id,
            tournament_id: raw.tournament_id,
            state: raw.state,
            player1_id: raw.player1_id,
            player2_id: raw.player2_id,
            player1_prereq_match_id: raw.player1_prereq_match_id,
            player2_prereq_match_id: raw.player2_prereq_match_id,
            // Names are joined from the roster by the repository.
            player1_name: None,
            player2_name: None,
            suggested_play_order: raw.suggested_play_order,
            round: raw.round,
            updated_at: raw.updated_at,
            underway_at: raw.underway_at,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ParticipantEnvelope {
    participant: RawParticipant,
}

#[derive(Debug, Deserialize)]
struct RawParticipant {
    id: u64,
    tournament_id: u64,
    name: String,
}

impl From<RawParticipant> for Participant {
    fn from(raw: RawParticipant) -> Self {
        Participant {
            id: raw.id,
            tournament_id: raw.tournament_id,
            name: raw.name,
        }
    }
}
