//! Process configuration, read once from the environment at startup and
//! passed explicitly to whatever needs it. No global mutable state.

use chrono::Duration;
use chrono_tz::Tz;

/// Tournaments shown when TOURNAMENT_IDS is not set.
const DEFAULT_TOURNAMENT_IDS: &[&str] = &["SonoranShowdownBeetleweight"];

/// Lead time before the first displayed match, in minutes.
const DEFAULT_NEXT_MATCH_START_MINS: i64 = 1;

/// Assumed duration of one match, in minutes.
const DEFAULT_MATCH_DELAY_MINS: i64 = 3;

const DEFAULT_TIMEZONE: &str = "America/Los_Angeles";

/// Everything the display server needs: credentials, tournament list,
/// display timezone, and the two projection durations.
#[derive(Clone, Debug)]
pub struct Config {
    pub username: String,
    pub api_key: String,
    /// URL slugs of the tournaments to merge onto one display.
    pub tournament_ids: Vec<String>,
    pub display_timezone: Tz,
    /// Lead time before the first entry's projected start.
    pub next_match_start: Duration,
    /// Fixed gap between consecutive projected starts.
    pub match_delay: Duration,
    /// Fail the whole request when any one tournament fails to load.
    pub strict_fetch: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),
    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

impl Config {
    /// Load configuration from environment variables, applying defaults for
    /// everything except the Challonge credentials.
    pub fn from_env() -> Result<Self, ConfigError> {
        let username = require("CHALLONGE_USERNAME")?;
        let api_key = require("CHALLONGE_API_KEY")?;

        let tournament_ids = match std::env::var("TOURNAMENT_IDS") {
            Ok(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
            Err(_) => DEFAULT_TOURNAMENT_IDS.iter().map(|s| s.to_string()).collect(),
        };

        let display_timezone = match std::env::var("DISPLAY_TIMEZONE") {
            Ok(raw) => raw.parse::<Tz>().map_err(|_| ConfigError::Invalid {
                var: "DISPLAY_TIMEZONE",
                value: raw,
            })?,
            Err(_) => DEFAULT_TIMEZONE.parse::<Tz>().unwrap_or(chrono_tz::UTC),
        };

        Ok(Self {
            username,
            api_key,
            tournament_ids,
            display_timezone,
            next_match_start: Duration::minutes(minutes_var(
                "NEXT_MATCH_START_MINS",
                DEFAULT_NEXT_MATCH_START_MINS,
            )?),
            match_delay: Duration::minutes(minutes_var(
                "MATCH_DELAY_MINS",
                DEFAULT_MATCH_DELAY_MINS,
            )?),
            strict_fetch: flag_var("STRICT_FETCH"),
        })
    }
}

fn require(var: &'static str) -> Result<String, ConfigError> {
    std::env::var(var).map_err(|_| ConfigError::MissingVar(var))
}

fn minutes_var(var: &'static str, default: i64) -> Result<i64, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => raw
            .parse::<i64>()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
        Err(_) => Ok(default),
    }
}

fn flag_var(var: &str) -> bool {
    matches!(
        std::env::var(var).as_deref(),
        Ok("1") | Ok("true") | Ok("yes")
    )
}
