//! Venue match display: merges Challonge brackets into one fair viewing schedule.

pub mod challonge;
pub mod config;
pub mod logic;
pub mod models;
pub mod render;
pub mod repository;

pub use challonge::{ApiError, BracketApi, ChallongeClient};
pub use config::{Config, ConfigError};
pub use logic::{
    build_schedule, format_display_time, interleave_matches, most_recent_completed,
    resolve_next_opponent, NextOpponent,
};
pub use models::{
    Match, MatchId, MatchState, Participant, ParticipantId, ScheduleEntry, StateFilter,
    Tournament, TournamentData, TournamentId,
};
pub use render::render_schedule_page;
pub use repository::{
    attach_player_names, collect_tournaments, load_tournaments, FetchError, FetchResult,
};
