//! Data structures normalized from the bracket API, plus derived display types.

mod matches;
mod participant;
mod schedule;
mod tournament;

pub use matches::{Match, MatchId, MatchState, StateFilter};
pub use participant::{Participant, ParticipantId};
pub use schedule::ScheduleEntry;
pub use tournament::{Tournament, TournamentData, TournamentId};
