//! Scheduling logic: fair interleave, next-opponent resolution, time projection.

mod interleave;
mod next_opponent;
mod schedule;

pub use interleave::{interleave_matches, most_recent_completed};
pub use next_opponent::{resolve_next_opponent, NextOpponent};
pub use schedule::{build_schedule, format_display_time};
