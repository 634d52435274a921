//! Game Module - session layer on top of block events
//!
//! Blocks only report what happened to them. The session decides what that
//! means for the game: the first fallen event ends it.

pub mod session_data;
pub mod session_operations;

pub use session_data::{SessionData, SessionMetrics, SessionOutcome};
pub use session_operations::{
    create_session, is_session_lost, log_session_status, process_block_events, session_outcome,
};
