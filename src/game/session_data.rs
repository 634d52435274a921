//! Session Data - Pure DOP
//!
//! State of one play session as seen from the block event stream.
//! Transformations live in session_operations.rs.

use crate::block::{BlockEventReceiver, FallCause};
use crate::physics::EntityId;

/// How the session stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    InProgress,
    /// Latched by the first fallen event; later ones never change it
    Lost { block: EntityId, cause: FallCause },
}

/// Session metrics for monitoring
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionMetrics {
    /// Total events processed
    pub events_processed: u64,

    pub pre_placed_events: u64,

    pub fallen_events: u64,

    /// Fallen events that arrived after the session was already lost
    pub ignored_fallen_events: u64,
}

/// Session data - the receiving end of every block's event channel
pub struct SessionData {
    pub events: BlockEventReceiver,

    pub outcome: SessionOutcome,

    /// Blocks that reported pre-placement, in arrival order
    pub pre_placed_blocks: Vec<EntityId>,

    pub metrics: SessionMetrics,
}
