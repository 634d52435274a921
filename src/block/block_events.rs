//! Block events and the channel they travel on
//!
//! Blocks never call into the session directly. They push events onto a
//! flume channel and whoever holds the receiver decides what a loss means.

use crate::physics::EntityId;
use serde::{Deserialize, Serialize};

/// Why a block counts as fallen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FallCause {
    /// A floor or roof block touched the ground
    GroundContact,
    /// The block entered the boundary zone around the play area
    OutOfBounds,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BlockEvent {
    /// First collision of the block. Sent exactly once per block.
    PrePlaced { block: EntityId },

    /// Loss condition. May be sent more than once per block.
    Fallen { block: EntityId, cause: FallCause },
}

impl BlockEvent {
    pub fn block(&self) -> EntityId {
        match *self {
            BlockEvent::PrePlaced { block } | BlockEvent::Fallen { block, .. } => block,
        }
    }
}

pub type BlockEventSender = flume::Sender<BlockEvent>;
pub type BlockEventReceiver = flume::Receiver<BlockEvent>;

/// Create the channel blocks report on
pub fn block_event_channel() -> (BlockEventSender, BlockEventReceiver) {
    flume::unbounded()
}

/// Send an event; nobody listening is not an error
pub fn emit_event(sender: &BlockEventSender, event: BlockEvent) {
    if let Err(err) = sender.send(event) {
        log::debug!("[Block] No listener for event {:?}", err.into_inner());
    }
}
