//! Block Module - lifecycle of a single falling/stacking block
//!
//! A block starts Falling, becomes PrePlaced on its first collision (which
//! unlocks its motion) and becomes Placed when the game finalizes it (which
//! makes it heavy, grippy and gravity-bound). Loss conditions are reported as
//! `BlockEvent::Fallen` on the block's event channel.
//!
//! Data lives in `block_data`, transformations in `block_operations`;
//! `BlockController` is the host-facing wrapper the simulation loop calls.

pub mod block_data;
pub mod block_events;
pub mod block_operations;
pub mod classification;
pub mod controller;

pub use block_data::{BlockData, BlockLevelType, BlockLifecycle};
pub use block_events::{
    block_event_channel, emit_event, BlockEvent, BlockEventReceiver, BlockEventSender, FallCause,
};
pub use block_operations::{
    apply_fixed_step, create_block, finalize_placement, handle_boundary_enter, handle_collision,
    handle_trigger_enter, is_placed, level_type, lifecycle,
};
pub use classification::{classify_collision, CollisionOutcome};
pub use controller::BlockController;

#[cfg(test)]
mod tests;
