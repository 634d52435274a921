// blockfall - block controller for a physics stacking game
//
// Each block falls, gets pre-placed by its first collision, and is finally
// placed by the game. The physics engine, the wind subsystem and the game
// loop live outside this crate:
// - physics: the `PhysicsBody` seam and collision contact data
// - wind: the `WindSource` seam and force computation
// - block: per-block state, operations and `BlockController`
// - game: session state fed by block events
// - config: TOML presets for blocks and wind

pub mod block;
pub mod config;
pub mod error;
pub mod game;
pub mod physics;
pub mod wind;

pub use block::{
    block_event_channel, BlockController, BlockData, BlockEvent, BlockEventReceiver,
    BlockEventSender, BlockLevelType, BlockLifecycle, FallCause,
};
pub use config::{BlockConfig, StackConfig};
pub use error::{StackError, StackResult};
pub use game::{SessionData, SessionOutcome};
pub use physics::{
    CollisionContact, EntityId, FrictionProfile, MaterialId, MotionConstraint, PhysicsBody,
    SimBody, SurfaceTag,
};
pub use wind::{SharedWind, WindData, WindSource};

// Re-export glam so hosts use the same vector types
pub use glam;
