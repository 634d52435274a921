//! Block controller - the interface the host simulation loop drives
//!
//! The host calls `on_collision`, `on_trigger_enter`/`on_boundary_enter` and
//! `on_fixed_step` in its own order; the controller adds no scheduling. The
//! physics body is borrowed for each call only.

use super::block_data::{BlockData, BlockLevelType, BlockLifecycle};
use super::block_events::{emit_event, BlockEventSender};
use super::block_operations;
use crate::config::BlockConfig;
use crate::physics::{CollisionContact, EntityId, PhysicsBody};
use crate::wind::WindSource;
use glam::Vec3;
use std::sync::Arc;

pub struct BlockController {
    data: BlockData,
    wind: Option<Arc<dyn WindSource>>,
    events: BlockEventSender,
}

impl BlockController {
    /// Create a controller and initialize its body
    pub fn new(
        id: EntityId,
        config: &BlockConfig,
        body: &mut dyn PhysicsBody,
        wind: Option<Arc<dyn WindSource>>,
        events: BlockEventSender,
    ) -> Self {
        let data = block_operations::create_block(id, config, body);
        if wind.is_none() {
            log::debug!("[Block {}] No wind source, wind forces disabled", id);
        }

        Self { data, wind, events }
    }

    /// Collision-start callback from the physics engine
    pub fn on_collision(&mut self, body: &mut dyn PhysicsBody, contact: &CollisionContact) {
        for event in block_operations::handle_collision(&mut self.data, body, contact) {
            emit_event(&self.events, event);
        }
    }

    /// Trigger-enter callback; only the boundary zone has an effect
    pub fn on_trigger_enter(&mut self, zone: &CollisionContact) {
        if let Some(event) = block_operations::handle_trigger_enter(&mut self.data, zone) {
            emit_event(&self.events, event);
        }
    }

    /// The block entered the boundary zone around the play area
    pub fn on_boundary_enter(&mut self) {
        let event = block_operations::handle_boundary_enter(&mut self.data);
        emit_event(&self.events, event);
    }

    /// Fixed-step callback; returns the force applied this step
    pub fn on_fixed_step(&self, body: &mut dyn PhysicsBody) -> Vec3 {
        block_operations::apply_fixed_step(&self.data, body, self.wind.as_deref())
    }

    pub fn finalize_placement(&mut self, body: &mut dyn PhysicsBody) {
        block_operations::finalize_placement(&mut self.data, body);
    }

    pub fn is_placed(&self) -> bool {
        block_operations::is_placed(&self.data)
    }

    pub fn level_type(&self) -> &BlockLevelType {
        block_operations::level_type(&self.data)
    }

    pub fn lifecycle(&self) -> BlockLifecycle {
        block_operations::lifecycle(&self.data)
    }

    pub fn id(&self) -> EntityId {
        self.data.id
    }

    /// Read-only view of the block state
    pub fn data(&self) -> &BlockData {
        &self.data
    }
}

impl std::fmt::Debug for BlockController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlockController")
            .field("data", &self.data)
            .field("wind", &self.wind.as_ref().map(|_| "<WindSource>"))
            .finish()
    }
}
