//! Tower drop demo
//!
//! Drops a foundation block and a floor block onto a ground plane in a tiny
//! host loop built on `SimBody`. The foundation lands safely and is placed;
//! the floor block misses the foundation, touches the ground and loses the
//! session.
//!
//! Run with `RUST_LOG=debug cargo run --example tower_drop` to see every
//! callback.

use blockfall::block::{block_event_channel, BlockController};
use blockfall::config::{block_preset, load_from_file};
use blockfall::game::{create_session, is_session_lost, log_session_status, process_block_events};
use blockfall::glam::Vec3;
use blockfall::physics::{aabb_intersects, create_aabb, CollisionContact, SimBody, SurfaceTag, AABB};
use blockfall::wind::{create_shared_wind, WindSource};
use blockfall::EntityId;
use std::collections::HashSet;
use std::sync::Arc;

const FIXED_DT: f32 = 1.0 / 50.0;
const MAX_STEPS: u32 = 600;
const GROUND_ID: EntityId = 0;
const BOUNDARY_ID: EntityId = 1000;
const DROP_SPEED: f32 = 3.0;

struct DemoBlock {
    controller: BlockController,
    body: SimBody,
    /// Entities currently in contact, to report collision-start once
    touching: HashSet<EntityId>,
    in_boundary: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config_path = concat!(env!("CARGO_MANIFEST_DIR"), "/config/blocks.toml");
    let config = load_from_file(config_path)?;

    let wind: Option<Arc<dyn WindSource>> = config
        .wind
        .map(|data| Arc::new(create_shared_wind(data)) as Arc<dyn WindSource>);

    let (sender, receiver) = block_event_channel();
    let mut session = create_session(receiver);

    let ground = create_aabb(Vec3::new(-20.0, -1.0, -2.0), Vec3::new(20.0, 0.0, 2.0));
    let boundary_zones = [
        create_aabb(Vec3::new(-40.0, -20.0, -2.0), Vec3::new(-20.0, 40.0, 2.0)),
        create_aabb(Vec3::new(20.0, -20.0, -2.0), Vec3::new(40.0, 40.0, 2.0)),
    ];

    let mut blocks = Vec::new();
    for (id, preset, position) in [
        (1, "foundation", Vec3::new(0.0, 4.0, 0.0)),
        (2, "floor", Vec3::new(3.0, 8.0, 0.0)),
    ] {
        let mut body = SimBody::new(position, Vec3::new(1.0, 0.5, 1.0));
        let controller = BlockController::new(
            id,
            block_preset(&config, preset)?,
            &mut body,
            wind.clone(),
            sender.clone(),
        );
        body.linear_velocity = Vec3::new(0.0, -DROP_SPEED, 0.0);
        blocks.push(DemoBlock {
            controller,
            body,
            touching: HashSet::new(),
            in_boundary: false,
        });
    }

    for step in 0..MAX_STEPS {
        for block in blocks.iter_mut() {
            block.controller.on_fixed_step(&mut block.body);
            block.body.integrate(FIXED_DT);
        }

        detect_contacts(&mut blocks, &ground, &boundary_zones);

        // Game rule of the demo: a foundation is confirmed as soon as it lands
        for block in blocks.iter_mut() {
            if block.controller.data().has_been_pre_placed
                && !block.controller.is_placed()
                && block.touching.contains(&GROUND_ID)
            {
                block.controller.finalize_placement(&mut block.body);
            }
        }

        process_block_events(&mut session);
        if is_session_lost(&session) {
            log::info!("Session lost after {} steps", step + 1);
            break;
        }
    }

    log_session_status(&session);
    for block in &blocks {
        println!(
            "block {} ({}) -> {:?} at {:?}",
            block.controller.id(),
            block.controller.level_type(),
            block.controller.lifecycle(),
            block.body.position
        );
    }
    println!("outcome: {:?}", session.outcome);

    Ok(())
}

/// Report collision-starts and boundary entries, and stop blocks on contact
fn detect_contacts(blocks: &mut [DemoBlock], ground: &AABB, boundary_zones: &[AABB]) {
    let bounds: Vec<(EntityId, AABB)> = blocks
        .iter()
        .map(|block| (block.controller.id(), block.body.bounds()))
        .collect();

    for block in blocks.iter_mut() {
        let own = block.body.bounds();

        let mut contacts = Vec::new();
        if aabb_intersects(&own, ground) {
            contacts.push(CollisionContact::new(GROUND_ID, vec![SurfaceTag::Ground]));
        }
        for (other_id, other_bounds) in &bounds {
            if *other_id != block.controller.id() && aabb_intersects(&own, other_bounds) {
                contacts.push(CollisionContact::new(*other_id, vec![SurfaceTag::Block]));
            }
        }

        let current: HashSet<EntityId> = contacts.iter().map(|contact| contact.other).collect();
        for contact in &contacts {
            if !block.touching.contains(&contact.other) {
                block.controller.on_collision(&mut block.body, contact);
                // Crude contact response: come to rest where we touched
                block.body.linear_velocity = Vec3::ZERO;
            }
        }
        if current.contains(&GROUND_ID) && block.body.linear_velocity.y < 0.0 {
            block.body.linear_velocity.y = 0.0;
            block.body.position.y = ground.max.y + block.body.half_extents.y;
        }
        block.touching = current;

        let inside = boundary_zones.iter().any(|zone| aabb_intersects(&own, zone));
        if inside && !block.in_boundary {
            block
                .controller
                .on_trigger_enter(&CollisionContact::new(BOUNDARY_ID, vec![SurfaceTag::BoundingBox]));
        }
        block.in_boundary = inside;
    }
}
