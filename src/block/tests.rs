use super::*;
use crate::config::BlockConfig;
use crate::physics::{
    Axis, CollisionContact, FrictionProfile, MaterialId, MotionConstraint, SimBody, SurfaceTag,
};
use crate::wind::{create_shared_wind, flip_direction, WindData, WindSource};
use glam::Vec3;
use std::sync::Arc;

const FRICTIONLESS: MaterialId = MaterialId(10);
const GENERAL: MaterialId = MaterialId(11);

fn config(level_type: BlockLevelType) -> BlockConfig {
    BlockConfig {
        level_type,
        start_mass: 1.0,
        placed_mass: 20.0,
        frictionless_material: Some(FRICTIONLESS),
        general_material: Some(GENERAL),
    }
}

fn body() -> SimBody {
    SimBody::new(Vec3::new(0.0, 10.0, 0.0), Vec3::splat(0.5))
}

fn ground() -> CollisionContact {
    CollisionContact::new(100, vec![SurfaceTag::Ground])
}

fn other_block() -> CollisionContact {
    CollisionContact::new(2, vec![SurfaceTag::Block])
}

fn wind(falling: f32, placed: f32, right: bool) -> Option<Arc<dyn WindSource>> {
    Some(Arc::new(WindData {
        falling_strength: falling,
        placed_strength: placed,
        directed_right: right,
    }))
}

fn controller(
    level_type: BlockLevelType,
    wind: Option<Arc<dyn WindSource>>,
) -> (BlockController, SimBody, BlockEventReceiver) {
    let (sender, receiver) = block_event_channel();
    let mut body = body();
    let controller = BlockController::new(1, &config(level_type), &mut body, wind, sender);
    (controller, body, receiver)
}

fn drain(receiver: &BlockEventReceiver) -> Vec<BlockEvent> {
    receiver.try_iter().collect()
}

fn fallen_count(events: &[BlockEvent]) -> usize {
    events
        .iter()
        .filter(|event| matches!(event, BlockEvent::Fallen { .. }))
        .count()
}

// ============================================================================
// CREATION
// ============================================================================

#[test]
fn test_initial_state() {
    let (controller, body, receiver) = controller(BlockLevelType::Floor, None);

    assert_eq!(controller.lifecycle(), BlockLifecycle::Falling);
    assert!(!controller.is_placed());
    assert!(!controller.data().has_been_pre_placed);
    assert_eq!(controller.level_type(), &BlockLevelType::Floor);
    assert_eq!(controller.data().friction_profile, FrictionProfile::Frictionless);

    assert_eq!(body.mass, 1.0);
    assert_eq!(body.material, Some(FRICTIONLESS));
    assert_eq!(body.constraint, MotionConstraint::LockedAxis(Axis::Z));
    assert!(drain(&receiver).is_empty());
}

#[test]
fn test_missing_materials_leave_collider_alone() {
    let (sender, _receiver) = block_event_channel();
    let mut body = body();
    let block_config = BlockConfig {
        general_material: None,
        ..config(BlockLevelType::Roof)
    };

    let mut controller = BlockController::new(4, &block_config, &mut body, None, sender);
    assert_eq!(body.material, Some(FRICTIONLESS));

    controller.finalize_placement(&mut body);
    // The general material is missing, so the frictionless one stays
    assert_eq!(body.material, Some(FRICTIONLESS));
    assert_eq!(controller.data().friction_profile, FrictionProfile::General);
    assert!(controller.is_placed());
}

// ============================================================================
// PRE-PLACEMENT
// ============================================================================

#[test]
fn test_pre_placed_fires_exactly_once() {
    let (mut controller, mut body, receiver) = controller(BlockLevelType::Foundation, None);

    for _ in 0..5 {
        controller.on_collision(&mut body, &other_block());
        controller.on_collision(&mut body, &ground());
    }

    let events = drain(&receiver);
    assert_eq!(events, vec![BlockEvent::PrePlaced { block: 1 }]);
    assert!(controller.data().has_been_pre_placed);
    assert_eq!(controller.data().collisions_seen, 10);
}

#[test]
fn test_first_collision_frees_motion() {
    let (mut controller, mut body, _receiver) = controller(BlockLevelType::Floor, None);

    controller.on_collision(&mut body, &other_block());

    assert_eq!(body.constraint, MotionConstraint::Free);
    assert_eq!(controller.data().motion_constraint, MotionConstraint::Free);
    assert_eq!(controller.lifecycle(), BlockLifecycle::PrePlaced);
    // Pre-placement does not touch mass or friction
    assert_eq!(body.mass, 1.0);
    assert_eq!(body.material, Some(FRICTIONLESS));
}

#[test]
fn test_constraint_stays_free_after_placement() {
    let (mut controller, mut body, _receiver) = controller(BlockLevelType::Roof, None);

    controller.on_collision(&mut body, &other_block());
    controller.finalize_placement(&mut body);
    controller.on_collision(&mut body, &other_block());

    assert_eq!(body.constraint, MotionConstraint::Free);
}

// ============================================================================
// COLLISION CLASSIFICATION
// ============================================================================

#[test]
fn test_floor_on_ground_falls() {
    let (mut controller, mut body, receiver) = controller(BlockLevelType::Floor, None);

    controller.on_collision(&mut body, &ground());

    // Classification comes before pre-placement within one callback
    assert_eq!(
        drain(&receiver),
        vec![
            BlockEvent::Fallen {
                block: 1,
                cause: FallCause::GroundContact
            },
            BlockEvent::PrePlaced { block: 1 },
        ]
    );
}

#[test]
fn test_roof_on_ground_falls_every_time() {
    let (mut controller, mut body, receiver) = controller(BlockLevelType::Roof, None);

    controller.on_collision(&mut body, &ground());
    controller.on_collision(&mut body, &ground());

    let events = drain(&receiver);
    assert_eq!(fallen_count(&events), 2);
    assert_eq!(controller.data().fallen_events, 2);
}

#[test]
fn test_foundation_on_ground_is_safe() {
    let (mut controller, mut body, receiver) = controller(BlockLevelType::Foundation, None);

    controller.on_collision(&mut body, &ground());

    let events = drain(&receiver);
    assert_eq!(fallen_count(&events), 0);
    assert_eq!(events, vec![BlockEvent::PrePlaced { block: 1 }]);
}

#[test]
fn test_unassigned_level_type_never_falls_from_collision() {
    let (mut controller, mut body, receiver) = controller(BlockLevelType::Unassigned, None);

    controller.on_collision(&mut body, &ground());
    controller.on_collision(&mut body, &ground());

    let events = drain(&receiver);
    assert_eq!(fallen_count(&events), 0);
    // Pre-placement still happens
    assert_eq!(events, vec![BlockEvent::PrePlaced { block: 1 }]);
    assert_eq!(body.constraint, MotionConstraint::Free);
}

#[test]
fn test_unrecognized_level_type_never_falls_from_collision() {
    let level = BlockLevelType::parse("basement");
    let (mut controller, mut body, receiver) = controller(level, None);

    controller.on_collision(&mut body, &ground());

    assert_eq!(fallen_count(&drain(&receiver)), 0);
}

// ============================================================================
// BOUNDARY
// ============================================================================

#[test]
fn test_boundary_enter_falls_for_any_level_type() {
    for level in [
        BlockLevelType::Unassigned,
        BlockLevelType::Foundation,
        BlockLevelType::Floor,
        BlockLevelType::Roof,
    ] {
        let (mut controller, _body, receiver) = controller(level, None);

        controller.on_boundary_enter();

        assert_eq!(
            drain(&receiver),
            vec![BlockEvent::Fallen {
                block: 1,
                cause: FallCause::OutOfBounds
            }]
        );
    }
}

#[test]
fn test_boundary_enter_repeats_and_ignores_placement() {
    let (mut controller, mut body, receiver) = controller(BlockLevelType::Foundation, None);

    controller.finalize_placement(&mut body);
    controller.on_boundary_enter();
    controller.on_boundary_enter();

    assert_eq!(fallen_count(&drain(&receiver)), 2);
    // Boundary events are not collisions
    assert!(!controller.data().has_been_pre_placed);
}

#[test]
fn test_trigger_enter_only_reacts_to_boundary_zone() {
    let (mut controller, _body, receiver) = controller(BlockLevelType::Floor, None);

    controller.on_trigger_enter(&CollisionContact::from_engine_tags(50, ["Checkpoint"]));
    assert!(drain(&receiver).is_empty());

    controller.on_trigger_enter(&CollisionContact::from_engine_tags(51, ["BoundingBox"]));
    assert_eq!(fallen_count(&drain(&receiver)), 1);
}

// ============================================================================
// PLACEMENT
// ============================================================================

#[test]
fn test_finalize_placement() {
    let (mut controller, mut body, receiver) = controller(BlockLevelType::Floor, None);
    body.linear_velocity = Vec3::new(3.0, -4.0, 0.0);

    controller.finalize_placement(&mut body);

    assert!(controller.is_placed());
    assert_eq!(controller.lifecycle(), BlockLifecycle::Placed);
    assert_eq!(body.mass, 20.0);
    assert_eq!(body.linear_velocity, Vec3::ZERO);
    assert!(body.use_gravity);
    assert_eq!(body.material, Some(GENERAL));
    // Placement raises no events
    assert!(drain(&receiver).is_empty());
}

#[test]
fn test_finalize_twice_matches_once() {
    let (mut once, mut once_body, _rx1) = controller(BlockLevelType::Floor, None);
    let (mut twice, mut twice_body, _rx2) = controller(BlockLevelType::Floor, None);

    once.finalize_placement(&mut once_body);
    twice.finalize_placement(&mut twice_body);
    twice_body.linear_velocity = Vec3::new(1.0, 1.0, 0.0);
    twice.finalize_placement(&mut twice_body);

    assert_eq!(once.data(), twice.data());
    assert_eq!(once_body.mass, twice_body.mass);
    assert_eq!(once_body.linear_velocity, twice_body.linear_velocity);
    assert_eq!(once_body.material, twice_body.material);
    assert_eq!(once_body.use_gravity, twice_body.use_gravity);
}

#[test]
fn test_placed_never_reverts() {
    let (mut controller, mut body, _receiver) = controller(BlockLevelType::Roof, wind(1.0, 2.0, true));

    controller.finalize_placement(&mut body);
    controller.on_collision(&mut body, &ground());
    controller.on_boundary_enter();
    controller.on_fixed_step(&mut body);
    controller.on_collision(&mut body, &other_block());

    assert!(controller.is_placed());
    assert_eq!(controller.lifecycle(), BlockLifecycle::Placed);
    assert_eq!(controller.data().friction_profile, FrictionProfile::General);
}

// ============================================================================
// FIXED STEP
// ============================================================================

#[test]
fn test_falling_block_wind_right() {
    let (controller, mut body, _receiver) = controller(BlockLevelType::Floor, wind(5.0, 8.0, true));

    let force = controller.on_fixed_step(&mut body);

    assert_eq!(force, Vec3::new(5.0, 0.0, 0.0));
    assert_eq!(body.force_accumulator, Vec3::new(5.0, 0.0, 0.0));
}

#[test]
fn test_placed_block_wind_left() {
    let (mut controller, mut body, _receiver) =
        controller(BlockLevelType::Floor, wind(5.0, 8.0, false));
    controller.finalize_placement(&mut body);

    let force = controller.on_fixed_step(&mut body);

    assert_eq!(force, Vec3::new(-8.0, 0.0, 0.0));
}

#[test]
fn test_no_wind_source_applies_nothing() {
    let (controller, mut body, receiver) = controller(BlockLevelType::Floor, None);

    for _ in 0..3 {
        assert_eq!(controller.on_fixed_step(&mut body), Vec3::ZERO);
    }

    assert_eq!(body.force_accumulator, Vec3::ZERO);
    assert!(drain(&receiver).is_empty());
}

#[test]
fn test_wind_applies_in_every_lifecycle_state() {
    let (mut controller, mut body, _receiver) =
        controller(BlockLevelType::Foundation, wind(2.0, 3.0, true));

    assert_eq!(controller.on_fixed_step(&mut body).x, 2.0);
    controller.on_collision(&mut body, &other_block());
    assert_eq!(controller.on_fixed_step(&mut body).x, 2.0);
    controller.finalize_placement(&mut body);
    assert_eq!(controller.on_fixed_step(&mut body).x, 3.0);

    assert_eq!(body.force_accumulator, Vec3::new(7.0, 0.0, 0.0));
}

#[test]
fn test_shared_wind_changes_reach_block() {
    let shared = create_shared_wind(WindData {
        falling_strength: 4.0,
        placed_strength: 1.0,
        directed_right: true,
    });
    let source: Arc<dyn WindSource> = Arc::new(shared.clone());
    let (controller, mut body, _receiver) = controller(BlockLevelType::Floor, Some(source));

    assert_eq!(controller.on_fixed_step(&mut body), Vec3::new(4.0, 0.0, 0.0));
    flip_direction(&shared);
    assert_eq!(controller.on_fixed_step(&mut body), Vec3::new(-4.0, 0.0, 0.0));
}

// ============================================================================
// LEVEL TYPE PARSING
// ============================================================================

#[test]
fn test_level_type_parsing() {
    assert_eq!(BlockLevelType::parse("Foundation"), BlockLevelType::Foundation);
    assert_eq!(BlockLevelType::parse(" floor "), BlockLevelType::Floor);
    assert_eq!(BlockLevelType::parse("ROOF"), BlockLevelType::Roof);
    assert_eq!(BlockLevelType::parse("none"), BlockLevelType::Unassigned);
    assert_eq!(BlockLevelType::parse(""), BlockLevelType::Unassigned);
    assert_eq!(
        BlockLevelType::parse("Spire"),
        BlockLevelType::Unrecognized("Spire".to_string())
    );
    assert_eq!(BlockLevelType::default(), BlockLevelType::Unassigned);
}
