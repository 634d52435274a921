//! Session Operations - DOP Functions
//!
//! Functions that operate on SessionData.

use super::session_data::{SessionData, SessionMetrics, SessionOutcome};
use crate::block::{BlockEvent, BlockEventReceiver};

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Start a session listening on `events`
pub fn create_session(events: BlockEventReceiver) -> SessionData {
    SessionData {
        events,
        outcome: SessionOutcome::InProgress,
        pre_placed_blocks: Vec::new(),
        metrics: SessionMetrics::default(),
    }
}

// ============================================================================
// EVENT PROCESSING
// ============================================================================

/// Process all pending block events (call once per tick)
///
/// Returns the number of events handled.
pub fn process_block_events(session: &mut SessionData) -> usize {
    let pending: Vec<BlockEvent> = session.events.try_iter().collect();
    for event in &pending {
        process_single_event(session, event);
        session.metrics.events_processed += 1;
    }
    pending.len()
}

fn process_single_event(session: &mut SessionData, event: &BlockEvent) {
    match *event {
        BlockEvent::PrePlaced { block } => {
            session.metrics.pre_placed_events += 1;
            session.pre_placed_blocks.push(block);
            log::debug!("[Session] Block {} pre-placed", block);
        }
        BlockEvent::Fallen { block, cause } => {
            session.metrics.fallen_events += 1;
            match session.outcome {
                SessionOutcome::InProgress => {
                    session.outcome = SessionOutcome::Lost { block, cause };
                    log::info!("[Session] Lost: block {} fell ({:?})", block, cause);
                }
                SessionOutcome::Lost { .. } => {
                    session.metrics.ignored_fallen_events += 1;
                    log::debug!(
                        "[Session] Ignoring fallen event from block {}, session already lost",
                        block
                    );
                }
            }
        }
    }
}

// ============================================================================
// QUERIES
// ============================================================================

pub fn session_outcome(session: &SessionData) -> SessionOutcome {
    session.outcome
}

pub fn is_session_lost(session: &SessionData) -> bool {
    matches!(session.outcome, SessionOutcome::Lost { .. })
}

/// Log session status
pub fn log_session_status(session: &SessionData) {
    log::info!("[Session] Status:");
    log::info!("  Outcome: {:?}", session.outcome);
    log::info!("  Events processed: {}", session.metrics.events_processed);
    log::info!("  Pre-placed blocks: {}", session.pre_placed_blocks.len());
    log::info!(
        "  Fallen events: {} ({} ignored)",
        session.metrics.fallen_events,
        session.metrics.ignored_fallen_events
    );
}
