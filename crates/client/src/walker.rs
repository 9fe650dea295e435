//! Stand-in for the game's auto-walk executor.
//!
//! Walks straight toward the target one tile per update and stops next to it,
//! the way the real executor stops adjacent to the object it was sent to.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracker_core::Position;
use tracker_runtime::{PathRequest, Pathfinder};

use crate::world::ConsoleWorld;

/// Outcome of one walker update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkEvent {
    Moved(Position),
    Arrived(Position),
    /// The way is blocked; the tracker decides whether to retry.
    Blocked { attempt: u32, target: Position },
}

#[derive(Debug, Default)]
struct WalkState {
    target: Option<Position>,
    attempt: u32,
}

/// Cloneable handle; the tracker owns one clone, the update loop another.
#[derive(Clone, Debug, Default)]
pub struct SimulatedWalker {
    state: Arc<Mutex<WalkState>>,
}

impl SimulatedWalker {
    pub const MAX_RETRIES: u32 = 3;

    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the player one tile toward the target.
    pub fn advance(&self, world: &mut ConsoleWorld) -> Option<WalkEvent> {
        let mut state = self.lock();
        let target = state.target?;

        let dx = target.x - world.player.x;
        let dy = target.y - world.player.y;
        if dx.abs() <= 1 && dy.abs() <= 1 {
            state.target = None;
            state.attempt = 0;
            world.facing = (dx, dy);
            return Some(WalkEvent::Arrived(target));
        }

        // Prefer the diagonal, then either axis.
        let candidates = [(dx.signum(), dy.signum()), (dx.signum(), 0), (0, dy.signum())];
        if candidates
            .into_iter()
            .filter(|&step| step != (0, 0))
            .any(|(sx, sy)| world.step(sx, sy))
        {
            return Some(WalkEvent::Moved(world.player));
        }

        state.attempt += 1;
        Some(WalkEvent::Blocked {
            attempt: state.attempt,
            target,
        })
    }

    fn lock(&self) -> MutexGuard<'_, WalkState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Pathfinder for SimulatedWalker {
    fn start(&mut self, request: PathRequest) {
        let mut state = self.lock();
        state.target = Some(request.target);
        state.attempt = 0;
    }

    fn is_active(&self) -> bool {
        self.lock().target.is_some()
    }

    fn stop(&mut self) {
        let mut state = self.lock();
        state.target = None;
        state.attempt = 0;
    }
}
