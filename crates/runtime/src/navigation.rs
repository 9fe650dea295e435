//! Thin adapter over the host's auto-walk executor.

use crate::api::{PathRequest, Pathfinder};

pub struct NavigationBridge {
    pathfinder: Box<dyn Pathfinder>,
}

impl NavigationBridge {
    pub fn new(pathfinder: Box<dyn Pathfinder>) -> Self {
        Self { pathfinder }
    }

    /// Starts walking to `request.target`, stopping any walk in progress first.
    pub fn navigate(&mut self, request: PathRequest) {
        if self.pathfinder.is_active() {
            self.pathfinder.stop();
        }
        tracing::debug!(
            location = %request.location,
            target = %request.target,
            "Starting auto-walk"
        );
        self.pathfinder.start(request);
    }

    /// Stops the executor if it is walking. Returns true when a walk was stopped.
    pub fn stop_if_active(&mut self) -> bool {
        if !self.pathfinder.is_active() {
            return false;
        }
        self.pathfinder.stop();
        true
    }

    pub fn is_active(&self) -> bool {
        self.pathfinder.is_active()
    }

    /// Whether the executor should try again after a failed attempt.
    pub fn should_retry(attempt: u32, max_retries: u32, has_target: bool) -> bool {
        has_target && attempt < max_retries
    }
}
