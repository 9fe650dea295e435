use tracker_core::Position;

/// A request handed to the pathfinding executor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathRequest {
    pub origin: Position,
    pub location: String,
    pub target: Position,
}

/// The external auto-walk executor.
///
/// `start` returns immediately. The executor reports back later through
/// [`ObjectTracker::on_navigation_retry`](crate::ObjectTracker::on_navigation_retry)
/// and [`ObjectTracker::on_navigation_stopped`](crate::ObjectTracker::on_navigation_stopped).
pub trait Pathfinder: Send {
    fn start(&mut self, request: PathRequest);

    fn is_active(&self) -> bool;

    fn stop(&mut self);
}
