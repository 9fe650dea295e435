//! Public runtime API surface.
//!
//! Contracts the host implements so the tracker can observe the world, speak,
//! walk and read keys, plus the error type every runtime operation returns.

pub mod announcer;
pub mod errors;
pub mod input;
pub mod navigation;
pub mod world;

pub use announcer::Announcer;
pub use errors::{Result, RuntimeError};
pub use input::{InputState, TrackerAction};
pub use navigation::{PathRequest, Pathfinder};
pub use world::WorldView;
