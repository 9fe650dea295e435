//! Map and categorizer views backed by static content.
//!
//! Hosts with a live game implement [`tracker_core::LocationMap`] and
//! [`tracker_core::Categorizer`] themselves; these adapters serve RON layouts
//! for the console client and for tests.
mod location;

pub use location::{PORTAL_CATEGORY, StaticLocation};
