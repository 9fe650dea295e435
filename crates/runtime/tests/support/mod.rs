//! Recording fakes shared by the runtime integration tests.
#![allow(dead_code)]

use std::cell::Cell;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tracker_content::LocationLayout;
use tracker_core::{
    CategorizeError, Categorizer, Detection, LocationMap, MapDimensions, Position,
};
use tracker_runtime::{
    Announcer, InputState, PathRequest, Pathfinder, StaticLocation, TrackerAction, WorldView,
};

/// One announcement: translation key (or raw text) plus tokens.
#[derive(Clone, Debug, PartialEq)]
pub struct Spoken {
    pub key: String,
    pub tokens: Value,
}

#[derive(Clone, Default)]
pub struct RecordingAnnouncer {
    spoken: Arc<Mutex<Vec<Spoken>>>,
}

impl RecordingAnnouncer {
    pub fn keys(&self) -> Vec<String> {
        self.spoken
            .lock()
            .unwrap()
            .iter()
            .map(|spoken| spoken.key.clone())
            .collect()
    }

    pub fn last(&self) -> Option<Spoken> {
        self.spoken.lock().unwrap().last().cloned()
    }

    pub fn clear(&self) {
        self.spoken.lock().unwrap().clear();
    }
}

impl Announcer for RecordingAnnouncer {
    fn say(&self, text: &str, _interrupt: bool) {
        self.spoken.lock().unwrap().push(Spoken {
            key: text.to_owned(),
            tokens: Value::Null,
        });
    }

    fn say_with_tokens(&self, key: &str, tokens: &Value, _interrupt: bool) {
        self.spoken.lock().unwrap().push(Spoken {
            key: key.to_owned(),
            tokens: tokens.clone(),
        });
    }
}

#[derive(Clone, Default)]
pub struct RecordingPathfinder {
    started: Arc<Mutex<Vec<PathRequest>>>,
    active: Arc<Mutex<bool>>,
}

impl RecordingPathfinder {
    pub fn started(&self) -> Vec<PathRequest> {
        self.started.lock().unwrap().clone()
    }
}

impl Pathfinder for RecordingPathfinder {
    fn start(&mut self, request: PathRequest) {
        self.started.lock().unwrap().push(request);
        *self.active.lock().unwrap() = true;
    }

    fn is_active(&self) -> bool {
        *self.active.lock().unwrap()
    }

    fn stop(&mut self) {
        *self.active.lock().unwrap() = false;
    }
}

/// Keys pressed during one update.
pub struct Keys(pub Vec<TrackerAction>);

impl InputState for Keys {
    fn just_pressed(&self, action: TrackerAction) -> bool {
        self.0.contains(&action)
    }

    fn any_pressed(&self) -> bool {
        !self.0.is_empty()
    }
}

pub fn press(action: TrackerAction) -> Keys {
    Keys(vec![action])
}

pub struct TestWorld {
    pub location: StaticLocation,
    pub player: Position,
    pub facing: Position,
    pub menu_open: bool,
    /// When set, the categorizer reports the whole location as unreadable.
    pub unloaded: Cell<bool>,
}

impl TestWorld {
    pub fn new(layout: &LocationLayout) -> Self {
        Self {
            location: StaticLocation::from_layout(layout),
            player: layout.player,
            facing: layout.player.offset(0, 1),
            menu_open: false,
            unloaded: Cell::new(false),
        }
    }
}

impl Categorizer for TestWorld {
    fn categorize(
        &self,
        tile: Position,
        map: &dyn LocationMap,
    ) -> Result<Option<Detection>, CategorizeError> {
        if self.unloaded.get() {
            return Err(CategorizeError::Location {
                reason: "location unloaded".to_owned(),
            });
        }
        self.location.categorize(tile, map)
    }
}

impl WorldView for TestWorld {
    fn location_id(&self) -> &str {
        self.location.name()
    }

    fn player_tile(&self) -> Position {
        self.player
    }

    fn facing_tile(&self) -> Position {
        self.facing
    }

    fn map(&self) -> &dyn LocationMap {
        &self.location
    }

    fn categorizer(&self) -> &dyn Categorizer {
        self
    }

    fn menu_open(&self) -> bool {
        self.menu_open
    }

    fn count_probe_len(&self) -> usize {
        1
    }

    fn count_probe(&self, _index: usize) -> Option<usize> {
        Some(self.location.object_count())
    }
}

/// Player at (10, 10) with a chest east of them and Robin to the south.
pub fn farm_layout() -> LocationLayout {
    LocationLayout::new("Farm", MapDimensions::new(20, 16), Position::new(10, 10))
        .with_object(Position::new(12, 10), "Chest", Some("container"))
        .with_object(Position::new(10, 15), "Robin", Some("npc"))
}
