//! Console adapters for speech, audio cues and key presses.

use serde_json::Value;
use tracker_runtime::{Announcer, CueSink, InputState, RadarCue, TrackerAction};

/// Prints announcements instead of speaking them.
///
/// Translation is out of scope here, so templated messages show their key and
/// tokens.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleAnnouncer;

impl Announcer for ConsoleAnnouncer {
    fn say(&self, text: &str, interrupt: bool) {
        tracing::debug!(interrupt, "say: {}", text);
        println!("> {text}");
    }

    fn say_with_tokens(&self, key: &str, tokens: &Value, interrupt: bool) {
        tracing::debug!(interrupt, "say: {} {}", key, tokens);
        let key = key.strip_prefix("feature-object_tracker-").unwrap_or(key);
        if tokens.is_null() {
            println!("> [{key}]");
        } else {
            println!("> [{key}] {tokens}");
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleCueSink;

impl CueSink for ConsoleCueSink {
    fn play(&self, cue: &RadarCue) {
        println!("~ {} ({} at {})", cue.sound, cue.object, cue.position);
    }
}

/// A single typed action, pressed for exactly one update.
pub struct Pressed(pub TrackerAction);

impl InputState for Pressed {
    fn just_pressed(&self, action: TrackerAction) -> bool {
        self.0 == action
    }

    fn any_pressed(&self) -> bool {
        true
    }
}
