//! Periodic short-range audio cues around the player.
//!
//! The radar probes a small square around the player, drops anything on the
//! exclusion list (or off the focus list), and hands one cue per remaining
//! object to the host's [`CueSink`]. Mixing and playback are the host's job.

use std::time::Instant;

use tracker_core::{Position, ProbeHit, ScanError, probe};

use crate::api::WorldView;
use crate::config::RadarConfig;

/// Categories voiced with the creature cue set.
const CREATURE_CATEGORIES: [&str; 3] = ["farmer", "animal", "npc"];

/// Side of the player a cue is panned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum CueDirection {
    Top,
    Right,
    Left,
    Bottom,
}

impl CueDirection {
    /// Classifies `target` relative to `player`. Vertical wins exact diagonals
    /// above the player, horizontal wins them below.
    pub fn between(player: Position, target: Position) -> Self {
        let dx = i64::from(target.x) - i64::from(player.x);
        let dy = i64::from(target.y) - i64::from(player.y);

        if dy < 0 && dy.abs() >= dx.abs() {
            Self::Top
        } else if dx > 0 && dx.abs() >= dy.abs() {
            Self::Right
        } else if dx < 0 && dx.abs() > dy.abs() {
            Self::Left
        } else {
            Self::Bottom
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RadarCue {
    /// Cue name such as `npc_top` or `obj_mono_left`.
    pub sound: String,
    pub object: String,
    pub position: Position,
    pub direction: CueDirection,
}

/// Audio output for radar cues.
pub trait CueSink: Send {
    fn play(&self, cue: &RadarCue);
}

pub struct Radar {
    config: RadarConfig,
    sink: Box<dyn CueSink>,
    next_run: Option<Instant>,
}

impl Radar {
    pub fn new(config: RadarConfig, sink: Box<dyn CueSink>) -> Self {
        Self {
            config,
            sink,
            next_run: None,
        }
    }

    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut RadarConfig {
        &mut self.config
    }

    /// Runs a probe when the delay has elapsed. Returns the number of cues played.
    pub fn tick(&mut self, now: Instant, world: &dyn WorldView) -> usize {
        if !self.config.enabled || self.next_run.is_some_and(|next| now < next) {
            return 0;
        }
        self.next_run = Some(now + self.config.delay);

        match self.scan(world) {
            Ok(cues) => {
                for cue in &cues {
                    self.sink.play(cue);
                }
                cues.len()
            }
            Err(err) => {
                tracing::warn!("Radar probe failed: {}", err);
                0
            }
        }
    }

    /// Probes around the player and returns the cues that pass the filters.
    pub fn scan(&self, world: &dyn WorldView) -> Result<Vec<RadarCue>, ScanError> {
        let player = world.player_tile();
        let facing = world.facing_tile();
        let hits = probe(player, self.config.range, world.map(), world.categorizer())?;

        Ok(hits
            .into_iter()
            .filter(|hit| hit.position != facing && hit.position != player)
            .filter(|hit| self.admits(hit))
            .map(|hit| self.cue_for(player, hit))
            .collect())
    }

    fn admits(&self, hit: &ProbeHit) -> bool {
        if self.config.focus_mode {
            matches_any(hit, &self.config.focus)
        } else {
            !matches_any(hit, &self.config.exclusions)
        }
    }

    fn cue_for(&self, player: Position, hit: ProbeHit) -> RadarCue {
        let direction = CueDirection::between(player, hit.position);
        let kind = match hit.category.as_deref() {
            Some(category) if CREATURE_CATEGORIES.contains(&category) => "npc",
            _ => "obj",
        };
        let sound = if self.config.stereo {
            format!("{kind}_{direction}")
        } else {
            format!("{kind}_mono_{direction}")
        };

        RadarCue {
            sound,
            object: hit.name,
            position: hit.position,
            direction,
        }
    }
}

/// True when the category, the whole name or any word of the name is in `terms`.
fn matches_any(hit: &ProbeHit, terms: &[String]) -> bool {
    let name = hit.name.to_lowercase();
    let category = hit.category.as_deref().map(str::to_lowercase);

    terms.iter().any(|term| {
        category.as_deref() == Some(term.as_str())
            || name == *term
            || name.split_whitespace().any(|word| word == term)
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use std::time::Duration;

    use tracker_core::{
        CategorizeError, Categorizer, Detection, LocationMap, MapDimensions,
    };

    use super::*;

    struct Field {
        dimensions: MapDimensions,
        objects: HashMap<Position, Detection>,
        player: Position,
        facing: Position,
    }

    impl Categorizer for Field {
        fn categorize(
            &self,
            tile: Position,
            _map: &dyn LocationMap,
        ) -> Result<Option<Detection>, CategorizeError> {
            Ok(self.objects.get(&tile).cloned())
        }
    }

    impl WorldView for Field {
        fn location_id(&self) -> &str {
            "Farm"
        }

        fn player_tile(&self) -> Position {
            self.player
        }

        fn facing_tile(&self) -> Position {
            self.facing
        }

        fn map(&self) -> &dyn LocationMap {
            &self.dimensions
        }

        fn categorizer(&self) -> &dyn Categorizer {
            self
        }
    }

    #[derive(Clone, Default)]
    struct Recorder {
        cues: Arc<Mutex<Vec<RadarCue>>>,
    }

    impl CueSink for Recorder {
        fn play(&self, cue: &RadarCue) {
            self.cues.lock().unwrap().push(cue.clone());
        }
    }

    fn field(objects: &[((i32, i32), Detection)]) -> Field {
        Field {
            dimensions: MapDimensions::new(20, 20),
            objects: objects
                .iter()
                .map(|(pos, detection)| (Position::from(*pos), detection.clone()))
                .collect(),
            player: Position::new(10, 10),
            facing: Position::new(10, 11),
        }
    }

    fn enabled() -> RadarConfig {
        RadarConfig {
            enabled: true,
            ..RadarConfig::default()
        }
    }

    #[test]
    fn direction_quadrants() {
        let player = Position::new(0, 0);
        assert_eq!(CueDirection::between(player, Position::new(0, -3)), CueDirection::Top);
        assert_eq!(CueDirection::between(player, Position::new(2, -2)), CueDirection::Top);
        assert_eq!(CueDirection::between(player, Position::new(3, 1)), CueDirection::Right);
        assert_eq!(CueDirection::between(player, Position::new(2, 2)), CueDirection::Right);
        assert_eq!(CueDirection::between(player, Position::new(-3, 1)), CueDirection::Left);
        assert_eq!(CueDirection::between(player, Position::new(-2, 2)), CueDirection::Bottom);
        assert_eq!(CueDirection::between(player, Position::new(0, 4)), CueDirection::Bottom);
    }

    #[test]
    fn exclusions_match_category_name_and_words() {
        let world = field(&[
            ((12, 10), Detection::new("Chest", "container")),
            ((8, 10), Detection::new("Rock", "debris")),
            ((10, 8), Detection::new("Small Weed", "misc")),
            ((10, 7), Detection::new("Robin", "npc")),
        ]);
        let radar = Radar::new(enabled(), Box::new(Recorder::default()));

        let cues = radar.scan(&world).unwrap();
        let sounds: Vec<_> = cues
            .iter()
            .map(|cue| (cue.object.as_str(), cue.sound.as_str()))
            .collect();

        assert_eq!(sounds.len(), 2);
        assert!(sounds.contains(&("Chest", "obj_right")));
        assert!(sounds.contains(&("Robin", "npc_top")));
    }

    #[test]
    fn facing_tile_is_skipped() {
        let world = field(&[((10, 11), Detection::new("Chest", "container"))]);
        let radar = Radar::new(enabled(), Box::new(Recorder::default()));

        assert!(radar.scan(&world).unwrap().is_empty());
    }

    #[test]
    fn focus_mode_keeps_only_focused_hits() {
        let world = field(&[
            ((12, 10), Detection::new("Chest", "container")),
            ((8, 10), Detection::new("Robin", "npc")),
        ]);
        let config = RadarConfig {
            focus: vec!["robin".to_owned()],
            focus_mode: true,
            stereo: false,
            ..enabled()
        };
        let radar = Radar::new(config, Box::new(Recorder::default()));

        let cues = radar.scan(&world).unwrap();

        assert_eq!(cues.len(), 1);
        assert_eq!(cues[0].sound, "npc_mono_left");
    }

    #[test]
    fn tick_respects_delay() {
        let world = field(&[((12, 10), Detection::new("Chest", "container"))]);
        let recorder = Recorder::default();
        let mut radar = Radar::new(enabled(), Box::new(recorder.clone()));
        let start = Instant::now();

        assert_eq!(radar.tick(start, &world), 1);
        assert_eq!(radar.tick(start + Duration::from_millis(100), &world), 0);
        assert_eq!(radar.tick(start + Duration::from_millis(3000), &world), 1);
        assert_eq!(recorder.cues.lock().unwrap().len(), 2);
    }

    #[test]
    fn disabled_radar_is_silent() {
        let world = field(&[((12, 10), Detection::new("Chest", "container"))]);
        let mut radar = Radar::new(RadarConfig::default(), Box::new(Recorder::default()));

        assert_eq!(radar.tick(Instant::now(), &world), 0);
    }
}
