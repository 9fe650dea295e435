//! Tracker configuration and environment loading.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracker_core::DEFAULT_PRESS_INTERVAL;

use crate::refresh::DEFAULT_REFRESH_INTERVAL;

/// Engine settings shared by every subsystem of the tracker.
#[derive(Clone, Debug)]
pub struct TrackerConfig {
    /// Order each category by distance from the player instead of discovery.
    pub sort_by_proximity: bool,
    /// Sample the host's counters and rescan when they change.
    pub auto_refresh: bool,
    pub refresh_interval: Duration,
    /// Window for both the repeated-press decay and navigation confirm.
    pub press_interval: Duration,
    /// The count watcher steps on every n-th update tick.
    pub tick_divisor: u32,
    pub radar: RadarConfig,
    /// Overrides the platform data directory for `favorites.json`.
    pub favorites_path: Option<PathBuf>,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            sort_by_proximity: false,
            auto_refresh: true,
            refresh_interval: DEFAULT_REFRESH_INTERVAL,
            press_interval: DEFAULT_PRESS_INTERVAL,
            tick_divisor: 5,
            radar: RadarConfig::default(),
            favorites_path: None,
        }
    }
}

impl TrackerConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TRACKER_SORT_BY_PROXIMITY` - Sort by distance (default: false)
    /// - `TRACKER_AUTO_REFRESH` - Watch counters for changes (default: true)
    /// - `TRACKER_REFRESH_INTERVAL_MS` - Debounce window (default: 1000)
    /// - `TRACKER_PRESS_INTERVAL_MS` - Favorite key window (default: 500)
    /// - `TRACKER_TICK_DIVISOR` - Watcher runs every n-th tick (default: 5)
    /// - `TRACKER_RADAR` - Enable the radar probe (default: false)
    /// - `TRACKER_RADAR_RANGE` - Probe radius in tiles (default: 5)
    /// - `TRACKER_RADAR_DELAY_MS` - Time between probes (default: 3000)
    /// - `TRACKER_RADAR_STEREO` - Stereo cue names (default: true)
    /// - `TRACKER_FAVORITES_PATH` - Favorites file location (default: platform data dir)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(enabled) = read_env_bool("TRACKER_SORT_BY_PROXIMITY") {
            config.sort_by_proximity = enabled;
        }
        if let Some(enabled) = read_env_bool("TRACKER_AUTO_REFRESH") {
            config.auto_refresh = enabled;
        }
        if let Some(ms) = read_env::<u64>("TRACKER_REFRESH_INTERVAL_MS") {
            config.refresh_interval = Duration::from_millis(ms);
        }
        if let Some(ms) = read_env::<u64>("TRACKER_PRESS_INTERVAL_MS") {
            config.press_interval = Duration::from_millis(ms.max(1));
        }
        if let Some(divisor) = read_env::<u32>("TRACKER_TICK_DIVISOR") {
            config.tick_divisor = divisor.max(1);
        }

        // Radar
        if let Some(enabled) = read_env_bool("TRACKER_RADAR") {
            config.radar.enabled = enabled;
        }
        if let Some(range) = read_env::<u32>("TRACKER_RADAR_RANGE") {
            config.radar.range = range;
        }
        if let Some(ms) = read_env::<u64>("TRACKER_RADAR_DELAY_MS") {
            config.radar.delay = Duration::from_millis(ms);
        }
        if let Some(stereo) = read_env_bool("TRACKER_RADAR_STEREO") {
            config.radar.stereo = stereo;
        }

        if let Some(path) = read_env::<PathBuf>("TRACKER_FAVORITES_PATH") {
            config.favorites_path = Some(path);
        }

        config
    }
}

/// Categories and words the radar stays quiet about unless focused.
pub const DEFAULT_RADAR_EXCLUSIONS: &[&str] = &[
    "stone",
    "weed",
    "twig",
    "coloured stone",
    "ice crystal",
    "clay stone",
    "fossil stone",
    "street lamp",
    "crop",
    "tree",
    "flooring",
    "water",
    "debris",
    "grass",
    "decoration",
    "bridge",
    "other",
];

#[derive(Clone, Debug)]
pub struct RadarConfig {
    pub enabled: bool,
    /// Probe radius in tiles, measured on each axis.
    pub range: u32,
    pub delay: Duration,
    /// Emit directional cue names instead of `_mono` ones.
    pub stereo: bool,
    /// Lowercase terms; a hit whose category, name or any name word matches is dropped.
    pub exclusions: Vec<String>,
    /// Lowercase terms; in focus mode only matching hits are kept.
    pub focus: Vec<String>,
    pub focus_mode: bool,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            range: 5,
            delay: Duration::from_millis(3000),
            stereo: true,
            exclusions: DEFAULT_RADAR_EXCLUSIONS
                .iter()
                .map(|term| (*term).to_owned())
                .collect(),
            focus: Vec::new(),
            focus_mode: false,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}
