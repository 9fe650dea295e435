//! Console client settings read from the environment.

use std::env;
use std::time::Duration;

/// Settings for the console harness itself. Tracker behaviour lives in
/// [`tracker_runtime::TrackerConfig`].
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Layout name under `locations/`.
    pub location: String,
    pub save_id: String,
    pub session_id: Option<String>,
    /// Update tick period.
    pub tick: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            location: "farm".to_owned(),
            save_id: "console".to_owned(),
            session_id: None,
            tick: Duration::from_millis(50),
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `TRACKER_LOCATION` - Starting layout (default: farm)
    /// - `TRACKER_SAVE_ID` - Save whose favorites are active (default: console)
    /// - `TRACKER_SESSION_ID` - Log directory name (default: session_<unix time>)
    /// - `TRACKER_TICK_MS` - Update period (default: 50)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(location) = env::var("TRACKER_LOCATION") {
            config.location = location;
        }
        if let Ok(save_id) = env::var("TRACKER_SAVE_ID") {
            config.save_id = save_id;
        }
        config.session_id = env::var("TRACKER_SESSION_ID").ok();
        if let Some(ms) = env::var("TRACKER_TICK_MS")
            .ok()
            .and_then(|value| value.parse::<u64>().ok())
        {
            config.tick = Duration::from_millis(ms.max(1));
        }

        config
    }
}
