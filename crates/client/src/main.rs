//! Console harness for the object tracker.
//!
//! Loads a RON layout, drives the tracker on a fixed tick and reads key
//! actions and world edits from stdin.
mod app;
mod command;
mod config;
mod console;
mod walker;
mod world;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracker_content::ContentFactory;
use tracker_runtime::{FileFavoritesRepository, ObjectTracker, TrackerConfig};

use app::App;
use config::ClientConfig;
use console::{ConsoleAnnouncer, ConsoleCueSink};
use walker::SimulatedWalker;
use world::ConsoleWorld;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = ClientConfig::from_env();
    let tracker_config = TrackerConfig::from_env();

    setup_logging(&config.session_id)?;

    let content = ContentFactory::bundled();
    let layout = content
        .load_location(&config.location)
        .with_context(|| format!("Failed to load location '{}'", config.location))?;

    let favorites_path = tracker_config
        .favorites_path
        .clone()
        .unwrap_or_else(FileFavoritesRepository::default_path);
    let repository = FileFavoritesRepository::new(&favorites_path)
        .with_context(|| format!("Failed to open favorites at {}", favorites_path.display()))?;
    tracing::info!("Favorites file: {}", favorites_path.display());

    let walker = SimulatedWalker::new();
    let mut builder = ObjectTracker::builder()
        .config(tracker_config.clone())
        .announcer(ConsoleAnnouncer)
        .pathfinder(walker.clone())
        .favorites_repository(Arc::new(repository));
    if tracker_config.radar.enabled {
        builder = builder.cue_sink(ConsoleCueSink);
    }
    let tracker = builder.build()?;

    App::new(config, content, tracker, ConsoleWorld::new(&layout), walker)
        .run()
        .await
}

/// Setup logging to a per-session file; stdout belongs to the announcer.
fn setup_logging(session_id: &Option<String>) -> Result<()> {
    use std::time::{SystemTime, UNIX_EPOCH};

    let log_dir = log_directory();

    // Create session ID if not provided
    let session_id = session_id.clone().unwrap_or_else(|| {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_secs())
            .unwrap_or_default();
        format!("session_{}", timestamp)
    });

    // Create session-specific log directory
    let session_log_dir = log_dir.join(&session_id);
    std::fs::create_dir_all(&session_log_dir)?;

    // Setup file appender
    let file_appender = tracing_appender::rolling::never(&session_log_dir, "tracker.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    // Create env filter
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Leak the guard to keep file writer alive
    std::mem::forget(guard);

    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}/tracker.log", session_log_dir.display());

    Ok(())
}

/// Platform cache directory for logs
///
/// - macOS: `~/Library/Caches/tracker/logs`
/// - Linux: `~/.cache/tracker/logs` (or `$XDG_CACHE_HOME/tracker/logs`)
/// - Windows: `%LOCALAPPDATA%\tracker\logs`
/// - Fallback: `/tmp/tracker/logs`
fn log_directory() -> PathBuf {
    directories::ProjectDirs::from("", "", "tracker")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/tracker"))
        .join("logs")
}
