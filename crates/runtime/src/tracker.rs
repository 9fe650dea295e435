//! The object tracker engine context.
//!
//! [`ObjectTracker`] owns every stateful piece of the tracker and is driven by
//! three host calls: [`ObjectTracker::on_update_ticked`] once per update,
//! [`ObjectTracker::handle_input`] when keys went down and
//! [`ObjectTracker::on_location_entered`] after a warp. Build it once through
//! [`ObjectTracker::builder`].

use std::sync::Arc;
use std::time::Instant;

use serde_json::json;
use tracker_core::{
    BindingTarget, Boundary, CompassDirection, FavoriteKey, HotkeyBinding, Position, ScanOptions,
    ScanResult, SelectionError, SelectionTracker, TileScanner, TimerEvent, TrackerError,
};

use crate::api::{
    Announcer, InputState, PathRequest, Pathfinder, Result, RuntimeError, TrackerAction,
    WorldView,
};
use crate::config::TrackerConfig;
use crate::favorites::{FavoriteAction, FavoriteRecognizer, FavoriteStore};
use crate::keys;
use crate::metrics::ScanMetrics;
use crate::navigation::NavigationBridge;
use crate::radar::{CueSink, Radar};
use crate::refresh::{RefreshScheduler, RefreshSignal};
use crate::repository::{FavoritesRepository, InMemoryFavoritesRepository};
use crate::watcher::CountWatcher;

pub struct ObjectTracker {
    config: TrackerConfig,
    scanner: TileScanner,
    selection: SelectionTracker,
    refresh: RefreshScheduler,
    watcher: CountWatcher,
    favorites: FavoriteRecognizer,
    navigation: NavigationBridge,
    radar: Option<Radar>,
    announcer: Box<dyn Announcer>,
    metrics: Arc<ScanMetrics>,
    sort_by_proximity: bool,
    /// Raw tile that wins over the selected entry until consumed.
    override_coordinate: Option<Position>,
}

impl ObjectTracker {
    pub fn builder() -> ObjectTrackerBuilder {
        ObjectTrackerBuilder::new()
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn selection(&self) -> &SelectionTracker {
        &self.selection
    }

    pub fn selection_mut(&mut self) -> &mut SelectionTracker {
        &mut self.selection
    }

    pub fn favorites(&self) -> &FavoriteRecognizer {
        &self.favorites
    }

    /// Handle for world notifications arriving from other threads.
    pub fn refresh_signal(&self) -> RefreshSignal {
        self.refresh.signal()
    }

    pub fn metrics(&self) -> Arc<ScanMetrics> {
        Arc::clone(&self.metrics)
    }

    pub fn sort_by_proximity(&self) -> bool {
        self.sort_by_proximity
    }

    pub fn override_coordinate(&self) -> Option<Position> {
        self.override_coordinate
    }

    /// Points reads and moves at a raw tile instead of the selected entry.
    ///
    /// Consumed by the next move and cleared when favorite presses decay.
    pub fn set_override_coordinate(&mut self, target: Option<Position>) {
        self.override_coordinate = target;
    }

    pub fn is_navigating(&self) -> bool {
        self.navigation.is_active()
    }

    /// Marks the results stale; the next due tick rescans.
    pub fn notify_world_changed(&self) {
        self.refresh.signal().mark_dirty();
    }

    /// Loads the favorites of a newly activated save.
    pub fn on_save_loaded(&mut self, save_id: &str) {
        tracing::info!("Activating favorites for save '{}'", save_id);
        self.favorites.store_mut().activate(save_id);
    }

    /// Rescans immediately with focus reset. Warps bypass the debounce window.
    pub fn on_location_entered(&mut self, world: &dyn WorldView, now: Instant) {
        tracing::debug!("Entered location {}", world.location_id());
        self.favorites.reset_stack();
        self.watcher.reset();
        self.override_coordinate = None;
        match self.refresh(world, true) {
            Ok(()) => self.refresh.mark_refreshed(now),
            Err(err) => {
                tracing::error!(code = err.error_code(), "Entry scan failed: {}", err);
                self.refresh.signal().mark_dirty();
                self.refresh.defer(now);
            }
        }
    }

    /// Per-update driver: favorite timers, change detection, debounced
    /// refresh and the radar, in that order.
    pub fn on_update_ticked(&mut self, tick: u64, now: Instant, world: &dyn WorldView) {
        for event in self.favorites.poll(now) {
            match event {
                TimerEvent::NavigationConfirmed { hotkey } => {
                    self.navigate_to_favorite(hotkey, world);
                }
                TimerEvent::DecayElapsed => self.override_coordinate = None,
            }
        }

        if world.menu_open() {
            if self.navigation.stop_if_active() {
                tracing::debug!("Menu opened, auto-walk stopped");
            }
            return;
        }

        let divisor = u64::from(self.config.tick_divisor.max(1));
        if self.config.auto_refresh && tick % divisor == 0 && self.watcher.step(world) {
            tracing::trace!("Counters changed, marking results dirty");
            self.refresh.signal().mark_dirty();
        }

        if let Some(ticket) = self.refresh.poll(now) {
            match self.refresh(world, self.sort_by_proximity) {
                Ok(()) => self.refresh.complete(ticket, now),
                Err(err) => {
                    tracing::error!(code = err.error_code(), "Refresh failed: {}", err);
                    self.refresh.defer(now);
                }
            }
        }

        if let Some(radar) = self.radar.as_mut() {
            radar.tick(now, world);
        }
    }

    /// Reacts to the keys that went down this update.
    pub fn handle_input(&mut self, input: &dyn InputState, world: &dyn WorldView, now: Instant) {
        if world.menu_open() {
            return;
        }

        let favorite = TrackerAction::FAVORITES
            .into_iter()
            .find(|action| input.just_pressed(*action))
            .and_then(TrackerAction::favorite_key);
        if let Some(key) = favorite {
            self.handle_favorite(key, world, now);
            return;
        }
        if input.any_pressed() {
            self.favorites.reset();
        }

        if input.just_pressed(TrackerAction::CancelAutoWalk) && self.navigation.stop_if_active() {
            tracing::debug!("Auto-walk cancelled");
        }

        if input.just_pressed(TrackerAction::CycleCategoryUp) {
            self.cycle_category(-1);
        } else if input.just_pressed(TrackerAction::CycleCategoryDown) {
            self.cycle_category(1);
        } else if input.just_pressed(TrackerAction::CycleObjectUp) {
            self.cycle_object(-1);
        } else if input.just_pressed(TrackerAction::CycleObjectDown) {
            self.cycle_object(1);
        } else if input.just_pressed(TrackerAction::ToggleSort) {
            self.toggle_sort(world);
        } else if input.just_pressed(TrackerAction::ReadSelected) {
            self.rescan(world, false);
            self.read_selected(false, world);
        } else if input.just_pressed(TrackerAction::ReadSelectedTile) {
            self.rescan(world, false);
            self.read_selected(true, world);
        } else if input.just_pressed(TrackerAction::MoveToSelected) {
            self.rescan(world, false);
            self.move_to_selected(world);
        }
    }

    /// Scans the location and swaps the results in.
    ///
    /// With `reset_focus` the selection moves to the first entry, keeping the
    /// category when it survived. On failure the results are emptied but the
    /// selection pointers are kept, so the user's place survives until the
    /// next successful scan.
    pub fn refresh(&mut self, world: &dyn WorldView, reset_focus: bool) -> Result<()> {
        let options = ScanOptions {
            sort_by_proximity: self.sort_by_proximity,
        };
        let started = Instant::now();

        let report = match self.scanner.scan(
            world.player_tile(),
            world.map(),
            world.categorizer(),
            options,
        ) {
            Ok(report) => report,
            Err(err) => {
                self.metrics.record_failure();
                self.selection.replace_results(ScanResult::new());
                return Err(RuntimeError::Scan(err));
            }
        };

        let elapsed = started.elapsed();
        self.metrics.record_success(elapsed, report.tiles_skipped);
        tracing::trace!(
            tiles = report.tiles_visited,
            categories = report.result.category_count(),
            ?elapsed,
            average = ?self.metrics.average(),
            "Scan completed"
        );
        if report.tiles_skipped > 0 {
            tracing::debug!(
                "Categorizer failed on {} tile(s) in {}",
                report.tiles_skipped,
                world.location_id()
            );
        }

        self.selection.replace_results(report.result);
        let focus = if reset_focus {
            self.selection.focus_first_entry()
        } else {
            self.selection.reset_focus(false)
        };
        match focus {
            Ok(()) => {}
            Err(SelectionError::Empty) => {
                if reset_focus {
                    self.announcer.say_key(keys::NO_OBJECTS_FOUND, false);
                }
            }
            Err(err) => tracing::debug!("Focus not reapplied: {}", err),
        }
        Ok(())
    }

    /// Announces the override coordinate or the selected entry relative to
    /// the player.
    pub fn read_selected(&mut self, tile_only: bool, world: &dyn WorldView) {
        let player = world.player_tile();

        if let Some(target) = self.override_coordinate {
            let tokens = json!({
                "coordinates": target.to_coordinates(),
                "player_coordinates": player.to_coordinates(),
                "direction": CompassDirection::between(player, target).to_string(),
                "distance": player.rounded_distance(target),
            });
            self.announcer
                .say_with_tokens(keys::READ_SELECTED_COORDINATES, &tokens, true);
            return;
        }

        let Some(entry) = self.selection.selected_entry().cloned() else {
            self.announcer.say_key(keys::NO_OBJECTS_FOUND, true);
            return;
        };
        let tokens = json!({
            "object_name": entry.name,
            "only_tile": tile_only,
            "coordinates": entry.position.to_coordinates(),
            "player_coordinates": player.to_coordinates(),
            "direction": CompassDirection::between(player, entry.position).to_string(),
            "distance": player.rounded_distance(entry.position),
        });
        self.announcer
            .say_with_tokens(keys::READ_SELECTED_OBJECT, &tokens, true);
    }

    /// Starts walking to the override coordinate or the selected entry.
    pub fn move_to_selected(&mut self, world: &dyn WorldView) {
        let target = match self.override_coordinate.take() {
            Some(position) => Some((position.to_coordinates(), position)),
            None => self
                .selection
                .selected_entry()
                .map(|entry| (entry.name.clone(), entry.position)),
        };
        let Some((name, target)) = target else {
            self.announcer.say_key(keys::COULD_NOT_FIND_PATH, true);
            return;
        };

        let tokens = json!({
            "object_name": name,
            "coordinates": target.to_coordinates(),
        });
        self.announcer.say_with_tokens(keys::MOVING_TO, &tokens, true);
        self.navigation.navigate(PathRequest {
            origin: world.player_tile(),
            location: world.location_id().to_owned(),
            target,
        });
    }

    /// Executor callback after a failed attempt. Returns whether to retry.
    pub fn on_navigation_retry(
        &mut self,
        attempt: u32,
        max_retries: u32,
        last_target: Option<Position>,
        world: &dyn WorldView,
    ) -> bool {
        if NavigationBridge::should_retry(attempt, max_retries, last_target.is_some()) {
            tracing::debug!("Auto-walk retry {}/{}", attempt + 1, max_retries);
            return true;
        }
        tracing::debug!("Auto-walk gave up after {} attempt(s)", attempt);
        self.rescan(world, true);
        false
    }

    /// Executor callback once the walk ended, reached or not.
    pub fn on_navigation_stopped(&mut self, last_target: Option<Position>, world: &dyn WorldView) {
        if let Some(target) = last_target {
            tracing::debug!("Auto-walk stopped near {}", target);
        }
        self.read_selected(false, world);
        self.rescan(world, self.sort_by_proximity);
    }

    fn rescan(&mut self, world: &dyn WorldView, reset_focus: bool) {
        if let Err(err) = self.refresh(world, reset_focus) {
            tracing::error!(code = err.error_code(), "Scan failed: {}", err);
        }
    }

    fn cycle_category(&mut self, delta: isize) {
        if self.selection.results().is_empty() {
            self.announcer.say_key(keys::NO_CATEGORIES_FOUND, true);
            return;
        }
        match self.selection.cycle_category(delta) {
            Ok(()) => {
                if let Some(category) = self.selection.selected_category() {
                    self.announcer.say(category, true);
                }
            }
            Err(err) => self.announce_selection_error(err),
        }
    }

    fn cycle_object(&mut self, delta: isize) {
        match self.selection.cycle_entry(delta) {
            Ok(()) => {
                if let Some(entry) = self.selection.selected_entry() {
                    self.announcer.say(&entry.name, true);
                }
            }
            Err(err) => self.announce_selection_error(err),
        }
    }

    fn announce_selection_error(&self, err: SelectionError) {
        let key = match err {
            SelectionError::Boundary(Boundary::Start) => keys::START_OF_LIST,
            SelectionError::Boundary(Boundary::End) => keys::END_OF_LIST,
            SelectionError::Empty | SelectionError::InvalidEntry => keys::NO_OBJECTS_FOUND,
            SelectionError::InvalidCategory { .. } => keys::NO_CATEGORIES_FOUND,
        };
        self.announcer.say_key(key, true);
    }

    fn toggle_sort(&mut self, world: &dyn WorldView) {
        self.sort_by_proximity = !self.sort_by_proximity;
        let tokens = json!({ "is_enabled": self.sort_by_proximity });
        self.announcer
            .say_with_tokens(keys::SORT_BY_PROXIMITY, &tokens, true);
        self.rescan(world, false);
    }

    fn handle_favorite(&mut self, key: FavoriteKey, world: &dyn WorldView, now: Instant) {
        let location = world.location_id();

        match self.favorites.on_press(key, location, now) {
            FavoriteAction::ReadBinding { hotkey, binding } => {
                let tokens = json!({
                    "favorite_number": hotkey,
                    "target_object": binding.name,
                    "target_category": binding.category,
                });
                self.announcer
                    .say_with_tokens(keys::READ_FAVORITE, &tokens, true);
            }
            FavoriteAction::ReadUnset { hotkey } => {
                let tokens = json!({ "favorite_number": hotkey });
                self.announcer
                    .say_with_tokens(keys::FAVORITE_UNSET, &tokens, true);
            }
            FavoriteAction::Save { hotkey } => self.save_favorite(hotkey, world),
            FavoriteAction::NavigationArmed { hotkey } => {
                tracing::trace!("Navigation to favorite {} armed", hotkey);
            }
            FavoriteAction::Delete {
                hotkey, cancelled, ..
            } => {
                if cancelled.is_some() {
                    tracing::trace!("Pending navigation to favorite {} cancelled", hotkey);
                }
                let tokens = json!({ "favorite_number": hotkey });
                self.announcer
                    .say_with_tokens(keys::FAVORITE_CLEARED, &tokens, true);
            }
            FavoriteAction::StackChanged { stack } => {
                let tokens = json!({ "stack_number": stack + 1 });
                self.announcer
                    .say_with_tokens(keys::READ_FAVORITE_STACK, &tokens, true);
            }
            FavoriteAction::CoordinatesToggled { enabled } => {
                let tokens = json!({ "is_enabled": enabled });
                self.announcer
                    .say_with_tokens(keys::SAVE_COORDINATES_TOGGLE, &tokens, true);
                if !enabled {
                    self.override_coordinate = None;
                    if let Err(err) = self.selection.reset_focus(true) {
                        tracing::debug!("Focus not reset: {}", err);
                    }
                }
            }
            FavoriteAction::DefaultPromoted { promoted } => {
                if promoted {
                    self.announcer.say_key(keys::FAVORITE_SET_AS_DEFAULT, true);
                }
            }
            FavoriteAction::DefaultCleared { .. } => {
                self.announcer
                    .say_key(keys::FAVORITE_DEFAULT_CLEARED, true);
            }
        }
    }

    /// Stores the facing tile or the selected entry under `hotkey`.
    fn save_favorite(&mut self, hotkey: u32, world: &dyn WorldView) {
        let location = world.location_id();

        if self.favorites.saves_coordinates() {
            let tile = world.facing_tile();
            self.favorites
                .save(location, hotkey, HotkeyBinding::coordinates(tile));
            let tokens = json!({
                "favorite_number": hotkey,
                "coordinates": tile.to_coordinates(),
            });
            self.announcer
                .say_with_tokens(keys::FAVORITE_SAVE_COORDINATES, &tokens, true);
            return;
        }

        let category = self.selection.selected_category().map(str::to_owned);
        let entry = self.selection.selected_entry().cloned();
        let (Some(category), Some(entry)) = (category, entry) else {
            self.announcer.say_key(keys::NO_DESTINATION_SELECTED, true);
            return;
        };

        self.favorites
            .save(location, hotkey, HotkeyBinding::object(&entry.name, &category));
        let tokens = json!({
            "favorite_number": hotkey,
            "selected_object": entry.name,
            "selected_category": category,
        });
        self.announcer
            .say_with_tokens(keys::FAVORITE_SAVE, &tokens, true);
    }

    /// Confirmed double press: point the selection at the binding and walk.
    fn navigate_to_favorite(&mut self, hotkey: u32, world: &dyn WorldView) {
        let target = self
            .favorites
            .binding(world.location_id(), hotkey)
            .and_then(HotkeyBinding::target);

        match target {
            Some(BindingTarget::Coordinates(position)) => {
                self.override_coordinate = Some(position);
            }
            Some(BindingTarget::Object { name, category }) => {
                self.rescan(world, false);
                let found = self.selection.set_category(&category).is_ok()
                    && self.selection.select_entry_named(&name).is_some();
                if !found {
                    tracing::debug!("Favorite {} target '{}' is not in range", hotkey, name);
                    self.announcer.say_key(keys::COULD_NOT_FIND_PATH, true);
                    return;
                }
            }
            None => {
                let tokens = json!({ "favorite_number": hotkey });
                self.announcer
                    .say_with_tokens(keys::FAVORITE_UNSET, &tokens, true);
                return;
            }
        }

        self.move_to_selected(world);
    }
}

/// Builder for [`ObjectTracker`].
///
/// The announcer and pathfinder are required. Favorites default to an
/// in-memory repository; a cue sink is required only when the radar is on.
pub struct ObjectTrackerBuilder {
    config: TrackerConfig,
    announcer: Option<Box<dyn Announcer>>,
    pathfinder: Option<Box<dyn Pathfinder>>,
    repository: Option<Arc<dyn FavoritesRepository>>,
    cue_sink: Option<Box<dyn CueSink>>,
}

impl ObjectTrackerBuilder {
    fn new() -> Self {
        Self {
            config: TrackerConfig::default(),
            announcer: None,
            pathfinder: None,
            repository: None,
            cue_sink: None,
        }
    }

    /// Override tracker configuration
    pub fn config(mut self, config: TrackerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn announcer(mut self, announcer: impl Announcer + 'static) -> Self {
        self.announcer = Some(Box::new(announcer));
        self
    }

    pub fn pathfinder(mut self, pathfinder: impl Pathfinder + 'static) -> Self {
        self.pathfinder = Some(Box::new(pathfinder));
        self
    }

    pub fn favorites_repository(mut self, repository: Arc<dyn FavoritesRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    pub fn cue_sink(mut self, sink: impl CueSink + 'static) -> Self {
        self.cue_sink = Some(Box::new(sink));
        self
    }

    pub fn build(self) -> Result<ObjectTracker> {
        let announcer = self.announcer.ok_or(RuntimeError::MissingAnnouncer)?;
        let pathfinder = self.pathfinder.ok_or(RuntimeError::MissingPathfinder)?;
        if self.config.radar.enabled && self.cue_sink.is_none() {
            return Err(RuntimeError::MissingCueSink);
        }

        let repository = self
            .repository
            .unwrap_or_else(|| Arc::new(InMemoryFavoritesRepository::new()));
        let favorites =
            FavoriteRecognizer::new(FavoriteStore::new(repository), self.config.press_interval);
        let radar = self
            .cue_sink
            .map(|sink| Radar::new(self.config.radar.clone(), sink));

        Ok(ObjectTracker {
            scanner: TileScanner::new(),
            selection: SelectionTracker::new(),
            refresh: RefreshScheduler::new(self.config.refresh_interval),
            watcher: CountWatcher::new(),
            favorites,
            navigation: NavigationBridge::new(pathfinder),
            radar,
            announcer,
            metrics: Arc::new(ScanMetrics::new()),
            sort_by_proximity: self.config.sort_by_proximity,
            override_coordinate: None,
            config: self.config,
        })
    }
}
