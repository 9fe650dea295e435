mod support;

use std::fs;
use std::sync::Arc;
use std::time::{Duration, Instant};

use tempfile::TempDir;
use tracker_core::HotkeyBinding;
use tracker_runtime::{FileFavoritesRepository, ObjectTracker, TrackerAction, keys};

use support::{RecordingAnnouncer, RecordingPathfinder, TestWorld, farm_layout, press};

fn tracker_in(dir: &TempDir, save_id: &str) -> (ObjectTracker, RecordingAnnouncer) {
    let repository = FileFavoritesRepository::in_dir(dir.path()).expect("repository");
    let announcer = RecordingAnnouncer::default();
    let mut tracker = ObjectTracker::builder()
        .announcer(announcer.clone())
        .pathfinder(RecordingPathfinder::default())
        .favorites_repository(Arc::new(repository))
        .build()
        .expect("tracker should build");
    tracker.on_save_loaded(save_id);
    (tracker, announcer)
}

#[test]
fn saved_favorite_survives_a_restart_and_delete_clears_it() {
    let dir = TempDir::new().unwrap();
    let world = TestWorld::new(&farm_layout());
    let start = Instant::now();

    {
        let (mut tracker, _) = tracker_in(&dir, "save-1");
        tracker.on_location_entered(&world, start);
        tracker.handle_input(&press(TrackerAction::Favorite5), &world, start);
        tracker.handle_input(
            &press(TrackerAction::Favorite5),
            &world,
            start + Duration::from_millis(50),
        );
    }

    let (mut tracker, announcer) = tracker_in(&dir, "save-1");
    assert_eq!(
        tracker.favorites().binding("Farm", 5),
        Some(&HotkeyBinding::object("Chest", "container"))
    );

    let later = start + Duration::from_secs(5);
    tracker.on_location_entered(&world, later);
    for offset in 0..3 {
        tracker.handle_input(
            &press(TrackerAction::Favorite5),
            &world,
            later + Duration::from_millis(offset * 50),
        );
    }
    assert_eq!(
        announcer.last().map(|spoken| spoken.key),
        Some(keys::FAVORITE_CLEARED.to_owned())
    );

    let (reloaded, _) = tracker_in(&dir, "save-1");
    assert_eq!(reloaded.favorites().binding("Farm", 5), None);
}

#[test]
fn legacy_file_seeds_a_new_save() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("favorites.json"),
        r#"{ "Farm": { "1": { "Item1": "Chest", "Item2": "container" } } }"#,
    )
    .unwrap();
    let world = TestWorld::new(&farm_layout());
    let start = Instant::now();

    let (mut tracker, announcer) = tracker_in(&dir, "fresh-save");
    tracker.on_location_entered(&world, start);
    tracker.handle_input(&press(TrackerAction::Favorite1), &world, start);

    let spoken = announcer.last().unwrap();
    assert_eq!(spoken.key, keys::READ_FAVORITE);
    assert_eq!(spoken.tokens["target_object"], "Chest");
    assert_eq!(spoken.tokens["favorite_number"], 1);
}

#[test]
fn corrupted_file_falls_back_to_empty_favorites() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("favorites.json"), "{ broken").unwrap();
    let world = TestWorld::new(&farm_layout());
    let start = Instant::now();

    let (mut tracker, announcer) = tracker_in(&dir, "save-1");
    tracker.on_location_entered(&world, start);
    tracker.handle_input(&press(TrackerAction::Favorite1), &world, start);

    assert_eq!(
        announcer.last().map(|spoken| spoken.key),
        Some(keys::FAVORITE_UNSET.to_owned())
    );
}
