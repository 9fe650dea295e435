//! Update loop tying stdin, the simulated world and the tracker together.

use std::time::Instant;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracker_content::ContentFactory;
use tracker_core::{Detection, LocationMap};
use tracker_runtime::{ObjectTracker, Pathfinder};

use crate::command::Command;
use crate::config::ClientConfig;
use crate::console::Pressed;
use crate::walker::{SimulatedWalker, WalkEvent};
use crate::world::ConsoleWorld;

pub struct App {
    config: ClientConfig,
    content: ContentFactory,
    tracker: ObjectTracker,
    world: ConsoleWorld,
    walker: SimulatedWalker,
    tick: u64,
}

impl App {
    pub fn new(
        config: ClientConfig,
        content: ContentFactory,
        tracker: ObjectTracker,
        world: ConsoleWorld,
        walker: SimulatedWalker,
    ) -> Self {
        Self {
            config,
            content,
            tracker,
            world,
            walker,
            tick: 0,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        let (tx, mut rx) = mpsc::channel::<Command>(32);
        tokio::spawn(read_commands(tx));

        self.tracker.on_save_loaded(&self.config.save_id);
        self.tracker.on_location_entered(&self.world, Instant::now());
        println!(
            "Tracking {} ({}x{}). Type an action name, `help` or `quit`.",
            self.world.location.name(),
            self.world.location.dimensions().width,
            self.world.location.dimensions().height,
        );

        let mut interval = tokio::time::interval(self.config.tick);
        loop {
            tokio::select! {
                _ = interval.tick() => self.update(),
                command = rx.recv() => match command {
                    None | Some(Command::Quit) => break,
                    Some(command) => self.execute(command),
                },
            }
        }

        let metrics = self.tracker.metrics().snapshot();
        tracing::info!(
            refreshes = metrics.refreshes,
            failures = metrics.failures,
            average = ?metrics.average,
            "Session finished"
        );
        Ok(())
    }

    fn update(&mut self) {
        self.tick += 1;
        let now = Instant::now();

        match self.walker.advance(&mut self.world) {
            Some(WalkEvent::Moved(position)) => tracing::trace!("Walked to {}", position),
            Some(WalkEvent::Arrived(target)) => {
                self.tracker.on_navigation_stopped(Some(target), &self.world);
            }
            Some(WalkEvent::Blocked { attempt, target }) => {
                let retry = self.tracker.on_navigation_retry(
                    attempt,
                    SimulatedWalker::MAX_RETRIES,
                    Some(target),
                    &self.world,
                );
                if !retry {
                    self.walker.stop();
                    self.tracker.on_navigation_stopped(None, &self.world);
                }
            }
            None => {}
        }

        self.tracker.on_update_ticked(self.tick, now, &self.world);
    }

    fn execute(&mut self, command: Command) {
        let now = Instant::now();
        match command {
            Command::Action(action) => {
                self.tracker.handle_input(&Pressed(action), &self.world, now);
            }
            Command::Step { dx, dy } => {
                if self.world.step(dx, dy) {
                    self.tracker.notify_world_changed();
                } else {
                    println!("blocked");
                }
            }
            Command::Harvest(position) => match self.world.location.remove(position) {
                Some(removed) => {
                    println!("removed {}", removed.name);
                    self.tracker.notify_world_changed();
                }
                None => println!("nothing at {position}"),
            },
            Command::Place {
                position,
                name,
                category,
            } => {
                let detection = Detection { name, category };
                self.world.location.place(position, detection);
                self.tracker.notify_world_changed();
            }
            Command::Point(position) => {
                self.tracker.set_override_coordinate(Some(position));
                println!("pointing at {position}");
            }
            Command::Warp(name) => match self.content.load_location(&name) {
                Ok(layout) => {
                    self.world = ConsoleWorld::new(&layout);
                    self.tracker.on_location_entered(&self.world, now);
                    println!("entered {}", layout.name);
                }
                Err(err) => {
                    tracing::warn!("Failed to load location '{}': {:#}", name, err);
                    println!("no such location: {name}");
                }
            },
            Command::Metrics => {
                let metrics = self.tracker.metrics().snapshot();
                println!(
                    "refreshes={} failures={} average={:?} last={:?} skipped={}",
                    metrics.refreshes,
                    metrics.failures,
                    metrics.average,
                    metrics.last,
                    metrics.skipped_tiles
                );
            }
            Command::Quit => {}
        }
    }
}

/// Forwards parsed stdin lines until EOF or the receiver is gone.
async fn read_commands(tx: mpsc::Sender<Command>) {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(err) => {
                tracing::error!("Failed to read stdin: {}", err);
                break;
            }
        };
        if line.trim().is_empty() {
            continue;
        }
        if line.trim() == "help" {
            print_help();
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => {
                if tx.send(command).await.is_err() {
                    break;
                }
            }
            Err(err) => println!("{err:#}"),
        }
    }
}

fn print_help() {
    println!("actions:  cycle_category_up|down, cycle_object_up|down, read_selected,");
    println!("          read_selected_tile, move_to_selected, toggle_sort, cancel_auto_walk,");
    println!("          favorite1..favorite10, favorite_stack_down|up,");
    println!("          favorite_coordinates_toggle, favorite_save_default");
    println!("world:    step <dx> <dy>, harvest <x> <y>, place <x> <y> <name> [category],");
    println!("          point <x> <y>,");
    println!("          warp <location>, metrics, quit");
}
