use clap::Parser;
use colored::*;
use eyre::{Context, Result};
use tracing::info;

use progresstracker::cli::{Cli, Command};
use progresstracker::config::Config;
use progresstracker::{FileStorage, ProgressTracker};

fn setup_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();
}

fn main() -> Result<()> {
    setup_logging();

    let cli = Cli::parse();
    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!("progresstracker starting");

    let storage = FileStorage::open(&config.store_path)?;
    let mut tracker = ProgressTracker::new(storage);
    tracker.init();

    match cli.command {
        Command::Status => {
            let found = tracker.found_easter_eggs().len();
            let total = tracker.total_easter_eggs();
            let visited = tracker.rooms().iter().filter(|r| r.visited).count();
            let destroyed = tracker.rooms().iter().filter(|r| r.destroyed).count();
            println!("Eggs found: {}/{}", found.to_string().cyan(), total);
            println!("Rooms visited: {}/{}", visited.to_string().cyan(), tracker.rooms().len());
            println!("Rooms destroyed: {}", destroyed.to_string().red());
            if found == total {
                println!("{}", "FULL ACCESS GRANTED".green().bold());
            }
        }
        Command::Eggs => {
            for egg in tracker.easter_eggs() {
                let marker = if egg.found { "✓".green() } else { "·".dimmed() };
                println!("{} {} {} - {}", marker, egg.id.yellow(), egg.name.cyan(), egg.description.dimmed());
            }
        }
        Command::Rooms => {
            for room in tracker.rooms() {
                let state = if room.destroyed {
                    "destroyed".red()
                } else if room.visited {
                    "visited".green()
                } else {
                    "unvisited".dimmed()
                };
                if room.interactions.is_empty() {
                    println!("{} {}", room.id.yellow(), state);
                } else {
                    println!("{} {} [{}]", room.id.yellow(), state, room.interactions.join(", ").dimmed());
                }
            }
        }
        Command::Find { egg_id } => {
            if tracker.find_easter_egg(&egg_id) {
                println!("{} First-time discovery: {}", "✓".green(), egg_id.cyan());
            } else {
                println!("Already found (or no such egg): {}", egg_id);
            }
        }
        Command::Visit { room_id } => {
            tracker.visit_room(&room_id);
            println!("{} Visited room: {}", "✓".green(), room_id.cyan());
        }
        Command::Destroy { room_id } => {
            tracker.destroy_room(&room_id);
            if tracker.is_room_destroyed(&room_id) {
                println!("{} Destroyed room: {}", "✗".red(), room_id);
            } else {
                println!("No such room: {}", room_id);
            }
        }
        Command::Track { room_id, interaction_id } => {
            tracker.track_interaction(&room_id, &interaction_id);
            if tracker.has_interacted(&room_id, &interaction_id) {
                println!("{} Tracked {} in {}", "✓".green(), interaction_id.cyan(), room_id.yellow());
            } else {
                println!("No such room: {}", room_id);
            }
        }
        Command::Reset => {
            tracker.reset_all_progress();
            println!("{} All progress reset", "✓".green());
        }
    }

    Ok(())
}
