//! CLI argument parsing for progresstracker

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pt")]
#[command(author, version, about = "Persistent progress tracker for the CTRL+ALT+DEL experience", long_about = None)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Show overall progress (eggs found, rooms visited)
    Status,

    /// List the easter egg catalog with discovery state
    Eggs,

    /// List the room catalog with visit/destroy state
    Rooms,

    /// Mark an easter egg as found
    Find {
        /// Egg id (egg1..egg7)
        #[arg(required = true)]
        egg_id: String,
    },

    /// Mark a room as visited
    Visit {
        /// Room id (boot, audio, ...)
        #[arg(required = true)]
        room_id: String,
    },

    /// Mark a room's content as permanently destroyed
    Destroy {
        /// Room id
        #[arg(required = true)]
        room_id: String,
    },

    /// Record an interaction kind for a room
    Track {
        /// Room id
        #[arg(required = true)]
        room_id: String,

        /// Interaction kind (e.g. "primary")
        #[arg(required = true)]
        interaction_id: String,
    },

    /// Reset all progress back to initial values
    Reset,
}
