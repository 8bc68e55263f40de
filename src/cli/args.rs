// src/cli/args.rs
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::domain::Priority;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
#[command(arg_required_else_help = true, disable_help_subcommand = true)]
pub struct Args {
    /// Directory holding the notes, session and config files (optional)
    #[arg(short, long, value_name = "DIR", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbosity level (-v = debug, -vv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Log in to unlock the dashboard commands
    Login {
        #[arg(short, long, value_name = "USERNAME")]
        username: String,

        #[arg(short, long, value_name = "PASSWORD")]
        password: String,
    },

    /// Log out and drop the stored session
    Logout,

    /// Show the note board grouped by priority
    Board,

    /// Manage notes on the board
    #[command(subcommand)]
    Note(NoteCommand),

    /// List users from the directory service
    Users,

    /// Show posts and todos for one user
    User {
        #[arg(value_name = "USER_ID")]
        user_id: i64,

        /// Todo ids to show as completed for this render only
        #[arg(long, value_name = "IDS", value_delimiter = ',')]
        done: Vec<i64>,
    },

    /// Aggregate post and todo statistics across all users
    Analytics,

    /// Look up current weather by city or coordinates
    Weather {
        #[arg(short, long, value_name = "CITY")]
        city: Option<String>,

        #[arg(long, value_name = "LAT", requires = "lon")]
        lat: Option<f64>,

        #[arg(long, value_name = "LON", requires = "lat")]
        lon: Option<f64>,
    },

    /// Render every widget in one screen
    Dashboard,

    /// Manage the config file
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Command {
    /// The login gate: everything except session and config management
    /// requires an active session.
    pub fn requires_login(&self) -> bool {
        !matches!(
            self,
            Command::Login { .. } | Command::Logout | Command::Config(_)
        )
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum NoteCommand {
    /// Add a note to the board
    Add {
        #[arg(value_name = "TEXT")]
        text: String,

        /// Priority bucket for the new note
        #[arg(short, long, default_value_t = Priority::Normal)]
        priority: Priority,
    },

    /// Delete a note by id
    Delete {
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,
    },

    /// Move a note to another priority bucket
    Move {
        #[arg(value_name = "NOTE_ID")]
        note_id: i64,

        #[arg(value_name = "PRIORITY")]
        priority: Priority,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigCommand {
    /// Write a config file with default values
    Init,
}
