use crate::types::LogLevel;
use clap::{Parser, Subcommand};
use dayplan_types::DateKey;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dayplan")]
#[command(about = "Plan your days: three tasks and a note per date", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory (defaults to $DAYPLAN_PATH, then the system data directory)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default config.toml into the data directory
    Init {
        /// Overwrite an existing config
        #[arg(long)]
        force: bool,
    },

    /// Print the tasks and notes of one day
    Show {
        /// Day to show (YYYY-MM-DD), defaults to today
        date: Option<DateKey>,
    },

    /// Save tasks and notes for a day
    Set {
        date: DateKey,

        /// Task text, repeat up to three times; replaces all tasks of the day
        #[arg(long = "task")]
        tasks: Vec<String>,

        #[arg(long)]
        notes: Option<String>,
    },

    /// Write every record as a JSON document
    Export {
        /// Destination file, stdout when omitted
        #[arg(long, short)]
        output: Option<PathBuf>,
    },

    /// Replace every record with the contents of a JSON document
    Import { file: PathBuf },

    /// Print the configured bounds and the initial window of days
    Window {
        /// Pretend today is this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<DateKey>,
    },

    /// Scroll through your days in the terminal
    Browse {
        /// Pretend today is this date (YYYY-MM-DD)
        #[arg(long)]
        today: Option<DateKey>,
    },
}
