//! `nexus` command line front-end.
//!
//! Without a subcommand the pipeline demonstration runs.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Garden, game and archive exercises around the Nexus data pipeline.
#[derive(Parser, Debug)]
#[command(name = "nexus", about = "Nexus data pipeline exercises", version)]
pub struct Cli {
    /// Configuration file (JSON); defaults apply for missing fields.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose (debug-level) logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Print the buffered application log after the demonstration.
    #[arg(long, global = true)]
    pub show_log: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Top-level subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Multi-format processing through the Nexus manager.
    Pipeline,

    /// Numeric, text and log data processors.
    Processors,

    /// Sensor, transaction and event streams.
    Streams,

    /// Plant records and garden analytics.
    Garden {
        #[command(subcommand)]
        demo: GardenDemo,
    },

    /// Error categories and guaranteed cleanup.
    Errors {
        #[command(subcommand)]
        demo: ErrorsDemo,
    },

    /// Echo the command line arguments.
    Quest {
        /// Arguments to count.
        args: Vec<String>,
    },

    /// Analyze integer scores given on the command line.
    Scores {
        /// Scores; non-integers are reported and ignored.
        #[arg(allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// 3D positions and distances.
    Coords,

    /// Set analytics over player achievements.
    Achievements,

    /// Inventory statistics and restock advice.
    Inventory,

    /// Game event stream and number sequences.
    Events,

    /// Player analytics dashboard.
    Dashboard,

    /// File backed archive exercises.
    Archive {
        #[command(subcommand)]
        demo: ArchiveDemo,
    },
}

/// Subcommands for `nexus garden`.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GardenDemo {
    Intro,
    Data,
    Growth,
    Factory,
    Security,
    Types,
    Analytics,
    Seeds,
}

/// Subcommands for `nexus errors`.
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorsDemo {
    Temperature,
    Types,
    Custom,
    Watering,
    Health,
    Management,
}

/// Subcommands for `nexus archive`.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ArchiveDemo {
    /// Read an archive file.
    Recover {
        /// Archive to read.
        path: Option<PathBuf>,
    },

    /// Write the discovery entries to a new archive.
    Create {
        /// Destination; the configured archive path when omitted.
        path: Option<PathBuf>,
    },

    /// Interactive exchange over stdin, stdout and stderr.
    Comms,

    /// Read an archive, then overwrite it with a classified entry.
    Vault {
        /// Archive to secure.
        path: Option<PathBuf>,
    },

    /// Attempt access to several archives, handling each failure.
    Crisis {
        /// Archives to try; three well-known names when omitted.
        paths: Vec<PathBuf>,
    },
}

impl Cli {
    /// The requested command, `pipeline` when none was given.
    pub fn selected(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::Pipeline)
    }
}
