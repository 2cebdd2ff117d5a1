use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ffmetactl")]
#[command(about = "Read, normalize, and convert FFmpeg chapter metadata files")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase output verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Display the book metadata in an ffmetadata file
    Show {
        /// Path to the ffmetadata file
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Show only a specific field
        #[arg(long)]
        field: Option<String>,
    },

    /// Re-render an ffmetadata file through the book metadata mapping
    Normalize {
        /// Path to the ffmetadata file
        file: PathBuf,

        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Align keys and separate sections (overrides config)
        #[arg(long)]
        pretty: bool,
    },

    /// Convert an ffmetadata file to a book TOML file
    Export {
        /// Path to the ffmetadata file
        file: PathBuf,

        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Convert a book TOML file to ffmetadata
    Import {
        /// Path to the book TOML file
        book: PathBuf,

        /// Take chapters from this ffmetadata file
        #[arg(long)]
        chapters: Option<PathBuf>,

        /// Write here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Align keys and separate sections (overrides config)
        #[arg(long)]
        pretty: bool,
    },

    /// Split a grouping string into series name and index
    Grouping {
        /// Text such as "Series Title, Book 2"
        text: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List how ffmetadata keys map to book fields
    Fields,
}
