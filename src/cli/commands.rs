//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cozy")]
#[command(about = "Journal of daily memories with tag search", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Print debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new journal
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// List tags used across memories
    Tags {
        /// Most used tags first, optionally limited to N
        #[arg(long, value_name = "N", num_args = 0..=1, conflicts_with = "least")]
        most: Option<Option<usize>>,

        /// Least used tags first, optionally limited to N
        #[arg(long, value_name = "N", num_args = 0..=1)]
        least: Option<Option<usize>>,

        /// Show how often each tag is used
        #[arg(short, long)]
        counts: bool,

        /// Only memories on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only memories on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },

    /// Search memories by #tags and words
    Search {
        /// Search text, e.g. "#travel beach"
        query: Vec<String>,

        /// Tag to match (repeatable)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,

        /// How tags are matched: all, any, none
        #[arg(short, long = "match", value_name = "POLICY")]
        match_policy: Option<String>,

        /// Only memories on or after this date (YYYY-MM-DD)
        #[arg(long)]
        from: Option<String>,

        /// Only memories on or before this date (YYYY-MM-DD)
        #[arg(long)]
        to: Option<String>,
    },

    /// Append tags to the memory of a given day
    Tag {
        /// Day of the memory (YYYY-MM-DD)
        date: String,

        /// Tags to append
        #[arg(required = true)]
        tags: Vec<String>,
    },

    /// Add text, photos, sketches or voice notes to the memory of a day
    Add {
        /// Day of the memory (YYYY-MM-DD, default: today)
        #[arg(short, long)]
        date: Option<String>,

        /// Text to add (repeatable)
        #[arg(long, value_name = "TEXT")]
        text: Vec<String>,

        /// Photo file to add (repeatable)
        #[arg(long, value_name = "PATH")]
        photo: Vec<PathBuf>,

        /// Sketch file to add (repeatable)
        #[arg(long, value_name = "PATH")]
        graffiti: Vec<PathBuf>,

        /// Voice note location to add (repeatable)
        #[arg(long, value_name = "URL")]
        voice: Vec<String>,

        /// Tag to append (repeatable)
        #[arg(short, long = "tag", value_name = "TAG")]
        tags: Vec<String>,
    },

    /// Remove a chunk from a memory, or the whole memory
    Rm {
        /// Day of the memory (YYYY-MM-DD)
        date: String,

        /// Index of the chunk to remove (default: the whole memory)
        #[arg(short, long, value_name = "N")]
        chunk: Option<usize>,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },
}
