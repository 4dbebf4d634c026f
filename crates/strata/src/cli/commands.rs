//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strata - owned, typed content fragments with version history
#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(about = "Owned, typed content fragments with version history and format conversion", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file layered over the defaults
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create a fragment from a file or stdin
    Create {
        /// Owner of the fragment
        #[arg(long)]
        owner: String,

        /// Content type, e.g. "text/markdown; charset=utf-8"
        #[arg(long = "type")]
        content_type: String,

        /// File to read content from (stdin if omitted)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Replace a fragment's content, keeping the old content as a version
    Update {
        /// Owner of the fragment
        #[arg(long)]
        owner: String,

        /// Fragment id
        id: String,

        /// File to read content from (stdin if omitted)
        #[arg(long)]
        file: Option<PathBuf>,
    },

    /// Write a fragment's content, optionally converted
    Get {
        /// Owner of the fragment
        #[arg(long)]
        owner: String,

        /// Fragment id
        id: String,

        /// Extension to convert to (e.g. "html", "json", "png")
        #[arg(long)]
        ext: Option<String>,

        /// File to write to (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Show a fragment's metadata
    Info {
        /// Owner of the fragment
        #[arg(long)]
        owner: String,

        /// Fragment id
        id: String,
    },

    /// List an owner's fragments
    List {
        /// Owner whose fragments to list
        #[arg(long)]
        owner: String,

        /// Show full metadata instead of ids
        #[arg(long)]
        expand: bool,
    },

    /// List a fragment's versions, newest first
    Versions {
        /// Owner of the fragment
        #[arg(long)]
        owner: String,

        /// Fragment id
        id: String,

        /// Show full metadata instead of ids
        #[arg(long)]
        expand: bool,
    },

    /// Write a version's content, optionally converted
    Version {
        /// Owner of the fragment
        #[arg(long)]
        owner: String,

        /// Fragment id
        id: String,

        /// Version id (e.g. "<fragment-id>_v2")
        version_id: String,

        /// Extension to convert to
        #[arg(long)]
        ext: Option<String>,

        /// File to write to (stdout if omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Make a past version the fragment's current content
    Restore {
        /// Owner of the fragment
        #[arg(long)]
        owner: String,

        /// Fragment id
        id: String,

        /// Version id to restore
        version_id: String,
    },

    /// Delete a fragment with its history, or a single version
    Delete {
        /// Owner of the fragment
        #[arg(long)]
        owner: String,

        /// Fragment id
        id: String,

        /// Delete only this version
        #[arg(long)]
        version: Option<String>,
    },

    /// Show supported content types and the extensions each converts to
    Formats {
        /// Only show this content type
        #[arg(long = "type")]
        content_type: Option<String>,
    },
}
