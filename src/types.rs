//! Shared types for the cogs application.
//!
//! This module contains the crate-wide Result alias and the CLI command
//! definitions used by the binary.

use clap::Subcommand;

use crate::{CogsError, Tag};

/// A specialized Result type for cogs operations.
pub type Result<T> = std::result::Result<T, CogsError>;

/// Available subcommands for the cogs application
#[derive(Subcommand)]
pub enum Commands {
    /// Register the local user account
    Register {
        /// Display name for the account
        #[clap(short, long)]
        name: String,

        /// Email address used to log in
        #[clap(short, long)]
        email: String,

        /// Password (at least 6 characters)
        #[clap(short, long)]
        password: String,

        /// Password confirmation, must match --password
        #[clap(short = 'C', long)]
        confirm: String,
    },

    /// Log in with the stored credentials
    Login {
        /// Email address
        #[clap(short, long)]
        email: String,

        /// Password
        #[clap(short, long)]
        password: String,
    },

    /// Clear the stored user account
    Logout,

    /// Show the currently stored account, if any
    Whoami {
        /// Format output as raw JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Show the post-it board, optionally filtered by tag
    Board {
        /// Filter post-its by tag
        #[clap(short, long, value_enum)]
        tag: Option<Tag>,

        /// Number of post-its per row
        #[clap(short = 'n', long)]
        columns: Option<usize>,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Add a post-it to the board
    Add {
        /// Text of the post-it (must be non-empty)
        text: String,

        /// Tag for the post-it
        #[clap(short, long, value_enum, default_value = "productivity")]
        tag: Tag,

        /// Display color for the post-it
        #[clap(short, long, default_value = "yellow")]
        color: String,
    },

    /// List the available tags
    Tags,

    /// Append a free-text annotation
    Note {
        /// Text of the annotation
        text: String,
    },

    /// List all annotations
    Notes {
        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Configuration management
    Config {
        /// Show current configuration
        #[clap(short = 'S', long)]
        show: bool,

        /// Reset configuration to defaults
        #[clap(short, long)]
        reset: bool,
    },
}
