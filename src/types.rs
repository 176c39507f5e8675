//! Core shared types for the mindgarden application.
//!
//! Holds the crate-wide Result alias and the CLI command surface.
use std::path::PathBuf;

use clap::Subcommand;

use crate::GardenError;

/// A specialized Result type for mindgarden operations.
pub type Result<T> = std::result::Result<T, GardenError>;

/// Available subcommands for the mindgarden application
#[derive(Subcommand)]
pub enum Commands {
    /// Plant a new thought in the garden
    Plant {
        /// The thought to record
        text: String,

        /// Mood tag for the thought (calm, joyful, grateful, hopeful)
        #[clap(short, long, default_value = "calm")]
        mood: String,
    },

    /// Remove a plant from the garden by id
    Uproot {
        /// Id of the plant to remove
        id: String,
    },

    /// Show the garden and its statistics
    Garden,

    /// View a single plant in detail
    View {
        /// Id of the plant to view
        id: String,
    },

    /// Show garden statistics
    Stats,

    /// Export the garden as SVG illustrations
    Export {
        /// Directory to write the SVG files into
        #[clap(short, long)]
        output: Option<PathBuf>,
    },
}
