//! Core data structure for the mindgarden application.
//!
//! A `PlantRecord` is one journaled thought together with its mood tag,
//! creation timestamp, and layout coordinates.
use chrono::Utc;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// The known mood vocabulary. Anything else is stored verbatim and falls
/// back to the default presentation.
pub const MOODS: [&str; 4] = ["calm", "joyful", "grateful", "hopeful"];

/// Represents a single planted thought in the garden
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlantRecord {
    /// Unique identifier for the plant
    pub id: String,
    /// The journaled thought, trimmed of surrounding whitespace
    pub text: String,
    /// Mood tag, stored verbatim even when outside the known vocabulary
    pub mood: String,
    /// When the thought was planted, in milliseconds since the epoch
    pub created_at: i64,
    /// Horizontal layout position as a percentage
    pub x: f64,
    /// Vertical layout position as a percentage
    pub y: f64,
}

impl PlantRecord {
    /// Creates a new plant with the given text and mood.
    ///
    /// The id is derived from the creation timestamp with a random suffix,
    /// and the layout coordinates are rolled once here and never recomputed.
    pub fn new(text: String, mood: String) -> Self {
        let now = Utc::now().timestamp_millis();
        let mut rng = rand::thread_rng();
        let id = format!("{}-{:08x}", now, rng.gen::<u32>());

        PlantRecord {
            id,
            text,
            mood,
            created_at: now,
            x: rng.gen_range(10.0..90.0),
            y: rng.gen_range(20.0..80.0),
        }
    }
}
