//! Growth stage classification.
//!
//! A plant's stage is derived purely from its age. Nothing about growth is
//! ever stored; the same record renders as a seed today and a flower next
//! week.
use std::fmt;

/// Milliseconds in one day.
pub const MS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

const MS_PER_HOUR: i64 = 60 * 60 * 1000;

/// Growth stage of a plant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    Seed,
    Sprout,
    Flower,
}

impl Stage {
    /// Label shown in the detail view.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Seed => "🌱 Seedling",
            Stage::Sprout => "🌿 Growing",
            Stage::Flower => "🌸 Flower",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Classifies a plant by age: under a day is a seed, under three days a
/// sprout, anything older a flower.
///
/// Age is plain subtraction of epoch milliseconds with no calendar or
/// timezone normalization. A future timestamp lands in the `< 1` branch and
/// counts as freshly planted.
pub fn stage_of(created_at: i64, now: i64) -> Stage {
    let age_days = (now - created_at) as f64 / MS_PER_DAY as f64;

    if age_days < 1.0 {
        Stage::Seed
    } else if age_days < 3.0 {
        Stage::Sprout
    } else {
        Stage::Flower
    }
}

/// Humanizes a plant's age for the detail view.
///
/// Under an hour reads "Just planted"; after that the most significant of
/// days and hours wins, pluralized.
pub fn age_label(created_at: i64, now: i64) -> String {
    let age_ms = now - created_at;
    let days = age_ms / MS_PER_DAY;
    let hours = (age_ms % MS_PER_DAY) / MS_PER_HOUR;

    if days > 0 {
        format!("{} day{} old", days, if days > 1 { "s" } else { "" })
    } else if hours > 0 {
        format!("{} hour{} old", hours, if hours > 1 { "s" } else { "" })
    } else {
        "Just planted".to_string()
    }
}
