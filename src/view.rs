//! Terminal rendering for the garden.
//!
//! Pure formatting over a store snapshot: the CLI layer prints whatever
//! these functions return, once after every mutation, so the screen always
//! reflects the current collection.
use chrono::{Local, TimeZone};
use console::{style, Style};
use terminal_size::terminal_size;

use crate::{age_label, stage_of, PlantRecord, Stage};

/// Rows in the terminal garden plot.
const GARDEN_ROWS: usize = 16;

/// Widest the garden plot is allowed to grow.
const MAX_GARDEN_COLS: usize = 100;

/// Columns and rows for the garden plot, from the attached terminal with a
/// fallback for pipes.
pub fn garden_dimensions() -> (usize, usize) {
    let cols = terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(80)
        .min(MAX_GARDEN_COLS);
    (cols, GARDEN_ROWS)
}

/// Renders the garden plot plus an addressable listing of every plant.
///
/// Each plant's stored percentage coordinates map onto the character grid,
/// so the layout mirrors the positions a browser rendition would use.
pub fn render_garden(plants: &[PlantRecord], now: i64, cols: usize, rows: usize) -> String {
    if plants.is_empty() {
        return format!(
            "{}\n",
            style("Your garden is empty. Plant a thought to watch it grow.").dim()
        );
    }

    let cols = cols.max(20);
    let rows = rows.max(8);

    let mut grid: Vec<Vec<Option<usize>>> = vec![vec![None; cols]; rows];
    for (index, plant) in plants.iter().enumerate() {
        let col = ((plant.x / 100.0) * (cols - 1) as f64).round() as usize;
        let row = ((plant.y / 100.0) * (rows - 1) as f64).round() as usize;
        grid[row.min(rows - 1)][col.min(cols - 1)] = Some(index);
    }

    let mut out = String::new();
    for row in &grid {
        for cell in row {
            match cell {
                Some(index) => {
                    let plant = &plants[*index];
                    let glyph = stage_glyph(stage_of(plant.created_at, now));
                    out.push_str(&mood_style(&plant.mood).apply_to(glyph).to_string());
                }
                None => out.push(' '),
            }
        }
        out.push('\n');
    }
    out.push_str(&"▁".repeat(cols));
    out.push('\n');

    for (index, plant) in plants.iter().enumerate() {
        let stage = stage_of(plant.created_at, now);
        out.push_str(&format!(
            "{:>3}. {} {}  {}  ({})\n",
            index + 1,
            stage_glyph(stage),
            style(&plant.id).dim(),
            preview(&plant.text, 40),
            age_label(plant.created_at, now),
        ));
    }

    out
}

/// Renders the detail view for a selected plant.
pub fn render_detail(plant: &PlantRecord, now: i64) -> String {
    let stage = stage_of(plant.created_at, now);
    let divider = "─".repeat(44);

    format!(
        "{divider}\n{}\n\n  \"{}\"\n\n  Feeling: {}\n  {}\n  {}\n{divider}\n",
        stage.label(),
        plant.text,
        mood_style(&plant.mood).apply_to(&plant.mood),
        age_label(plant.created_at, now),
        planted_on(plant.created_at),
    )
}

/// Renders aggregate statistics: total count plus a per-mood breakdown in
/// first-seen order.
pub fn render_stats(plants: &[PlantRecord]) -> String {
    let mut out = format!(
        "{} thought{} growing\n",
        plants.len(),
        if plants.len() == 1 { "" } else { "s" }
    );

    for (mood, count) in mood_counts(plants) {
        out.push_str(&format!("  {} ({})\n", mood, count));
    }

    out
}

/// Counts plants per mood, keeping moods in the order they first appeared.
pub fn mood_counts(plants: &[PlantRecord]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for plant in plants {
        match counts.iter_mut().find(|(mood, _)| *mood == plant.mood) {
            Some((_, count)) => *count += 1,
            None => counts.push((plant.mood.clone(), 1)),
        }
    }
    counts
}

fn stage_glyph(stage: Stage) -> &'static str {
    match stage {
        Stage::Seed => "·",
        Stage::Sprout => "ψ",
        Stage::Flower => "✻",
    }
}

fn mood_style(mood: &str) -> Style {
    match mood {
        "calm" => Style::new().cyan(),
        "joyful" => Style::new().yellow(),
        "grateful" => Style::new().magenta(),
        "hopeful" => Style::new().blue(),
        _ => Style::new().cyan(),
    }
}

fn planted_on(created_at: i64) -> String {
    match Local.timestamp_millis_opt(created_at).single() {
        Some(when) => format!("Planted on {}", when.format("%A, %B %-d, %I:%M %p")),
        None => "Planted at an unknown time".to_string(),
    }
}

fn preview(text: &str, max_len: usize) -> String {
    let first_line = text.lines().next().unwrap_or("");
    if first_line.chars().count() <= max_len {
        first_line.to_string()
    } else {
        let cut: String = first_line.chars().take(max_len).collect();
        format!("{}...", cut)
    }
}
