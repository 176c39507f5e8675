//! CLI application for the mindgarden.
//!
//! Each subcommand is one discrete user action: the store mutates, the
//! mirror is rewritten, and the garden is re-rendered in the same
//! synchronous step.
use std::{fs, path::PathBuf};

use chrono::Utc;
use log::debug;

use crate::{
    garden_dimensions, garden_markup, plant_markup, render_detail, render_garden, render_stats,
    stage_of, Commands, Config, GardenError, GardenStore, Result,
};

/// CLI application handler - dispatches commands to the garden store and
/// keeps the rendered view in sync with it.
pub struct App {
    /// The garden storage backend
    store: GardenStore,

    /// Application configuration
    config: Config,

    /// Whether to display verbose output
    verbose: bool,
}

impl App {
    /// Create a new CLI application with the given store and config
    pub fn new(store: GardenStore, config: Config, verbose: bool) -> Self {
        Self {
            store,
            config,
            verbose,
        }
    }

    /// Run the CLI application with the given command
    pub fn run(&mut self, command: Commands) -> Result<()> {
        match command {
            Commands::Plant { text, mood } => self.handle_plant(&text, &mood),

            Commands::Uproot { id } => self.handle_uproot(&id),

            Commands::Garden => {
                self.render();
                Ok(())
            }

            Commands::View { id } => self.handle_view(&id),

            Commands::Stats => {
                print!("{}", render_stats(self.store.all()));
                Ok(())
            }

            Commands::Export { output } => self.handle_export(output),
        }
    }

    fn handle_plant(&mut self, text: &str, mood: &str) -> Result<()> {
        let planted = self
            .store
            .add(text, mood)
            .map(|plant| (plant.id.clone(), plant.mood.clone()));

        match planted {
            Some((id, mood)) => {
                println!("Planted {} ({})", id, mood);
                self.render();
            }
            None => {
                // Empty thoughts are dropped without complaint.
                debug!("Nothing planted");
            }
        }

        Ok(())
    }

    fn handle_uproot(&mut self, id: &str) -> Result<()> {
        if !self.store.remove(id) {
            return Err(GardenError::PlantNotFound { id: id.to_string() });
        }

        println!("Uprooted {}", id);
        self.render();
        Ok(())
    }

    /// Selects a plant, shows its detail view, then dismisses it.
    fn handle_view(&mut self, id: &str) -> Result<()> {
        let now = Utc::now().timestamp_millis();

        let detail = match self.store.select(id) {
            Some(plant) => render_detail(plant, now),
            None => {
                return Err(GardenError::PlantNotFound { id: id.to_string() });
            }
        };

        print!("{}", detail);
        if self.verbose {
            if let Some(plant) = self.store.selected() {
                println!("  at {:.1}%, {:.1}%", plant.x, plant.y);
            }
        }

        // Leaving the detail view drops the selection.
        self.store.clear_selection();
        Ok(())
    }

    /// Writes the garden scene plus one illustration per plant.
    fn handle_export(&self, output: Option<PathBuf>) -> Result<()> {
        let now = Utc::now().timestamp_millis();
        let dir = output.unwrap_or_else(|| self.config.export_dir.clone());

        fs::create_dir_all(&dir).map_err(|_| GardenError::DirectoryError { path: dir.clone() })?;

        let scene_path = dir.join("garden.svg");
        fs::write(&scene_path, garden_markup(self.store.all(), now))?;
        if self.verbose {
            println!("Wrote {}", scene_path.display());
        }

        for plant in self.store.all() {
            let stage = stage_of(plant.created_at, now);
            let path = dir.join(format!("plant-{}.svg", plant.id));
            fs::write(&path, plant_markup(stage, &plant.mood))?;
            if self.verbose {
                println!("Wrote {}", path.display());
            }
        }

        println!(
            "Exported garden.svg and {} plant illustration{} to {}",
            self.store.len(),
            if self.store.len() == 1 { "" } else { "s" },
            dir.display()
        );

        Ok(())
    }

    /// Re-renders the garden and its statistics from the current store
    /// state.
    fn render(&self) {
        let now = Utc::now().timestamp_millis();
        let (cols, rows) = garden_dimensions();

        print!("{}", render_garden(self.store.all(), now, cols, rows));
        print!("{}", render_stats(self.store.all()));
    }
}
