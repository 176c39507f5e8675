//! Storage and session state for the mind garden.
//!
//! The in-memory collection is the authority for the session. The JSON
//! mirror on disk is a derived snapshot, rewritten in full after every
//! mutation; a failed write is logged and the session carries on from
//! memory.
use std::{fs, io::Write, path::Path};

use log::{debug, error, info};
use tempfile::NamedTempFile;

use crate::{Config, GardenError, PlantRecord, Result};

/// Holds the ordered plant collection, the transient selection, and the
/// location of the persistence mirror.
pub struct GardenStore {
    /// Application configuration
    config: Config,

    /// All plants, in insertion order
    plants: Vec<PlantRecord>,

    /// Id of the plant currently shown in the detail view, never persisted
    selected: Option<String>,
}

impl GardenStore {
    /// Creates a store by reading the mirror file.
    ///
    /// A missing file starts an empty garden. A file that cannot be read or
    /// parsed is logged and discarded; the failure never propagates.
    pub fn load(config: Config) -> Self {
        let plants = match fs::read_to_string(&config.garden_file) {
            Ok(raw) => match serde_json::from_str::<Vec<PlantRecord>>(&raw) {
                Ok(plants) => {
                    info!(
                        "Loaded {} plants from {}",
                        plants.len(),
                        config.garden_file.display()
                    );
                    plants
                }
                Err(e) => {
                    error!(
                        "Discarding malformed garden file {}: {}",
                        config.garden_file.display(),
                        e
                    );
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(
                    "No garden file at {}, starting empty",
                    config.garden_file.display()
                );
                Vec::new()
            }
            Err(e) => {
                error!(
                    "Failed to read garden file {}: {}",
                    config.garden_file.display(),
                    e
                );
                Vec::new()
            }
        };

        GardenStore {
            config,
            plants,
            selected: None,
        }
    }

    /// Plants a new thought and mirrors the collection.
    ///
    /// Whitespace-only text is ignored entirely: no record is created and
    /// the mirror is not touched. Returns the new plant so the caller can
    /// report and re-render.
    pub fn add(&mut self, text: &str, mood: &str) -> Option<&PlantRecord> {
        let text = text.trim();
        if text.is_empty() {
            debug!("Ignoring empty thought");
            return None;
        }

        let plant = PlantRecord::new(text.to_string(), mood.to_string());
        info!("Planting {} ({})", plant.id, plant.mood);
        self.plants.push(plant);
        self.persist();

        self.plants.last()
    }

    /// Removes the plant with the given id, if present.
    ///
    /// The mirror is rewritten either way, so removing a missing id is a
    /// harmless no-op. Clears the selection when it pointed at the removed
    /// plant.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.plants.len();
        self.plants.retain(|plant| plant.id != id);
        let removed = self.plants.len() < before;

        if removed {
            info!("Uprooted plant {}", id);
            if self.selected.as_deref() == Some(id) {
                self.selected = None;
            }
        } else {
            debug!("No plant with id {} to remove", id);
        }

        self.persist();
        removed
    }

    /// All plants in insertion order.
    pub fn all(&self) -> &[PlantRecord] {
        &self.plants
    }

    pub fn len(&self) -> usize {
        self.plants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plants.is_empty()
    }

    /// Marks the plant with the given id as selected and returns it.
    pub fn select(&mut self, id: &str) -> Option<&PlantRecord> {
        if !self.plants.iter().any(|plant| plant.id == id) {
            return None;
        }

        self.selected = Some(id.to_string());
        self.plants.iter().find(|plant| plant.id == id)
    }

    /// The currently selected plant, if any.
    pub fn selected(&self) -> Option<&PlantRecord> {
        let id = self.selected.as_deref()?;
        self.plants.iter().find(|plant| plant.id == id)
    }

    /// Clears the selection, as when the detail view is dismissed.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Rewrites the mirror with the full collection.
    ///
    /// Failures are logged and swallowed; the in-memory collection stays
    /// authoritative for the rest of the session.
    fn persist(&self) {
        if let Err(e) = self.write_mirror() {
            error!(
                "Failed to persist garden to {}: {}",
                self.config.garden_file.display(),
                e
            );
        }
    }

    /// Serializes the collection into a temporary file and atomically moves
    /// it over the mirror path.
    fn write_mirror(&self) -> Result<()> {
        if let Some(parent) = self.config.garden_file.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent).map_err(|_| GardenError::DirectoryError {
                    path: parent.to_path_buf(),
                })?;
            }
        }

        let dir = self
            .config
            .garden_file
            .parent()
            .unwrap_or_else(|| Path::new("."));
        let mut temp_file = NamedTempFile::new_in(dir)?;

        let json = serde_json::to_string_pretty(&self.plants)?;
        temp_file.write_all(json.as_bytes())?;
        temp_file.flush()?;

        temp_file
            .persist(&self.config.garden_file)
            .map_err(|e| GardenError::Io(e.error))?;

        debug!("Persisted {} plants", self.plants.len());
        Ok(())
    }
}
