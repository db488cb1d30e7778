//! Gardens and the in-memory journal that ties plants, gardens and feeding
//! schedules together.
//!
//! A journal is read from an export directory holding up to three JSON files:
//!
//! - `plants.json`: array of [`Plant`]
//! - `gardens.json`: array of [`Garden`]
//! - `schedules.json`: array of [`FeedingSchedule`]
//!
//! A missing file reads as an empty list.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::plant::Plant;
use crate::schedule::FeedingSchedule;
use crate::types::PlantId;

pub const PLANTS_FILE: &str = "plants.json";
pub const GARDENS_FILE: &str = "gardens.json";
pub const SCHEDULES_FILE: &str = "schedules.json";

/// Journal loading errors.
#[derive(Debug, Error)]
pub enum JournalError {
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid journal data in {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A named group of plants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Garden {
    pub name: String,
    #[serde(default)]
    pub plant_ids: Vec<PlantId>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Journal {
    pub plants: Vec<Plant>,
    pub gardens: Vec<Garden>,
    pub schedules: Vec<FeedingSchedule>,
}

impl Journal {
    /// Reads a journal from an export directory.
    pub fn from_json_dir(dir: &Path) -> Result<Self, JournalError> {
        let journal = Self {
            plants: read_list(&dir.join(PLANTS_FILE))?,
            gardens: read_list(&dir.join(GARDENS_FILE))?,
            schedules: read_list(&dir.join(SCHEDULES_FILE))?,
        };
        debug!(
            dir = %dir.display(),
            plants = journal.plants.len(),
            gardens = journal.gardens.len(),
            schedules = journal.schedules.len(),
            "loaded journal"
        );
        Ok(journal)
    }

    /// Finds a plant by exact ID, falling back to a case-insensitive name match.
    pub fn find_plant(&self, key: &str) -> Option<&Plant> {
        self.plants
            .iter()
            .find(|plant| plant.id.as_str() == key)
            .or_else(|| {
                self.plants
                    .iter()
                    .find(|plant| plant.name.eq_ignore_ascii_case(key))
            })
    }

    /// Replaces the garden with the same name, or appends it.
    pub fn upsert_garden(&mut self, garden: Garden) {
        match self.gardens.iter_mut().find(|g| g.name == garden.name) {
            Some(existing) => *existing = garden,
            None => self.gardens.push(garden),
        }
    }

    /// Resolves a garden's plant IDs, skipping any that name no plant.
    pub fn garden_plants<'a>(&'a self, garden: &'a Garden) -> impl Iterator<Item = &'a Plant> {
        garden.plant_ids.iter().filter_map(move |id| {
            let plant = self.plants.iter().find(|plant| plant.id == *id);
            if plant.is_none() {
                warn!(garden = %garden.name, plant_id = %id, "garden references unknown plant");
            }
            plant
        })
    }
}

fn read_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, JournalError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "journal file missing, treating as empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(JournalError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str(&content).map_err(|source| JournalError::Json {
        path: path.to_path_buf(),
        source,
    })
}
