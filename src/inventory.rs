use std::{fs, io::ErrorKind, path::Path};

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::{inventory_error::InventoryError, plate_type::PlateType};

/// The plates a lifter owns, as kept between searches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    plate_sets: Vec<PlateType>,
}

impl Default for Inventory {
    fn default() -> Self {
        Inventory::new(vec![PlateType::new(5.0, 5), PlateType::new(1.25, 3)])
    }
}

impl Inventory {
    #[must_use]
    pub fn new(plate_sets: Vec<PlateType>) -> Self {
        Inventory { plate_sets }
    }

    #[must_use]
    pub fn plates(&self) -> &[PlateType] {
        &self.plate_sets
    }

    ///
    /// # Errors
    /// If the file exists but cannot be read or does not hold an inventory.
    ///
    pub fn load(path: &Path) -> Result<Self, InventoryError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!("No inventory at {}, starting from the default plates", path.display());
                return Ok(Inventory::default());
            }
            Err(source) => {
                return Err(InventoryError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let inventory: Inventory =
            serde_json::from_str(&contents).map_err(|source| InventoryError::Format {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("Loaded {} plate sets from {}", inventory.plate_sets.len(), path.display());

        Ok(inventory)
    }

    ///
    /// # Errors
    /// If the file cannot be written.
    ///
    pub fn save(&self, path: &Path) -> Result<(), InventoryError> {
        let contents = serde_json::to_string_pretty(self).map_err(|source| InventoryError::Format {
            path: path.to_path_buf(),
            source,
        })?;

        fs::write(path, contents).map_err(|source| InventoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        debug!("Saved {} plate sets to {}", self.plate_sets.len(), path.display());

        Ok(())
    }

    pub fn add(&mut self, plate: PlateType) {
        self.plate_sets.push(plate);
    }

    /// Adds a placeholder row of one 1kg plate, to be edited afterwards.
    pub fn add_default(&mut self) {
        self.add(PlateType::new(1.0, 1));
    }

    ///
    /// # Errors
    /// If there is no row at `index`.
    ///
    pub fn remove(&mut self, index: usize) -> Result<PlateType, InventoryError> {
        if index < self.plate_sets.len() {
            Ok(self.plate_sets.remove(index))
        } else {
            Err(InventoryError::NoSuchRow(index))
        }
    }

    ///
    /// # Errors
    /// If there is no row at `index`.
    ///
    pub fn set_count(&mut self, index: usize, count: u32) -> Result<(), InventoryError> {
        self.row_mut(index)?.count = count;
        Ok(())
    }

    ///
    /// # Errors
    /// If there is no row at `index`.
    ///
    pub fn set_weight(&mut self, index: usize, weight: f64) -> Result<(), InventoryError> {
        self.row_mut(index)?.weight = weight;
        Ok(())
    }

    fn row_mut(&mut self, index: usize) -> Result<&mut PlateType, InventoryError> {
        self.plate_sets
            .get_mut(index)
            .ok_or(InventoryError::NoSuchRow(index))
    }
}
