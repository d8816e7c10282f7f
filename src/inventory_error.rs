use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Cannot access inventory file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Inventory file {path} is not valid: {source}")]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("There is no plate set number {}.", .0 + 1)]
    NoSuchRow(usize),
}
