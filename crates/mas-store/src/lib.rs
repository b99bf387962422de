//! Storage layer for imaging activities.
//!
//! Activities live in a single JSON file holding an array of activity
//! objects:
//!
//! ```json
//! [
//!   {
//!     "satellite_hw_id": "SAT-1",
//!     "activity_state": "scheduled",
//!     "start_time": "2024-01-01T00:00:00Z",
//!     "end_time": "2024-01-01T01:00:00Z"
//!   },
//!   null
//! ]
//! ```
//!
//! Array elements may be `null` and object fields may be missing; those
//! records are handed to the core unchanged and dropped there. A missing file
//! or a top-level `null` is an empty data set. Only an unreadable or
//! undecodable file is an error.
//!
//! The file is re-read on every load, so each query sees its own snapshot.

use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

use mas_core::{ActivitySource, ImagingActivity};
use thiserror::Error;

/// Store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The data file exists but could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The data file is not a JSON array of activities.
    #[error("failed to decode {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// A JSON file of imaging activities.
#[derive(Debug, Clone)]
pub struct ActivityStore {
    path: PathBuf,
}

impl ActivityStore {
    /// Creates a store backed by the file at `path`. The file is not touched
    /// until the first load.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every record from the file.
    pub fn load(&self) -> Result<Vec<Option<ImagingActivity>>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                tracing::warn!(
                    path = %self.path.display(),
                    "imaging activities file not found, returning empty list"
                );
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(self.read_error(source));
            }
        };

        decode(BufReader::new(file)).map_err(|source| {
            if source.is_io() {
                self.read_error(source.into())
            } else {
                StoreError::Decode {
                    path: self.path.clone(),
                    source,
                }
            }
        })
    }

    fn read_error(&self, source: io::Error) -> StoreError {
        tracing::error!(path = %self.path.display(), error = %source, "error loading imaging activities");
        StoreError::Read {
            path: self.path.clone(),
            source,
        }
    }
}

impl ActivitySource for ActivityStore {
    type Error = StoreError;

    fn load_activities(&self) -> Result<Vec<Option<ImagingActivity>>, Self::Error> {
        self.load()
    }
}

/// Decodes a JSON array of activities; a top-level `null` decodes as empty.
pub fn decode<R: Read>(reader: R) -> Result<Vec<Option<ImagingActivity>>, serde_json::Error> {
    let records: Option<Vec<Option<ImagingActivity>>> = serde_json::from_reader(reader)?;
    Ok(records.unwrap_or_default())
}
