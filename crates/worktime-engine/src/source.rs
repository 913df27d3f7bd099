//! Where schedule records come from.
//!
//! A [`ScheduleSource`] supplies the raw day and interval lists that a
//! [`ScheduleIndex`](crate::ScheduleIndex) is built from. The wire format is
//! JSON with a required `days` array and an optional `intervals` array.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::model::{BusyInterval, WorkDay};

/// Raw schedule records as supplied by a source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    pub days: Vec<WorkDay>,
    #[serde(default)]
    pub intervals: Vec<BusyInterval>,
}

impl Schedule {
    /// Parse schedule records from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Supplies schedule records.
pub trait ScheduleSource {
    fn load(&self) -> Result<Schedule>;
}

/// An in-memory schedule is its own source.
impl ScheduleSource for Schedule {
    fn load(&self) -> Result<Schedule> {
        Ok(self.clone())
    }
}

/// Reads schedule JSON from a file on each [`load`](ScheduleSource::load).
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScheduleSource for FileSource {
    fn load(&self) -> Result<Schedule> {
        let json = std::fs::read_to_string(&self.path).map_err(|source| ScheduleError::Io {
            path: self.path.display().to_string(),
            source,
        })?;
        tracing::debug!(path = %self.path.display(), bytes = json.len(), "read schedule file");
        Schedule::from_json(&json)
    }
}
