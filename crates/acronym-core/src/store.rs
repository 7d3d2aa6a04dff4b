//! File-backed acronym store
//!
//! Every operation reads the backing file afresh; nothing is kept in memory
//! between calls. Writes go through [`AcronymStore::transact`], which holds a
//! single writer lock across load, mutation and save so that concurrent
//! writers sharing a handle cannot lose each other's updates.

use crate::error::{AcronymError, Result};
use crate::types::AcronymTable;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::debug;

/// Handle on a YAML acronym file
#[derive(Debug)]
pub struct AcronymStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl AcronymStore {
    /// Name of the backing file, resolved against the working directory
    pub const DEFAULT_FILE_NAME: &'static str = "acronyms.yaml";

    /// Create a store backed by the given file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Store backed by `acronyms.yaml` in the current working directory
    pub fn in_working_dir() -> Self {
        Self::new(Self::DEFAULT_FILE_NAME)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the whole file
    pub fn load(&self) -> Result<AcronymTable> {
        let content = std::fs::read_to_string(&self.path).map_err(|source| AcronymError::Read {
            path: self.path.clone(),
            source,
        })?;

        let table: AcronymTable =
            serde_yaml::from_str(&content).map_err(|source| AcronymError::Parse {
                path: self.path.clone(),
                source,
            })?;

        debug!("Loaded {} acronyms from {}", table.len(), self.path.display());
        Ok(table)
    }

    /// Serialize the table and replace the file's previous content
    pub fn save(&self, table: &AcronymTable) -> Result<()> {
        let content = serde_yaml::to_string(table)?;

        std::fs::write(&self.path, content).map_err(|source| AcronymError::Write {
            path: self.path.clone(),
            source,
        })?;

        debug!("Saved {} acronyms to {}", table.len(), self.path.display());
        Ok(())
    }

    /// Load the store and look up a single acronym.
    ///
    /// An absent acronym is `Ok(None)`.
    pub fn lookup(&self, acronym: &str) -> Result<Option<String>> {
        let table = self.load()?;
        Ok(table.lookup(acronym).map(str::to_string))
    }

    /// Insert or overwrite one acronym and persist the result.
    ///
    /// Returns the replaced definition, if there was one.
    pub fn upsert(&self, acronym: &str, definition: &str) -> Result<Option<String>> {
        self.transact(|table| table.upsert(acronym, definition))
    }

    /// Run a load-mutate-save cycle under the writer lock.
    ///
    /// Nothing is written if the load fails.
    pub fn transact<T, F>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&mut AcronymTable) -> T,
    {
        // The guarded value is `()`, so a poisoned lock carries no broken state.
        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let mut table = self.load()?;
        let output = f(&mut table);
        self.save(&table)?;
        Ok(output)
    }
}
