//! Whole-file JSON snapshot store.

use super::models::SnapshotDocument;
use crate::task::{
    domain::TaskSnapshot,
    ports::{SnapshotError, SnapshotResult, TaskSnapshotStore},
};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use mockable::{Clock, DefaultClock};
use std::io;
use tracing::debug;

/// Default snapshot file name, relative to the working directory.
pub const DEFAULT_DATA_FILE: &str = "todo_data.json";

/// Snapshot store backed by a single JSON file.
///
/// Every save rewrites the file in place. There is no write-ahead log and no
/// atomic rename, so a crash during a save can leave a truncated file, which
/// the next load reports as [`SnapshotError::Corrupt`].
#[derive(Debug, Clone)]
pub struct JsonFileSnapshotStore<C = DefaultClock>
where
    C: Clock,
{
    path: Utf8PathBuf,
    clock: C,
}

impl JsonFileSnapshotStore<DefaultClock> {
    /// Creates a store for the file at `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>) -> Self {
        Self::with_clock(path, DefaultClock)
    }
}

impl<C> JsonFileSnapshotStore<C>
where
    C: Clock,
{
    /// Creates a store for the file at `path` using `clock` to stamp records
    /// that were saved without a creation time.
    #[must_use]
    pub fn with_clock(path: impl Into<Utf8PathBuf>, clock: C) -> Self {
        Self {
            path: path.into(),
            clock,
        }
    }

    /// Returns the snapshot file path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    fn parent_dir(&self) -> &Utf8Path {
        match self.path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        }
    }

    fn file_name(&self) -> io::Result<&str> {
        self.path.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("snapshot path '{}' has no file name", self.path),
            )
        })
    }

    fn read_contents(&self) -> io::Result<Option<String>> {
        let file_name = self.file_name()?;
        let dir = match Dir::open_ambient_dir(self.parent_dir(), ambient_authority()) {
            Ok(dir) => dir,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err),
        };
        match dir.read_to_string(file_name) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err),
        }
    }

    fn write_contents(&self, contents: &[u8]) -> io::Result<()> {
        let file_name = self.file_name()?;
        let parent = self.parent_dir();
        Dir::create_ambient_dir_all(parent, ambient_authority())?;
        let dir = Dir::open_ambient_dir(parent, ambient_authority())?;
        dir.write(file_name, contents)
    }
}

impl<C> TaskSnapshotStore for JsonFileSnapshotStore<C>
where
    C: Clock,
{
    fn load(&self) -> SnapshotResult<Option<TaskSnapshot>> {
        let contents = match self.read_contents() {
            Ok(Some(contents)) => contents,
            Ok(None) => {
                debug!(path = %self.path, "no task state file");
                return Ok(None);
            }
            Err(err) if err.kind() == io::ErrorKind::InvalidData => {
                return Err(SnapshotError::corrupt(err));
            }
            Err(err) => return Err(SnapshotError::io(err)),
        };

        let document: SnapshotDocument =
            serde_json::from_str(&contents).map_err(SnapshotError::corrupt)?;
        let snapshot = document.into_snapshot(self.clock.utc())?;
        debug!(path = %self.path, tasks = snapshot.tasks.len(), "task state loaded");
        Ok(Some(snapshot))
    }

    fn save(&self, snapshot: &TaskSnapshot) -> SnapshotResult<()> {
        let document = SnapshotDocument::from_snapshot(snapshot);
        let encoded = serde_json::to_vec_pretty(&document)
            .map_err(|err| SnapshotError::io(io::Error::other(err)))?;
        self.write_contents(&encoded).map_err(SnapshotError::io)?;
        debug!(path = %self.path, tasks = snapshot.tasks.len(), "task state saved");
        Ok(())
    }
}
