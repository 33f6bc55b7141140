//! File-backed task store.
//!
//! `TaskStore` owns the in-memory task list and the JSON file it persists
//! to. Every mutating operation rewrites the whole file immediately; there
//! is no batching and no locking, a single process owns the store.

use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use thiserror::Error;

use crate::task::{Priority, Task};

/// Errors surfaced by store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("task {id} not found")]
    NotFound { id: u64 },
    #[error("failed to save store: {0}")]
    Io(#[from] io::Error),
}

/// Local wall-clock timestamp in the store's on-disk format.
fn now_stamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// In-memory task list bound to a JSON file.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    path: PathBuf,
}

impl TaskStore {
    /// Open the store at `path`, loading any persisted tasks. A missing or
    /// unparsable file yields an empty store; load never fails the caller.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let tasks = Self::load(&path);
        TaskStore { tasks, path }
    }

    fn load(path: &Path) -> Vec<Task> {
        if !path.exists() {
            return Vec::new();
        }
        let mut buf = String::new();
        match File::open(path).and_then(|mut f| f.read_to_string(&mut buf)) {
            Ok(_) => match serde_json::from_str(&buf) {
                Ok(tasks) => tasks,
                Err(e) => {
                    eprintln!("Error parsing store, starting fresh: {e}");
                    Vec::new()
                }
            },
            Err(e) => {
                eprintln!("Error reading store, starting fresh: {e}");
                Vec::new()
            }
        }
    }

    /// Save the full task list to the store file using atomic write
    /// (temp file + rename).
    fn save(&self) -> io::Result<()> {
        let tmp = self.path.with_extension("json.tmp");
        let mut f = File::create(&tmp)?;
        let data = serde_json::to_string_pretty(&self.tasks)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        f.write_all(data.as_bytes())?;
        f.flush()?;
        fs::rename(tmp, &self.path)?;
        Ok(())
    }

    /// The file this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a new task and persist. Ids stay dense, so the new id is
    /// always `len + 1`. Descriptions are not deduplicated.
    pub fn add(&mut self, description: String, priority: Priority) -> Result<u64, StoreError> {
        let id = self.tasks.len() as u64 + 1;
        self.tasks.push(Task {
            id,
            description,
            priority,
            completed: false,
            created_at: now_stamp(),
            completed_at: None,
        });
        self.save()?;
        Ok(id)
    }

    /// Iterate tasks in id order, skipping completed ones unless
    /// `include_completed` is set. Restartable, does not mutate.
    pub fn visible(&self, include_completed: bool) -> impl Iterator<Item = &Task> + '_ {
        self.tasks
            .iter()
            .filter(move |t| include_completed || !t.completed)
    }

    /// Mark the task with `id` completed and persist. Returns the task's
    /// description for reporting.
    pub fn complete(&mut self, id: u64) -> Result<String, StoreError> {
        let Some(t) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Err(StoreError::NotFound { id });
        };
        t.completed = true;
        t.completed_at = Some(now_stamp());
        let description = t.description.clone();
        self.save()?;
        Ok(description)
    }

    /// Remove the task with `id`, then renumber the remaining tasks so ids
    /// are the dense range 1..=N again. Returns the removed description.
    pub fn delete(&mut self, id: u64) -> Result<String, StoreError> {
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            return Err(StoreError::NotFound { id });
        };
        let removed = self.tasks.remove(pos);
        self.save()?;
        self.renumber();
        self.save()?;
        Ok(removed.description)
    }

    /// Drop all completed tasks, renumber, persist. Returns the count
    /// removed; calling again right away removes zero.
    pub fn clear_completed(&mut self) -> Result<usize, StoreError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        let removed = before - self.tasks.len();
        if removed > 0 {
            self.renumber();
            self.save()?;
        }
        Ok(removed)
    }

    fn renumber(&mut self) {
        for (i, t) in self.tasks.iter_mut().enumerate() {
            t.id = i as u64 + 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn store_in(dir: &tempfile::TempDir) -> TaskStore {
        TaskStore::open(dir.path().join("todos.json"))
    }

    #[test]
    fn test_add_assigns_dense_ids() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        for i in 0..5 {
            let id = store.add(format!("task {i}"), Priority::Medium).unwrap();
            assert_eq!(id, i + 1);
        }
        let ids: Vec<u64> = store.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_delete_renumbers_preserving_order() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        for name in ["a", "b", "c", "d"] {
            store.add(name.into(), Priority::Low).unwrap();
        }
        store.delete(2).unwrap();
        let remaining: Vec<(u64, &str)> = store
            .tasks()
            .iter()
            .map(|t| (t.id, t.description.as_str()))
            .collect();
        assert_eq!(remaining, vec![(1, "a"), (2, "c"), (3, "d")]);
    }

    #[test]
    fn test_complete_unknown_id_is_not_found_and_harmless() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        store.add("only".into(), Priority::High).unwrap();
        let snapshot = store.tasks().to_vec();
        let err = store.complete(42).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id: 42 }));
        assert_eq!(store.tasks(), snapshot.as_slice());
    }

    #[test]
    fn test_delete_unknown_id_is_not_found() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        let err = store.delete(7).unwrap_err();
        assert!(matches!(err, StoreError::NotFound { id: 7 }));
    }

    #[test]
    fn test_clear_completed_is_idempotent() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        store.add("a".into(), Priority::Medium).unwrap();
        store.add("b".into(), Priority::Medium).unwrap();
        store.add("c".into(), Priority::Medium).unwrap();
        store.complete(1).unwrap();
        store.complete(3).unwrap();
        assert_eq!(store.clear_completed().unwrap(), 2);
        assert_eq!(store.clear_completed().unwrap(), 0);
        assert_eq!(store.tasks().len(), 1);
        assert_eq!(store.tasks()[0].id, 1);
        assert_eq!(store.tasks()[0].description, "b");
    }

    #[test]
    fn test_visible_filters_completed() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        store.add("open".into(), Priority::Medium).unwrap();
        store.add("done".into(), Priority::Medium).unwrap();
        store.complete(2).unwrap();
        let open: Vec<&str> = store
            .visible(false)
            .map(|t| t.description.as_str())
            .collect();
        assert_eq!(open, vec!["open"]);
        assert_eq!(store.visible(true).count(), 2);
        // Restartable: a second pass sees the same view.
        assert_eq!(store.visible(false).count(), 1);
    }

    #[test]
    fn test_round_trip_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("todos.json");
        let mut store = TaskStore::open(&path);
        store.add("buy milk".into(), Priority::Medium).unwrap();
        store.add("call bob".into(), Priority::High).unwrap();
        store.complete(2).unwrap();
        let saved = store.tasks().to_vec();

        let reloaded = TaskStore::open(&path);
        assert_eq!(reloaded.tasks(), saved.as_slice());
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempdir().unwrap();
        let store = TaskStore::open(dir.path().join("nope.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("todos.json");
        fs::write(&path, "{ not json").unwrap();
        let store = TaskStore::open(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn test_spec_scenario() {
        let dir = tempdir().unwrap();
        let mut store = store_in(&dir);
        store.add("buy milk".into(), Priority::Medium).unwrap();
        store.add("call bob".into(), Priority::High).unwrap();

        let pending: Vec<u64> = store.visible(false).map(|t| t.id).collect();
        assert_eq!(pending, vec![1, 2]);

        store.complete(1).unwrap();
        store.delete(1).unwrap();

        assert_eq!(store.len(), 1);
        let t = &store.tasks()[0];
        assert_eq!(t.id, 1);
        assert_eq!(t.description, "call bob");
        assert!(!t.completed);
    }
}
