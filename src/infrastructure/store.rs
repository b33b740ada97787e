//! File-backed record store
//!
//! One store per entity type. The durable representation is the full
//! collection serialized as a JSON array and rewritten wholesale on
//! every mutation; there is no append log and no partial update. The
//! in-memory collection and the id counter share one mutex, so id
//! assignment and the file rewrite are atomic relative to other
//! writers of the same store. The Author and News stores are
//! independent lock domains.

use crate::domain::{Entity, EntityId};
use crate::error::{NewsdeskError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

#[derive(Debug)]
struct StoreState<T> {
    records: Vec<T>,
    next_id: EntityId,
}

/// Durable CRUD for one entity type, backed by a single JSON file.
#[derive(Debug)]
pub struct DataStore<T: Entity> {
    path: PathBuf,
    state: Mutex<StoreState<T>>,
}

impl<T: Entity> DataStore<T> {
    /// Open a store backed by the given file, loading the existing
    /// collection if the file is present. Id assignment resumes past
    /// the highest persisted id.
    pub fn open(path: PathBuf) -> Result<Self> {
        let records = Self::load(&path)?;
        let next_id = records.iter().filter_map(Entity::id).max().unwrap_or(0) + 1;

        Ok(DataStore {
            path,
            state: Mutex::new(StoreState { records, next_id }),
        })
    }

    fn load(path: &Path) -> Result<Vec<T>> {
        if !path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(path)?;
        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        Ok(serde_json::from_str(&contents)?)
    }

    fn lock(&self) -> MutexGuard<'_, StoreState<T>> {
        // A panicked writer never commits a half-applied mutation
        // (persistence precedes the in-memory commit), so the data
        // behind a poisoned lock is still consistent.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Rewrite the whole collection via write-temp-then-rename.
    ///
    /// On Windows, `rename` does not overwrite existing files, so we
    /// remove the destination first.
    fn persist(path: &Path, records: &[T]) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.newsdesk-tmp-{}",
            path.file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("store.json"),
            std::process::id()
        );
        let tmp_path = path.with_file_name(tmp_name);

        let contents = serde_json::to_string_pretty(records)?;
        fs::write(&tmp_path, contents)?;

        if path.exists() {
            fs::remove_file(path)?;
        }

        fs::rename(&tmp_path, path)?;
        Ok(())
    }

    /// Find one record by id.
    pub fn find_by_id(&self, id: Option<EntityId>) -> Result<T> {
        let id = id.ok_or(NewsdeskError::NullKey)?;
        let state = self.lock();

        state
            .records
            .iter()
            .find(|record| record.id() == Some(id))
            .cloned()
            .ok_or(NewsdeskError::NotFound(id))
    }

    /// All records, insertion order preserved.
    pub fn find_all(&self) -> Vec<T> {
        self.lock().records.clone()
    }

    /// Records after skipping `offset` from the front, at most `limit`
    /// of them. A negative `limit` means "all remaining"; an `offset`
    /// beyond the collection size yields an empty result, never an
    /// error.
    pub fn find_page(&self, offset: i64, limit: i64) -> Vec<T> {
        let state = self.lock();
        let skipped = state.records.iter().skip(offset.max(0) as usize);

        if limit < 0 {
            skipped.cloned().collect()
        } else {
            skipped.take(limit as usize).cloned().collect()
        }
    }

    /// Insert or upsert-by-id.
    ///
    /// An unset id means insert: the next monotonic id is assigned and
    /// the record appended. A set id means upsert: the record sharing
    /// that id is replaced, or the entity is appended if no match
    /// exists. Returns the persisted copy carrying its assigned id.
    pub fn save(&self, entity: Option<T>) -> Result<T> {
        let mut entity = entity.ok_or(NewsdeskError::NullEntity)?;
        let mut state = self.lock();

        let mut records = state.records.clone();
        let mut next_id = state.next_id;

        match entity.id() {
            None => {
                entity.set_id(next_id);
                next_id += 1;
                records.push(entity.clone());
            }
            Some(id) => {
                match records.iter_mut().find(|record| record.id() == Some(id)) {
                    Some(slot) => *slot = entity.clone(),
                    None => {
                        records.push(entity.clone());
                        if id >= next_id {
                            next_id = id + 1;
                        }
                    }
                }
            }
        }

        // Persist first; a failed write must not leave the in-memory
        // collection ahead of the file.
        Self::persist(&self.path, &records)?;
        state.records = records;
        state.next_id = next_id;

        Ok(entity)
    }

    /// Remove the record with the given id. Ids are never reassigned
    /// after a delete.
    pub fn delete(&self, id: Option<EntityId>) -> Result<bool> {
        let id = id.ok_or(NewsdeskError::NullKey)?;
        let mut state = self.lock();

        let position = state
            .records
            .iter()
            .position(|record| record.id() == Some(id))
            .ok_or(NewsdeskError::NotFound(id))?;

        let mut records = state.records.clone();
        records.remove(position);

        Self::persist(&self.path, &records)?;
        state.records = records;

        Ok(true)
    }

    pub fn exists_by_id(&self, id: Option<EntityId>) -> Result<bool> {
        let id = id.ok_or(NewsdeskError::NullKey)?;
        let state = self.lock();

        Ok(state.records.iter().any(|record| record.id() == Some(id)))
    }

    pub fn count(&self) -> u64 {
        self.lock().records.len() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Author;
    use tempfile::TempDir;

    fn store_in(temp: &TempDir) -> DataStore<Author> {
        DataStore::open(temp.path().join("author.json")).unwrap()
    }

    #[test]
    fn test_open_missing_file_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        assert_eq!(store.count(), 0);
        assert!(store.find_all().is_empty());
    }

    #[test]
    fn test_save_assigns_increasing_ids_from_one() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let first = store.save(Some(Author::new("Jane Doe"))).unwrap();
        let second = store.save(Some(Author::new("John Roe"))).unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
    }

    #[test]
    fn test_save_null_entity_fails() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let result = store.save(None);
        assert!(matches!(result, Err(NewsdeskError::NullEntity)));
    }

    #[test]
    fn test_save_writes_parseable_json_array() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.save(Some(Author::new("Jane Doe"))).unwrap();

        let contents = fs::read_to_string(temp.path().join("author.json")).unwrap();
        let parsed: Vec<Author> = serde_json::from_str(&contents).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Jane Doe");
    }

    #[test]
    fn test_save_with_existing_id_replaces_in_place() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.save(Some(Author::new("Jane Doe"))).unwrap();
        store.save(Some(Author::new("John Roe"))).unwrap();

        let mut renamed = Author::new("Janet Doe");
        renamed.set_id(1);
        store.save(Some(renamed)).unwrap();

        let all = store.find_all();
        assert_eq!(all.len(), 2);
        // Store order preserved, first slot replaced
        assert_eq!(all[0].name, "Janet Doe");
        assert_eq!(all[0].id, Some(1));
        assert_eq!(all[1].name, "John Roe");
    }

    #[test]
    fn test_save_with_unknown_id_appends_and_bumps_counter() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let mut imported = Author::new("Jane Doe");
        imported.set_id(10);
        store.save(Some(imported)).unwrap();

        let next = store.save(Some(Author::new("John Roe"))).unwrap();
        assert_eq!(next.id, Some(11));
    }

    #[test]
    fn test_find_by_id() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let saved = store.save(Some(Author::new("Jane Doe"))).unwrap();

        let found = store.find_by_id(saved.id).unwrap();
        assert_eq!(found, saved);
    }

    #[test]
    fn test_find_by_id_null_key() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let result = store.find_by_id(None);
        assert!(matches!(result, Err(NewsdeskError::NullKey)));
    }

    #[test]
    fn test_find_by_id_not_found() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let result = store.find_by_id(Some(99));
        assert!(matches!(result, Err(NewsdeskError::NotFound(99))));
    }

    #[test]
    fn test_find_page_skips_and_limits() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        for name in ["Author One", "Author Two", "Author Three", "Author Four"] {
            store.save(Some(Author::new(name))).unwrap();
        }

        let page = store.find_page(1, 2);
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].name, "Author Two");
        assert_eq!(page[1].name, "Author Three");
    }

    #[test]
    fn test_find_page_negative_limit_means_all_remaining() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        for name in ["Author One", "Author Two", "Author Three"] {
            store.save(Some(Author::new(name))).unwrap();
        }

        let page = store.find_page(1, -1);
        assert_eq!(page.len(), 2);
        assert_eq!(page[0].name, "Author Two");
    }

    #[test]
    fn test_find_page_offset_beyond_size_is_empty() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        store.save(Some(Author::new("Jane Doe"))).unwrap();

        assert!(store.find_page(5, -1).is_empty());
    }

    #[test]
    fn test_find_page_zero_minus_one_equals_find_all() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        for name in ["Author One", "Author Two", "Author Three"] {
            store.save(Some(Author::new(name))).unwrap();
        }

        assert_eq!(store.find_page(0, -1), store.find_all());
    }

    #[test]
    fn test_delete_removes_and_reports() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);
        let saved = store.save(Some(Author::new("Jane Doe"))).unwrap();

        assert!(store.delete(saved.id).unwrap());
        assert_eq!(store.count(), 0);
        assert!(!store.exists_by_id(saved.id).unwrap());
    }

    #[test]
    fn test_delete_absent_id_not_found() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let result = store.delete(Some(7));
        assert!(matches!(result, Err(NewsdeskError::NotFound(7))));
    }

    #[test]
    fn test_delete_null_key() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let result = store.delete(None);
        assert!(matches!(result, Err(NewsdeskError::NullKey)));
    }

    #[test]
    fn test_id_not_reused_after_deleting_max() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        store.save(Some(Author::new("Jane Doe"))).unwrap();
        let second = store.save(Some(Author::new("John Roe"))).unwrap();

        store.delete(second.id).unwrap();
        let third = store.save(Some(Author::new("Mary Sue"))).unwrap();

        assert_eq!(third.id, Some(3));
    }

    #[test]
    fn test_reopen_resumes_id_assignment() {
        let temp = TempDir::new().unwrap();
        {
            let store = store_in(&temp);
            store.save(Some(Author::new("Jane Doe"))).unwrap();
            store.save(Some(Author::new("John Roe"))).unwrap();
        }

        let reopened = store_in(&temp);
        assert_eq!(reopened.count(), 2);

        let next = reopened.save(Some(Author::new("Mary Sue"))).unwrap();
        assert_eq!(next.id, Some(3));
    }

    #[test]
    fn test_exists_by_id_null_key() {
        let temp = TempDir::new().unwrap();
        let store = store_in(&temp);

        let result = store.exists_by_id(None);
        assert!(matches!(result, Err(NewsdeskError::NullKey)));
    }

    #[test]
    fn test_open_empty_file_is_empty_store() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("author.json"), "").unwrap();

        let store = store_in(&temp);
        assert_eq!(store.count(), 0);
    }
}
