//! Repository - validation gate plus record store façade
//!
//! Wraps one [`DataStore`] with the field-constraint gate and the
//! uniform null-argument and not-found semantics the service layer
//! relies on. `NullKey` and `NotFound` from the store pass through
//! unchanged; validation adds `ValidationFailed`.

use crate::domain::{Entity, EntityId, Validate};
use crate::error::{NewsdeskError, Result};
use crate::infrastructure::store::DataStore;
use std::path::PathBuf;

#[derive(Debug)]
pub struct Repository<T: Entity + Validate> {
    store: DataStore<T>,
}

impl<T: Entity + Validate> Repository<T> {
    /// Open a repository over the store file at `path`.
    pub fn open(path: PathBuf) -> Result<Self> {
        Ok(Repository {
            store: DataStore::open(path)?,
        })
    }

    /// Validate and persist a new entity; the store assigns the id.
    pub fn create(&self, entity: Option<T>) -> Result<T> {
        let entity = entity.ok_or(NewsdeskError::NullEntity)?;
        entity.validate()?;
        self.store.save(Some(entity))
    }

    /// Validate and persist a modified entity.
    ///
    /// Shares create's path: an update whose id is absent from the
    /// store inserts rather than failing. Callers that need strict
    /// update semantics read the record first, as the news service
    /// does.
    pub fn update(&self, entity: Option<T>) -> Result<T> {
        let entity = entity.ok_or(NewsdeskError::NullEntity)?;
        entity.validate()?;
        self.store.save(Some(entity))
    }

    pub fn read_by_id(&self, id: Option<EntityId>) -> Result<T> {
        self.store.find_by_id(id)
    }

    /// Delete by entity reference, via its id.
    pub fn delete(&self, entity: Option<&T>) -> Result<bool> {
        let entity = entity.ok_or(NewsdeskError::NullEntity)?;
        self.delete_by_id(entity.id())
    }

    pub fn delete_by_id(&self, id: Option<EntityId>) -> Result<bool> {
        self.store.delete(id)
    }

    pub fn read_all(&self) -> Vec<T> {
        self.store.find_all()
    }

    pub fn read_page(&self, offset: i64, limit: i64) -> Vec<T> {
        self.store.find_page(offset, limit)
    }

    pub fn exists_by_id(&self, id: Option<EntityId>) -> Result<bool> {
        self.store.exists_by_id(id)
    }

    pub fn count(&self) -> u64 {
        self.store.count()
    }
}
