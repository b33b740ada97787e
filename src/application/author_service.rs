//! Author service
//!
//! Translates storage vocabulary into author-specific failures so the
//! layers above never see `NullKey` or `NotFound`.

use crate::application::view::AuthorView;
use crate::domain::{Author, EntityId};
use crate::error::{NewsdeskError, Result};
use crate::infrastructure::Repository;
use std::collections::HashMap;
use std::sync::Arc;

/// Cheaply clonable handle over the one long-lived author store; the
/// news service holds a clone of the same handle so both see every
/// write.
#[derive(Clone)]
pub struct AuthorService {
    repository: Arc<Repository<Author>>,
}

impl AuthorService {
    pub fn new(repository: Arc<Repository<Author>>) -> Self {
        AuthorService { repository }
    }

    /// Create an author from a bare name.
    pub fn create(&self, name: Option<String>) -> Result<AuthorView> {
        let name =
            name.ok_or_else(|| NewsdeskError::RequestInvalid("Missing author name".to_string()))?;

        let created = self
            .repository
            .create(Some(Author::new(name)))
            .map_err(|e| match e {
                NewsdeskError::ValidationFailed(msg) => NewsdeskError::RequestInvalid(msg),
                NewsdeskError::NullEntity => {
                    NewsdeskError::RequestInvalid("Missing author".to_string())
                }
                other => other,
            })?;

        Ok(AuthorView::of(&created))
    }

    pub fn exists_by_id(&self, id: Option<EntityId>) -> Result<bool> {
        self.repository.exists_by_id(id).map_err(|e| match e {
            NewsdeskError::NullKey => NewsdeskError::AuthorIdMissing,
            other => other,
        })
    }

    pub fn read_by_id(&self, id: Option<EntityId>) -> Result<AuthorView> {
        let author = self.repository.read_by_id(id).map_err(|e| match e {
            NewsdeskError::NullKey => NewsdeskError::AuthorIdMissing,
            NewsdeskError::NotFound(id) => NewsdeskError::AuthorNotFound(id),
            other => other,
        })?;

        Ok(AuthorView::of(&author))
    }

    pub fn read_all(&self) -> Vec<AuthorView> {
        self.repository.read_all().iter().map(AuthorView::of).collect()
    }

    /// Every author in one pass, keyed by id. Used by the news service
    /// to join a whole page without one lookup per record.
    pub fn read_map(&self) -> HashMap<EntityId, AuthorView> {
        self.repository
            .read_all()
            .iter()
            .map(|author| (author.id.unwrap_or_default(), AuthorView::of(author)))
            .collect()
    }

    /// Remove an author. Referencing news records are not touched;
    /// they surface as `AuthorNotFound` at read time.
    pub fn delete_by_id(&self, id: Option<EntityId>) -> Result<bool> {
        self.repository.delete_by_id(id).map_err(|e| match e {
            NewsdeskError::NullKey => NewsdeskError::AuthorIdMissing,
            NewsdeskError::NotFound(id) => NewsdeskError::AuthorNotFound(id),
            other => other,
        })
    }

    pub fn count(&self) -> u64 {
        self.repository.count()
    }
}
