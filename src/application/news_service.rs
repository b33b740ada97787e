//! News service - cross-entity orchestration
//!
//! The only component with cross-entity knowledge: every write checks
//! that the referenced author exists, every read joins the author in,
//! and timestamps are stamped here rather than by callers.

use crate::application::author_service::AuthorService;
use crate::application::request::EditNewsRequest;
use crate::application::view::NewsView;
use crate::domain::{EntityId, News, Validate};
use crate::error::{NewsdeskError, Result};
use crate::infrastructure::Repository;
use chrono::Utc;

pub struct NewsService {
    repository: Repository<News>,
    author_service: AuthorService,
}

impl NewsService {
    pub fn new(repository: Repository<News>, author_service: AuthorService) -> Self {
        NewsService {
            repository,
            author_service,
        }
    }

    /// Create a news record from a request and return it joined with
    /// its author.
    pub fn create(&self, request: Option<EditNewsRequest>) -> Result<NewsView> {
        let request = Self::validate_request(request)?;

        if !self.author_service.exists_by_id(request.author_id)? {
            return Err(NewsdeskError::AuthorNotFound(
                request.author_id.unwrap_or_default(),
            ));
        }

        // Both timestamps stamped here; equal at creation.
        let news = News::new(request.title, request.content, request.author_id);

        let saved = self.repository.create(Some(news)).map_err(|e| match e {
            NewsdeskError::ValidationFailed(msg) => NewsdeskError::RequestInvalid(msg),
            NewsdeskError::NullEntity => {
                NewsdeskError::RequestInvalid("Missing news record".to_string())
            }
            other => other,
        })?;

        self.read_by_id(saved.id)
    }

    /// Replace the mutable fields of an existing record; `create_date`
    /// is preserved and `last_update_date` re-stamped.
    pub fn update(&self, id: Option<EntityId>, request: Option<EditNewsRequest>) -> Result<NewsView> {
        match id {
            Some(id) if id > 0 => {}
            _ => {
                return Err(NewsdeskError::RequestInvalid(format!(
                    "Incorrect news id value {:?}",
                    id
                )))
            }
        }

        let request = Self::validate_request(request)?;

        let mut news = self.repository.read_by_id(id).map_err(|e| match e {
            NewsdeskError::NullKey => NewsdeskError::NewsIdMissing,
            NewsdeskError::NotFound(id) => NewsdeskError::NewsNotFound(id),
            other => other,
        })?;

        if !self.author_service.exists_by_id(request.author_id)? {
            return Err(NewsdeskError::AuthorNotFound(
                request.author_id.unwrap_or_default(),
            ));
        }

        news.title = request.title;
        news.content = request.content;
        news.author_id = request.author_id;
        news.last_update_date = Utc::now();

        let saved = self.repository.update(Some(news)).map_err(|e| match e {
            NewsdeskError::NullEntity => NewsdeskError::NewsIdMissing,
            NewsdeskError::ValidationFailed(msg) => NewsdeskError::RequestInvalid(msg),
            other => other,
        })?;

        self.read_by_id(saved.id)
    }

    /// One news record joined with its author.
    pub fn read_by_id(&self, id: Option<EntityId>) -> Result<NewsView> {
        let news = self.repository.read_by_id(id).map_err(|e| match e {
            NewsdeskError::NullKey => NewsdeskError::NewsIdMissing,
            NewsdeskError::NotFound(id) => NewsdeskError::NewsNotFound(id),
            other => other,
        })?;

        let author = self.author_service.read_by_id(news.author_id)?;

        Ok(NewsView::compose(&news, author))
    }

    pub fn read_all(&self) -> Result<Vec<NewsView>> {
        self.read_page(0, -1)
    }

    /// A page of news records, each joined with its author. Authors
    /// are fetched once for the whole page; a news record whose author
    /// is gone fails the page as a whole rather than being skipped.
    pub fn read_page(&self, offset: i64, limit: i64) -> Result<Vec<NewsView>> {
        let authors = self.author_service.read_map();

        let records = if offset == 0 && limit == -1 {
            self.repository.read_all()
        } else {
            self.repository.read_page(offset, limit)
        };

        let mut views = Vec::with_capacity(records.len());
        for news in &records {
            let author_id = news.author_id.unwrap_or_default();
            let author = authors
                .get(&author_id)
                .ok_or(NewsdeskError::AuthorNotFound(author_id))?;
            views.push(NewsView::compose(news, author.clone()));
        }

        Ok(views)
    }

    pub fn delete_by_id(&self, id: Option<EntityId>) -> Result<bool> {
        self.repository.delete_by_id(id).map_err(|e| match e {
            NewsdeskError::NullKey => NewsdeskError::NewsIdMissing,
            NewsdeskError::NotFound(id) => NewsdeskError::NewsNotFound(id),
            other => other,
        })
    }

    pub fn count(&self) -> u64 {
        self.repository.count()
    }

    fn validate_request(request: Option<EditNewsRequest>) -> Result<EditNewsRequest> {
        let request = request.ok_or_else(|| {
            NewsdeskError::RequestInvalid("Passed a null object as the request".to_string())
        })?;

        request.validate().map_err(|e| match e {
            NewsdeskError::ValidationFailed(msg) => NewsdeskError::RequestInvalid(msg),
            other => other,
        })?;

        Ok(request)
    }
}
