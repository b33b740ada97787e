//! Incoming edit requests

use crate::domain::{news, EntityId, Validate};
use serde::Deserialize;

/// The caller-supplied shape for creating or updating a news record.
/// Server-stamped fields (id and both dates) are never part of it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct EditNewsRequest {
    pub title: String,
    pub content: String,
    pub author_id: Option<EntityId>,
}

impl EditNewsRequest {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: Option<EntityId>,
    ) -> Self {
        EditNewsRequest {
            title: title.into(),
            content: content.into(),
            author_id,
        }
    }
}

impl Validate for EditNewsRequest {
    fn collect_violations(&self, violations: &mut Vec<String>) {
        // The author id is checked against the author store separately;
        // only the field shape is validated here.
        news::TITLE_RULE.check(&self.title, violations);
        news::CONTENT_RULE.check(&self.content, violations);
    }
}
