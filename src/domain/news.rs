//! News entity

use crate::domain::entity::{Entity, EntityId};
use crate::domain::validate::{LengthRule, Validate};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub(crate) const TITLE_RULE: LengthRule = LengthRule::new("title", 5, 30);
pub(crate) const CONTENT_RULE: LengthRule = LengthRule::new("content", 5, 255);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct News {
    pub id: Option<EntityId>,
    pub title: String,
    pub content: String,
    /// Set once at creation, immutable thereafter.
    pub create_date: DateTime<Utc>,
    /// Set at creation and on every update.
    pub last_update_date: DateTime<Utc>,
    pub author_id: Option<EntityId>,
}

impl News {
    /// Create an unsaved news record with both timestamps stamped to now.
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: Option<EntityId>,
    ) -> Self {
        let now = Utc::now();
        News {
            id: None,
            title: title.into(),
            content: content.into(),
            create_date: now,
            last_update_date: now,
            author_id,
        }
    }
}

impl Entity for News {
    fn id(&self) -> Option<EntityId> {
        self.id
    }

    fn set_id(&mut self, id: EntityId) {
        self.id = Some(id);
    }
}

impl Validate for News {
    fn collect_violations(&self, violations: &mut Vec<String>) {
        TITLE_RULE.check(&self.title, violations);
        CONTENT_RULE.check(&self.content, violations);

        if self.author_id.is_none() {
            violations.push("author_id: must not be null".to_string());
        }
    }
}
