//! Composite read results returned by the services

use crate::domain::{Author, EntityId, News};
use chrono::{DateTime, Utc};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthorView {
    pub id: EntityId,
    pub name: String,
}

impl AuthorView {
    /// Records read back from a store always carry an id.
    pub fn of(author: &Author) -> Self {
        AuthorView {
            id: author.id.unwrap_or_default(),
            name: author.name.clone(),
        }
    }
}

/// A news record joined with its author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewsView {
    pub id: EntityId,
    pub title: String,
    pub content: String,
    pub create_date: DateTime<Utc>,
    pub last_update_date: DateTime<Utc>,
    pub author: AuthorView,
}

impl NewsView {
    pub fn compose(news: &News, author: AuthorView) -> Self {
        NewsView {
            id: news.id.unwrap_or_default(),
            title: news.title.clone(),
            content: news.content.clone(),
            create_date: news.create_date,
            last_update_date: news.last_update_date,
            author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Entity;

    #[test]
    fn test_compose_joins_author() {
        let mut author = Author::new("Jane Doe");
        author.set_id(1);
        let mut news = News::new("Launch Day", "Rocket launch today", Some(1));
        news.set_id(7);

        let view = NewsView::compose(&news, AuthorView::of(&author));

        assert_eq!(view.id, 7);
        assert_eq!(view.title, "Launch Day");
        assert_eq!(view.author.id, 1);
        assert_eq!(view.author.name, "Jane Doe");
        assert_eq!(view.create_date, news.create_date);
    }
}
