//! Output formatting utilities

use crate::application::{AuthorView, NewsView};

/// Format a list of authors for display
pub fn format_author_list(authors: &[AuthorView]) -> String {
    if authors.is_empty() {
        return "No authors found".to_string();
    }

    let mut output = String::new();
    for author in authors {
        output.push_str(&format!("{:>4}  {}\n", author.id, author.name));
    }
    output
}

/// Format a list of news items for display
pub fn format_news_list(items: &[NewsView]) -> String {
    if items.is_empty() {
        return "No news found".to_string();
    }

    let mut output = String::new();
    for item in items {
        output.push_str(&format!(
            "{:>4}  {}  {}  (by {})\n",
            item.id,
            item.last_update_date.format("%d-%m-%Y %H:%M"),
            item.title,
            item.author.name
        ));
    }
    output
}

/// Format one news item in full
pub fn format_news_item(item: &NewsView) -> String {
    format!(
        "id:           {}\n\
         title:        {}\n\
         author:       {} (id {})\n\
         created:      {}\n\
         last updated: {}\n\n\
         {}\n",
        item.id,
        item.title,
        item.author.name,
        item.author.id,
        item.create_date.to_rfc3339(),
        item.last_update_date.to_rfc3339(),
        item.content
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Author, Entity, News};

    fn sample_view() -> NewsView {
        let mut author = Author::new("Jane Doe");
        author.set_id(1);
        let mut news = News::new("Launch Day", "Rocket launch today", Some(1));
        news.set_id(7);
        NewsView::compose(&news, AuthorView::of(&author))
    }

    #[test]
    fn test_format_empty_author_list() {
        assert_eq!(format_author_list(&[]), "No authors found");
    }

    #[test]
    fn test_format_author_list_one_line_each() {
        let authors = vec![
            AuthorView {
                id: 1,
                name: "Jane Doe".to_string(),
            },
            AuthorView {
                id: 2,
                name: "John Roe".to_string(),
            },
        ];

        let output = format_author_list(&authors);
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("Jane Doe"));
        assert!(output.contains("John Roe"));
    }

    #[test]
    fn test_format_empty_news_list() {
        assert_eq!(format_news_list(&[]), "No news found");
    }

    #[test]
    fn test_format_news_list_shows_title_and_author() {
        let output = format_news_list(&[sample_view()]);
        assert!(output.contains("Launch Day"));
        assert!(output.contains("by Jane Doe"));
    }

    #[test]
    fn test_format_news_item_shows_all_fields() {
        let output = format_news_item(&sample_view());
        assert!(output.contains("id:           7"));
        assert!(output.contains("Launch Day"));
        assert!(output.contains("Jane Doe (id 1)"));
        assert!(output.contains("Rocket launch today"));
    }
}
