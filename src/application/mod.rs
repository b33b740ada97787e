//! Application layer - Services and use cases

pub mod author_service;
pub mod init;
pub mod news_service;
pub mod request;
pub mod view;

pub use author_service::AuthorService;
pub use news_service::NewsService;
pub use request::EditNewsRequest;
pub use view::{AuthorView, NewsView};
