//! Domain layer - Entities and field validation

pub mod author;
pub mod entity;
pub mod news;
pub mod validate;

pub use author::Author;
pub use entity::{Entity, EntityId};
pub use news::News;
pub use validate::{LengthRule, Validate};
