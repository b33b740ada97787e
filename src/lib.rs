//! newsdesk - File-backed news and author record store
//!
//! A two-entity record store (authors, news items) with JSON-file
//! persistence, declarative field validation in front of every write,
//! and cross-entity referential integrity: each news record must
//! reference an existing author and reads come back joined with the
//! author data.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::NewsdeskError;
