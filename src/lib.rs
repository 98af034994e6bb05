//! mdparser: structured extraction from markdown documents.
//!
//! A document is loaded as numbered lines and indexed by its ATX headings. Three queries run
//! over it: headings down to a level, bold/italic spans attributed to their section, and regex
//! search with context windows that can be fenced to one section. Results borrow from the
//! document and are rendered by one of the [`formats`].
#![allow(clippy::multiple_crate_versions)]

pub mod config;
pub mod document;
pub mod emphasis;
pub mod error;
pub mod extraction;
pub mod formats;
pub mod headings;
pub mod input;
pub mod search;
pub mod section;

pub use document::{Document, Line};
pub use error::{Error, Result};
