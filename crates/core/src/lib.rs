//! Link-resolution and graph-construction engine for interlinked documents.
//!
//! The host pipeline hands over an ordered set of [`model::Document`]
//! descriptors; [`builder::GraphBuilder`] registers one node per document,
//! resolves every `[[wikilink]]` in their content against the finished
//! registry, and produces a [`model::NoteGraph`] ready for export to the
//! visualization consumer.

pub mod builder;
pub mod error;
pub mod identity;
pub mod logging;
pub mod model;
pub mod parser;
pub mod resolver;

pub use builder::GraphBuilder;
pub use error::{NotegraphError, Result};
pub use model::{Document, NoteGraph};
