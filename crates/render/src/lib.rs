//! PDF rendering for arithmetic practice documents.
//!
//! Pages are composed as raw content streams through a small drawing context
//! and assembled into an in-memory `lopdf` document that is written out once
//! every page has rendered.

pub mod answer_key;
pub mod context;
pub mod document;
pub mod error;
pub mod geometry;
pub mod worksheet_page;

pub use answer_key::{KeyEntry, answer_key_page};
pub use context::{Face, PageContext};
pub use document::WorksheetDocument;
pub use error::RenderError;
pub use worksheet_page::worksheet_page;
