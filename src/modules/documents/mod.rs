// Document drafts: rows plus round-off, with totals labelled per document kind

pub mod models;

pub use models::{Document, DocumentKind, TradeSide};
