mod document;
mod document_kind;

pub use document::Document;
pub use document_kind::{DocumentKind, TradeSide};
