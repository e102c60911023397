mod document;
mod error;
mod serializer;
mod string;

pub use document::{render_to_document, Document, NodeId};
pub use error::DispatchError;
pub use string::render_to_string;
