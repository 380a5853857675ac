pub mod aggregate;

pub use aggregate::{DeleteDocumentResponse, Document};
