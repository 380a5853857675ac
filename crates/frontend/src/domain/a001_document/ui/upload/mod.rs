//! Document Upload UI Module (MVVM Standard)
//!
//! Structure:
//! - view_model.rs: DocumentUploadVm with signals and enable rules
//! - view.rs: Main component DocumentUpload

mod view;
mod view_model;

pub use view::DocumentUpload;
pub use view_model::{can_clear, can_upload, DocumentUploadVm};
