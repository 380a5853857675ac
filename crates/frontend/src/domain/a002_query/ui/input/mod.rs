//! Query Input UI Module (MVVM Standard)
//!
//! Structure:
//! - view_model.rs: QueryInputVm and request shaping
//! - view.rs: Main component QueryInput

mod view;
mod view_model;

pub use view::QueryInput;
pub use view_model::{build_request, can_submit, QueryInputVm};
