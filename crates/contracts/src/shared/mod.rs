pub mod api_error;
pub mod serde_ext;

pub use api_error::ApiErrorBody;
