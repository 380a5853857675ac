pub mod list;
pub mod upload;

pub use list::DocumentsList;
pub use upload::DocumentUpload;
