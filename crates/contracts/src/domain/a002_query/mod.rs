pub mod aggregate;
pub mod settings;

pub use aggregate::{Chunk, QueryRequest, QueryResponse, SourceRef};
pub use settings::{QuerySettings, SettingsPatch};
