pub mod history;
pub mod input;
pub mod response;
pub mod settings;
pub mod sources;

pub use history::QueryHistory;
pub use input::QueryInput;
pub use response::{ChunksList, QueryResponseView};
pub use settings::QuerySettingsPanel;
pub use sources::{SourcesButton, SourcesList};
