//! Query Response UI Module
//!
//! - view_model.rs: classification of the current response (pure)
//! - view.rs: QueryResponseView
//! - chunks.rs: ChunksList

mod chunks;
mod view;
mod view_model;

pub use chunks::ChunksList;
pub use view::QueryResponseView;
pub use view_model::{ChunkRow, ResponseView};
