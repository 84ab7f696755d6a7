pub mod config;
pub mod error;
pub mod pagination;
pub mod result;

pub use config::SyncConfig;
pub use error::KanbanError;
pub use pagination::PageRequest;
pub use result::KanbanResult;
