//! Records module - the normalized listing model and its CSV loader

pub mod loader;
mod record;
mod slug;

pub use loader::{LoadError, RecordLoader};
pub use record::{Record, StatusKind};
pub use slug::SlugPool;
