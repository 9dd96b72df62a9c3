//! Share collectors: one per provider family.

pub mod app;
pub mod file;

pub use app::AppShareAggregator;
pub use file::{FileShareCollector, INVALID_SHARE_OBJECT};
