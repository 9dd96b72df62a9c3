//! Collaborator traits the review pipeline depends on.
//!
//! Implementations live outside the core: the fixture store in
//! `sharereview-store`, or a host application's own adapters.

pub mod names;
pub mod settings;
pub mod source;
pub mod storage;

pub use names::NameResolver;
pub use settings::{AppRestriction, PreferenceStore};
pub use source::{Source, SourceFactory};
pub use storage::{FileShareBackend, Folder, FolderResolver};
