//! # sharereview-store
//!
//! In-process implementations of every collaborator the review pipeline
//! talks to, loaded from a JSON fixture:
//!
//! - file-share backend and per-owner folders
//! - name tables for users, groups, rooms, boards and circles
//! - static app share sources
//! - a preference store persisted to a JSON file
//! - the app restriction list

pub mod fixture;
pub mod folders;
pub mod names;
pub mod preferences;
pub mod restriction;
pub mod shares;
pub mod sources;

pub use fixture::{Fixture, FixtureStore};
pub use folders::{MemoryFolder, MemoryFolderResolver};
pub use names::TableResolver;
pub use preferences::FilePreferenceStore;
pub use restriction::StaticRestriction;
pub use shares::MemoryShareBackend;
pub use sources::StaticSource;
