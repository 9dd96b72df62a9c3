//! Shared domain types for the review feed.

pub mod namespace;
pub mod share;
pub mod watermark;

pub use namespace::{FILES_NAMESPACE, SEPARATOR};
pub use share::{FileRef, FileShareRecord, FormattedShare, RawShare, ResolverKind, ShareType};
pub use watermark::Watermark;
