//! # sharereview-service
//!
//! The review feed: collectors for file shares and app shares, the
//! formatting pipeline, deletion routing, and the per-user
//! [`ReviewService`] facade exposing the external operations.
//!
//! Services follow constructor injection; collaborators are handed in as
//! `Arc<dyn Trait>` at construction time.

pub mod action;
pub mod collector;
pub mod context;
pub mod deletion;
pub mod format;
pub mod pipeline;
pub mod review;

pub use action::ActionEncoder;
pub use collector::{AppShareAggregator, FileShareCollector};
pub use context::RequestContext;
pub use deletion::DeletionRouter;
pub use pipeline::ReviewPipeline;
pub use review::ReviewService;
