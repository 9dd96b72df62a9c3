//! # sharereview-core
//!
//! Core crate for ShareReview. Contains the collaborator traits the review
//! pipeline depends on, configuration schemas, the share domain types,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other ShareReview crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
