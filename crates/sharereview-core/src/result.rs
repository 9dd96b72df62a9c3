//! Convenience result type alias for ShareReview.

use crate::error::AppError;

/// A specialized `Result` type for ShareReview operations.
pub type AppResult<T> = Result<T, AppError>;
