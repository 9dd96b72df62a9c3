//! Per-user review watermark.

use serde::{Deserialize, Serialize};

/// The last confirmed review point of a user, in unix epoch seconds.
///
/// Confirming sets it to "now" or to a client-supplied value. The value is
/// not forced to be monotonic; a caller may move it backwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Watermark(pub i64);

impl Watermark {
    /// Create a watermark from a unix timestamp.
    pub fn new(timestamp: i64) -> Self {
        Self(timestamp)
    }

    /// Return the raw unix timestamp.
    pub fn timestamp(self) -> i64 {
        self.0
    }

    /// Whether an item created at `time` is newer than this watermark.
    ///
    /// This is the only "only new" predicate; both the name pre-warm pass
    /// and the output pass go through it.
    pub fn admits(self, time: i64) -> bool {
        time > self.0
    }
}

impl From<i64> for Watermark {
    fn from(timestamp: i64) -> Self {
        Self(timestamp)
    }
}
