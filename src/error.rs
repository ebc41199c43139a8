//! Error taxonomy for the formatting operations.

use std::io;

use thiserror::Error;

/// Failures surfaced by link construction and printing.
///
/// Nothing is retried or recovered inside this crate; every operation stops
/// at its first error and the caller owns the recovery policy.
#[derive(Debug, Error)]
pub enum OrgError {
    /// The position argument was an empty sequence.
    #[error("malformed match position: empty position sequence")]
    MalformedPosition,
    /// The output sink rejected a write.
    #[error("failed to write link output")]
    Io(#[from] io::Error),
}
