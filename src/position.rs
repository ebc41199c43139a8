//! Match-position records supplied by the matching engine.
//!
//! A match is reported as a non-empty ordered sequence of positions. The
//! single-link formatters read only the first element; `print_secs` receives
//! one such sequence per match. Records are consumed read-only and never
//! retained past the call.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::OrgError;

/// Location of one rule match inside a source file.
///
/// The unsigned fields make negative lines/columns unrepresentable; no other
/// range validation is performed and the file path is copied into output
/// verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MatchPosition {
    pub file: String,
    pub line: u32,
    pub column: u32,
    pub column_end: u32,
}

impl MatchPosition {
    pub fn new(file: impl Into<String>, line: u32, column: u32, column_end: u32) -> Self {
        Self {
            file: file.into(),
            line,
            column,
            column_end,
        }
    }
}

/// First element of a position sequence, rejecting the empty sequence at the
/// boundary before anything is written.
pub(crate) fn first(positions: &[MatchPosition]) -> Result<&MatchPosition, OrgError> {
    positions.first().ok_or(OrgError::MalformedPosition)
}
