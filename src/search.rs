//! Locating values inside slices.
//!
//! Every binary search in here assumes the slice is sorted ascending by the
//! key ordering of the call. Sortedness is a caller-enforced precondition:
//! it is never verified and never established here.

use thiserror::Error;

pub mod baseline;
pub mod binary;
pub mod boundary;
pub mod range;
pub mod recursive;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    #[error("cannot draw from an empty sequence")]
    EmptySequence,
    #[error("value not drawn within {attempts} attempts")]
    AttemptsExhausted { attempts: usize },
}
