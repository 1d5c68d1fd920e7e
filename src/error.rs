//! Error types.
//!
//! Failure inside a computation is a value (`Maybe::Absent`, an empty
//! `List`), never an error. The only error this crate reports is a
//! precondition violation: reading the payload of a value that has none.

use thiserror::Error;

/// Returned when the payload of an absent `Maybe` is requested.
///
/// # Examples
///
/// ```rust
/// use monadic::{AbsentValueError, Maybe};
///
/// let absent: Maybe<i32> = Maybe::absent();
/// assert_eq!(absent.value(), Err(AbsentValueError));
/// assert_eq!(
///     AbsentValueError.to_string(),
///     "value accessed on an absent Maybe"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("value accessed on an absent Maybe")]
pub struct AbsentValueError;
