use std::error::Error;
use std::fmt;

/// Returned by operations that need at least one element when the list is
/// empty.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub struct EmptyListError;

impl fmt::Display for EmptyListError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("cannot pop from an empty list")
    }
}

impl Error for EmptyListError {}
