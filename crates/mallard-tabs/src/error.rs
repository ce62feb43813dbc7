//! Tab error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TabError {
    /// The collection was indexed outside `0..len`. Correct callers never hit this.
    #[error("Tab index out of range: {index} (tab count {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
