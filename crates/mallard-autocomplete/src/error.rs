//! Autocomplete error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AutocompleteError {
    #[error("Failed to retrieve suggestions: {0}")]
    FetchFailed(String),
}
