//! Mallard Autocomplete
//!
//! Live search suggestions for the address bar. Every keystroke issues a new
//! numbered query; a completion is only delivered if it belongs to the most
//! recently issued query, so a slow response can never overwrite a newer one.

mod controller;
mod error;
mod source;
mod suggestion;

pub use controller::{AutocompleteController, FetchCompletion, QueryUpdate};
pub use error::AutocompleteError;
pub use source::SuggestionSource;
pub use suggestion::{RowPolicy, Suggestion, SuggestionQuery, SuggestionRow};

pub type Result<T> = std::result::Result<T, AutocompleteError>;
