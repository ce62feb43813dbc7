//! Mallard Navigation
//!
//! Address bar input resolution:
//! 1. Valid URL → navigate
//! 2. Anything else → search

mod error;
mod input;

pub use error::NavigationError;
pub use input::{InputResolution, InputResolver, DEFAULT_SEARCH_TEMPLATE};

pub type Result<T> = std::result::Result<T, NavigationError>;
