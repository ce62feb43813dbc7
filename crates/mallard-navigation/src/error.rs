//! Navigation error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavigationError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid search template (expected a URL containing %s): {0}")]
    InvalidSearchTemplate(String),
}
