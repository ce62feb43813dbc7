//! Mallard Core
//!
//! The browser shell: keeps the tab collection, the suggestion overlay and
//! the autocomplete controller consistent, and pushes the result to an
//! external view. All shell state is owned by [`BrowserShell`] and mutated
//! from a single event loop.

mod config;
mod error;
mod event;
mod overlay;
mod runtime;
mod shell;
mod view;

#[cfg(test)]
mod test_support;

pub use config::ShellConfig;
pub use error::CoreError;
pub use event::ShellEvent;
pub use overlay::{OverlayEffect, OverlayState, OverlayStateMachine};
pub use runtime::ShellHandle;
pub use shell::BrowserShell;
pub use view::ShellView;

// Re-export the building blocks
pub use mallard_autocomplete::{
    AutocompleteController, AutocompleteError, FetchCompletion, QueryUpdate, RowPolicy,
    Suggestion, SuggestionQuery, SuggestionRow, SuggestionSource,
};
pub use mallard_navigation::{InputResolution, InputResolver, NavigationError};
pub use mallard_tabs::{Link, Reselection, Tab, TabCollection, TabError};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
