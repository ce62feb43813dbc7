//! Mallard Tab Management
//!
//! An ordered collection of Home and Web tabs with a current-selection pointer.
//! The collection never repairs itself: when it runs empty the shell is
//! responsible for attaching a fresh Home tab.

mod collection;
mod error;
mod tab;

pub use collection::{Reselection, TabCollection};
pub use error::TabError;
pub use tab::{HomeTab, Link, Tab, WebTab};

pub type Result<T> = std::result::Result<T, TabError>;
