//! View layer seam
//!
//! Rendering is done elsewhere. The shell pushes state out through this trait
//! after every change and never reads anything back.

use mallard_autocomplete::SuggestionRow;
use mallard_tabs::{Link, Tab};
use url::Url;

pub trait ShellView: Send + 'static {
    /// Overlay rows for `query`, already limited by the row policy.
    fn render_suggestions(&mut self, query: &str, rows: &[SuggestionRow<'_>]);

    fn render_tab_count(&mut self, count: usize);

    fn render_navigation_enabled(&mut self, can_go_back: bool, can_go_forward: bool);

    /// `None` clears the address bar.
    fn render_address_text(&mut self, url: Option<&Url>);

    fn show_overlay(&mut self);

    fn hide_overlay(&mut self);

    fn focus_address_bar(&mut self);

    fn blur_address_bar(&mut self);

    /// Put `tab` in the content area, loading its current page if it has one.
    fn show_tab(&mut self, tab: &Tab);

    fn reload(&mut self, url: &Url);

    /// Present the share sheet for the current page.
    fn share(&mut self, url: &Url);

    /// A quick link was saved; the view confirms it to the user.
    fn link_saved(&mut self, link: &Link);
}
