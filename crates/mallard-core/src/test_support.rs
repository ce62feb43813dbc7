//! Test doubles for the source and view seams

use std::collections::HashMap;
use std::sync::Arc;

use futures_util::future::{BoxFuture, FutureExt};
use parking_lot::Mutex;
use tokio::sync::oneshot;
use url::Url;

use mallard_autocomplete::{AutocompleteError, Suggestion, SuggestionRow, SuggestionSource};
use mallard_tabs::{Link, Tab};

use crate::view::ShellView;

type Reply = mallard_autocomplete::Result<Vec<Suggestion>>;

/// Suggestion source whose fetches resolve only when a test says so.
#[derive(Default)]
pub struct ManualSource {
    pending: Mutex<HashMap<String, oneshot::Sender<Reply>>>,
    calls: Mutex<Vec<String>>,
}

impl ManualSource {
    pub fn list(items: &[&str]) -> Vec<Suggestion> {
        items.iter().map(|s| Suggestion::new(*s)).collect()
    }

    pub fn resolve(&self, query: &str, reply: Reply) {
        if let Some(tx) = self.pending.lock().remove(query) {
            let _ = tx.send(reply);
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().clone()
    }
}

impl SuggestionSource for ManualSource {
    fn fetch(&self, query: String) -> BoxFuture<'static, Reply> {
        let (tx, rx) = oneshot::channel();
        self.pending.lock().insert(query.clone(), tx);
        self.calls.lock().push(query);
        async move {
            rx.await
                .unwrap_or_else(|_| Err(AutocompleteError::FetchFailed("dropped".into())))
        }
        .boxed()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    /// Rendered rows; the placeholder row shows up as `<none>`
    Suggestions(Vec<String>),
    TabCount(usize),
    Navigation(bool, bool),
    AddressText(Option<String>),
    ShowOverlay,
    HideOverlay,
    FocusAddressBar,
    BlurAddressBar,
    /// URL of the shown tab, `None` for Home
    ShowTab(Option<String>),
    Reload(String),
    Share(String),
    LinkSaved(String),
}

/// View that records every call. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct RecordingView {
    calls: Arc<Mutex<Vec<ViewCall>>>,
}

impl RecordingView {
    pub fn calls(&self) -> Vec<ViewCall> {
        self.calls.lock().clone()
    }

    pub fn last_tab_count(&self) -> Option<usize> {
        self.calls.lock().iter().rev().find_map(|call| match call {
            ViewCall::TabCount(count) => Some(*count),
            _ => None,
        })
    }

    pub fn suggestion_renders(&self) -> Vec<Vec<String>> {
        self.calls
            .lock()
            .iter()
            .filter_map(|call| match call {
                ViewCall::Suggestions(rows) => Some(rows.clone()),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: ViewCall) {
        self.calls.lock().push(call);
    }
}

impl ShellView for RecordingView {
    fn render_suggestions(&mut self, _query: &str, rows: &[SuggestionRow<'_>]) {
        let rows = rows
            .iter()
            .map(|row| match row {
                SuggestionRow::NoSuggestions => "<none>".to_string(),
                SuggestionRow::Suggestion(suggestion) => suggestion.display.clone(),
            })
            .collect();
        self.record(ViewCall::Suggestions(rows));
    }

    fn render_tab_count(&mut self, count: usize) {
        self.record(ViewCall::TabCount(count));
    }

    fn render_navigation_enabled(&mut self, can_go_back: bool, can_go_forward: bool) {
        self.record(ViewCall::Navigation(can_go_back, can_go_forward));
    }

    fn render_address_text(&mut self, url: Option<&Url>) {
        self.record(ViewCall::AddressText(url.map(Url::to_string)));
    }

    fn show_overlay(&mut self) {
        self.record(ViewCall::ShowOverlay);
    }

    fn hide_overlay(&mut self) {
        self.record(ViewCall::HideOverlay);
    }

    fn focus_address_bar(&mut self) {
        self.record(ViewCall::FocusAddressBar);
    }

    fn blur_address_bar(&mut self) {
        self.record(ViewCall::BlurAddressBar);
    }

    fn show_tab(&mut self, tab: &Tab) {
        self.record(ViewCall::ShowTab(tab.url().map(Url::to_string)));
    }

    fn reload(&mut self, url: &Url) {
        self.record(ViewCall::Reload(url.to_string()));
    }

    fn share(&mut self, url: &Url) {
        self.record(ViewCall::Share(url.to_string()));
    }

    fn link_saved(&mut self, link: &Link) {
        self.record(ViewCall::LinkSaved(link.title.clone()));
    }
}
