//! Browser shell controller
//!
//! Owns the tab collection, the overlay state machine and the autocomplete
//! controller, and is the only thing that mutates them. Events are handled
//! one at a time; after each one the resulting state is pushed to the view.

use std::sync::Arc;

use tokio::sync::mpsc;

use mallard_autocomplete::{
    AutocompleteController, FetchCompletion, QueryUpdate, SuggestionSource,
};
use mallard_navigation::InputResolver;
use mallard_tabs::{Reselection, Tab, TabCollection};

use crate::config::ShellConfig;
use crate::event::ShellEvent;
use crate::overlay::{OverlayEffect, OverlayState, OverlayStateMachine};
use crate::view::ShellView;
use crate::Result;

pub struct BrowserShell<S, V> {
    config: ShellConfig,
    tabs: TabCollection,
    overlay: OverlayStateMachine,
    autocomplete: AutocompleteController<S>,
    resolver: InputResolver,
    view: V,
    /// Completions of fetches started by `autocomplete`
    pub(crate) completions: mpsc::UnboundedReceiver<FetchCompletion>,
}

impl<S, V> BrowserShell<S, V>
where
    S: SuggestionSource + 'static,
    V: ShellView,
{
    /// Build a shell with a single selected Home tab.
    pub fn new(config: ShellConfig, source: Arc<S>, view: V) -> Result<Self> {
        config.validate()?;

        let resolver = InputResolver::with_search_engine(config.search_engine.clone())?;
        let (completions_tx, completions) = mpsc::unbounded_channel();
        let autocomplete =
            AutocompleteController::new(source, completions_tx).with_row_policy(config.row_policy());

        let mut shell = Self {
            config,
            tabs: TabCollection::new(),
            overlay: OverlayStateMachine::new(),
            autocomplete,
            resolver,
            view,
            completions,
        };
        shell.attach_home_tab()?;

        tracing::info!("Browser shell initialized");
        Ok(shell)
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn tabs(&self) -> &TabCollection {
        &self.tabs
    }

    pub fn overlay_state(&self) -> &OverlayState {
        self.overlay.state()
    }

    pub fn overlay(&self) -> &OverlayStateMachine {
        &self.overlay
    }

    pub fn autocomplete(&self) -> &AutocompleteController<S> {
        &self.autocomplete
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Handle one event.
    ///
    /// Tab index errors are returned as-is; the shell never corrects a bad
    /// index on the caller's behalf.
    pub fn handle_event(&mut self, event: ShellEvent) -> Result<()> {
        tracing::trace!(?event, "Handling shell event");

        match event {
            ShellEvent::QueryEdited(text) => {
                let effects = self.overlay.on_query_edited(&text);
                self.apply_overlay_effects(effects);
            }
            ShellEvent::QuerySubmitted(text) => {
                let effects = self.overlay.on_query_submitted();
                self.apply_overlay_effects(effects);
                self.load_in_current_tab(&text);
            }
            ShellEvent::SuggestionSelected(row) => {
                let chosen = self
                    .autocomplete
                    .suggestion_at(row)
                    .map(|suggestion| suggestion.suggestion.clone());
                if let Some(text) = chosen {
                    let effects = self.overlay.on_query_submitted();
                    self.apply_overlay_effects(effects);
                    self.load_in_current_tab(&text);
                }
            }
            ShellEvent::DismissRequested => {
                let effects = self.overlay.on_dismiss_requested();
                self.apply_overlay_effects(effects);
            }
            ShellEvent::SizeClassChanged => {
                let effects = self.overlay.on_size_class_changed();
                self.apply_overlay_effects(effects);
            }
            ShellEvent::ActionButtonPressed | ShellEvent::ClearAllTabs => {
                self.clear_all_tabs()?;
            }
            ShellEvent::RefreshPressed => {
                if let Some(url) = self.tabs.current().and_then(Tab::reload) {
                    self.view.reload(url);
                }
            }
            ShellEvent::BackPressed => {
                if self.tabs.current_mut().is_some_and(Tab::go_back) {
                    self.show_current_tab();
                }
            }
            ShellEvent::ForwardPressed => {
                if self.tabs.current_mut().is_some_and(Tab::go_forward) {
                    self.show_current_tab();
                }
            }
            ShellEvent::SharePressed => {
                if let Some(url) = self.tabs.current().and_then(Tab::url) {
                    self.view.share(url);
                }
            }
            ShellEvent::SaveLinkPressed => {
                if let Some(link) = self.tabs.current().and_then(Tab::link) {
                    tracing::info!(url = %link.url, "Saved quick link");
                    self.view.link_saved(&link);
                }
            }
            ShellEvent::NewTab => self.attach_home_tab()?,
            ShellEvent::SelectTab(index) => self.select_tab(index)?,
            ShellEvent::RemoveTab(index) => self.remove_and_reselect(index)?,
            ShellEvent::OpenInNewTab(url) => {
                tracing::info!(url = %url, "Opening link in new tab");
                let index = self.tabs.add(Tab::web(url));
                self.select_tab(index)?;
            }
            ShellEvent::HomeActivatedOmniBar => {
                if let Some(tab) = self.tabs.current_mut() {
                    tab.omni_bar_was_activated();
                }
                self.view.focus_address_bar();
            }
            ShellEvent::HomeDeactivatedOmniBar => {
                self.view.blur_address_bar();
                self.view.render_address_text(None);
            }
        }

        Ok(())
    }

    /// Apply a finished suggestion fetch. Stale completions are dropped
    /// without touching the view.
    pub fn on_suggestions_fetched(&mut self, completion: FetchCompletion) {
        if self.autocomplete.on_completion(completion).is_some() {
            self.render_suggestions();
        }
    }

    /// Remove a tab and select its successor: the tab that slid into its
    /// slot, or the new last tab. Removing the only tab attaches a new Home tab.
    pub fn remove_and_reselect(&mut self, index: usize) -> Result<()> {
        self.tabs.remove(index)?;

        match self.tabs.reselection_after_remove(index) {
            Reselection::NeedsDefaultTab => self.attach_home_tab(),
            Reselection::Select(next) => self.select_tab(next),
        }
    }

    pub fn clear_all_tabs(&mut self) -> Result<()> {
        self.tabs.clear_all();
        self.attach_home_tab()
    }

    fn attach_home_tab(&mut self) -> Result<()> {
        let index = self.tabs.add(Tab::home());
        self.select_tab(index)
    }

    fn select_tab(&mut self, index: usize) -> Result<()> {
        self.tabs.select(index)?;
        self.show_current_tab();
        Ok(())
    }

    fn load_in_current_tab(&mut self, text: &str) {
        let Some(resolution) = self.resolver.resolve(text) else {
            return;
        };
        let Some(tab) = self.tabs.current_mut() else {
            return;
        };

        let url = resolution.into_url();
        tracing::info!(url = %url, "Loading in current tab");
        tab.load(url);
        self.show_current_tab();
    }

    fn show_current_tab(&mut self) {
        if let Some(tab) = self.tabs.current() {
            self.view.show_tab(tab);
        }
        self.refresh_controls();
    }

    fn refresh_controls(&mut self) {
        let (address, back, forward) = match self.tabs.current() {
            Some(tab) => (
                tab.url().filter(|_| tab.shows_url_in_omni_bar()),
                tab.can_go_back(),
                tab.can_go_forward(),
            ),
            None => (None, false, false),
        };

        self.view.render_address_text(address);
        self.view.render_tab_count(self.tabs.len());
        self.view.render_navigation_enabled(back, forward);
    }

    fn render_suggestions(&mut self) {
        let rows = self.autocomplete.rows();
        self.view.render_suggestions(self.autocomplete.query(), &rows);
    }

    fn apply_overlay_effects(&mut self, effects: Vec<OverlayEffect>) {
        for effect in effects {
            match effect {
                OverlayEffect::ShowOverlay => self.view.show_overlay(),
                OverlayEffect::HideOverlay => {
                    // A result arriving for a hidden overlay is stale
                    self.autocomplete.cancel();
                    self.view.hide_overlay();
                }
                OverlayEffect::RequestSuggestions(text) => {
                    if self.autocomplete.update_query(&text) == QueryUpdate::NoSuggestions {
                        self.render_suggestions();
                    }
                }
                OverlayEffect::FocusAddressBar => {
                    if let Some(tab) = self.tabs.current_mut() {
                        tab.omni_bar_was_activated();
                    }
                    self.view.focus_address_bar();
                }
                OverlayEffect::BlurAddressBar => self.view.blur_address_bar(),
                OverlayEffect::NotifyTabDismissed => {
                    if let Some(tab) = self.tabs.current_mut() {
                        tab.omni_bar_was_dismissed();
                    }
                }
            }
        }
    }
}
