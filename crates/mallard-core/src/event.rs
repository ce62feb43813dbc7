//! Inputs to the shell

use url::Url;

/// Everything the shell reacts to, from the address bar, toolbar and tab
/// switcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// The address bar text changed
    QueryEdited(String),
    /// The address bar text was submitted
    QuerySubmitted(String),
    /// A row of the suggestion overlay was tapped
    SuggestionSelected(usize),
    DismissRequested,
    /// Rotation or another layout change
    SizeClassChanged,
    /// The address bar action button clears every tab
    ActionButtonPressed,
    RefreshPressed,
    BackPressed,
    ForwardPressed,
    SharePressed,
    SaveLinkPressed,
    NewTab,
    SelectTab(usize),
    RemoveTab(usize),
    ClearAllTabs,
    /// A page asked to open a link in a new tab
    OpenInNewTab(Url),
    /// The Home page asked for the address bar
    HomeActivatedOmniBar,
    /// The Home page gave up the address bar; its text is cleared
    HomeDeactivatedOmniBar,
}
