//! Tab data structures
//!
//! A tab is either the Home screen or a web page. Both expose the same
//! capability surface to the shell: URL, back/forward availability and
//! whether the address bar should show the URL.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;
use uuid::Uuid;

/// Saved-link descriptor, also used by the tab switcher to list open tabs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub title: String,
    pub url: Url,
}

#[derive(Debug, Clone)]
pub struct HomeTab {
    /// Unique identifier
    pub id: String,
    /// When the tab was opened
    pub opened_at: DateTime<Utc>,
    editing_query: bool,
}

impl HomeTab {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            opened_at: Utc::now(),
            editing_query: false,
        }
    }
}

impl Default for HomeTab {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, Clone)]
pub struct WebTab {
    /// Unique identifier
    pub id: String,
    /// When the tab was opened
    pub opened_at: DateTime<Utc>,
    current: Url,
    back: Vec<Url>,
    forward: Vec<Url>,
    editing_query: bool,
}

impl WebTab {
    pub fn new(url: Url) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            opened_at: Utc::now(),
            current: url,
            back: Vec::new(),
            forward: Vec::new(),
            editing_query: false,
        }
    }

    pub fn url(&self) -> &Url {
        &self.current
    }

    /// Navigate to a new page. The forward history is discarded.
    pub fn load(&mut self, url: Url) {
        let previous = std::mem::replace(&mut self.current, url);
        self.back.push(previous);
        self.forward.clear();
    }

    pub fn go_back(&mut self) -> bool {
        match self.back.pop() {
            Some(url) => {
                let previous = std::mem::replace(&mut self.current, url);
                self.forward.push(previous);
                true
            }
            None => false,
        }
    }

    pub fn go_forward(&mut self) -> bool {
        match self.forward.pop() {
            Some(url) => {
                let previous = std::mem::replace(&mut self.current, url);
                self.back.push(previous);
                true
            }
            None => false,
        }
    }

    pub fn link(&self) -> Link {
        let title = self
            .current
            .host_str()
            .map(str::to_string)
            .unwrap_or_else(|| self.current.to_string());
        Link {
            title,
            url: self.current.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Tab {
    Home(HomeTab),
    Web(WebTab),
}

impl Tab {
    pub fn home() -> Self {
        Tab::Home(HomeTab::new())
    }

    pub fn web(url: Url) -> Self {
        Tab::Web(WebTab::new(url))
    }

    pub fn id(&self) -> &str {
        match self {
            Tab::Home(home) => &home.id,
            Tab::Web(web) => &web.id,
        }
    }

    pub fn opened_at(&self) -> DateTime<Utc> {
        match self {
            Tab::Home(home) => home.opened_at,
            Tab::Web(web) => web.opened_at,
        }
    }

    pub fn is_home(&self) -> bool {
        matches!(self, Tab::Home(_))
    }

    /// Home tabs keep the address bar empty.
    pub fn shows_url_in_omni_bar(&self) -> bool {
        matches!(self, Tab::Web(_))
    }

    pub fn url(&self) -> Option<&Url> {
        match self {
            Tab::Home(_) => None,
            Tab::Web(web) => Some(web.url()),
        }
    }

    pub fn can_go_back(&self) -> bool {
        match self {
            Tab::Home(_) => false,
            Tab::Web(web) => !web.back.is_empty(),
        }
    }

    pub fn can_go_forward(&self) -> bool {
        match self {
            Tab::Home(_) => false,
            Tab::Web(web) => !web.forward.is_empty(),
        }
    }

    pub fn link(&self) -> Option<Link> {
        match self {
            Tab::Home(_) => None,
            Tab::Web(web) => Some(web.link()),
        }
    }

    /// Load a URL in this tab.
    ///
    /// A Home tab has no page to navigate from, so it is replaced in place by
    /// a fresh Web tab (with a new id) showing `url`.
    pub fn load(&mut self, url: Url) {
        match self {
            Tab::Home(_) => {
                tracing::debug!(url = %url, "Home tab becomes web tab");
                *self = Tab::web(url);
            }
            Tab::Web(web) => web.load(url),
        }
    }

    /// Returns false when there is no history to go back to.
    pub fn go_back(&mut self) -> bool {
        match self {
            Tab::Home(_) => false,
            Tab::Web(web) => web.go_back(),
        }
    }

    pub fn go_forward(&mut self) -> bool {
        match self {
            Tab::Home(_) => false,
            Tab::Web(web) => web.go_forward(),
        }
    }

    /// The URL to request again, if this tab shows a page.
    pub fn reload(&self) -> Option<&Url> {
        self.url()
    }

    /// The address bar gained focus while this tab was current.
    pub fn omni_bar_was_activated(&mut self) {
        self.set_editing_query(true);
    }

    /// The suggestion overlay went away while this tab was current.
    pub fn omni_bar_was_dismissed(&mut self) {
        self.set_editing_query(false);
    }

    pub fn is_editing_query(&self) -> bool {
        match self {
            Tab::Home(home) => home.editing_query,
            Tab::Web(web) => web.editing_query,
        }
    }

    fn set_editing_query(&mut self, editing: bool) {
        match self {
            Tab::Home(home) => home.editing_query = editing,
            Tab::Web(web) => web.editing_query = editing,
        }
    }
}
