//! Input resolution for the address bar
//!
//! Submitted text and chosen suggestions both go through here before a tab
//! loads anything.

use std::net::IpAddr;
use url::{form_urlencoded, Url};

use crate::error::NavigationError;
use crate::Result;

pub const DEFAULT_SEARCH_TEMPLATE: &str = "https://duckduckgo.com/?q=%s";

/// Result of resolving address bar input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResolution {
    /// The input was a URL or host
    Navigate(Url),
    /// The input is a search query; the URL points at the search engine
    Search(Url),
}

impl InputResolution {
    pub fn url(&self) -> &Url {
        match self {
            InputResolution::Navigate(url) | InputResolution::Search(url) => url,
        }
    }

    pub fn into_url(self) -> Url {
        match self {
            InputResolution::Navigate(url) | InputResolution::Search(url) => url,
        }
    }
}

#[derive(Debug, Clone)]
pub struct InputResolver {
    /// Search engine URL template (%s replaced with query)
    search_template: String,
}

impl InputResolver {
    pub fn new() -> Self {
        Self {
            search_template: DEFAULT_SEARCH_TEMPLATE.to_string(),
        }
    }

    pub fn with_search_engine(template: String) -> Result<Self> {
        Self::validate_template(&template)?;
        Ok(Self {
            search_template: template,
        })
    }

    pub fn search_template(&self) -> &str {
        &self.search_template
    }

    /// Check that `template` yields a valid URL once `%s` is filled in.
    pub fn validate_template(template: &str) -> Result<()> {
        if !template.contains("%s") || Url::parse(&template.replace("%s", "query")).is_err() {
            return Err(NavigationError::InvalidSearchTemplate(template.to_string()));
        }
        Ok(())
    }

    /// Resolve user input into something to load. Blank input resolves to nothing.
    pub fn resolve(&self, input: &str) -> Option<InputResolution> {
        let input = input.trim();

        if input.is_empty() {
            return None;
        }

        if let Some(url) = self.try_parse_url(input) {
            return Some(InputResolution::Navigate(url));
        }

        match self.build_search_url(input) {
            Ok(url) => Some(InputResolution::Search(url)),
            Err(e) => {
                tracing::warn!(error = %e, "Could not build search URL");
                None
            }
        }
    }

    /// Try to parse input as a valid URL
    fn try_parse_url(&self, input: &str) -> Option<Url> {
        // Direct URL with scheme
        if input.starts_with("http://") || input.starts_with("https://") {
            if let Ok(url) = Url::parse(input) {
                return Some(url);
            }
        }

        // URL without scheme - check if it looks like a host
        if self.looks_like_url(input) {
            let (host, rest) = split_host_and_rest(input);
            let with_https = if is_ipv6_host(host) && !host.starts_with('[') {
                format!("https://[{}]{}", host, rest)
            } else {
                format!("https://{}{}", host, rest)
            };

            if let Ok(url) = Url::parse(&with_https) {
                return Some(url);
            }
        }

        if input.starts_with("file://") || input.starts_with("about:") || input.starts_with("data:")
        {
            return Url::parse(input).ok();
        }

        None
    }

    /// Heuristic check if input looks like a URL
    fn looks_like_url(&self, input: &str) -> bool {
        if input.contains(' ') {
            return false;
        }

        let (host, _) = split_host_and_rest(input);
        if host.starts_with("localhost") || parse_ip_host(host).is_some() {
            return true;
        }

        // Domain-like: the last label (minus any port) is alphabetic, 2+ chars
        let host = host.split(':').next().unwrap_or(host);
        match host.rsplit_once('.') {
            Some((name, tld)) if !name.is_empty() => {
                tld.chars().count() >= 2 && tld.chars().all(|c| c.is_alphabetic())
            }
            _ => false,
        }
    }

    fn build_search_url(&self, query: &str) -> Result<Url> {
        let encoded: String = form_urlencoded::byte_serialize(query.as_bytes()).collect();
        let raw = self.search_template.replace("%s", &encoded);
        Url::parse(&raw).map_err(|_| NavigationError::InvalidUrl(raw))
    }
}

impl Default for InputResolver {
    fn default() -> Self {
        Self::new()
    }
}

fn is_ipv6_host(host: &str) -> bool {
    matches!(parse_ip_host(host), Some(IpAddr::V6(_)))
}

fn parse_ip_host(host: &str) -> Option<IpAddr> {
    let host = host.trim();
    if host.is_empty() {
        return None;
    }

    let host = if let Some(bracketed) = host.strip_prefix('[') {
        bracketed.split(']').next().unwrap_or(bracketed)
    } else if host.matches(':').count() == 1 {
        host.split(':').next().unwrap_or(host)
    } else {
        host
    };

    host.parse().ok()
}

fn split_host_and_rest(input: &str) -> (&str, &str) {
    let cut = ['/', '?', '#']
        .iter()
        .filter_map(|ch| input.find(*ch))
        .min()
        .unwrap_or(input.len());

    input.split_at(cut)
}
