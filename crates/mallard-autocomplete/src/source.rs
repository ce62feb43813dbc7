//! Suggestion source seam
//!
//! Where suggestions come from (network, parsing, ranking) is not this
//! crate's business. A source only has to turn a query into an ordered list.

use futures_util::future::BoxFuture;

use crate::suggestion::Suggestion;
use crate::Result;

pub trait SuggestionSource: Send + Sync {
    /// Look up completions for `query`, best first.
    ///
    /// The returned future may be dropped before it finishes when the query
    /// is superseded.
    fn fetch(&self, query: String) -> BoxFuture<'static, Result<Vec<Suggestion>>>;
}

impl<F> SuggestionSource for F
where
    F: Fn(String) -> BoxFuture<'static, Result<Vec<Suggestion>>> + Send + Sync,
{
    fn fetch(&self, query: String) -> BoxFuture<'static, Result<Vec<Suggestion>>> {
        self(query)
    }
}
