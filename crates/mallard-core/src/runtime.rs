//! Shell event loop
//!
//! The shell runs as a single tokio task. User events arrive over one
//! channel and fetch completions over another; both are handled in turn on
//! that task, so no two mutations of shell state ever overlap.

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use mallard_autocomplete::SuggestionSource;

use crate::error::CoreError;
use crate::event::ShellEvent;
use crate::shell::BrowserShell;
use crate::view::ShellView;
use crate::Result;

/// Sends events to a running shell. Cheap to clone.
#[derive(Debug, Clone)]
pub struct ShellHandle {
    events: mpsc::UnboundedSender<ShellEvent>,
}

impl ShellHandle {
    pub fn send(&self, event: ShellEvent) -> Result<()> {
        self.events.send(event).map_err(|_| CoreError::ShellClosed)
    }

    pub fn is_closed(&self) -> bool {
        self.events.is_closed()
    }
}

impl<S, V> BrowserShell<S, V>
where
    S: SuggestionSource + 'static,
    V: ShellView,
{
    /// Start the event loop on the current tokio runtime. The loop ends once
    /// every handle has been dropped; the join handle yields the shell back.
    pub fn spawn(self) -> (ShellHandle, JoinHandle<Self>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let task = tokio::spawn(self.run(rx));
        (ShellHandle { events: tx }, task)
    }

    pub async fn run(mut self, mut events: mpsc::UnboundedReceiver<ShellEvent>) -> Self {
        tracing::info!("Shell event loop started");

        loop {
            tokio::select! {
                event = events.recv() => match event {
                    Some(event) => {
                        if let Err(e) = self.handle_event(event) {
                            tracing::error!(error = %e, "Shell event failed");
                        }
                    }
                    None => break,
                },
                Some(completion) = self.completions.recv() => {
                    self.on_suggestions_fetched(completion);
                }
            }
        }

        tracing::info!("Shell event loop stopped");
        self
    }
}
