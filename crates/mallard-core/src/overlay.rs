//! Suggestion overlay state machine
//!
//! ```text
//! Hidden ──query edited──▶ Visible ──query edited──▶ Visible
//!    ▲                        │
//!    └── submitted / dismissed / size class changed
//! ```
//!
//! Transitions don't touch the view directly; they return the effects the
//! shell has to carry out, in order.

/// Current overlay state. Suggestion data lives in the autocomplete controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayState {
    Hidden,
    Visible(String),
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OverlayEffect {
    /// Create and attach the overlay surface
    ShowOverlay,
    /// Detach and release the overlay surface
    HideOverlay,
    RequestSuggestions(String),
    FocusAddressBar,
    BlurAddressBar,
    /// Tell the current tab the overlay went away
    NotifyTabDismissed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum HideReason {
    Submitted,
    Dismissed,
    SizeClassChanged,
}

#[derive(Debug)]
pub struct OverlayStateMachine {
    state: OverlayState,
    /// Number of times the overlay surface has been attached
    sessions: u64,
}

impl OverlayStateMachine {
    pub fn new() -> Self {
        Self {
            state: OverlayState::Hidden,
            sessions: 0,
        }
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, OverlayState::Visible(_))
    }

    pub fn sessions(&self) -> u64 {
        self.sessions
    }

    pub fn on_query_edited(&mut self, text: &str) -> Vec<OverlayEffect> {
        let mut effects = Vec::with_capacity(3);

        if !self.is_visible() {
            self.sessions += 1;
            tracing::debug!(session = self.sessions, "Showing suggestion overlay");
            effects.push(OverlayEffect::ShowOverlay);
        }

        self.state = OverlayState::Visible(text.to_string());
        effects.push(OverlayEffect::RequestSuggestions(text.to_string()));
        effects.push(OverlayEffect::FocusAddressBar);
        effects
    }

    pub fn on_query_submitted(&mut self) -> Vec<OverlayEffect> {
        self.hide(HideReason::Submitted)
    }

    pub fn on_dismiss_requested(&mut self) -> Vec<OverlayEffect> {
        self.hide(HideReason::Dismissed)
    }

    /// Rotation or other layout change.
    pub fn on_size_class_changed(&mut self) -> Vec<OverlayEffect> {
        self.hide(HideReason::SizeClassChanged)
    }

    fn hide(&mut self, reason: HideReason) -> Vec<OverlayEffect> {
        if !self.is_visible() {
            return Vec::new();
        }

        self.state = OverlayState::Hidden;
        tracing::debug!(session = self.sessions, ?reason, "Hiding suggestion overlay");

        vec![
            OverlayEffect::HideOverlay,
            OverlayEffect::BlurAddressBar,
            OverlayEffect::NotifyTabDismissed,
        ]
    }
}

impl Default for OverlayStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_edit_shows_overlay() {
        let mut overlay = OverlayStateMachine::new();
        let effects = overlay.on_query_edited("d");

        assert_eq!(
            effects,
            vec![
                OverlayEffect::ShowOverlay,
                OverlayEffect::RequestSuggestions("d".to_string()),
                OverlayEffect::FocusAddressBar,
            ]
        );
        assert_eq!(overlay.state(), &OverlayState::Visible("d".to_string()));
        assert_eq!(overlay.sessions(), 1);
    }

    #[test]
    fn test_repeated_edits_reuse_overlay() {
        let mut overlay = OverlayStateMachine::new();
        overlay.on_query_edited("d");
        let effects = overlay.on_query_edited("du");

        assert!(!effects.contains(&OverlayEffect::ShowOverlay));
        assert_eq!(overlay.state(), &OverlayState::Visible("du".to_string()));
        assert_eq!(overlay.sessions(), 1);
    }

    #[test]
    fn test_dismiss_twice_is_noop() {
        let mut overlay = OverlayStateMachine::new();
        overlay.on_query_edited("duck");

        let first = overlay.on_dismiss_requested();
        assert_eq!(
            first,
            vec![
                OverlayEffect::HideOverlay,
                OverlayEffect::BlurAddressBar,
                OverlayEffect::NotifyTabDismissed,
            ]
        );

        assert!(overlay.on_dismiss_requested().is_empty());
        assert_eq!(overlay.state(), &OverlayState::Hidden);
    }

    #[test]
    fn test_submit_and_rotation_hide() {
        let mut overlay = OverlayStateMachine::new();
        overlay.on_query_edited("duck");
        assert!(overlay.on_query_submitted().contains(&OverlayEffect::HideOverlay));
        assert!(!overlay.is_visible());

        overlay.on_query_edited("goose");
        assert_eq!(overlay.sessions(), 2);
        assert!(overlay
            .on_size_class_changed()
            .contains(&OverlayEffect::HideOverlay));
        assert!(overlay.on_size_class_changed().is_empty());
    }

    #[test]
    fn test_hide_while_hidden_does_nothing() {
        let mut overlay = OverlayStateMachine::new();
        assert!(overlay.on_query_submitted().is_empty());
        assert!(overlay.on_dismiss_requested().is_empty());
        assert_eq!(overlay.sessions(), 0);
    }
}
