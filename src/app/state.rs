// LogTranslator - app/state.rs
//
// Page state: the pasted input, the translated output, and the in-progress
// flag, plus the status/dialog flags the UI panels read and set.
// Owned by `TranslatorPage`. Control availability is always derived from
// these fields by the predicates below, never stored.

use crate::core::model::Translation;
use crate::core::translate::is_blank;

/// Top-level page state.
#[derive(Debug, Default)]
pub struct AppState {
    /// Text in the input box. Updated on every keystroke.
    pub input: String,

    /// Translated text. Written only when a translation is applied.
    pub output: String,

    /// True from the moment a translation starts until it completes or is
    /// cancelled.
    pub in_progress: bool,

    /// Ticket of the in-flight translation, if any.
    pub pending_ticket: Option<u64>,

    /// Next ticket to hand out.
    next_ticket: u64,

    /// Replacement count from the most recently applied translation.
    pub last_substitutions: Option<usize>,

    /// Status message for the status bar.
    pub status_message: String,

    /// Set by a panel when the user asked to translate.
    pub request_translate: bool,

    /// Set by a panel when the user asked to clear.
    pub request_clear: bool,

    /// Whether to show the About dialog.
    pub show_about: bool,
}

impl AppState {
    /// Create the initial (empty) state.
    pub fn new() -> Self {
        Self {
            status_message: "Ready.".to_string(),
            ..Default::default()
        }
    }

    /// Translate is available: not in progress and the input has content.
    pub fn can_translate(&self) -> bool {
        !self.in_progress && !is_blank(&self.input)
    }

    /// Clear is available: not in progress and there is something to clear.
    pub fn can_clear(&self) -> bool {
        !self.in_progress && (!self.input.is_empty() || !self.output.is_empty())
    }

    /// Copy is available whenever there is output.
    pub fn can_copy_output(&self) -> bool {
        !self.output.is_empty()
    }

    /// The output region shows the placeholder prompt instead of output.
    pub fn shows_placeholder(&self) -> bool {
        self.output.is_empty()
    }

    /// Mark a translation as started and capture the input it will use.
    ///
    /// Returns `None` (and changes nothing) when translate is unavailable.
    pub fn begin_translation(&mut self) -> Option<(u64, String)> {
        if !self.can_translate() {
            return None;
        }
        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.pending_ticket = Some(ticket);
        self.in_progress = true;
        self.status_message = "Translating...".to_string();
        Some((ticket, self.input.clone()))
    }

    /// Apply a finished translation.
    ///
    /// Ignored (returns false) unless `ticket` is the pending one, so a
    /// completion for a cleared or superseded request never lands.
    pub fn complete_translation(&mut self, ticket: u64, translation: Translation) -> bool {
        if self.pending_ticket != Some(ticket) {
            tracing::debug!(ticket, pending = ?self.pending_ticket, "Discarding stale translation");
            return false;
        }
        self.pending_ticket = None;
        self.in_progress = false;
        self.status_message = format!(
            "Translation complete: {} substitution(s).",
            translation.substitutions
        );
        self.last_substitutions = Some(translation.substitutions);
        self.output = translation.text;
        true
    }

    /// Drop the pending translation without applying anything.
    pub fn abandon_translation(&mut self, ticket: u64) -> bool {
        if self.pending_ticket != Some(ticket) {
            return false;
        }
        self.pending_ticket = None;
        self.in_progress = false;
        true
    }

    /// Reset input and output to empty.
    ///
    /// Also releases any pending translation; returns its ticket so the
    /// caller can cancel the worker.
    pub fn clear_all(&mut self) -> Option<u64> {
        let cancelled = self.pending_ticket.take();
        self.in_progress = false;
        self.input.clear();
        self.output.clear();
        self.last_substitutions = None;
        self.status_message = "Cleared.".to_string();
        cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translation(text: &str, substitutions: usize) -> Translation {
        Translation {
            text: text.to_string(),
            substitutions,
        }
    }

    #[test]
    fn test_initial_state() {
        let state = AppState::new();
        assert!(state.input.is_empty());
        assert!(state.output.is_empty());
        assert!(!state.in_progress);
        assert!(!state.can_translate());
        assert!(!state.can_clear());
        assert!(state.shows_placeholder());
    }

    #[test]
    fn test_blank_input_cannot_translate() {
        let mut state = AppState::new();
        state.input = " \n\t ".to_string();
        assert!(!state.can_translate());
        assert!(state.begin_translation().is_none());
        assert!(!state.in_progress);
        // Whitespace still counts as something to clear.
        assert!(state.can_clear());
    }

    #[test]
    fn test_begin_captures_input_and_gates_controls() {
        let mut state = AppState::new();
        state.input = "exception raised".to_string();
        let (ticket, captured) = state.begin_translation().unwrap();
        assert_eq!(captured, "exception raised");
        assert_eq!(state.pending_ticket, Some(ticket));
        assert!(state.in_progress);
        assert!(!state.can_translate());
        assert!(!state.can_clear());
        assert!(state.begin_translation().is_none());
    }

    #[test]
    fn test_complete_applies_matching_ticket() {
        let mut state = AppState::new();
        state.input = "failed".to_string();
        let (ticket, _) = state.begin_translation().unwrap();
        assert!(state.complete_translation(ticket, translation("FAILURE OCCURRED", 1)));
        assert_eq!(state.output, "FAILURE OCCURRED");
        assert!(!state.in_progress);
        assert_eq!(state.last_substitutions, Some(1));
        assert!(!state.shows_placeholder());
        assert!(state.can_clear());
    }

    #[test]
    fn test_complete_ignores_stale_ticket() {
        let mut state = AppState::new();
        state.input = "error".to_string();
        let (ticket, _) = state.begin_translation().unwrap();
        let cancelled = state.clear_all();
        assert_eq!(cancelled, Some(ticket));
        assert!(!state.complete_translation(ticket, translation("ERROR DETECTED", 1)));
        assert!(state.output.is_empty());
        assert!(state.input.is_empty());
        assert!(!state.in_progress);
    }

    #[test]
    fn test_tickets_are_unique() {
        let mut state = AppState::new();
        state.input = "a".to_string();
        let (first, _) = state.begin_translation().unwrap();
        state.complete_translation(first, translation("a", 0));
        let (second, _) = state.begin_translation().unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_clear_all_from_any_state() {
        let mut state = AppState::new();
        state.input = "x".to_string();
        state.output = "y".to_string();
        assert_eq!(state.clear_all(), None);
        assert!(state.input.is_empty() && state.output.is_empty());

        // Clearing an already-empty page is still fine.
        state.clear_all();
        assert!(state.input.is_empty() && state.output.is_empty());
    }

    #[test]
    fn test_abandon_resets_flag() {
        let mut state = AppState::new();
        state.input = "x".to_string();
        let (ticket, _) = state.begin_translation().unwrap();
        assert!(!state.abandon_translation(ticket + 1));
        assert!(state.in_progress);
        assert!(state.abandon_translation(ticket));
        assert!(!state.in_progress);
        assert!(state.output.is_empty());
    }
}
