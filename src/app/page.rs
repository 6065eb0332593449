// LogTranslator - app/page.rs
//
// The translator page controller. Owns the page state, the background
// translation manager, and the translator itself, and exposes the two user
// operations (translate, clear) plus the per-frame poll.

use crate::app::state::AppState;
use crate::app::translation::TranslationManager;
use crate::core::model::TranslationProgress;
use crate::core::translate::{KeywordTranslator, Translator};
use crate::util::error::Result;
use std::sync::Arc;
use std::time::Duration;

/// Controller for the single translator page.
pub struct TranslatorPage {
    pub state: AppState,
    manager: TranslationManager,
    translator: Arc<dyn Translator>,
    delay: Duration,
}

impl TranslatorPage {
    /// Create a page that translates with `translator` after `delay`.
    pub fn new(translator: Arc<dyn Translator>, delay: Duration) -> Self {
        Self {
            state: AppState::new(),
            manager: TranslationManager::new(),
            translator,
            delay,
        }
    }

    /// Create a page backed by the built-in keyword translator.
    pub fn with_keyword_translator(delay: Duration) -> Result<Self> {
        let translator = KeywordTranslator::new()?;
        Ok(Self::new(Arc::new(translator), delay))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Start translating the current input.
    ///
    /// No-op (returns false) when the input is blank or a translation is
    /// already pending.
    pub fn translate(&mut self) -> bool {
        let Some((ticket, input)) = self.state.begin_translation() else {
            tracing::debug!(
                in_progress = self.state.in_progress,
                "Translate ignored: preconditions not met"
            );
            return false;
        };

        match self
            .manager
            .start(ticket, input, self.delay, Arc::clone(&self.translator))
        {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, ticket, "Failed to start translation");
                self.state.abandon_translation(ticket);
                self.state.status_message = format!("Translation failed: {e}");
                false
            }
        }
    }

    /// Empty both input and output, cancelling any pending translation.
    pub fn clear_all(&mut self) {
        if let Some(ticket) = self.state.clear_all() {
            tracing::info!(ticket, "Pending translation cancelled by clear");
            self.manager.cancel();
        }
    }

    /// Drain worker messages and apply them. Returns true if any arrived.
    pub fn poll(&mut self) -> bool {
        let messages = self.manager.poll_progress();
        let had_messages = !messages.is_empty();
        for msg in messages {
            match msg {
                TranslationProgress::Completed {
                    ticket,
                    translation,
                } => {
                    let substitutions = translation.substitutions;
                    if self.state.complete_translation(ticket, translation) {
                        tracing::info!(ticket, substitutions, "Translation applied");
                    }
                }
                TranslationProgress::Cancelled { ticket } => {
                    // Normally already released by clear_all.
                    self.state.abandon_translation(ticket);
                }
            }
        }
        had_messages
    }

    /// Act on the request flags the panels set during the previous frame.
    pub fn process_requests(&mut self) {
        if self.state.request_clear {
            self.state.request_clear = false;
            if self.state.can_clear() {
                self.clear_all();
            }
        }
        if self.state.request_translate {
            self.state.request_translate = false;
            self.translate();
        }
    }
}
