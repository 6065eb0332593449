// LogTranslator - core/model.rs
//
// Core data types shared between the translation worker and the UI thread.

/// Result of translating one pasted log.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Translation {
    /// The translated text.
    pub text: String,

    /// Number of keyword replacements made across all rules.
    pub substitutions: usize,
}

/// Messages sent from the translation worker to the UI thread.
///
/// Every message carries the ticket of the request that produced it so the
/// receiver can discard anything that belongs to a superseded request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranslationProgress {
    /// The simulated delay elapsed and the translation is ready.
    Completed { ticket: u64, translation: Translation },

    /// The request was cancelled before it completed.
    Cancelled { ticket: u64 },
}

impl TranslationProgress {
    /// Ticket of the request this message belongs to.
    pub fn ticket(&self) -> u64 {
        match self {
            Self::Completed { ticket, .. } | Self::Cancelled { ticket } => *ticket,
        }
    }
}
