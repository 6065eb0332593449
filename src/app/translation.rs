// LogTranslator - app/translation.rs
//
// Runs a translation on a background thread after the simulated delay and
// reports back to the UI thread over an mpsc channel.
//
// Architecture:
//   - `TranslationManager` lives on the UI thread; `run_translation` runs on
//     a short-lived worker thread.
//   - An `Arc<AtomicBool>` cancel flag lets the UI abandon a pending request.
//   - The worker sleeps in TRANSLATION_CANCEL_CHECK_INTERVAL_MS slices so a
//     cancel is noticed promptly instead of after the full delay.
//   - Every message carries the request ticket; the receiver decides whether
//     it is still current.

use crate::core::model::TranslationProgress;
use crate::core::translate::Translator;
use crate::util::constants::{TRANSLATION_CANCEL_CHECK_INTERVAL_MS, TRANSLATION_THREAD_NAME};
use crate::util::error::TranslateError;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::{Duration, Instant};

/// Manages the pending translation, if any.
pub struct TranslationManager {
    /// Channel receiver for the UI to poll progress messages.
    pub progress_rx: Option<mpsc::Receiver<TranslationProgress>>,

    /// Cancel flag shared with the worker.
    cancel_flag: Option<Arc<AtomicBool>>,
}

impl TranslationManager {
    pub fn new() -> Self {
        Self {
            progress_rx: None,
            cancel_flag: None,
        }
    }

    /// Start translating `input` after `delay`.
    ///
    /// Any previous request is cancelled first. Returns immediately.
    pub fn start(
        &mut self,
        ticket: u64,
        input: String,
        delay: Duration,
        translator: Arc<dyn Translator>,
    ) -> Result<(), TranslateError> {
        self.cancel();

        let (tx, rx) = mpsc::channel();
        let cancel = Arc::new(AtomicBool::new(false));
        let worker_cancel = Arc::clone(&cancel);

        std::thread::Builder::new()
            .name(TRANSLATION_THREAD_NAME.to_string())
            .spawn(move || {
                run_translation(ticket, input, delay, translator, tx, worker_cancel);
            })
            .map_err(|e| TranslateError::WorkerSpawn { source: e })?;

        self.progress_rx = Some(rx);
        self.cancel_flag = Some(cancel);

        tracing::info!(ticket, delay_ms = delay.as_millis() as u64, "Translation started");
        Ok(())
    }

    /// Request cancellation of the pending translation.
    /// The worker sends `TranslationProgress::Cancelled` and exits.
    pub fn cancel(&mut self) {
        if let Some(flag) = &self.cancel_flag {
            flag.store(true, Ordering::SeqCst);
            tracing::debug!("Translation cancel requested");
        }
        self.cancel_flag = None;
    }

    /// Poll for progress messages without blocking. Returns all pending messages.
    pub fn poll_progress(&self) -> Vec<TranslationProgress> {
        let mut messages = Vec::new();
        if let Some(ref rx) = self.progress_rx {
            while let Ok(msg) = rx.try_recv() {
                messages.push(msg);
            }
        }
        messages
    }
}

impl Default for TranslationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Worker body: wait out the delay, then translate and report.
fn run_translation(
    ticket: u64,
    input: String,
    delay: Duration,
    translator: Arc<dyn Translator>,
    tx: mpsc::Sender<TranslationProgress>,
    cancel: Arc<AtomicBool>,
) {
    let deadline = Instant::now() + delay;
    let slice = Duration::from_millis(TRANSLATION_CANCEL_CHECK_INTERVAL_MS);

    loop {
        if cancel.load(Ordering::SeqCst) {
            // Receiver may already be gone; nothing to do about it.
            let _ = tx.send(TranslationProgress::Cancelled { ticket });
            tracing::debug!(ticket, "Translation cancelled during delay");
            return;
        }
        let now = Instant::now();
        if now >= deadline {
            break;
        }
        std::thread::sleep(slice.min(deadline - now));
    }

    let translation = translator.translate(&input);

    if cancel.load(Ordering::SeqCst) {
        let _ = tx.send(TranslationProgress::Cancelled { ticket });
        return;
    }

    tracing::debug!(
        ticket,
        translator = translator.name(),
        input_len = input.len(),
        substitutions = translation.substitutions,
        "Translation finished"
    );
    let _ = tx.send(TranslationProgress::Completed {
        ticket,
        translation,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::translate::KeywordTranslator;

    fn translator() -> Arc<dyn Translator> {
        Arc::new(KeywordTranslator::new().unwrap())
    }

    /// Poll until a message arrives or `timeout` passes.
    fn wait_for_message(
        manager: &TranslationManager,
        timeout: Duration,
    ) -> Option<TranslationProgress> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Some(msg) = manager.poll_progress().into_iter().next() {
                return Some(msg);
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        None
    }

    #[test]
    fn test_completes_after_delay() {
        let mut manager = TranslationManager::new();
        let started = Instant::now();
        manager
            .start(7, "it failed".to_string(), Duration::from_millis(60), translator())
            .unwrap();
        assert!(manager.poll_progress().is_empty());

        let msg = wait_for_message(&manager, Duration::from_secs(5)).expect("no message");
        assert!(started.elapsed() >= Duration::from_millis(60));
        match msg {
            TranslationProgress::Completed {
                ticket,
                translation,
            } => {
                assert_eq!(ticket, 7);
                assert_eq!(translation.text, "it FAILURE OCCURRED");
            }
            other => panic!("expected Completed, got {other:?}"),
        }
    }

    #[test]
    fn test_cancel_during_delay() {
        let mut manager = TranslationManager::new();
        manager
            .start(1, "error".to_string(), Duration::from_secs(2), translator())
            .unwrap();
        manager.cancel();
        let msg = wait_for_message(&manager, Duration::from_secs(1)).expect("no message");
        assert_eq!(msg, TranslationProgress::Cancelled { ticket: 1 });
    }

    #[test]
    fn test_restart_cancels_previous() {
        let mut manager = TranslationManager::new();
        manager
            .start(1, "error".to_string(), Duration::from_secs(2), translator())
            .unwrap();
        manager
            .start(2, "failed".to_string(), Duration::ZERO, translator())
            .unwrap();
        // Only the second request's channel is polled.
        let msg = wait_for_message(&manager, Duration::from_secs(1)).expect("no message");
        assert_eq!(msg.ticket(), 2);
    }
}
