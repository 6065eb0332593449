// LogTranslator - tests/e2e_translation.rs
//
// End-to-end tests for the translator page.
//
// These drive `TranslatorPage` exactly as the GUI does: set the input,
// translate, poll each "frame" until the worker reports back. Real worker
// threads, real delays (kept short), no mocks.

use logtranslator::app::page::TranslatorPage;
use logtranslator::core::translate::{KeywordTranslator, Translator};
use std::sync::Arc;
use std::time::{Duration, Instant};

// =============================================================================
// Helpers
// =============================================================================

fn page_with_delay(ms: u64) -> TranslatorPage {
    let translator: Arc<dyn Translator> = Arc::new(KeywordTranslator::new().unwrap());
    TranslatorPage::new(translator, Duration::from_millis(ms))
}

/// Poll like the UI loop until the translation settles or `timeout` passes.
fn settle(page: &mut TranslatorPage, timeout: Duration) {
    let deadline = Instant::now() + timeout;
    while page.state.in_progress && Instant::now() < deadline {
        page.poll();
        std::thread::sleep(Duration::from_millis(5));
    }
    page.poll();
}

// =============================================================================
// Translate
// =============================================================================

#[test]
fn e2e_connection_failed_scenario() {
    let mut page = page_with_delay(20);
    page.state.input = "Error: connection failed".to_string();

    assert!(page.translate());
    assert!(page.state.in_progress);
    assert!(page.state.output.is_empty(), "output must wait for the delay");

    settle(&mut page, Duration::from_secs(5));
    assert!(!page.state.in_progress);
    assert_eq!(page.state.output, "ERROR DETECTED: connection FAILURE OCCURRED");
    assert_eq!(page.state.last_substitutions, Some(2));
}

#[test]
fn e2e_delay_is_respected() {
    let mut page = page_with_delay(150);
    page.state.input = "exception".to_string();
    let started = Instant::now();
    page.translate();

    std::thread::sleep(Duration::from_millis(30));
    page.poll();
    assert!(page.state.in_progress);
    assert!(page.state.output.is_empty());

    settle(&mut page, Duration::from_secs(5));
    assert!(started.elapsed() >= Duration::from_millis(150));
    assert_eq!(page.state.output, "EXCEPTION THROWN");
}

#[test]
fn e2e_multiline_whitespace_preserved() {
    let mut page = page_with_delay(0);
    let input = "2024-01-01 ERROR db\n\n    at Foo (failed)\r\n\tjava.lang.Exception: boom ";
    page.state.input = input.to_string();
    page.translate();
    settle(&mut page, Duration::from_secs(5));
    assert_eq!(
        page.state.output,
        "2024-01-01 ERROR DETECTED db\n\n    at Foo (FAILURE OCCURRED)\r\n\tjava.lang.EXCEPTION THROWN: boom "
    );
}

#[test]
fn e2e_output_uses_captured_input() {
    let mut page = page_with_delay(80);
    page.state.input = "first error".to_string();
    page.translate();

    // User keeps typing while the translation is pending.
    page.state.input = "something else entirely".to_string();

    settle(&mut page, Duration::from_secs(5));
    assert_eq!(page.state.output, "first ERROR DETECTED");
    assert_eq!(page.state.input, "something else entirely");
}

#[test]
fn e2e_blank_input_is_noop() {
    for input in ["", "   ", "\n\t\r\n", "\u{feff}"] {
        let mut page = page_with_delay(0);
        page.state.output = "previous".to_string();
        page.state.input = input.to_string();

        assert!(!page.state.can_translate());
        assert!(!page.translate());
        assert!(!page.state.in_progress);

        std::thread::sleep(Duration::from_millis(20));
        assert!(!page.poll());
        assert_eq!(page.state.output, "previous");
    }
}

#[test]
fn e2e_translate_while_pending_is_noop() {
    let mut page = page_with_delay(100);
    page.state.input = "failed once".to_string();
    assert!(page.translate());
    let ticket = page.state.pending_ticket;

    page.state.input = "failed twice".to_string();
    assert!(!page.translate());
    assert_eq!(page.state.pending_ticket, ticket);

    settle(&mut page, Duration::from_secs(5));
    assert_eq!(page.state.output, "FAILURE OCCURRED once");
}

#[test]
fn e2e_translate_again_after_completion() {
    let mut page = page_with_delay(0);
    page.state.input = "error".to_string();
    page.translate();
    settle(&mut page, Duration::from_secs(5));
    assert_eq!(page.state.output, "ERROR DETECTED");

    page.state.input = "failed".to_string();
    assert!(page.translate());
    settle(&mut page, Duration::from_secs(5));
    assert_eq!(page.state.output, "FAILURE OCCURRED");
}

// =============================================================================
// Clear
// =============================================================================

#[test]
fn e2e_clear_before_delay_never_resurrects_output() {
    let mut page = page_with_delay(150);
    page.state.input = "exception raised".to_string();
    page.translate();

    page.clear_all();
    assert!(page.state.input.is_empty());
    assert!(page.state.output.is_empty());
    assert!(!page.state.in_progress);

    // Outlive the original delay and keep polling.
    std::thread::sleep(Duration::from_millis(300));
    page.poll();
    page.poll();
    assert!(page.state.input.is_empty());
    assert!(page.state.output.is_empty());
    assert!(!page.state.in_progress);
}

#[test]
fn e2e_clear_after_completion() {
    let mut page = page_with_delay(0);
    page.state.input = "Build failed".to_string();
    page.translate();
    settle(&mut page, Duration::from_secs(5));
    assert!(page.state.can_clear());

    page.clear_all();
    assert!(page.state.input.is_empty());
    assert!(page.state.output.is_empty());
    assert!(page.state.shows_placeholder());
    assert!(!page.state.can_clear());
}

#[test]
fn e2e_request_flags_follow_predicates() {
    let mut page = page_with_delay(100);

    // Nothing to clear, blank input: both requests are dropped.
    page.state.request_clear = true;
    page.state.request_translate = true;
    page.process_requests();
    assert!(!page.state.in_progress);
    assert!(!page.state.request_clear && !page.state.request_translate);

    page.state.input = "error".to_string();
    page.state.request_translate = true;
    page.process_requests();
    assert!(page.state.in_progress);

    // The clear control is disabled while translating.
    page.state.request_clear = true;
    page.process_requests();
    assert_eq!(page.state.input, "error");
    assert!(page.state.in_progress);

    settle(&mut page, Duration::from_secs(5));
    page.state.request_clear = true;
    page.process_requests();
    assert!(page.state.input.is_empty());
    assert!(page.state.output.is_empty());
}

#[test]
fn e2e_keyword_page_constructor() {
    let mut page = TranslatorPage::with_keyword_translator(Duration::ZERO).unwrap();
    assert_eq!(page.delay(), Duration::ZERO);
    page.state.input = "EXCEPTION; Failed; error".to_string();
    page.translate();
    settle(&mut page, Duration::from_secs(5));
    assert_eq!(
        page.state.output,
        "EXCEPTION THROWN; FAILURE OCCURRED; ERROR DETECTED"
    );
    assert_eq!(page.state.last_substitutions, Some(3));
}
