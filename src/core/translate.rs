// LogTranslator - core/translate.rs
//
// Keyword substitution engine behind the "translate" action.
// Core layer: pure logic, no I/O or UI dependencies.
//
// Rules are literal keywords matched case-insensitively and applied in order;
// each rule sees the output of the previous one.

use crate::core::model::Translation;
use crate::util::error::TranslateError;
use regex::{Regex, RegexBuilder};

/// Built-in keyword rules, in application order.
pub const KEYWORD_RULES: &[(&str, &str)] = &[
    ("error", "ERROR DETECTED"),
    ("failed", "FAILURE OCCURRED"),
    ("exception", "EXCEPTION THROWN"),
];

/// Something that turns a pasted log into its translated form.
pub trait Translator: Send + Sync {
    /// Short identifier, used in logs.
    fn name(&self) -> &str;

    /// Translate `text`. Must be total: every input produces an output.
    fn translate(&self, text: &str) -> Translation;
}

/// One compiled keyword rule.
#[derive(Debug, Clone)]
pub struct SubstitutionRule {
    pub keyword: String,
    pub replacement: String,
    regex: Regex,
}

impl SubstitutionRule {
    /// Compile a case-insensitive literal match for `keyword`.
    pub fn compile(keyword: &str, replacement: &str) -> Result<Self, TranslateError> {
        let regex = RegexBuilder::new(&regex::escape(keyword))
            .case_insensitive(true)
            .build()
            .map_err(|e| TranslateError::InvalidPattern {
                keyword: keyword.to_string(),
                source: e,
            })?;
        Ok(Self {
            keyword: keyword.to_string(),
            replacement: replacement.to_string(),
            regex,
        })
    }

    /// Replace every match in `text`, returning the new text and match count.
    pub fn apply(&self, text: &str) -> (String, usize) {
        let count = self.regex.find_iter(text).count();
        if count == 0 {
            return (text.to_string(), 0);
        }
        // NoExpand: replacements are literal text, `$` has no meaning.
        let replaced = self
            .regex
            .replace_all(text, regex::NoExpand(self.replacement.as_str()));
        (replaced.into_owned(), count)
    }
}

/// The keyword translator: three fixed substitutions.
#[derive(Debug, Clone)]
pub struct KeywordTranslator {
    rules: Vec<SubstitutionRule>,
}

impl KeywordTranslator {
    /// Build the translator from `KEYWORD_RULES`.
    pub fn new() -> Result<Self, TranslateError> {
        Self::with_rules(KEYWORD_RULES)
    }

    /// Build a translator from an explicit ordered rule list.
    pub fn with_rules(rules: &[(&str, &str)]) -> Result<Self, TranslateError> {
        let rules = rules
            .iter()
            .map(|(keyword, replacement)| SubstitutionRule::compile(keyword, replacement))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[SubstitutionRule] {
        &self.rules
    }
}

impl Translator for KeywordTranslator {
    fn name(&self) -> &str {
        "keyword"
    }

    fn translate(&self, text: &str) -> Translation {
        let mut current = text.to_string();
        let mut substitutions = 0;
        for rule in &self.rules {
            let (next, count) = rule.apply(&current);
            current = next;
            substitutions += count;
        }
        Translation {
            text: current,
            substitutions,
        }
    }
}

/// Translate `text` with the built-in keyword rules.
pub fn translate_log(text: &str) -> Result<Translation, TranslateError> {
    Ok(KeywordTranslator::new()?.translate(text))
}

/// True when `text` has no content once trimmed.
///
/// Trims the same set a browser does: Unicode whitespace plus the BOM.
pub fn is_blank(text: &str) -> bool {
    text.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translate(text: &str) -> Translation {
        KeywordTranslator::new().unwrap().translate(text)
    }

    #[test]
    fn test_connection_failed_example() {
        let t = translate("Error: connection failed");
        assert_eq!(t.text, "ERROR DETECTED: connection FAILURE OCCURRED");
        assert_eq!(t.substitutions, 2);
    }

    #[test]
    fn test_case_insensitive_and_global() {
        let t = translate("ERROR error ErRoR");
        assert_eq!(t.text, "ERROR DETECTED ERROR DETECTED ERROR DETECTED");
        assert_eq!(t.substitutions, 3);
    }

    #[test]
    fn test_matches_inside_words() {
        let t = translate("errors; NullPointerException; unfailed");
        assert_eq!(
            t.text,
            "ERROR DETECTEDs; NullPointerEXCEPTION THROWN; unFAILURE OCCURRED"
        );
    }

    #[test]
    fn test_whitespace_and_other_text_untouched() {
        let input = "  line one\n\tException at x\r\n\nok  ";
        let t = translate(input);
        assert_eq!(t.text, "  line one\n\tEXCEPTION THROWN at x\r\n\nok  ");
    }

    #[test]
    fn test_no_keywords_is_identity() {
        let t = translate("all systems nominal $1 ${x}");
        assert_eq!(t.text, "all systems nominal $1 ${x}");
        assert_eq!(t.substitutions, 0);
    }

    #[test]
    fn test_rules_apply_in_order() {
        // Later rules see the output of earlier ones.
        let tr = KeywordTranslator::with_rules(&[("a", "b"), ("b", "c")]).unwrap();
        assert_eq!(tr.translate("ab").text, "cc");
    }

    #[test]
    fn test_keyword_is_literal() {
        let tr = KeywordTranslator::with_rules(&[("a.b", "X")]).unwrap();
        assert_eq!(tr.translate("a.b axb").text, "X axb");
    }

    #[test]
    fn test_builtin_rule_order() {
        let tr = KeywordTranslator::new().unwrap();
        let keywords: Vec<_> = tr.rules().iter().map(|r| r.keyword.as_str()).collect();
        assert_eq!(keywords, ["error", "failed", "exception"]);
    }

    #[test]
    fn test_is_blank() {
        assert!(is_blank(""));
        assert!(is_blank("  \n\t "));
        assert!(is_blank("\u{feff}\u{a0}"));
        assert!(!is_blank(" x "));
    }

    #[test]
    fn test_translate_log_helper() {
        let t = translate_log("Build FAILED").unwrap();
        assert_eq!(t.text, "Build FAILURE OCCURRED");
    }
}
