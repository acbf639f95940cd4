use std::sync::OnceLock;

use regex::Regex;

/// Lazily-compiled regex patterns used to strip markdown syntax before the
/// person/organization pass runs (spec §4.1's "Person / organization" rule).
mod patterns {
    use super::*;

    static CODE_FENCE: OnceLock<Regex> = OnceLock::new();
    static CODE_SPAN: OnceLock<Regex> = OnceLock::new();
    static HEADING_MARKER: OnceLock<Regex> = OnceLock::new();
    static LINK: OnceLock<Regex> = OnceLock::new();
    static LIST_MARKER: OnceLock<Regex> = OnceLock::new();
    static EMPHASIS: OnceLock<Regex> = OnceLock::new();
    static TABLE_ROW_SEPARATOR: OnceLock<Regex> = OnceLock::new();

    pub fn code_fence() -> &'static Regex {
        CODE_FENCE.get_or_init(|| {
            Regex::new(r"(?s)```.*?```").unwrap_or_else(|e| panic!("CODE_FENCE pattern: {e}"))
        })
    }

    pub fn code_span() -> &'static Regex {
        CODE_SPAN.get_or_init(|| {
            Regex::new(r"`[^`]*`").unwrap_or_else(|e| panic!("CODE_SPAN pattern: {e}"))
        })
    }

    pub fn heading_marker() -> &'static Regex {
        HEADING_MARKER.get_or_init(|| {
            Regex::new(r"(?m)^\s*#{1,3}\s+")
                .unwrap_or_else(|e| panic!("HEADING_MARKER pattern: {e}"))
        })
    }

    pub fn link() -> &'static Regex {
        LINK.get_or_init(|| {
            Regex::new(r"\[([^\]]*)\]\([^)]*\)").unwrap_or_else(|e| panic!("LINK pattern: {e}"))
        })
    }

    pub fn list_marker() -> &'static Regex {
        LIST_MARKER.get_or_init(|| {
            Regex::new(r"(?m)^\s*(?:[-*+]|\d+\.)\s+(?:\[[ xX]\]\s+)?")
                .unwrap_or_else(|e| panic!("LIST_MARKER pattern: {e}"))
        })
    }

    pub fn emphasis() -> &'static Regex {
        EMPHASIS.get_or_init(|| {
            Regex::new(r"(\*\*\*|\*\*|\*|___|__|_)")
                .unwrap_or_else(|e| panic!("EMPHASIS pattern: {e}"))
        })
    }

    pub fn table_row_separator() -> &'static Regex {
        TABLE_ROW_SEPARATOR.get_or_init(|| {
            Regex::new(r"(?m)^\s*\|?\s*:?-{2,}:?\s*(\|\s*:?-{2,}:?\s*)*\|?\s*$")
                .unwrap_or_else(|e| panic!("TABLE_ROW_SEPARATOR pattern: {e}"))
        })
    }
}

/// A small closed list of articles and auxiliary verbs dropped from the
/// person/organization pass (spec §4.1).
const DISCARDED_WORDS: &[&str] = &[
    "a", "an", "the", "is", "are", "was", "were", "be", "been", "being", "am", "will", "would",
    "shall", "should", "can", "could", "may", "might", "must", "do", "does", "did", "has", "have",
    "had",
];

/// Removes headers, code fences, code spans, link targets, list markers,
/// emphasis markers, and table separator rows, leaving plain prose text.
pub fn strip_markdown(paragraph: &str) -> String {
    let text = patterns::code_fence().replace_all(paragraph, " ");
    let text = patterns::code_span().replace_all(&text, " ");
    let text = patterns::table_row_separator().replace_all(&text, " ");
    let text = patterns::link().replace_all(&text, "$1");
    let text = patterns::heading_marker().replace_all(&text, "");
    let text = patterns::list_marker().replace_all(&text, "");
    let text = patterns::emphasis().replace_all(&text, "");
    text.replace('|', " ")
}

/// True if `word` is one of the discarded articles/auxiliary verbs, compared
/// case-insensitively.
pub fn is_discarded_word(word: &str) -> bool {
    DISCARDED_WORDS.iter().any(|w| w.eq_ignore_ascii_case(word))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_code_fences_and_spans() {
        let input = "before ```let x = 1;``` middle `inline` after";
        let stripped = strip_markdown(input);
        assert!(!stripped.contains("let x"));
        assert!(!stripped.contains("inline"));
        assert!(stripped.contains("before"));
        assert!(stripped.contains("after"));
    }

    #[test]
    fn strips_heading_markers_but_keeps_text() {
        let stripped = strip_markdown("## Project Kickoff");
        assert_eq!(stripped.trim(), "Project Kickoff");
    }

    #[test]
    fn strips_link_targets_but_keeps_link_text() {
        let stripped = strip_markdown("See [Jane Doe](https://example.invalid/jane) for details");
        assert!(stripped.contains("Jane Doe"));
        assert!(!stripped.contains("https://"));
    }

    #[test]
    fn strips_list_markers() {
        let stripped = strip_markdown("- Jane Doe attended\n1. John Smith attended");
        assert!(!stripped.contains("- "));
        assert!(stripped.contains("Jane Doe attended"));
        assert!(stripped.contains("John Smith attended"));
    }

    #[test]
    fn strips_emphasis_markers() {
        let stripped = strip_markdown("**Jane Doe** and _John Smith_ met");
        assert!(!stripped.contains('*'));
        assert!(!stripped.contains('_'));
        assert!(stripped.contains("Jane Doe"));
        assert!(stripped.contains("John Smith"));
    }

    #[test]
    fn strips_table_glyphs() {
        let stripped = strip_markdown("| Name | Role |\n|---|---|\n| Jane Doe | Engineer |");
        assert!(!stripped.contains('|'));
        assert!(stripped.contains("Jane Doe"));
    }

    #[test]
    fn discarded_words_are_case_insensitive() {
        assert!(is_discarded_word("The"));
        assert!(is_discarded_word("WAS"));
        assert!(!is_discarded_word("Jane"));
    }
}
