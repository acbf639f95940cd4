use std::sync::OnceLock;

use regex::Regex;

use memcity_model::Occurrence;

use crate::lexicons::Lexicons;
use crate::markdown::{is_discarded_word, strip_markdown};

mod patterns {
    use super::*;

    static HEADER: OnceLock<Regex> = OnceLock::new();
    static BOLD: OnceLock<Regex> = OnceLock::new();
    static LIST_MARKER_PREFIX: OnceLock<Regex> = OnceLock::new();
    static TICKER_RUN: OnceLock<Regex> = OnceLock::new();
    static BACKTICK: OnceLock<Regex> = OnceLock::new();
    static URL: OnceLock<Regex> = OnceLock::new();
    static TASK_DONE: OnceLock<Regex> = OnceLock::new();
    static DECISION_MARKER: OnceLock<Regex> = OnceLock::new();
    static PROPER_NOUN_SPAN: OnceLock<Regex> = OnceLock::new();
    static ORG_SUFFIX: OnceLock<Regex> = OnceLock::new();

    pub fn header() -> &'static Regex {
        HEADER.get_or_init(|| {
            Regex::new(r"(?m)^#{1,3} (.+)$").unwrap_or_else(|e| panic!("HEADER pattern: {e}"))
        })
    }

    pub fn bold() -> &'static Regex {
        BOLD.get_or_init(|| {
            Regex::new(r"\*\*([^*]{1,40})\*\*").unwrap_or_else(|e| panic!("BOLD pattern: {e}"))
        })
    }

    pub fn list_marker_prefix() -> &'static Regex {
        LIST_MARKER_PREFIX.get_or_init(|| {
            Regex::new(r"^\s*(?:[-*+]|\d+\.)\s")
                .unwrap_or_else(|e| panic!("LIST_MARKER_PREFIX pattern: {e}"))
        })
    }

    pub fn ticker_run() -> &'static Regex {
        TICKER_RUN.get_or_init(|| {
            Regex::new(r"\b[A-Z]{2,5}\b").unwrap_or_else(|e| panic!("TICKER_RUN pattern: {e}"))
        })
    }

    pub fn backtick() -> &'static Regex {
        BACKTICK.get_or_init(|| {
            Regex::new(r"`([^`\s]{1,50})`").unwrap_or_else(|e| panic!("BACKTICK pattern: {e}"))
        })
    }

    pub fn url() -> &'static Regex {
        URL.get_or_init(|| {
            Regex::new(r"https?://[^\s\])>]+").unwrap_or_else(|e| panic!("URL pattern: {e}"))
        })
    }

    pub fn task_done() -> &'static Regex {
        TASK_DONE.get_or_init(|| {
            Regex::new(r"(?m)^\s*[-*+]\s+\[[xX]\]\s+(.+)$")
                .unwrap_or_else(|e| panic!("TASK_DONE pattern: {e}"))
        })
    }

    pub fn decision_marker() -> &'static Regex {
        DECISION_MARKER.get_or_init(|| {
            Regex::new(
                r"(?i)\b(decided(?: to)? [^.\n]+|chose(?: to)? [^.\n]+|will [^.\n]+|going to [^.\n]+|committed to [^.\n]+|settled on [^.\n]+)",
            )
            .unwrap_or_else(|e| panic!("DECISION_MARKER pattern: {e}"))
        })
    }

    pub fn proper_noun_span() -> &'static Regex {
        PROPER_NOUN_SPAN.get_or_init(|| {
            Regex::new(r"\b(?:[A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)\b")
                .unwrap_or_else(|e| panic!("PROPER_NOUN_SPAN pattern: {e}"))
        })
    }

    pub fn org_suffix() -> &'static Regex {
        ORG_SUFFIX.get_or_init(|| {
            Regex::new(r"(?i)\b(Inc|LLC|Corp|Corporation|Company|Ltd|Organization|Foundation|Labs|Group)\.?$")
                .unwrap_or_else(|e| panic!("ORG_SUFFIX pattern: {e}"))
        })
    }
}

fn push_if_valid(
    out: &mut Vec<Occurrence>,
    label: &str,
    entity_type: &str,
    min_len: usize,
    max_len: usize,
    paragraph_index: usize,
    document: &str,
) {
    let len = label.chars().count();
    if len < min_len || len > max_len {
        return;
    }
    out.push(Occurrence::new(label, entity_type, paragraph_index, document));
}

/// Header rule: `#{1,3} <text>`, text 3-40 chars, not starting with a list
/// marker (spec §4.1).
pub fn headers(paragraph: &str, paragraph_index: usize, document: &str) -> Vec<Occurrence> {
    let mut out = Vec::new();
    for caps in patterns::header().captures_iter(paragraph) {
        let text = caps[1].trim();
        if patterns::list_marker_prefix().is_match(text) {
            continue;
        }
        push_if_valid(&mut out, text, "header", 3, 40, paragraph_index, document);
    }
    out
}

/// Bold-emphasis concept rule: text between `**…**`, length 3-40 (spec §4.1).
pub fn bold_concepts(paragraph: &str, paragraph_index: usize, document: &str) -> Vec<Occurrence> {
    let mut out = Vec::new();
    for caps in patterns::bold().captures_iter(paragraph) {
        let text = caps[1].trim();
        push_if_valid(&mut out, text, "concept", 3, 40, paragraph_index, document);
    }
    out
}

/// Ticker rule: a 2-5 uppercase letter run that is whitelisted, or that is
/// not stoplisted and appears elsewhere in the document as `$RUN` (spec
/// §4.1).
pub fn tickers(
    paragraph: &str,
    full_document_text: &str,
    lexicons: &Lexicons,
    paragraph_index: usize,
    document: &str,
) -> Vec<Occurrence> {
    let mut out = Vec::new();
    for m in patterns::ticker_run().find_iter(paragraph) {
        let run = m.as_str();
        let whitelisted = lexicons.ticker_whitelist.contains(run);
        let dollar_coupled = !lexicons.ticker_stoplist.contains(run)
            && full_document_text.contains(&format!("${run}"));
        if whitelisted || dollar_coupled {
            out.push(Occurrence::new(run, "ticker", paragraph_index, document));
        }
    }
    out
}

/// Tool / technology rule: case-insensitive match against a closed
/// configured list (spec §4.1).
pub fn tools(
    paragraph: &str,
    lexicons: &Lexicons,
    paragraph_index: usize,
    document: &str,
) -> Vec<Occurrence> {
    let lower = paragraph.to_lowercase();
    let mut out = Vec::new();
    for tool in &lexicons.tools {
        if word_boundary_contains(&lower, tool) {
            out.push(Occurrence::new(tool.clone(), "tool", paragraph_index, document));
        }
    }
    out
}

fn word_boundary_contains(haystack: &str, needle: &str) -> bool {
    let mut start = 0;
    while let Some(rel) = haystack[start..].find(needle) {
        let pos = start + rel;
        let end = pos + needle.len();
        let before_ok = haystack[..pos]
            .chars()
            .next_back()
            .is_none_or(|c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .is_none_or(|c| !c.is_alphanumeric());
        if before_ok && after_ok {
            return true;
        }
        start = pos + 1;
    }
    false
}

/// Project name rule: matches against a small set of configured multi-word
/// patterns (spec §4.1).
pub fn project_names(
    paragraph: &str,
    lexicons: &Lexicons,
    paragraph_index: usize,
    document: &str,
) -> Vec<Occurrence> {
    let mut out = Vec::new();
    for pattern in &lexicons.project_patterns {
        if let Some(m) = pattern.find(paragraph) {
            out.push(Occurrence::new(m.as_str(), "project", paragraph_index, document));
        }
    }
    out
}

/// Inline-backtick token rule: single-word text inside a backtick pair,
/// length 1-50, no embedded whitespace; aliased to the `tool` type (spec
/// §4.1).
pub fn backtick_tokens(paragraph: &str, paragraph_index: usize, document: &str) -> Vec<Occurrence> {
    let mut out = Vec::new();
    for caps in patterns::backtick().captures_iter(paragraph) {
        let text = &caps[1];
        push_if_valid(&mut out, text, "tool", 1, 50, paragraph_index, document);
    }
    out
}

/// URL rule: `https?://…` up to the first whitespace, closing bracket, or
/// angle bracket; trailing punctuation stripped (spec §4.1).
pub fn urls(paragraph: &str, paragraph_index: usize, document: &str) -> Vec<Occurrence> {
    let mut out = Vec::new();
    for m in patterns::url().find_iter(paragraph) {
        let trimmed = m.as_str().trim_end_matches(|c: char| ".,;:!?'\")".contains(c));
        if !trimmed.is_empty() {
            out.push(Occurrence::new(trimmed, "url", paragraph_index, document));
        }
    }
    out
}

/// Person / organization rule: proper-noun spans found after markdown
/// stripping, with articles and auxiliary verbs discarded (spec §4.1).
pub fn people_and_organizations(
    paragraph: &str,
    paragraph_index: usize,
    document: &str,
) -> Vec<Occurrence> {
    let stripped = strip_markdown(paragraph);
    let mut out = Vec::new();
    for m in patterns::proper_noun_span().find_iter(&stripped) {
        let span = m.as_str().trim();
        if span.split_whitespace().all(is_discarded_word) {
            continue;
        }
        if span.split_whitespace().count() == 1 && is_discarded_word(span) {
            continue;
        }
        let entity_type = if patterns::org_suffix().is_match(span) {
            "organization"
        } else {
            "person"
        };
        push_if_valid(&mut out, span, entity_type, 3, 80, paragraph_index, document);
    }
    out
}

/// Decision rule: completed task-list items and fixed decision-marker
/// phrases, trimmed, 6-99 characters (spec §4.1).
pub fn decisions(paragraph: &str, paragraph_index: usize, document: &str) -> Vec<Occurrence> {
    let mut out = Vec::new();
    for caps in patterns::task_done().captures_iter(paragraph) {
        push_if_valid(&mut out, caps[1].trim(), "decision", 6, 99, paragraph_index, document);
    }
    for caps in patterns::decision_marker().captures_iter(paragraph) {
        push_if_valid(&mut out, caps[1].trim(), "decision", 6, 99, paragraph_index, document);
    }
    out
}
