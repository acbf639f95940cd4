//! Rule-based typed-entity extraction from Markdown document text: splits a
//! document into paragraphs, runs a fixed set of extractors over each
//! surviving paragraph, and deduplicates their combined output by node id
//! (spec §4.1).

mod error;
mod lexicons;
mod markdown;
mod rules;
mod segmentation;

use std::collections::HashSet;

use memcity_model::{node_id, ParagraphGroup};

pub use error::{ExtractError, ExtractResult};
pub use lexicons::Lexicons;

/// Extracts typed entity occurrences from `content` using the built-in
/// lexicon defaults. Fails only with [`ExtractError::EmptyContent`] when
/// `content` is empty; unrecognized text is simply not matched.
pub fn extract(content: &str, document_path: &str) -> ExtractResult<Vec<ParagraphGroup>> {
    extract_with_lexicons(content, document_path, &Lexicons::defaults())
}

/// Like [`extract`], but against a caller-supplied [`Lexicons`] set (e.g.
/// one built from a loaded `memcity_config::Config`).
pub fn extract_with_lexicons(
    content: &str,
    document_path: &str,
    lexicons: &Lexicons,
) -> ExtractResult<Vec<ParagraphGroup>> {
    if content.trim().is_empty() {
        return Err(ExtractError::EmptyContent(document_path.to_string()));
    }

    let paragraphs = segmentation::segment_paragraphs(content);
    let mut groups = Vec::with_capacity(paragraphs.len());

    for (index, paragraph) in paragraphs.iter().enumerate() {
        let mut occurrences = Vec::new();
        occurrences.extend(rules::headers(paragraph, index, document_path));
        occurrences.extend(rules::bold_concepts(paragraph, index, document_path));
        occurrences.extend(rules::tickers(paragraph, content, lexicons, index, document_path));
        occurrences.extend(rules::tools(paragraph, lexicons, index, document_path));
        occurrences.extend(rules::project_names(paragraph, lexicons, index, document_path));
        occurrences.extend(rules::backtick_tokens(paragraph, index, document_path));
        occurrences.extend(rules::urls(paragraph, index, document_path));
        occurrences.extend(rules::people_and_organizations(paragraph, index, document_path));
        occurrences.extend(rules::decisions(paragraph, index, document_path));

        let group = dedup_by_node_id(occurrences);
        if !group.is_empty() {
            groups.push(group);
        }
    }

    Ok(groups)
}

/// Deduplicates occurrences within one paragraph by `type:normalize(label)`,
/// keeping the first occurrence of each id (spec §4.1).
fn dedup_by_node_id(occurrences: Vec<memcity_model::Occurrence>) -> ParagraphGroup {
    let mut seen = HashSet::new();
    occurrences
        .into_iter()
        .filter(|occ| seen.insert(node_id(&occ.entity_type, &occ.label)))
        .collect()
}
