//! Relevance filtering of raw search hits by keyword overlap.

use std::collections::HashSet;

use tracing::warn;

use crate::types::PatentRecord;

/// How many unfiltered hits to keep when nothing matches a keyword.
const FALLBACK_COUNT: usize = 2;

/// Filter output. `fallback` marks the case where no patent overlapped
/// any keyword and the leading unfiltered hits were substituted, so the
/// report can label them low-confidence.
#[derive(Debug, Clone)]
pub struct FilterOutcome {
    pub patents: Vec<PatentRecord>,
    pub fallback: bool,
}

/// Keep patents whose title or abstract contains at least one keyword
/// (case-folded substring match), preserving original order. An empty
/// filtered set over a non-empty input falls back to the first two
/// hits so the user always sees candidates when any exist.
pub fn filter_by_keywords(patents: &[PatentRecord], keywords: &[String]) -> FilterOutcome {
    let keywords = distinct_folded(keywords);

    let matched: Vec<PatentRecord> = patents
        .iter()
        .filter(|p| overlap_count(p, &keywords) >= 1)
        .cloned()
        .collect();

    if !matched.is_empty() || patents.is_empty() {
        return FilterOutcome {
            patents: matched,
            fallback: false,
        };
    }

    warn!(
        hits = patents.len(),
        "no patent matched any keyword, falling back to leading hits"
    );
    FilterOutcome {
        patents: patents.iter().take(FALLBACK_COUNT).cloned().collect(),
        fallback: true,
    }
}

/// Number of distinct keywords occurring in the patent's title or abstract.
fn overlap_count(patent: &PatentRecord, folded_keywords: &[String]) -> usize {
    let title = patent.title.to_lowercase();
    let abstract_text = patent.abstract_text.to_lowercase();
    folded_keywords
        .iter()
        .filter(|k| title.contains(k.as_str()) || abstract_text.contains(k.as_str()))
        .count()
}

/// Case-fold and deduplicate keywords, preserving order and dropping blanks.
fn distinct_folded(keywords: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .filter(|k| seen.insert(k.clone()))
        .collect()
}
