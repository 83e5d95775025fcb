//! Pipeline orchestration: analyze idea → build query → search →
//! filter → compare → reconcile → assemble report.

pub mod prompts;

use std::fmt::Write as _;
use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::extract::extract_json;
use crate::filter::filter_by_keywords;
use crate::llm::ChatBackend;
use crate::search::query::build_query;
use crate::search::SearchClient;
use crate::types::{
    ComparisonEntry, ComparisonReport, IdeaAnalysis, PatentRecord, PipelineResult, RiskLevel,
};

/// Hits requested from the search service. Larger than what ends up in
/// the report so relevance filtering has room to discard.
const SEARCH_SIZE: usize = 15;

/// Disclaimer used when no prior art survives filtering.
const NO_PRIOR_ART_DISCLAIMER: &str = "No relevant prior patents were retrieved for this query. \
    This does NOT guarantee novelty or patentability. Consult a qualified patent attorney.";

pub struct PatentPipeline {
    backend: Arc<dyn ChatBackend>,
    search: SearchClient,
}

impl PatentPipeline {
    pub fn new(backend: Arc<dyn ChatBackend>, search: SearchClient) -> Self {
        Self { backend, search }
    }

    /// Run the full pipeline once. Either completes every step or
    /// aborts with one typed error; no partial result is ever returned.
    pub async fn run(&self, idea_text: &str) -> Result<PipelineResult> {
        // 1) Idea analysis
        let raw = self
            .backend
            .complete(prompts::SYSTEM_PROMPT, &prompts::idea_analysis_prompt(idea_text))
            .await?;
        debug!(len = raw.len(), "idea analysis response received");
        let idea = parse_idea_analysis(&extract_json(&raw)?)?;
        info!(
            keywords = idea.keywords.len(),
            categories = idea.categories.len(),
            "idea analysis complete"
        );

        // 2) Search
        let query = build_query(&idea.summary, &idea.keywords, self.search.date_cutoff());
        let hits = self.search.search(&query, SEARCH_SIZE).await?;

        // 3) Relevance filter
        let filtered = filter_by_keywords(&hits, &idea.keywords);
        info!(
            hits = hits.len(),
            kept = filtered.patents.len(),
            fallback = filtered.fallback,
            "relevance filter complete"
        );

        // 4) Nothing survived: canned report, no second backend call
        if filtered.patents.is_empty() {
            return Ok(PipelineResult {
                idea_analysis: idea,
                similar_patents: Vec::new(),
                keyword_fallback: false,
                comparison: empty_report(),
            });
        }

        // 5) Comparison against the surviving patents, in filtered order
        let snippets = format_patents(&filtered.patents);
        let raw = self
            .backend
            .complete(
                prompts::SYSTEM_PROMPT,
                &prompts::comparison_prompt(&idea.summary, &snippets),
            )
            .await?;
        debug!(len = raw.len(), "comparison response received");
        let mut comparison = parse_comparison(extract_json(&raw)?)?;

        // 6) Reconcile PATENT_n labels back to patent ids
        reconcile_patent_ids(&mut comparison.per_patent_analysis, &filtered.patents);
        info!(
            entries = comparison.per_patent_analysis.len(),
            risk = %comparison.overall_overlap_risk,
            "comparison complete"
        );

        Ok(PipelineResult {
            idea_analysis: idea,
            similar_patents: filtered.patents,
            keyword_fallback: filtered.fallback,
            comparison,
        })
    }
}

/// Canned report for the no-prior-art branch.
fn empty_report() -> ComparisonReport {
    ComparisonReport {
        per_patent_analysis: Vec::new(),
        overall_overlap_risk: RiskLevel::Low,
        recommended_changes: Vec::new(),
        disclaimer: NO_PRIOR_ART_DISCLAIMER.to_string(),
    }
}

/// Validate the idea-analysis JSON. All three fields are required.
fn parse_idea_analysis(value: &Value) -> Result<IdeaAnalysis> {
    const STEP: &str = "idea analysis";

    let summary = value
        .get("summary")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Schema {
            step: STEP,
            detail: "summary (string) is required".to_string(),
        })?
        .to_string();
    let keywords = required_string_array(value, "keywords", STEP)?;
    let categories = required_string_array(value, "categories", STEP)?;

    Ok(IdeaAnalysis {
        summary,
        keywords,
        categories,
    })
}

fn required_string_array(value: &Value, key: &'static str, step: &'static str) -> Result<Vec<String>> {
    let array = value
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| Error::Schema {
            step,
            detail: format!("{key} (array of strings) is required"),
        })?;
    // Non-string elements are dropped rather than treated as fatal.
    Ok(array
        .iter()
        .filter_map(Value::as_str)
        .map(str::to_string)
        .collect())
}

/// Validate the comparison JSON: the four report keys must be present;
/// sub-fields inside entries default when omitted.
fn parse_comparison(value: Value) -> Result<ComparisonReport> {
    const STEP: &str = "comparison";
    const REQUIRED: &[&str] = &[
        "per_patent_analysis",
        "overall_overlap_risk",
        "recommended_changes",
        "disclaimer",
    ];

    for key in REQUIRED {
        if value.get(key).is_none() {
            return Err(Error::Schema {
                step: STEP,
                detail: format!("{key} is required"),
            });
        }
    }

    serde_json::from_value(value).map_err(|e| Error::Schema {
        step: STEP,
        detail: e.to_string(),
    })
}

/// Format patents as labeled text blocks for the comparison prompt.
/// Labels are PATENT_1, PATENT_2, ... in the order given; that order
/// is what reconciliation joins against.
fn format_patents(patents: &[PatentRecord]) -> String {
    let mut out = String::new();
    for (idx, p) in patents.iter().enumerate() {
        if idx > 0 {
            out.push_str("\n\n");
        }
        let id = if p.patent_id.is_empty() {
            "unknown"
        } else {
            &p.patent_id
        };
        let _ = write!(
            out,
            "PATENT_{} (patent_id={}, date={})\nTITLE: {}\nABSTRACT: {}",
            idx + 1,
            id,
            p.date,
            p.title.trim(),
            p.abstract_text.trim()
        );
    }
    out
}

/// Fill in missing patent ids from `PATENT_n` labels. Entries that
/// already carry an id are left alone; labels that don't resolve to an
/// assigned position leave the id empty, which is not an error.
fn reconcile_patent_ids(entries: &mut [ComparisonEntry], patents: &[PatentRecord]) {
    for entry in entries {
        if !entry.patent_id.is_empty() {
            continue;
        }
        if let Some(index) = label_index(&entry.patent_label, patents.len()) {
            entry.patent_id = patents[index].patent_id.clone();
        }
    }
}

/// Parse `PATENT_n` into a 0-based index, bounded by `len`.
fn label_index(label: &str, len: usize) -> Option<usize> {
    let n: usize = label.strip_prefix("PATENT_")?.parse().ok()?;
    if n >= 1 && n <= len {
        Some(n - 1)
    } else {
        None
    }
}
