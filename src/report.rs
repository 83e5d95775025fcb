//! Plain-text rendering of a pipeline result.

use std::fmt::Write as _;

use crate::types::PipelineResult;

/// Render the full report. Pure string assembly so tests can assert on
/// it; the CLI prints the result as-is.
pub fn render(result: &PipelineResult) -> String {
    let mut out = String::new();

    out.push_str("=== IDEA ANALYSIS ===\n");
    let _ = writeln!(out, "Summary:\n{}", result.idea_analysis.summary);
    let _ = writeln!(out, "\nKeywords: {}", result.idea_analysis.keywords.join(", "));
    let _ = writeln!(out, "Categories: {}", result.idea_analysis.categories.join(", "));

    out.push_str("\n=== RETRIEVED PATENTS ===\n");
    if result.similar_patents.is_empty() {
        out.push_str("(none)\n");
    } else {
        if result.keyword_fallback {
            out.push_str(
                "Note: no retrieved patent matched the extracted keywords; \
                 showing the top search hits instead (low confidence).\n",
            );
        }
        for p in &result.similar_patents {
            let id = if p.patent_id.is_empty() {
                "unknown"
            } else {
                &p.patent_id
            };
            let _ = writeln!(out, " - [{}] {} ({})", id, p.title, p.date);
        }
    }

    out.push_str("\n=== PRIOR ART COMPARISON ===\n");
    let comp = &result.comparison;
    let _ = writeln!(out, "Overall overlap risk: {}", comp.overall_overlap_risk);

    for entry in &comp.per_patent_analysis {
        let _ = writeln!(
            out,
            "\n{} (patent_id={}) — similarity: {}",
            entry.patent_label, entry.patent_id, entry.similarity
        );
        if !entry.overlapping_features.is_empty() {
            let _ = writeln!(out, "  Overlapping: {}", entry.overlapping_features.join("; "));
        }
        if !entry.differentiating_features.is_empty() {
            let _ = writeln!(
                out,
                "  Differentiating: {}",
                entry.differentiating_features.join("; ")
            );
        }
        if !entry.notes.is_empty() {
            let _ = writeln!(out, "  Notes: {}", entry.notes);
        }
    }

    out.push_str("\nRecommended changes:\n");
    if comp.recommended_changes.is_empty() {
        out.push_str(" (none)\n");
    } else {
        for change in &comp.recommended_changes {
            let _ = writeln!(out, " - {}", change);
        }
    }

    let _ = writeln!(out, "\nDisclaimer:\n{}", comp.disclaimer);
    out
}
