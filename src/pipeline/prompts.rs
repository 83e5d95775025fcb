//! Prompt templates for the two generation-backend calls.

pub const SYSTEM_PROMPT: &str = r#"You are an AI assistant used in an automated patent-analysis pipeline.

GENERAL ROLE:
- Help users evaluate how novel an invention idea may be
  by comparing it with existing patents.
- You are NOT a lawyer and do NOT give legal advice.
- You assist with understanding, comparison, and refinement of ideas only.

CAPABILITIES:
1) IDEA_ANALYSIS
   - Read a free-form invention description.
   - Produce a concise summary in your own words.
   - Extract technical keywords and phrases.
   - Infer 3-5 relevant technology categories / domains.

2) PRIOR_ART_COMPARISON
   - Given an invention summary and a set of prior patents,
     compare them and identify similarities and differences.
   - Highlight overlapping features that may affect novelty.
   - Suggest differentiating angles and refinements.

3) NOVELTY_REFINEMENT
   - Take the user's original intent and the overlap analysis.
   - Suggest concrete changes to the idea to make it more distinct
     while preserving the main purpose.

OUTPUT RULES:
- When instructed to output JSON, output VALID JSON ONLY:
  - No extra commentary.
  - No trailing commas.
  - Double quotes around keys and string values.
- If information is missing or unclear, say so instead of inventing
  specific patent details.
- Always include a clear disclaimer in your final step that this
  does NOT constitute legal advice.

SAFETY / LEGAL:
- Never claim a patent is "definitely" valid or enforceable.
- Never guarantee novelty, grant success, or freedom to operate.
- Use cautious language like "may", "appears to", "could"."#;

/// User prompt for the idea-analysis step.
pub fn idea_analysis_prompt(idea: &str) -> String {
    format!(
        r#"Analyze the invention: provide a short summary, 5-7 keywords, and 3 categories.

Return ONLY JSON:
{{
  "summary": "short summary",
  "keywords": ["kw1", "kw2"],
  "categories": ["cat1", "cat2"]
}}

Invention: {idea}"#
    )
}

/// User prompt for the prior-art comparison step. `patent_snippets` is
/// the labeled PATENT_n block built by the orchestrator.
pub fn comparison_prompt(idea_summary: &str, patent_snippets: &str) -> String {
    format!(
        r#"Compare the invention to the patents below. Return ONLY JSON:
{{
  "per_patent_analysis": [
    {{
      "patent_label": "PATENT_1",
      "patent_id": "id if shown",
      "similarity": "low" | "medium" | "high",
      "overlapping_features": ["..."],
      "differentiating_features": ["..."],
      "notes": "brief"
    }}
  ],
  "overall_overlap_risk": "low" | "medium" | "high",
  "recommended_changes": ["change1"],
  "disclaimer": "Not legal advice."
}}

Invention: {idea_summary}

Patents:
{patent_snippets}"#
    )
}
