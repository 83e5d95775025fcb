use serde::{Deserialize, Serialize};

/// Structured analysis of the invention text, produced once per run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaAnalysis {
    pub summary: String,
    pub keywords: Vec<String>,
    pub categories: Vec<String>,
}

/// One normalized patent search hit. Identity is `patent_id`, treated
/// as an opaque label (the source API may omit it, leaving it empty).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatentRecord {
    pub patent_id: String,
    pub title: String,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
    /// ISO date string as returned by the service.
    pub date: String,
}

/// Coarse low/medium/high judgment used for both per-patent similarity
/// and overall overlap risk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// Per-patent comparison produced by the model. `patent_label` is the
/// positional `PATENT_n` tag assigned at prompt-formatting time and is
/// the join key back to the `PatentRecord` when the model fails to echo
/// `patent_id`. Every sub-field defaults: a sparse entry is not fatal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ComparisonEntry {
    #[serde(default)]
    pub patent_label: String,
    #[serde(default)]
    pub patent_id: String,
    #[serde(default)]
    pub similarity: RiskLevel,
    #[serde(default)]
    pub overlapping_features: Vec<String>,
    #[serde(default)]
    pub differentiating_features: Vec<String>,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    #[serde(default)]
    pub per_patent_analysis: Vec<ComparisonEntry>,
    #[serde(default)]
    pub overall_overlap_risk: RiskLevel,
    #[serde(default)]
    pub recommended_changes: Vec<String>,
    #[serde(default)]
    pub disclaimer: String,
}

/// Final, immutable output of one pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineResult {
    pub idea_analysis: IdeaAnalysis,
    pub similar_patents: Vec<PatentRecord>,
    /// True when no patent matched any keyword and the filter fell back
    /// to the first search hits; the report marks these low-confidence.
    pub keyword_fallback: bool,
    pub comparison: ComparisonReport,
}
