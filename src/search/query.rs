//! Boolean search query construction for the PatentsView-style API.

use chrono::NaiveDate;
use serde_json::{json, Value};

/// Searchable text fields of a patent record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Title,
    Abstract,
}

impl Field {
    fn api_name(self) -> &'static str {
        match self {
            Self::Title => "patent_title",
            Self::Abstract => "patent_abstract",
        }
    }
}

/// A boolean query expression, built fresh per run and never mutated
/// after construction. Serialized to the search API's query language.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryNode {
    And(Vec<QueryNode>),
    Or(Vec<QueryNode>),
    /// `patent_date >= date`
    DateAtLeast(NaiveDate),
    /// Exact-phrase match against one field.
    TextPhrase { field: Field, phrase: String },
    /// Any-word match against one field.
    TextAny { field: Field, text: String },
}

impl QueryNode {
    /// Serialize to the API's JSON query language (`_and`, `_or`,
    /// `_gte`, `_text_phrase`, `_text_any`).
    pub fn to_json(&self) -> Value {
        match self {
            Self::And(children) => {
                json!({ "_and": children.iter().map(Self::to_json).collect::<Vec<_>>() })
            }
            Self::Or(children) => {
                json!({ "_or": children.iter().map(Self::to_json).collect::<Vec<_>>() })
            }
            Self::DateAtLeast(date) => {
                json!({ "_gte": { "patent_date": date.format("%Y-%m-%d").to_string() } })
            }
            Self::TextPhrase { field, phrase } => {
                json!({ "_text_phrase": { field.api_name(): phrase } })
            }
            Self::TextAny { field, text } => {
                json!({ "_text_any": { field.api_name(): text } })
            }
        }
    }
}

/// Build the query for one run: an OR-clause of text predicates,
/// ANDed with the date lower bound.
///
/// Non-empty keywords produce one case-folded exact-phrase predicate
/// per keyword against title and abstract each. With no usable
/// keywords the summary is used as an any-word match on both fields,
/// so the query is always well-formed.
pub fn build_query(summary: &str, keywords: &[String], cutoff: NaiveDate) -> QueryNode {
    let usable: Vec<String> = keywords
        .iter()
        .map(|k| k.trim().to_lowercase())
        .filter(|k| !k.is_empty())
        .collect();

    let text_clause = if usable.is_empty() {
        QueryNode::Or(vec![
            QueryNode::TextAny {
                field: Field::Title,
                text: summary.to_string(),
            },
            QueryNode::TextAny {
                field: Field::Abstract,
                text: summary.to_string(),
            },
        ])
    } else {
        let mut leaves = Vec::with_capacity(usable.len() * 2);
        for keyword in &usable {
            leaves.push(QueryNode::TextPhrase {
                field: Field::Title,
                phrase: keyword.clone(),
            });
            leaves.push(QueryNode::TextPhrase {
                field: Field::Abstract,
                phrase: keyword.clone(),
            });
        }
        QueryNode::Or(leaves)
    };

    QueryNode::And(vec![QueryNode::DateAtLeast(cutoff), text_clause])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_date_cutoff;

    fn kws(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    fn or_leaves(query: &QueryNode) -> &[QueryNode] {
        let QueryNode::And(siblings) = query else {
            panic!("top level must be AND");
        };
        assert_eq!(siblings.len(), 2, "AND must have exactly date + OR");
        assert!(matches!(siblings[0], QueryNode::DateAtLeast(_)));
        let QueryNode::Or(leaves) = &siblings[1] else {
            panic!("second AND sibling must be OR");
        };
        leaves
    }

    #[test]
    fn two_leaves_per_keyword() {
        let q = build_query("summary", &kws(&["smart", "water", "bottle"]), default_date_cutoff());
        assert_eq!(or_leaves(&q).len(), 6);
    }

    #[test]
    fn keywords_are_case_folded() {
        let q = build_query("s", &kws(&["Smart"]), default_date_cutoff());
        let leaves = or_leaves(&q);
        assert_eq!(
            leaves[0],
            QueryNode::TextPhrase {
                field: Field::Title,
                phrase: "smart".to_string()
            }
        );
        assert_eq!(
            leaves[1],
            QueryNode::TextPhrase {
                field: Field::Abstract,
                phrase: "smart".to_string()
            }
        );
    }

    #[test]
    fn empty_keywords_fall_back_to_summary() {
        let q = build_query("a smart water bottle", &[], default_date_cutoff());
        let leaves = or_leaves(&q);
        assert_eq!(leaves.len(), 2);
        assert!(leaves.iter().all(|l| matches!(
            l,
            QueryNode::TextAny { text, .. } if text == "a smart water bottle"
        )));
    }

    #[test]
    fn all_blank_keywords_fall_back_to_summary() {
        let q = build_query("summary text", &kws(&["", "   "]), default_date_cutoff());
        assert_eq!(or_leaves(&q).len(), 2);
    }

    #[test]
    fn serializes_to_api_operators() {
        let q = build_query("s", &kws(&["water"]), default_date_cutoff());
        assert_eq!(
            q.to_json(),
            serde_json::json!({
                "_and": [
                    { "_gte": { "patent_date": "2010-01-01" } },
                    { "_or": [
                        { "_text_phrase": { "patent_title": "water" } },
                        { "_text_phrase": { "patent_abstract": "water" } },
                    ]}
                ]
            })
        );
    }

    #[test]
    fn summary_fallback_serializes_to_text_any() {
        let q = build_query("hydration tracking", &[], default_date_cutoff());
        let json = q.to_json();
        let or = &json["_and"][1]["_or"];
        assert_eq!(or[0]["_text_any"]["patent_title"], "hydration tracking");
        assert_eq!(or[1]["_text_any"]["patent_abstract"], "hydration tracking");
    }
}
