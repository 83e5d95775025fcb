//! Patent search client: query serialization, request dispatch, and
//! normalization of raw hits into `PatentRecord`s.

pub mod query;

use std::time::Duration;

use serde_json::Value;
use tracing::{debug, info};

use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::types::PatentRecord;

use query::QueryNode;

/// Fields requested from the search service for every hit.
const PROJECTED_FIELDS: &[&str] = &[
    "patent_id",
    "patent_title",
    "patent_abstract",
    "patent_date",
];

const REQUEST_TIMEOUT_SECS: u64 = 30;

pub struct SearchClient {
    http: reqwest::Client,
    config: SearchConfig,
}

impl SearchClient {
    pub fn new(config: SearchConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { http, config })
    }

    pub fn date_cutoff(&self) -> chrono::NaiveDate {
        self.config.date_cutoff
    }

    /// Execute a query, requesting at most `size` hits, and normalize
    /// the response. Result order is exactly the service's order.
    pub async fn search(&self, query: &QueryNode, size: usize) -> Result<Vec<PatentRecord>> {
        let q = serde_json::to_string(&query.to_json()).map_err(|e| Error::Service(e.to_string()))?;
        let f = serde_json::to_string(PROJECTED_FIELDS).map_err(|e| Error::Service(e.to_string()))?;
        let o = serde_json::to_string(&serde_json::json!({ "size": size }))
            .map_err(|e| Error::Service(e.to_string()))?;

        debug!(query = %q, size, "dispatching patent search");

        let mut request = self
            .http
            .get(&self.config.endpoint)
            .query(&[("q", q.as_str()), ("f", f.as_str()), ("o", o.as_str())]);
        if let Some(key) = &self.config.api_key {
            request = request.header("X-Api-Key", key);
        }

        let response = request.send().await?.error_for_status()?;
        let body: Value = response
            .json()
            .await
            .map_err(|e| Error::Service(format!("unparseable response body: {e}")))?;

        // The service can flag an application error on HTTP 200.
        if body.get("error").is_some_and(is_truthy) {
            return Err(Error::Service(body.to_string()));
        }

        let hits = body
            .get("patents")
            .and_then(Value::as_array)
            .cloned()
            .unwrap_or_default();

        let records: Vec<PatentRecord> = hits.iter().map(normalize_hit).collect();
        info!(count = records.len(), "patent search complete");
        Ok(records)
    }
}

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        _ => true,
    }
}

/// Normalize a raw hit, substituting empty strings for anything the
/// service omitted. Never fails.
fn normalize_hit(hit: &Value) -> PatentRecord {
    let text = |key: &str| -> String {
        hit.get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };
    PatentRecord {
        patent_id: text("patent_id"),
        title: text("patent_title"),
        abstract_text: text("patent_abstract"),
        date: text("patent_date"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalizes_complete_hit() {
        let hit = json!({
            "patent_id": "10000001",
            "patent_title": "Smart bottle",
            "patent_abstract": "A water bottle",
            "patent_date": "2018-06-19",
        });
        let record = normalize_hit(&hit);
        assert_eq!(record.patent_id, "10000001");
        assert_eq!(record.title, "Smart bottle");
        assert_eq!(record.abstract_text, "A water bottle");
        assert_eq!(record.date, "2018-06-19");
    }

    #[test]
    fn missing_fields_become_empty_strings() {
        let record = normalize_hit(&json!({ "patent_title": "Lonely title" }));
        assert_eq!(record.title, "Lonely title");
        assert_eq!(record.patent_id, "");
        assert_eq!(record.abstract_text, "");
        assert_eq!(record.date, "");
    }

    #[test]
    fn non_string_fields_become_empty_strings() {
        let record = normalize_hit(&json!({ "patent_id": 12345, "patent_title": null }));
        assert_eq!(record.patent_id, "");
        assert_eq!(record.title, "");
    }

    #[test]
    fn error_flag_truthiness() {
        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!("query malformed")));
        assert!(is_truthy(&json!({"code": 400})));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(null)));
        assert!(!is_truthy(&json!("")));
    }
}
