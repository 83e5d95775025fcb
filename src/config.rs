use chrono::NaiveDate;

/// Default PatentsView-style patent search endpoint.
pub const DEFAULT_PATENT_ENDPOINT: &str = "https://search.patentsview.org/api/v1/patent/";

/// Default lower bound for `patent_date` in every search query.
pub const DEFAULT_DATE_CUTOFF: &str = "2010-01-01";

/// Patent search configuration, fixed at startup and passed into
/// `SearchClient` construction (injectable for tests).
#[derive(Debug, Clone)]
pub struct SearchConfig {
    pub endpoint: String,
    /// Optional static credential sent as `X-Api-Key`. When unset the
    /// request is made anonymously; a service that requires a key will
    /// reject it and the client surfaces that as a normal error.
    pub api_key: Option<String>,
    /// Patents published before this date are excluded from every query.
    pub date_cutoff: NaiveDate,
}

impl SearchConfig {
    /// Load from environment, with defaults for everything but the key.
    pub fn from_env() -> Self {
        let endpoint = dotenv::var("PATENTSEARCH_ENDPOINT")
            .unwrap_or_else(|_| DEFAULT_PATENT_ENDPOINT.to_string());
        let api_key = dotenv::var("PATENTSEARCH_API_KEY")
            .ok()
            .filter(|k| !k.is_empty());
        let date_cutoff = dotenv::var("PATENTSEARCH_DATE_CUTOFF")
            .ok()
            .and_then(|s| NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok())
            .unwrap_or_else(default_date_cutoff);

        Self {
            endpoint,
            api_key,
            date_cutoff,
        }
    }
}

pub fn default_date_cutoff() -> NaiveDate {
    // DEFAULT_DATE_CUTOFF is a valid literal; parsing it cannot fail.
    NaiveDate::parse_from_str(DEFAULT_DATE_CUTOFF, "%Y-%m-%d").unwrap_or_default()
}
