//! JSON recovery from loosely-constrained model output.
//!
//! Generation backends routinely prepend commentary or wrap JSON in
//! markdown fences despite instructions not to, so parsing is layered:
//! direct parse, then fence stripping, then a first-`{` to last-`}`
//! window. First success wins.

use serde_json::Value;

use crate::error::{Error, Result};

/// Extract a JSON value from free text. Fails with `ResponseParse`
/// (carrying the raw text) only when every strategy fails.
pub fn extract_json(text: &str) -> Result<Value> {
    let trimmed = text.trim();

    if let Ok(v) = serde_json::from_str(trimmed) {
        return Ok(v);
    }

    if let Some(inner) = strip_fence(trimmed) {
        if let Ok(v) = serde_json::from_str(inner) {
            return Ok(v);
        }
    }

    if let Some(window) = brace_window(text) {
        if let Ok(v) = serde_json::from_str(window) {
            return Ok(v);
        }
    }

    Err(Error::ResponseParse {
        raw: text.to_string(),
    })
}

/// Strip the first and last 3-backtick fence, returning the interior.
/// The opening fence line may carry a language tag (```json etc.).
fn strip_fence(text: &str) -> Option<&str> {
    let open = text.find("```")?;
    let after_open = &text[open + 3..];
    // Skip the rest of the opening fence line
    let body_start = after_open.find('\n').map(|i| i + 1).unwrap_or(0);
    let body = &after_open[body_start..];
    let close = body.rfind("```")?;
    Some(body[..close].trim())
}

/// Substring from the first `{` to the last `}`, inclusive. Known
/// limitation: stray braces in surrounding prose defeat this.
fn brace_window(text: &str) -> Option<&str> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end > start {
        Some(&text[start..=end])
    } else {
        None
    }
}
