//! patentscout: a lightweight, non-legal novelty check pipeline.
//!
//! One run sequences: idea analysis (LLM) → patent search → relevance
//! filter → prior-art comparison (LLM) → label reconciliation → report.

pub mod config;
pub mod error;
pub mod extract;
pub mod filter;
pub mod llm;
pub mod pipeline;
pub mod report;
pub mod search;
pub mod types;

pub use error::{Error, Result};
