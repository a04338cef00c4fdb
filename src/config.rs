//! Data Doctor - Audit configuration
//!
//! Thresholds and tokenizer settings handed to the [`Auditor`](crate::audit::Auditor)
//! at construction time.

use std::env;

/// Default tokenizer model on the Hugging Face Hub.
pub const DEFAULT_MODEL_ID: &str = "google/gemma-3-4b-it";

/// Extensions the auditor considers dataset candidates.
pub const DEFAULT_EXTENSIONS: [&str; 4] = ["json", "jsonl", "txt", "csv"];

/// Environment variable holding the Hub access token.
pub const HF_TOKEN_VAR: &str = "HF_TOKEN";

/// Environment variable overriding [`DEFAULT_MODEL_ID`].
pub const MODEL_VAR: &str = "DATA_DOCTOR_MODEL";

/// Settings for a single audit run
#[derive(Debug, Clone, PartialEq)]
pub struct AuditConfig {
    /// Hub model whose tokenizer produces exact counts
    pub model_id: String,
    /// Access token for gated models
    pub hf_token: Option<String>,
    /// File extensions (without the dot) picked up by discovery
    pub extensions: Vec<String>,
    /// Example count that must be exceeded for the first readiness point
    pub min_examples: usize,
    /// Example count that must be exceeded for the second readiness point
    pub target_examples: usize,
    /// Token count that must be exceeded for the volume point
    pub min_tokens: f64,
    /// How many issues the report lists before summarizing
    pub issue_display_limit: usize,
    /// Tokens per whitespace-separated word when no tokenizer is available
    pub words_per_token_ratio: f64,
}

impl Default for AuditConfig {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            hf_token: None,
            extensions: DEFAULT_EXTENSIONS.iter().map(|e| e.to_string()).collect(),
            min_examples: 10,
            target_examples: 100,
            min_tokens: 10_000.0,
            issue_display_limit: 5,
            words_per_token_ratio: 1.3,
        }
    }
}

impl AuditConfig {
    /// Defaults overlaid with `HF_TOKEN` and `DATA_DOCTOR_MODEL`
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(token) = non_empty_var(HF_TOKEN_VAR) {
            config.hf_token = Some(token);
        }
        if let Some(model) = non_empty_var(MODEL_VAR) {
            config.model_id = model;
        }
        config
    }

    pub fn with_model_id(mut self, model_id: impl Into<String>) -> Self {
        self.model_id = model_id.into();
        self
    }

    /// Whether `ext` (case-insensitive, no dot) is a candidate extension
    pub fn accepts_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}
