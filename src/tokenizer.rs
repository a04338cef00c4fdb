//! Data Doctor - Token counting
//!
//! Exact counts come from a HuggingFace tokenizer; when none can be loaded the
//! audit falls back to a words-times-ratio estimate. The strategy is chosen
//! once per run and never re-attempted.

use std::path::{Path, PathBuf};

use tokenizers::{FromPretrainedParameters, Tokenizer};
use tracing::{debug, info, warn};

use crate::config::AuditConfig;
use crate::error::TokenizerUnavailable;

/// Anything that can turn text into a (possibly fractional) token count
pub trait TokenCounter {
    /// Tokens in `text`. Approximations may return fractions; callers round
    /// only when reporting.
    fn count(&self, text: &str) -> f64;

    /// Human-readable name for logs and the report
    fn name(&self) -> &str;

    /// Whether counts are exact tokenizer output
    fn is_exact(&self) -> bool;
}

/// Wrapper around a HuggingFace tokenizer
pub struct TokenizerWrapper {
    tokenizer: Tokenizer,
    pub name: String,
}

impl TokenizerWrapper {
    /// Load a tokenizer from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TokenizerUnavailable> {
        let path_ref = path.as_ref();
        let tokenizer = Tokenizer::from_file(path_ref).map_err(|e| TokenizerUnavailable {
            origin: path_ref.display().to_string(),
            reason: e.to_string(),
        })?;

        let name = path_ref
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        Ok(Self { tokenizer, name })
    }

    /// Load a pretrained tokenizer from HuggingFace Hub
    pub fn from_pretrained(model_id: &str, token: Option<String>) -> Result<Self, TokenizerUnavailable> {
        let params = FromPretrainedParameters {
            token,
            ..Default::default()
        };
        let tokenizer =
            Tokenizer::from_pretrained(model_id, Some(params)).map_err(|e| TokenizerUnavailable {
                origin: model_id.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            tokenizer,
            name: model_id.to_string(),
        })
    }
}

impl TokenCounter for TokenizerWrapper {
    fn count(&self, text: &str) -> f64 {
        match self.tokenizer.encode(text, true) {
            Ok(encoding) => encoding.get_ids().len() as f64,
            Err(e) => {
                warn!("Tokenizer failed to encode {} bytes: {}", text.len(), e);
                0.0
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_exact(&self) -> bool {
        true
    }
}

/// `words × ratio` estimate used when no tokenizer is available
#[derive(Debug, Clone)]
pub struct WordApproximation {
    ratio: f64,
}

impl WordApproximation {
    pub fn new(ratio: f64) -> Self {
        Self { ratio }
    }
}

impl Default for WordApproximation {
    fn default() -> Self {
        Self::new(AuditConfig::default().words_per_token_ratio)
    }
}

impl TokenCounter for WordApproximation {
    fn count(&self, text: &str) -> f64 {
        text.split_whitespace().count() as f64 * self.ratio
    }

    fn name(&self) -> &str {
        "word approximation"
    }

    fn is_exact(&self) -> bool {
        false
    }
}

/// Where the exact tokenizer should come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenizerSource {
    /// Download `AuditConfig::model_id` from the Hub
    Hub,
    /// Local `tokenizer.json`
    File(PathBuf),
    /// Skip acquisition and use the approximation
    Offline,
}

/// Acquire the exact tokenizer described by `source`
pub fn acquire(
    source: &TokenizerSource,
    config: &AuditConfig,
) -> Result<Box<dyn TokenCounter>, TokenizerUnavailable> {
    match source {
        TokenizerSource::Hub => {
            info!("Fetching tokenizer {} from the Hub", config.model_id);
            let wrapper = TokenizerWrapper::from_pretrained(&config.model_id, config.hf_token.clone())?;
            Ok(Box::new(wrapper))
        }
        TokenizerSource::File(path) => {
            debug!("Loading tokenizer from {}", path.display());
            Ok(Box::new(TokenizerWrapper::from_file(path)?))
        }
        TokenizerSource::Offline => Err(TokenizerUnavailable {
            origin: config.model_id.clone(),
            reason: "offline mode requested".to_string(),
        }),
    }
}

/// Acquire a tokenizer, falling back to the word approximation on failure.
///
/// The returned error (if any) explains why the approximation is in use.
pub fn acquire_or_approximate(
    source: &TokenizerSource,
    config: &AuditConfig,
) -> (Box<dyn TokenCounter>, Option<TokenizerUnavailable>) {
    match acquire(source, config) {
        Ok(counter) => (counter, None),
        Err(e) => {
            warn!("{}", e);
            (
                Box::new(WordApproximation::new(config.words_per_token_ratio)),
                Some(e),
            )
        }
    }
}
