//! Data Doctor — readiness checks and data tooling for LLM fine-tuning.
//!
//! The core is the dataset [`audit`]: scan a folder of JSON, JSONL, text and
//! CSV files, count examples and tokens, collect formatting issues and score
//! how ready the data is for training.
//!
//! ## Supporting tools
//!
//! - **Consult** (`consult`) — recommend a data strategy for a training goal.
//! - **Prepare** (`prepare`) — turn raw claim records into instruction-tuning
//!   examples.
//! - **Synth** (`synth`) — generate synthetic raw claims with a known fraud
//!   share.

pub mod audit;
pub mod config;
pub mod consult;
pub mod data;
pub mod error;
pub mod format;
pub mod prepare;
pub mod report;
pub mod synth;
pub mod tokenizer;
