//! Data Doctor - Instruction-tuning preparation
//!
//! Converts raw claim records into `{instruction, input, output}` examples
//! that train a model to approve or flag a claim.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

use crate::format::read_records;

/// Fields every raw claim must carry
pub const CLAIM_FIELDS: [&str; 7] = [
    "facility",
    "service",
    "diagnosis",
    "total_cost_ghs",
    "medications",
    "status",
    "review_note",
];

/// One instruction-tuning example
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrainingExample {
    pub instruction: String,
    pub input: String,
    pub output: String,
}

/// Reason why a record was skipped
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// Record could not be parsed at all
    Unparseable(String),
    /// Record parsed but is not an object
    NotAnObject,
    /// Required field absent or of an unusable type
    MissingField(&'static str),
}

impl SkipReason {
    pub fn description(&self) -> String {
        match self {
            SkipReason::Unparseable(e) => format!("Unparseable record: {}", e),
            SkipReason::NotAnObject => "Record is not a JSON object".to_string(),
            SkipReason::MissingField(field) => format!("Missing field '{}'", field),
        }
    }
}

/// Build a training example from a raw claim
pub fn format_claim(record: &Value) -> std::result::Result<TrainingExample, SkipReason> {
    let obj = record.as_object().ok_or(SkipReason::NotAnObject)?;

    let facility = scalar_field(obj, "facility")?;
    let service = scalar_field(obj, "service")?;
    let diagnosis = scalar_field(obj, "diagnosis")?;
    let cost = scalar_field(obj, "total_cost_ghs")?;
    let medications = medications_field(obj)?;
    let status = scalar_field(obj, "status")?;
    let note = scalar_field(obj, "review_note")?;

    let instruction = format!(
        "You are a Claims Adjudication Agent for the NHIS.\n\
         Analyze the following claim and determine if it should be APPROVED or FLAGGED for fraud.\n\n\
         Claim Details:\n\
         - Facility: {facility}\n\
         - Service: {service}\n\
         - Diagnosis: {diagnosis}\n\
         - Cost: GHS {cost}\n\
         - Medications: {medications}\n\n\
         Decision:"
    );

    Ok(TrainingExample {
        instruction,
        input: String::new(),
        output: format!("{}\nReasoning: {}", status, note),
    })
}

/// String or number field rendered as text
fn scalar_field(obj: &Map<String, Value>, key: &'static str) -> std::result::Result<String, SkipReason> {
    match obj.get(key) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(Value::Number(n)) => Ok(n.to_string()),
        _ => Err(SkipReason::MissingField(key)),
    }
}

/// Medications as a JSON array, or a `;`-separated string from CSV input
fn medications_field(obj: &Map<String, Value>) -> std::result::Result<String, SkipReason> {
    let missing = SkipReason::MissingField("medications");
    match obj.get("medications") {
        Some(Value::Array(items)) => items
            .iter()
            .map(|v| v.as_str().map(str::to_string).ok_or_else(|| missing.clone()))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map(|meds| meds.join(", ")),
        Some(Value::String(s)) => Ok(s
            .split(';')
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .collect::<Vec<_>>()
            .join(", ")),
        _ => Err(missing),
    }
}

/// Summary of a preparation run
#[derive(Debug, Default, PartialEq)]
pub struct PrepareSummary {
    pub total_records: usize,
    pub prepared: usize,
    pub skipped: Vec<(usize, SkipReason)>,
}

impl PrepareSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_prepared(&mut self) {
        self.total_records += 1;
        self.prepared += 1;
    }

    pub fn record_skipped(&mut self, index: usize, reason: SkipReason) {
        self.total_records += 1;
        self.skipped.push((index, reason));
    }
}

/// Convert every record in `input` and write the examples to `output` as JSONL.
///
/// Records that cannot be converted are skipped and listed in the summary.
pub fn prepare_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<PrepareSummary> {
    let input = input.as_ref();
    let output = output.as_ref();

    let records = read_records(input)?;
    debug!("Read {} raw records from {}", records.len(), input.display());

    if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }
    let file = File::create(output)
        .with_context(|| format!("Failed to create output file: {}", output.display()))?;
    let mut writer = BufWriter::new(file);

    let mut summary = PrepareSummary::new();
    for (i, record) in records.iter().enumerate() {
        let example = record
            .as_ref()
            .map_err(|e| SkipReason::Unparseable(e.clone()))
            .and_then(format_claim);

        match example {
            Ok(example) => {
                let line = serde_json::to_string(&example)
                    .with_context(|| "Failed to serialize training example")?;
                writeln!(writer, "{}", line)?;
                summary.record_prepared();
            }
            Err(reason) => {
                warn!("Record {}: {}", i + 1, reason.description());
                summary.record_skipped(i, reason);
            }
        }
    }

    writer.flush()?;
    Ok(summary)
}
