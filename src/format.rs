//! Data Doctor - Dataset formats and file discovery
//!
//! Classifies candidate files by extension and walks a dataset folder for them.
//! Also reads raw record files (JSONL or CSV) into JSON values for the preparer.

use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use crate::config::AuditConfig;

/// How the auditor parses a candidate file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataFormat {
    /// Whole file is one JSON value
    Json,
    /// One JSON value per non-blank line
    Jsonl,
    /// Plain text or CSV, one example per line
    TextLike,
}

impl DataFormat {
    /// Detect format from file extension
    pub fn detect<P: AsRef<Path>>(path: P) -> Self {
        match extension_of(path.as_ref()).as_deref() {
            Some("json") => DataFormat::Json,
            Some("jsonl") => DataFormat::Jsonl,
            _ => DataFormat::TextLike,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DataFormat::Json => "json",
            DataFormat::Jsonl => "jsonl",
            DataFormat::TextLike => "text-like",
        }
    }
}

/// A file picked up by discovery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    pub path: PathBuf,
    pub format: DataFormat,
}

impl CandidateFile {
    pub fn new(path: PathBuf) -> Self {
        let format = DataFormat::detect(&path);
        Self { path, format }
    }

    /// Base name used when reporting issues
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// Recursively list regular files under `root` with an accepted extension.
///
/// Entries are visited in file-name order so repeated runs report issues
/// in the same sequence. Symlinks to regular files count as files. Hidden
/// entries below the root (`.git/`, `.ipynb_checkpoints/`, dot-files) and
/// unreadable entries are skipped.
pub fn discover_candidates<P: AsRef<Path>>(root: P, config: &AuditConfig) -> Vec<CandidateFile> {
    WalkDir::new(root.as_ref())
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_hidden(e))
        .filter_map(|entry| match entry {
            Ok(e) => Some(e),
            Err(err) => {
                debug!("Skipping unreadable entry: {}", err);
                None
            }
        })
        .filter(|e| e.path().is_file())
        .filter(|e| {
            extension_of(e.path())
                .map(|ext| config.accepts_extension(&ext))
                .unwrap_or(false)
        })
        .map(|e| CandidateFile::new(e.into_path()))
        .collect()
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry.file_name().to_string_lossy().starts_with('.')
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// Input formats accepted for raw records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// JSON Lines format (one JSON object per line)
    Jsonl,
    /// Comma-separated values with header row
    Csv,
}

impl RecordFormat {
    /// Detect format from file extension, defaulting to JSONL
    pub fn detect<P: AsRef<Path>>(path: P) -> Self {
        match extension_of(path.as_ref()).as_deref() {
            Some("csv") => RecordFormat::Csv,
            _ => RecordFormat::Jsonl,
        }
    }
}

/// Outcome of reading one raw record
pub type RecordResult = std::result::Result<Value, String>;

/// Read raw records from a JSONL or CSV file.
///
/// Opening the file is fatal; per-record parse failures are returned inline
/// so the caller can report and skip them.
pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<RecordResult>> {
    let path = path.as_ref();
    match RecordFormat::detect(path) {
        RecordFormat::Jsonl => read_jsonl_records(path),
        RecordFormat::Csv => read_csv_records(path),
    }
}

/// Read a JSONL file, skipping blank lines
pub fn read_jsonl_records<P: AsRef<Path>>(path: P) -> Result<Vec<RecordResult>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open JSONL file: {}", path.display()))?;

    let reader = BufReader::new(file);
    let mut records = Vec::new();

    for line in reader.lines() {
        let line = line.with_context(|| "Failed to read line")?;
        if line.trim().is_empty() {
            continue;
        }
        records.push(serde_json::from_str(&line).map_err(|e| e.to_string()));
    }

    Ok(records)
}

/// Read a CSV file into one JSON object per row, keyed by the header row
pub fn read_csv_records<P: AsRef<Path>>(path: P) -> Result<Vec<RecordResult>> {
    let path = path.as_ref();
    let file = File::open(path)
        .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;

    let mut reader = csv::Reader::from_reader(BufReader::new(file));
    let headers: Vec<String> = reader
        .headers()
        .with_context(|| "Failed to read CSV headers")?
        .iter()
        .map(|s| s.to_string())
        .collect();

    let mut records = Vec::new();

    for result in reader.records() {
        let record = match result {
            Ok(r) => r,
            Err(e) => {
                records.push(Err(e.to_string()));
                continue;
            }
        };

        let mut obj = Map::new();
        for (header, value) in headers.iter().zip(record.iter()) {
            obj.insert(header.clone(), Value::String(value.to_string()));
        }
        records.push(Ok(Value::Object(obj)));
    }

    Ok(records)
}
