//! Data Doctor - Dataset audit
//!
//! Walks a dataset folder, counts examples and tokens per file, records
//! structural defects as [`Issue`]s and scores how ready the data is for
//! fine-tuning.
//!
//! Every per-file failure is converted into an issue at the narrowest scope,
//! so one broken file never stops the rest of the scan. Counts from a file
//! are only added once the whole file has parsed.

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};
use serde_json::Value;
use tracing::{debug, info};

use crate::config::AuditConfig;
use crate::data::{split_lines, DataFile};
use crate::error::{AuditError, Result, TokenizerUnavailable};
use crate::format::{discover_candidates, CandidateFile, DataFormat};
use crate::tokenizer::{acquire_or_approximate, TokenCounter, TokenizerSource};

/// Fields of which at least one must be present on every structured example
pub const OUTPUT_FIELDS: [&str; 2] = ["output", "response"];

/// Types of defects found while auditing
#[derive(Debug, Clone, PartialEq)]
pub enum IssueKind {
    /// File is not valid JSON / JSONL
    InvalidJsonSyntax(String),
    /// Parsed JSON root is neither a list nor an object
    NonListRoot,
    /// Example has neither an `output` nor a `response` field
    MissingOutputField,
    /// File could not be opened or decoded
    FileReadError(String),
}

impl IssueKind {
    pub fn message(&self) -> String {
        match self {
            IssueKind::InvalidJsonSyntax(_) => "Invalid JSON syntax.".to_string(),
            IssueKind::NonListRoot => "Root element must be a list.".to_string(),
            IssueKind::MissingOutputField => "Missing 'output' field.".to_string(),
            IssueKind::FileReadError(e) => format!("Read Error - {}", e),
        }
    }
}

/// A defect scoped to a file and optionally one example in it
#[derive(Debug, Clone, PartialEq)]
pub struct Issue {
    /// File base name
    pub file: String,
    /// 0-based example position for item-level issues
    pub item: Option<usize>,
    pub kind: IssueKind,
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.item {
            Some(i) => write!(f, "{} (Item {}): {}", self.file, i, self.kind.message()),
            None => write!(f, "{}: {}", self.file, self.kind.message()),
        }
    }
}

/// Non-fatal conditions that downgrade the audit
#[derive(Debug, Clone, PartialEq)]
pub enum AuditWarning {
    /// Nothing under the folder had a candidate extension
    NoCompatibleFiles,
    /// Token counts are approximated
    TokenizerUnavailable(TokenizerUnavailable),
}

/// Coarse readiness verdict, ordered worst to best
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ReadinessTier {
    NeedsWork,
    Fair,
    Excellent,
}

impl ReadinessTier {
    pub fn from_score(score: u8) -> Self {
        match score {
            s if s >= 4 => ReadinessTier::Excellent,
            s if s >= 2 => ReadinessTier::Fair,
            _ => ReadinessTier::NeedsWork,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReadinessTier::Excellent => "Excellent",
            ReadinessTier::Fair => "Fair",
            ReadinessTier::NeedsWork => "Needs Work",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            ReadinessTier::Excellent => "Data volume and health look great for fine-tuning!",
            ReadinessTier::Fair => {
                "You have enough to start, but more data would improve results."
            }
            ReadinessTier::NeedsWork => "Dataset is too small or has too many errors.",
        }
    }
}

/// Readiness score with its tier and follow-up tips
#[derive(Debug, Clone, PartialEq)]
pub struct Readiness {
    /// 0..=4
    pub score: u8,
    pub tier: ReadinessTier,
    pub tips: Vec<String>,
}

impl Readiness {
    /// One point each for: more than `min_examples`, more than
    /// `target_examples`, more than `min_tokens`, and zero issues.
    pub fn assess(total_examples: usize, total_tokens: f64, issue_count: usize, config: &AuditConfig) -> Self {
        let mut score = 0u8;
        if total_examples > config.min_examples {
            score += 1;
        }
        if total_examples > config.target_examples {
            score += 1;
        }
        if total_tokens > config.min_tokens {
            score += 1;
        }
        if issue_count == 0 {
            score += 1;
        }

        let tier = ReadinessTier::from_score(score);
        let mut tips = Vec::new();
        match tier {
            ReadinessTier::Fair if total_examples < config.target_examples => {
                tips.push(format!(
                    "Aim for at least {} examples for noticeable results.",
                    config.target_examples
                ));
            }
            ReadinessTier::NeedsWork => {
                tips.push("Fix JSON errors or gather more text before training.".to_string());
            }
            _ => {}
        }

        Self { score, tier, tips }
    }
}

/// Aggregate result of one audit run
#[derive(Debug, Clone)]
pub struct AuditReport {
    /// Folder that was scanned
    pub root: PathBuf,
    pub total_files: usize,
    pub total_examples: usize,
    /// Fractional when approximated; see [`AuditReport::tokens_reported`]
    pub total_tokens: f64,
    /// In file-then-item order
    pub issues: Vec<Issue>,
    pub warnings: Vec<AuditWarning>,
    /// Name of the token counter used, if any file was counted
    pub token_counter: Option<String>,
    pub readiness: Readiness,
}

impl AuditReport {
    fn empty(root: &Path, config: &AuditConfig) -> Self {
        Self {
            root: root.to_path_buf(),
            total_files: 0,
            total_examples: 0,
            total_tokens: 0.0,
            issues: Vec::new(),
            warnings: Vec::new(),
            token_counter: None,
            readiness: Readiness::assess(0, 0.0, 0, config),
        }
    }

    /// Token total truncated to a whole number
    pub fn tokens_reported(&self) -> u64 {
        self.total_tokens as u64
    }

    pub fn has_warning(&self, pred: impl Fn(&AuditWarning) -> bool) -> bool {
        self.warnings.iter().any(pred)
    }

    pub fn no_compatible_files(&self) -> bool {
        self.has_warning(|w| matches!(w, AuditWarning::NoCompatibleFiles))
    }

    pub fn tokenizer_unavailable(&self) -> Option<&TokenizerUnavailable> {
        self.warnings.iter().find_map(|w| match w {
            AuditWarning::TokenizerUnavailable(e) => Some(e),
            _ => None,
        })
    }
}

/// Per-file counts, added to the report only on success
#[derive(Debug, Default)]
struct FileTally {
    examples: usize,
    tokens: f64,
}

/// Why a JSON file's examples could not be extracted
enum RootError {
    Syntax(serde_json::Error),
    NotAList,
}

/// Dataset auditor for fine-tuning folders
pub struct Auditor {
    config: AuditConfig,
    source: TokenizerSource,
}

impl Auditor {
    /// Create an auditor that fetches `config.model_id` from the Hub
    pub fn new(config: AuditConfig) -> Self {
        Self {
            config,
            source: TokenizerSource::Hub,
        }
    }

    pub fn with_tokenizer_source(mut self, source: TokenizerSource) -> Self {
        self.source = source;
        self
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Audit `root`, acquiring the tokenizer once if there is anything to count
    pub fn run<P: AsRef<Path>>(&self, root: P) -> Result<AuditReport> {
        let root = root.as_ref();
        let files = self.discover(root)?;
        if files.is_empty() {
            return Ok(self.no_files_report(root));
        }

        let (counter, unavailable) = acquire_or_approximate(&self.source, &self.config);
        let mut report = self.audit_files(root, &files, counter.as_ref());
        if let Some(e) = unavailable {
            report.warnings.push(AuditWarning::TokenizerUnavailable(e));
        }
        Ok(report)
    }

    /// Audit `root` with a caller-supplied token counter
    pub fn run_with_counter<P: AsRef<Path>>(&self, root: P, counter: &dyn TokenCounter) -> Result<AuditReport> {
        let root = root.as_ref();
        let files = self.discover(root)?;
        if files.is_empty() {
            return Ok(self.no_files_report(root));
        }
        Ok(self.audit_files(root, &files, counter))
    }

    fn discover(&self, root: &Path) -> Result<Vec<CandidateFile>> {
        if !root.exists() {
            return Err(AuditError::PathNotFound(root.to_path_buf()));
        }
        let files = discover_candidates(root, &self.config);
        info!("Found {} candidate files under {}", files.len(), root.display());
        Ok(files)
    }

    fn no_files_report(&self, root: &Path) -> AuditReport {
        let mut report = AuditReport::empty(root, &self.config);
        report.warnings.push(AuditWarning::NoCompatibleFiles);
        report
    }

    fn audit_files(&self, root: &Path, files: &[CandidateFile], counter: &dyn TokenCounter) -> AuditReport {
        let mut report = AuditReport::empty(root, &self.config);
        report.total_files = files.len();
        report.token_counter = Some(counter.name().to_string());

        for file in files {
            match self.audit_file(file, counter, &mut report.issues) {
                Some(tally) => {
                    debug!(
                        "{} [{}]: {} examples, {:.1} tokens",
                        file.display_name(),
                        file.format.label(),
                        tally.examples,
                        tally.tokens
                    );
                    report.total_examples += tally.examples;
                    report.total_tokens += tally.tokens;
                }
                None => debug!("{} contributed no counts", file.display_name()),
            }
        }

        report.readiness = Readiness::assess(
            report.total_examples,
            report.total_tokens,
            report.issues.len(),
            &self.config,
        );
        report
    }

    /// Count one file. Returns `None` when the file was skipped; an issue
    /// has been recorded in that case.
    fn audit_file(&self, file: &CandidateFile, counter: &dyn TokenCounter, issues: &mut Vec<Issue>) -> Option<FileTally> {
        let name = file.display_name();
        let file_issue = |kind: IssueKind| Issue {
            file: name.clone(),
            item: None,
            kind,
        };

        let data = match DataFile::open(&file.path) {
            Ok(d) => d,
            Err(e) => {
                issues.push(file_issue(IssueKind::FileReadError(format!("{:#}", e))));
                return None;
            }
        };
        debug!("Reading {} ({})", data.path, data.size_human());

        let text = match data.text() {
            Ok(t) => t,
            Err(e) => {
                issues.push(file_issue(IssueKind::FileReadError(e.to_string())));
                return None;
            }
        };

        match file.format {
            DataFormat::Json | DataFormat::Jsonl => {
                let items = match parse_examples(text, file.format) {
                    Ok(items) => items,
                    Err(RootError::Syntax(e)) => {
                        debug!("{}: {}", name, e);
                        issues.push(file_issue(IssueKind::InvalidJsonSyntax(e.to_string())));
                        return None;
                    }
                    Err(RootError::NotAList) => {
                        issues.push(file_issue(IssueKind::NonListRoot));
                        return None;
                    }
                };

                let mut tally = FileTally {
                    examples: items.len(),
                    tokens: 0.0,
                };
                for (i, item) in items.iter().enumerate() {
                    if !has_output_field(item) {
                        issues.push(Issue {
                            file: name.clone(),
                            item: Some(i),
                            kind: IssueKind::MissingOutputField,
                        });
                    }
                    tally.tokens += counter.count(&to_spaced_json(item));
                }
                Some(tally)
            }
            DataFormat::TextLike => Some(FileTally {
                examples: split_lines(text).len(),
                tokens: counter.count(text),
            }),
        }
    }
}

/// Parse a JSON or JSONL document into its list of examples
fn parse_examples(text: &str, format: DataFormat) -> std::result::Result<Vec<Value>, RootError> {
    if format == DataFormat::Jsonl {
        return split_lines(text)
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .map(serde_json::from_str::<Value>)
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(RootError::Syntax);
    }

    match serde_json::from_str::<Value>(text).map_err(RootError::Syntax)? {
        Value::Array(items) => Ok(items),
        obj @ Value::Object(_) => Ok(vec![obj]),
        _ => Err(RootError::NotAList),
    }
}

/// Whether an example carries one of [`OUTPUT_FIELDS`]. Non-object examples
/// have no fields.
pub fn has_output_field(item: &Value) -> bool {
    item.as_object()
        .map(|obj| OUTPUT_FIELDS.iter().any(|f| obj.contains_key(*f)))
        .unwrap_or(false)
}

/// JSON formatter emitting `", "` between entries and `": "` after keys,
/// with every non-ASCII character written as a `\uXXXX` escape
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W: ?Sized + io::Write>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()> {
        let mut rest = fragment;
        while let Some(pos) = rest.find(|c: char| !c.is_ascii()) {
            writer.write_all(rest[..pos].as_bytes())?;
            let c = rest[pos..].chars().next().unwrap_or_default();
            let mut units = [0u16; 2];
            for unit in c.encode_utf16(&mut units).iter() {
                write!(writer, "\\u{:04x}", unit)?;
            }
            rest = &rest[pos + c.len_utf8()..];
        }
        writer.write_all(rest.as_bytes())
    }
}

/// Serialize an example the way token counts are measured: source field
/// order, single-line, spaced separators, ASCII-only.
pub fn to_spaced_json(value: &Value) -> String {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, SpacedFormatter);
    match value.serialize(&mut ser) {
        Ok(()) => String::from_utf8_lossy(&buf).into_owned(),
        Err(_) => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::WordApproximation;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    /// One token per call, so token totals equal the number of count calls
    struct PerCallCounter;

    impl TokenCounter for PerCallCounter {
        fn count(&self, _text: &str) -> f64 {
            1.0
        }
        fn name(&self) -> &str {
            "per-call"
        }
        fn is_exact(&self) -> bool {
            true
        }
    }

    fn auditor() -> Auditor {
        Auditor::new(AuditConfig::default()).with_tokenizer_source(TokenizerSource::Offline)
    }

    #[test]
    fn test_spaced_json_matches_source_order() {
        let value: Value = serde_json::from_str(r#"{"z":1,"a":[1,2],"m":{"k":"v w"}}"#).unwrap();
        assert_eq!(to_spaced_json(&value), r#"{"z": 1, "a": [1, 2], "m": {"k": "v w"}}"#);
    }

    #[test]
    fn test_spaced_json_escapes_non_ascii() {
        let value: Value = serde_json::from_str("{\"k\":\"a\u{3000}b\u{a0}c\"}").unwrap();
        let text = to_spaced_json(&value);
        assert_eq!(text, r#"{"k": "a\u3000b\u00a0c"}"#);
        // The escaped spaces no longer split words
        let approx = WordApproximation::default().count(&text);
        assert!((approx - 2.6).abs() < 1e-9, "got {}", approx);
    }

    #[test]
    fn test_spaced_json_escapes_astral_as_surrogates() {
        let value = json!({"emoji": "ok \u{1F600}", "line": "a\u{2028}b", "ctl": "\t"});
        assert_eq!(
            to_spaced_json(&value),
            r#"{"emoji": "ok \ud83d\ude00", "line": "a\u2028b", "ctl": "\t"}"#
        );
    }

    #[test]
    fn test_carriage_return_lines() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("a.jsonl"), "{\"output\": 1}\r{\"output\": 2}\r")?;
        fs::write(dir.path().join("b.txt"), "one\rtwo\x0cthree")?;

        let report = auditor().run_with_counter(dir.path(), &PerCallCounter)?;
        assert_eq!(report.total_examples, 2 + 3);
        assert!(report.issues.is_empty(), "issues: {:?}", report.issues);
        Ok(())
    }

    #[test]
    fn test_has_output_field() {
        assert!(has_output_field(&json!({"output": "x"})));
        assert!(has_output_field(&json!({"response": null})));
        assert!(!has_output_field(&json!({"instruction": "x"})));
        assert!(!has_output_field(&json!("output")));
        assert!(!has_output_field(&json!(["output"])));
    }

    #[test]
    fn test_issue_display() {
        let file_level = Issue {
            file: "a.json".into(),
            item: None,
            kind: IssueKind::NonListRoot,
        };
        let item_level = Issue {
            file: "b.jsonl".into(),
            item: Some(3),
            kind: IssueKind::MissingOutputField,
        };
        assert_eq!(file_level.to_string(), "a.json: Root element must be a list.");
        assert_eq!(item_level.to_string(), "b.jsonl (Item 3): Missing 'output' field.");
    }

    #[test]
    fn test_tier_from_score() {
        assert_eq!(ReadinessTier::from_score(0), ReadinessTier::NeedsWork);
        assert_eq!(ReadinessTier::from_score(1), ReadinessTier::NeedsWork);
        assert_eq!(ReadinessTier::from_score(2), ReadinessTier::Fair);
        assert_eq!(ReadinessTier::from_score(3), ReadinessTier::Fair);
        assert_eq!(ReadinessTier::from_score(4), ReadinessTier::Excellent);
    }

    #[test]
    fn test_readiness_thresholds_are_strict() {
        let config = AuditConfig::default();
        let at = Readiness::assess(10, 10_000.0, 1, &config);
        assert_eq!(at.score, 0);
        let above = Readiness::assess(11, 10_000.5, 1, &config);
        assert_eq!(above.score, 2);
        assert_eq!(above.tier, ReadinessTier::Fair);
        assert_eq!(above.tips, vec!["Aim for at least 100 examples for noticeable results."]);
    }

    #[test]
    fn test_fair_without_tip_at_target() {
        let config = AuditConfig::default();
        let r = Readiness::assess(100, 0.0, 0, &config);
        assert_eq!(r.score, 2);
        assert_eq!(r.tier, ReadinessTier::Fair);
        assert!(r.tips.is_empty());
    }

    #[test]
    fn test_readiness_monotonic() {
        let config = AuditConfig::default();
        let examples = [0usize, 5, 11, 50, 101, 500];
        let tokens = [0.0, 500.0, 10_001.0, 50_000.0];
        let issues = [0usize, 1, 7];
        for &e1 in &examples {
            for &t1 in &tokens {
                for &i1 in &issues {
                    let low = Readiness::assess(e1, t1, i1, &config);
                    for &e2 in examples.iter().filter(|&&e| e > e1) {
                        for &t2 in tokens.iter().filter(|&&t| t > t1) {
                            for &i2 in issues.iter().filter(|&&i| i <= i1) {
                                let high = Readiness::assess(e2, t2, i2, &config);
                                assert!(high.tier >= low.tier);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_missing_path() {
        let err = auditor().run("/no/such/dataset/folder").unwrap_err();
        assert!(matches!(err, AuditError::PathNotFound(_)));
    }

    #[test]
    fn test_no_compatible_files() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("weights.safetensors"), b"xx")?;

        let report = auditor().run(dir.path())?;
        assert!(report.no_compatible_files());
        assert_eq!(report.total_files, 0);
        assert_eq!(report.total_examples, 0);
        assert_eq!(report.tokens_reported(), 0);
        assert_eq!(report.readiness.tier, ReadinessTier::NeedsWork);
        assert!(report.tokenizer_unavailable().is_none());
        assert!(report.token_counter.is_none());
        Ok(())
    }

    #[test]
    fn test_jsonl_counts_lines_and_items() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        let body = (0..12)
            .map(|i| format!(r#"{{"instruction": "q{}", "output": "a"}}"#, i))
            .collect::<Vec<_>>()
            .join("\n\n");
        fs::write(dir.path().join("train.jsonl"), body)?;

        let report = auditor().run_with_counter(dir.path(), &PerCallCounter)?;
        assert_eq!(report.total_examples, 12);
        assert_eq!(report.total_tokens, 12.0);
        assert!(report.issues.is_empty());
        assert_eq!(report.token_counter.as_deref(), Some("per-call"));
        Ok(())
    }

    #[test]
    fn test_json_single_object_root() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("one.json"), r#"{"instruction": "x", "response": "y"}"#)?;

        let report = auditor().run_with_counter(dir.path(), &PerCallCounter)?;
        assert_eq!(report.total_examples, 1);
        assert!(report.issues.is_empty());
        Ok(())
    }

    #[test]
    fn test_json_scalar_root() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("scalar.json"), "42")?;

        let report = auditor().run_with_counter(dir.path(), &PerCallCounter)?;
        assert_eq!(report.total_examples, 0);
        assert_eq!(report.total_tokens, 0.0);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].kind, IssueKind::NonListRoot);
        Ok(())
    }

    #[test]
    fn test_missing_output_scenario() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("data.json"), r#"[{"instruction":"x"}]"#)?;

        let report = auditor().run_with_counter(dir.path(), &WordApproximation::default())?;
        assert_eq!(report.total_examples, 1);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].item, Some(0));
        assert_eq!(report.issues[0].kind, IssueKind::MissingOutputField);
        assert_eq!(report.readiness.tier, ReadinessTier::NeedsWork);
        Ok(())
    }

    #[test]
    fn test_bad_file_does_not_stop_scan() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("a_broken.jsonl"), "{\"output\": 1}\n{oops\n")?;
        fs::write(dir.path().join("b_good.jsonl"), "{\"output\": 1}\n{\"output\": 2}\n")?;
        fs::write(dir.path().join("c_notes.txt"), "line one\n\nline three\n")?;

        let report = auditor().run_with_counter(dir.path(), &PerCallCounter)?;
        assert_eq!(report.total_files, 3);
        assert_eq!(report.total_examples, 2 + 3);
        assert_eq!(report.total_tokens, 2.0 + 1.0);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].file, "a_broken.jsonl");
        assert!(matches!(report.issues[0].kind, IssueKind::InvalidJsonSyntax(_)));
        Ok(())
    }

    #[test]
    fn test_undecodable_file_is_read_error() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("a.txt"), [0xffu8, 0xfe, 0x00])?;
        fs::write(dir.path().join("b.txt"), "fine\n")?;

        let report = auditor().run_with_counter(dir.path(), &PerCallCounter)?;
        assert_eq!(report.total_examples, 1);
        assert_eq!(report.issues.len(), 1);
        assert!(matches!(report.issues[0].kind, IssueKind::FileReadError(_)));
        assert!(report.issues[0].to_string().starts_with("a.txt: Read Error - "));
        Ok(())
    }

    #[test]
    fn test_offline_run_warns_and_approximates() -> anyhow::Result<()> {
        let dir = TempDir::new()?;
        fs::write(dir.path().join("notes.txt"), "one two three four five six seven eight nine ten\n")?;

        let report = auditor().run(dir.path())?;
        assert!(report.tokenizer_unavailable().is_some());
        assert!((report.total_tokens - 13.0).abs() < 1e-9);
        assert_eq!(report.tokens_reported(), 13);
        Ok(())
    }
}
