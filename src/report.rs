//! Data Doctor - Audit report rendering
//!
//! Turns an [`AuditReport`] into the human-readable text printed by
//! `data-doctor audit`.

use std::io::{self, Write};

use crate::audit::{AuditReport, ReadinessTier};
use crate::config::AuditConfig;
use crate::error::AuditError;

/// Render the full report. Stops after the warning when no files were found.
pub fn render<W: Write>(out: &mut W, report: &AuditReport, config: &AuditConfig) -> io::Result<()> {
    render_header(out, report)?;

    if report.no_compatible_files() {
        writeln!(
            out,
            "❌ Warning: No compatible files ({}) found.",
            extension_list(config)
        )?;
        return Ok(());
    }

    writeln!(out, "Found {} potential data files.", report.total_files)?;
    match report.tokenizer_unavailable() {
        Some(e) => writeln!(
            out,
            "⚠️  Warning: {}. Using approximation (1 word ≈ {} tokens).",
            e, config.words_per_token_ratio
        )?,
        None => writeln!(
            out,
            "✅ Tokenizer loaded for accurate counts ({}).",
            report.token_counter.as_deref().unwrap_or("unknown")
        )?,
    }

    render_vitals(out, report)?;
    render_health(out, report, config.issue_display_limit)?;
    render_diagnosis(out, report)
}

/// Message printed when the audit could not start
pub fn render_error<W: Write>(out: &mut W, err: &AuditError) -> io::Result<()> {
    match err {
        AuditError::PathNotFound(path) => {
            writeln!(out, "Scanning: {}", path.display())?;
            writeln!(out, "❌ Error: Path does not exist!")
        }
    }
}

fn render_header<W: Write>(out: &mut W, report: &AuditReport) -> io::Result<()> {
    writeln!(out, "\n=== 🩺 Data Doctor: Audit Report ===\n")?;
    writeln!(out, "Scanning: {}", report.root.display())
}

fn render_vitals<W: Write>(out: &mut W, report: &AuditReport) -> io::Result<()> {
    writeln!(out, "\n--- 📊 Dataset Vitals ---")?;
    writeln!(out, "Total Files:    {}", report.total_files)?;
    writeln!(out, "Total Examples: {} (approx)", report.total_examples)?;
    writeln!(
        out,
        "Total Tokens:   {} (approx)",
        group_thousands(report.tokens_reported())
    )
}

fn render_health<W: Write>(out: &mut W, report: &AuditReport, limit: usize) -> io::Result<()> {
    writeln!(out, "\n--- 🏥 Health Check ---")?;
    if report.issues.is_empty() {
        return writeln!(out, "✅ No formatting errors detected.");
    }

    writeln!(out, "⚠️  Found {} Issues:", report.issues.len())?;
    for issue in report.issues.iter().take(limit) {
        writeln!(out, "   - {}", issue)?;
    }
    if report.issues.len() > limit {
        writeln!(out, "   ...and {} more.", report.issues.len() - limit)?;
    }
    Ok(())
}

fn render_diagnosis<W: Write>(out: &mut W, report: &AuditReport) -> io::Result<()> {
    writeln!(out, "\n--- 🩺 Doctor's Diagnosis ---")?;
    let tier = report.readiness.tier;
    let marker = match tier {
        ReadinessTier::Excellent => "🟢",
        ReadinessTier::Fair => "🟡",
        ReadinessTier::NeedsWork => "🔴",
    };
    writeln!(out, "{} **{}**: {}", marker, tier.label(), tier.summary())?;
    for tip in &report.readiness.tips {
        writeln!(out, "   -> Tip: {}", tip)?;
    }
    Ok(())
}

fn extension_list(config: &AuditConfig) -> String {
    config
        .extensions
        .iter()
        .map(|e| format!(".{}", e))
        .collect::<Vec<_>>()
        .join(", ")
}

/// `1234567` → `"1,234,567"`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::{AuditWarning, Issue, IssueKind, Readiness};
    use crate::error::TokenizerUnavailable;
    use std::path::PathBuf;

    fn report_with_issues(n: usize) -> AuditReport {
        let config = AuditConfig::default();
        let issues: Vec<Issue> = (0..n)
            .map(|i| Issue {
                file: "train.jsonl".into(),
                item: Some(i),
                kind: IssueKind::MissingOutputField,
            })
            .collect();
        AuditReport {
            root: PathBuf::from("data"),
            total_files: 1,
            total_examples: 20,
            total_tokens: 12_345.9,
            readiness: Readiness::assess(20, 12_345.9, issues.len(), &config),
            issues,
            warnings: Vec::new(),
            token_counter: Some("google/gemma-3-4b-it".into()),
        }
    }

    fn render_to_string(report: &AuditReport) -> String {
        let mut buf = Vec::new();
        render(&mut buf, report, &AuditConfig::default()).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(12_345_678), "12,345,678");
    }

    #[test]
    fn test_issue_list_is_truncated() {
        let text = render_to_string(&report_with_issues(8));
        assert!(text.contains("Found 8 Issues"));
        assert!(text.contains("train.jsonl (Item 4)"));
        assert!(!text.contains("train.jsonl (Item 5)"));
        assert!(text.contains("...and 3 more."));
        assert!(text.contains("Total Tokens:   12,345 (approx)"));
        assert!(text.contains("**Fair**"));
    }

    #[test]
    fn test_clean_report() {
        let text = render_to_string(&report_with_issues(0));
        assert!(text.contains("No formatting errors detected."));
        assert!(text.contains("Tokenizer loaded for accurate counts (google/gemma-3-4b-it)"));
        assert!(text.contains("-> Tip: Aim for at least 100 examples"));
    }

    #[test]
    fn test_approximation_warning() {
        let mut report = report_with_issues(0);
        report.warnings.push(AuditWarning::TokenizerUnavailable(TokenizerUnavailable {
            origin: "google/gemma-3-4b-it".into(),
            reason: "401 Unauthorized".into(),
        }));
        let text = render_to_string(&report);
        assert!(text.contains("Using approximation (1 word ≈ 1.3 tokens)"));
        assert!(text.contains("401 Unauthorized"));
    }

    #[test]
    fn test_no_files_stops_after_warning() {
        let mut report = report_with_issues(0);
        report.total_files = 0;
        report.warnings.push(AuditWarning::NoCompatibleFiles);
        let text = render_to_string(&report);
        assert!(text.contains("No compatible files (.json, .jsonl, .txt, .csv) found."));
        assert!(!text.contains("Dataset Vitals"));
    }

    #[test]
    fn test_render_error() {
        let mut buf = Vec::new();
        render_error(&mut buf, &AuditError::PathNotFound(PathBuf::from("missing"))).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("Path does not exist!"));
    }
}
