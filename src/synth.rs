//! Data Doctor - Synthetic claim generation
//!
//! Produces raw insurance-claim records with a known share of fraudulent
//! patterns, used to exercise the prepare and audit steps end to end.

use anyhow::{Context, Result};
use chrono::{Duration, Local, NaiveDate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

pub const SERVICE_TYPES: [&str; 9] = [
    "Malaria Treatment",
    "Ante-Natal Care",
    "Delivery Services",
    "Diabetes Management",
    "Hypertension Review",
    "Surgery (Hernia)",
    "Pediatric Consultation",
    "Ultrasound Scan",
    "Pharmacy Dispensing",
];

pub const FACILITIES: [&str; 7] = [
    "Korle-Bu Teaching Hospital",
    "Komfo Anokye Teaching Hospital",
    "Ridge Hospital",
    "Tema General Hospital",
    "Kumasi South Hospital",
    "Tamale Teaching Hospital",
    "Sunyani Regional Hospital",
];

pub const DRUGS: [&str; 7] = [
    "Artemether-Lumefantrine",
    "Paracetamol",
    "Amoxicillin",
    "Metformin",
    "Amlodipine",
    "Oxytocin",
    "Ciprofloxacin",
];

pub const STATUS_APPROVED: &str = "APPROVED";
pub const STATUS_FLAGGED: &str = "FLAGGED_POSSIBLE_FRAUD";

/// Share of generated claims that follow a fraud pattern
pub const DEFAULT_FRAUD_RATE: f64 = 0.15;

/// Claims are dated within this many days before today
const DATE_WINDOW_DAYS: i64 = 90;

/// One raw claim record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawClaim {
    pub claim_id: String,
    pub facility: String,
    pub date: String,
    pub service: String,
    pub diagnosis: String,
    pub medications: Vec<String>,
    pub total_cost_ghs: u32,
    pub status: String,
    pub review_note: String,
}

impl RawClaim {
    pub fn is_flagged(&self) -> bool {
        self.status == STATUS_FLAGGED
    }
}

/// Random claim generator
pub struct ClaimGenerator {
    rng: StdRng,
    today: NaiveDate,
    fraud_rate: f64,
}

impl ClaimGenerator {
    /// Generator seeded from OS entropy, dated relative to the local date
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_entropy(), Local::now().date_naive())
    }

    /// Reproducible generator
    pub fn seeded(seed: u64, today: NaiveDate) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed), today)
    }

    /// Generator from optional CLI settings. Output is only fully
    /// reproducible when both `seed` and `today` are given; otherwise dates
    /// count back from the local date.
    pub fn from_options(seed: Option<u64>, today: Option<NaiveDate>) -> Self {
        let today = today.unwrap_or_else(|| Local::now().date_naive());
        match seed {
            Some(seed) => Self::seeded(seed, today),
            None => Self::with_rng(StdRng::from_entropy(), today),
        }
    }

    fn with_rng(rng: StdRng, today: NaiveDate) -> Self {
        Self {
            rng,
            today,
            fraud_rate: DEFAULT_FRAUD_RATE,
        }
    }

    pub fn with_fraud_rate(mut self, rate: f64) -> Self {
        self.fraud_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Generate a single claim
    pub fn generate(&mut self) -> RawClaim {
        let is_fraud = self.rng.gen_bool(self.fraud_rate);

        let id_bytes: [u8; 16] = self.rng.gen();
        let claim_id: String = uuid::Builder::from_random_bytes(id_bytes)
            .into_uuid()
            .to_string()
            .chars()
            .take(8)
            .collect();
        let facility = pick(&mut self.rng, &FACILITIES);
        let service = pick(&mut self.rng, &SERVICE_TYPES);
        let days_back = self.rng.gen_range(0..=DATE_WINDOW_DAYS);
        let date = (self.today - Duration::days(days_back))
            .format("%Y-%m-%d")
            .to_string();

        let (num_drugs, cost, diagnosis, status, note) = if is_fraud {
            // Polypharmacy with an inflated cost and a vague diagnosis
            (
                self.rng.gen_range(5..=8),
                self.rng.gen_range(500..=2000),
                "General Malaise".to_string(),
                STATUS_FLAGGED,
                "High cost for vague diagnosis; excessive medication count.",
            )
        } else {
            (
                self.rng.gen_range(1..=3),
                self.rng.gen_range(50..=400),
                service.clone(),
                STATUS_APPROVED,
                "Standard protocol followed.",
            )
        };

        let medications = DRUGS
            .choose_multiple(&mut self.rng, num_drugs.min(DRUGS.len()))
            .map(|d| d.to_string())
            .collect();

        RawClaim {
            claim_id,
            facility,
            date,
            service,
            diagnosis,
            medications,
            total_cost_ghs: cost,
            status: status.to_string(),
            review_note: note.to_string(),
        }
    }
}

impl Default for ClaimGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn pick(rng: &mut StdRng, options: &[&str]) -> String {
    options.choose(rng).copied().unwrap_or_default().to_string()
}

/// Write `count` generated claims to `path` as JSONL, creating parent folders
pub fn write_claims<P: AsRef<Path>>(path: P, count: usize, generator: &mut ClaimGenerator) -> Result<usize> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    let mut flagged = 0usize;
    for _ in 0..count {
        let claim = generator.generate();
        if claim.is_flagged() {
            flagged += 1;
        }
        let line = serde_json::to_string(&claim).with_context(|| "Failed to serialize claim")?;
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;

    info!("Wrote {} claims ({} flagged) to {}", count, flagged, path.display());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prepare::format_claim;
    use tempfile::TempDir;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    #[test]
    fn test_seeded_generation_is_reproducible() {
        let a: Vec<RawClaim> = {
            let mut g = ClaimGenerator::seeded(7, today());
            (0..20).map(|_| g.generate()).collect()
        };
        let b: Vec<RawClaim> = {
            let mut g = ClaimGenerator::seeded(7, today());
            (0..20).map(|_| g.generate()).collect()
        };
        assert_eq!(a, b);
    }

    #[test]
    fn test_seed_and_date_pin_output() {
        let pinned = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
        let mut a = ClaimGenerator::from_options(Some(9), Some(pinned));
        let mut b = ClaimGenerator::from_options(Some(9), Some(pinned));
        for _ in 0..10 {
            let (x, y) = (a.generate(), b.generate());
            assert_eq!(x, y);
            let date = NaiveDate::parse_from_str(&x.date, "%Y-%m-%d").unwrap();
            assert!(date <= pinned && date >= pinned - Duration::days(DATE_WINDOW_DAYS));
        }
    }

    #[test]
    fn test_unseeded_generator_respects_reference_date() {
        let pinned = NaiveDate::from_ymd_opt(2020, 1, 15).unwrap();
        let mut g = ClaimGenerator::from_options(None, Some(pinned));
        let date = NaiveDate::parse_from_str(&g.generate().date, "%Y-%m-%d").unwrap();
        assert!(date <= pinned && date >= pinned - Duration::days(DATE_WINDOW_DAYS));
    }

    #[test]
    fn test_claim_invariants() {
        let mut g = ClaimGenerator::seeded(42, today());
        let earliest = today() - Duration::days(DATE_WINDOW_DAYS);
        for _ in 0..300 {
            let claim = g.generate();
            assert_eq!(claim.claim_id.len(), 8);
            let date = NaiveDate::parse_from_str(&claim.date, "%Y-%m-%d").unwrap();
            assert!(date <= today() && date >= earliest);

            let mut meds = claim.medications.clone();
            meds.sort();
            meds.dedup();
            assert_eq!(meds.len(), claim.medications.len(), "medications repeat");

            if claim.is_flagged() {
                assert!((5..=7).contains(&claim.medications.len()));
                assert!((500..=2000).contains(&claim.total_cost_ghs));
                assert_eq!(claim.diagnosis, "General Malaise");
            } else {
                assert_eq!(claim.status, STATUS_APPROVED);
                assert!((1..=3).contains(&claim.medications.len()));
                assert!((50..=400).contains(&claim.total_cost_ghs));
                assert_eq!(claim.diagnosis, claim.service);
            }
        }
    }

    #[test]
    fn test_fraud_rate_extremes() {
        let mut all = ClaimGenerator::seeded(1, today()).with_fraud_rate(1.0);
        assert!((0..10).all(|_| all.generate().is_flagged()));
        let mut none = ClaimGenerator::seeded(1, today()).with_fraud_rate(0.0);
        assert!((0..10).all(|_| !none.generate().is_flagged()));
    }

    #[test]
    fn test_written_claims_feed_preparation() -> Result<()> {
        let dir = TempDir::new()?;
        let path = dir.path().join("data/raw_claims.jsonl");
        let mut g = ClaimGenerator::seeded(3, today());
        assert_eq!(write_claims(&path, 25, &mut g)?, 25);

        let text = fs::read_to_string(&path)?;
        assert_eq!(text.lines().count(), 25);
        for line in text.lines() {
            let value: serde_json::Value = serde_json::from_str(line)?;
            assert!(format_claim(&value).is_ok());
        }
        Ok(())
    }
}
