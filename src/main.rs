//! Data Doctor - audit and prepare fine-tuning datasets
//!
//! Headless CLI: every subcommand prints its result and exits.

use anyhow::{Context, Result};
use argh::FromArgs;
use chrono::NaiveDate;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use data_doctor::audit::Auditor;
use data_doctor::config::AuditConfig;
use data_doctor::consult::{self, Consultant};
use data_doctor::prepare::prepare_file;
use data_doctor::report;
use data_doctor::synth::{write_claims, ClaimGenerator};
use data_doctor::tokenizer::TokenizerSource;

/// Data Doctor - check whether a dataset is ready for fine-tuning
#[derive(FromArgs)]
struct Args {
    /// enable debug logging (overridden by RUST_LOG)
    #[argh(switch, short = 'v')]
    verbose: bool,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    Audit(AuditArgs),
    Consult(ConsultArgs),
    Prepare(PrepareArgs),
    Generate(GenerateArgs),
}

/// Evaluate a dataset folder
#[derive(FromArgs)]
#[argh(subcommand, name = "audit")]
struct AuditArgs {
    /// path to data folder
    #[argh(positional)]
    path: String,

    /// hub model whose tokenizer is used for counts
    #[argh(option, short = 'm')]
    model: Option<String>,

    /// path to a local tokenizer.json (overrides --model)
    #[argh(option)]
    tokenizer_path: Option<String>,

    /// skip the tokenizer download and approximate token counts
    #[argh(switch)]
    offline: bool,
}

/// Interactive guide to choose a data strategy
#[derive(FromArgs)]
#[argh(subcommand, name = "consult")]
struct ConsultArgs {
    /// training goal; prompts on stdin when omitted
    #[argh(option, short = 'g')]
    goal: Option<String>,
}

/// Convert raw claim records into instruction-tuning JSONL
#[derive(FromArgs)]
#[argh(subcommand, name = "prepare")]
struct PrepareArgs {
    /// input raw records (.jsonl or .csv)
    #[argh(option, short = 'i', default = "String::from(\"data/raw_claims.jsonl\")")]
    input: String,

    /// output training JSONL
    #[argh(option, short = 'o', default = "String::from(\"data/training_data.jsonl\")")]
    output: String,
}

/// Generate synthetic raw claim records
#[derive(FromArgs)]
#[argh(subcommand, name = "generate")]
struct GenerateArgs {
    /// output JSONL path
    #[argh(option, short = 'o', default = "String::from(\"data/raw_claims.jsonl\")")]
    output: String,

    /// number of records to generate
    #[argh(option, short = 'n', default = "500")]
    count: usize,

    /// seed for reproducible output (pair with --today to pin dates)
    #[argh(option)]
    seed: Option<u64>,

    /// reference date (YYYY-MM-DD) that claim dates count back from; defaults to the local date
    #[argh(option)]
    today: Option<NaiveDate>,
}

fn main() -> Result<()> {
    // Credentials such as HF_TOKEN may live in a local .env
    let _ = dotenvy::dotenv();

    let args: Args = argh::from_env();
    init_tracing(args.verbose);

    match args.command {
        Command::Audit(a) => run_audit(a),
        Command::Consult(c) => run_consult(c),
        Command::Prepare(p) => run_prepare(p),
        Command::Generate(g) => run_generate(g),
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr).with_target(false))
        .init();
}

fn run_audit(args: AuditArgs) -> Result<()> {
    let mut config = AuditConfig::from_env();
    if let Some(model) = args.model {
        config = config.with_model_id(model);
    }

    let source = if args.offline {
        TokenizerSource::Offline
    } else if let Some(path) = args.tokenizer_path {
        TokenizerSource::File(PathBuf::from(path))
    } else {
        TokenizerSource::Hub
    };

    let auditor = Auditor::new(config).with_tokenizer_source(source);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match auditor.run(&args.path) {
        Ok(audit) => report::render(&mut out, &audit, auditor.config())?,
        Err(e) => report::render_error(&mut out, &e)?,
    }
    out.flush()?;
    Ok(())
}

fn run_consult(args: ConsultArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "\n=== 🩺 Data Doctor: Consultation ===\n")?;
    writeln!(out, "I'll ask a few questions to recommend a data strategy.\n")?;

    let goal = match args.goal {
        Some(goal) => goal,
        None => consult::ask_goal(&mut io::stdin().lock(), &mut out)
            .with_context(|| "Failed to read goal from stdin")?,
    };

    let strategy = Consultant::new().recommend(&goal);
    consult::render(&mut out, &strategy)?;
    Ok(())
}

fn run_prepare(args: PrepareArgs) -> Result<()> {
    eprintln!("🔨 Converting {} -> {}...", args.input, args.output);

    if !Path::new(&args.input).exists() {
        eprintln!("❌ Error: Input file {} not found.", args.input);
        return Ok(());
    }

    let summary = prepare_file(&args.input, &args.output)?;
    for (index, reason) in &summary.skipped {
        eprintln!("⚠ Record {}: {} (skipped)", index + 1, reason.description());
    }

    eprintln!("✅ Successfully prepared {} examples.", summary.prepared);
    eprintln!("Next: run `data-doctor audit` on the folder containing {}.", args.output);
    Ok(())
}

fn run_generate(args: GenerateArgs) -> Result<()> {
    eprintln!("🏥 Generating {} synthetic claims...", args.count);

    let mut generator = ClaimGenerator::from_options(args.seed, args.today);
    write_claims(&args.output, args.count, &mut generator)?;

    eprintln!("✅ Data saved to: {}", args.output);
    eprintln!("Next: run `data-doctor prepare --input {}` and then audit the output folder.", args.output);
    Ok(())
}
