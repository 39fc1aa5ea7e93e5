//! CareLink Healthcare Companion — Demo CLI
//!
//! Runs one or all of the companion walkthroughs. Each scenario uses the real
//! CareLink components (navigator, credential gate, session store, symptom
//! engine, follow-up tracker, chat assistant) with mock data.
//!
//! Usage:
//!   cargo run -p demo -- run-all
//!   cargo run -p demo -- --language hi onboarding
//!   cargo run -p demo -- --config crates/carelink-ref-companion/config/companion.toml symptom-check
//!   cargo run -p demo -- resources --query diabetes
//!   cargo run -p demo -- reset

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use carelink_contracts::{error::CareLinkResult, language::SUPPORTED_LANGUAGES};
use carelink_core::traits::SessionStore;
use carelink_ref_companion::{
    scenarios::{self, assistant, doctors, follow_up, onboarding, resources, symptom_check},
    CompanionConfig,
};
use carelink_session::FileSessionStore;

// ── CLI definition ────────────────────────────────────────────────────────────

/// CareLink — multilingual healthcare companion demo.
///
/// Each subcommand runs one or all of the companion walkthroughs.
#[derive(Parser)]
#[command(
    name = "demo",
    about = "CareLink healthcare companion demo",
    long_about = "Runs CareLink walkthroughs showing gated onboarding with session resume,\n\
                  symptom-to-condition inference, follow-up scheduling, and the chat assistant."
)]
struct Cli {
    /// Companion configuration file (TOML). Defaults apply when omitted.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Language code for user-facing text: en, hi, te or ta.
    #[arg(long, global = true, default_value = "en")]
    language: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run every scenario in sequence.
    RunAll,
    /// Scenario 1: language choice, credential gate, resume after restart.
    Onboarding,
    /// Scenario 2: body-region symptom check and ranked conditions.
    SymptomCheck,
    /// Scenario 3: follow-up status updates and check-in scheduling.
    FollowUp,
    /// Scenario 4: chat with delayed, cancellable replies.
    Assistant,
    /// Scenario 5: browse and search the medical resource library.
    Resources {
        /// Case-insensitive search across every category.
        #[arg(long, default_value = scenarios::DEFAULT_RESOURCE_QUERY)]
        query: String,
    },
    /// Scenario 6: doctors, appointments and prescriptions.
    Doctors,
    /// Delete the persisted session so onboarding starts over.
    Reset,
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    print_banner();

    let result = match load_config(cli.config.as_ref()) {
        Ok(config) => dispatch(cli.command, &config, &cli.language).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => {
            println!("All selected scenarios completed successfully.");
        }
        Err(e) => {
            eprintln!("Demo error: {}", e);
            std::process::exit(1);
        }
    }
}

fn load_config(path: Option<&PathBuf>) -> CareLinkResult<CompanionConfig> {
    match path {
        Some(path) => {
            info!(path = %path.display(), "loading companion config");
            CompanionConfig::from_file(path)
        }
        None => Ok(CompanionConfig::default()),
    }
}

// ── Scenario dispatch ─────────────────────────────────────────────────────────

async fn dispatch(command: Command, config: &CompanionConfig, language: &str) -> CareLinkResult<()> {
    match command {
        Command::RunAll => scenarios::run_all(config, language).await,
        Command::Onboarding => onboarding::run_scenario(config, language).await,
        Command::SymptomCheck => symptom_check::run_scenario(config, language),
        Command::FollowUp => follow_up::run_scenario(config, language),
        Command::Assistant => assistant::run_scenario(config, language).await,
        Command::Resources { query } => resources::run_scenario(language, &query),
        Command::Doctors => doctors::run_scenario(language),
        Command::Reset => reset(config),
    }
}

fn reset(config: &CompanionConfig) -> CareLinkResult<()> {
    FileSessionStore::new(&config.session.path).clear()?;
    println!("Session cleared: {}", config.session.path.display());
    println!();
    Ok(())
}

// ── Banner ────────────────────────────────────────────────────────────────────

fn print_banner() {
    println!();
    println!("CareLink — Multilingual Healthcare Companion");
    println!("Reference Demo");
    println!("============================================");
    println!();
    println!("Session flow:");
    println!("  [1] Language   choose one of {}", language_list());
    println!("  [2] Credential token checked by syntax policy, then the verifier (single-flight)");
    println!("  [3] Dashboard  unlocked only for a verified session; resumed directly after restart");
    println!("  [4] Features   symptom checker, chat, doctor portal, resources, follow-up");
    println!();
    println!("Informational only. Not medical advice.");
    println!();
}

fn language_list() -> String {
    SUPPORTED_LANGUAGES
        .iter()
        .map(|l| format!("{} ({})", l.native_name, l.code))
        .collect::<Vec<_>>()
        .join(", ")
}
