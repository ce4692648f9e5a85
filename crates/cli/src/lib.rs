pub mod commands;

use clap::{Parser, Subcommand};
use std::process::ExitCode;

use homeworth_core::config::{AppConfig, LoadOptions, LogFormat, LoggingConfig};

#[derive(Debug, Parser)]
#[command(
    name = "homeworth",
    about = "Homeworth advisory CLI",
    long_about = "Run property assessments, value estimates, catalog browsing, and admin-gate checks against the deterministic advisory core.",
    after_help = "Examples:\n  homeworth estimate --current-value 5000000 --spend 200000\n  homeworth assess --property-type apartment --city Mumbai --locality Powai --age 12 --area 950 --budget 200000 --condition average\n  homeworth doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Assess a property and print ranked improvement recommendations")]
    Assess(commands::assess::AssessArgs),
    #[command(about = "Estimate the value uplift for an improvement spend")]
    Estimate(commands::estimate::EstimateArgs),
    #[command(about = "Browse the enhancement showcase, optionally filtered by category")]
    Catalog {
        #[arg(long, help = "Only show entries in this category")]
        category: Option<String>,
    },
    #[command(about = "Check a credential pair against the admin gate")]
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    #[command(about = "Validate config, admin-gate readiness, and seed-data integrity")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(
        about = "Inspect effective configuration values with source attribution and redaction"
    )]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Command::Assess(args) => commands::assess::run(&args),
        Command::Estimate(args) => commands::estimate::run(&args),
        Command::Catalog { category } => commands::catalog::run(category.as_deref()),
        Command::Login { email, password } => commands::login::run(&email, &password),
        Command::Doctor { json } => {
            commands::CommandResult { exit_code: 0, output: commands::doctor::run(json) }
        }
        Command::Config => {
            commands::CommandResult { exit_code: 0, output: commands::config::run() }
        }
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

fn init_logging() {
    use tracing::Level;

    // Assessment and estimation run without configuration, so an incomplete
    // config falls back to default logging instead of blocking the command.
    let logging = AppConfig::load(LoadOptions::default())
        .map(|config| config.logging)
        .unwrap_or_else(|_| LoggingConfig { level: "info".to_string(), format: LogFormat::Compact });

    let log_level = logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match logging.format {
        LogFormat::Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        LogFormat::Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        LogFormat::Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}
