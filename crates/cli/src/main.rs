//! Tickets - converts a CSV sheet of quiz questions into a JSON document
//! grouped by ticket.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use tickets_core::{
    check, load_config, load_config_from_env, run_conversion, validate_config, Config, CsvSource,
    JsonSink, OutputFormat,
};

/// Environment variable naming the configuration file
const CONFIG_ENV: &str = "TICKETS_CONFIG";

#[derive(Parser)]
#[command(name = "tickets")]
#[command(about = "Convert a CSV sheet of quiz questions into a JSON ticket document", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file (TOML). Defaults to $TICKETS_CONFIG, then built-in defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert the sheet and write the ticket document
    Convert {
        /// Input CSV file (overrides input.path)
        input: Option<PathBuf>,

        /// Output JSON file (overrides output.path)
        output: Option<PathBuf>,

        /// Document shape: "plain" or "import"
        #[arg(long)]
        format: Option<OutputFormat>,

        /// Indentation width in spaces
        #[arg(long)]
        indent: Option<usize>,
    },

    /// Read and assemble the sheet without writing, reporting tickets an import would reject
    Check {
        /// Input CSV file (overrides input.path)
        input: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_json);

    if let Err(e) = run(cli) {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut config = resolve_config(cli.config)?;

    match cli.command {
        Commands::Convert {
            input,
            output,
            format,
            indent,
        } => {
            if let Some(input) = input {
                config.input.path = input;
            }
            if let Some(output) = output {
                config.output.path = output;
            }
            if let Some(format) = format {
                config.output.format = format;
            }
            if let Some(indent) = indent {
                config.output.indent = indent;
            }
            validate_config(&config).context("Configuration validation failed")?;
            convert(&config)
        }
        Commands::Check { input } => {
            if let Some(input) = input {
                config.input.path = input;
            }
            validate_config(&config).context("Configuration validation failed")?;
            check_sheet(&config)
        }
    }
}

fn resolve_config(path: Option<PathBuf>) -> Result<Config> {
    let path = path.or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

    match path {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            load_config(&path).with_context(|| format!("Failed to load config from {:?}", path))
        }
        None => load_config_from_env().context("Failed to load configuration"),
    }
}

fn convert(config: &Config) -> Result<()> {
    info!(
        "Converting {:?} to {:?} ({} format)",
        config.input.path, config.output.path, config.output.format
    );

    let source = CsvSource::from_config(config);
    let sink = JsonSink::from_config(&config.output);

    let summary = run_conversion(&source, &sink, config.output.format)
        .with_context(|| format!("Failed to convert {:?}", config.input.path))?;

    info!(
        "Wrote {} tickets with {} questions to {:?}",
        summary.tickets, summary.questions, config.output.path
    );
    if summary.rejected_tickets > 0 {
        error!(
            "{} tickets were left out of the import document",
            summary.rejected_tickets
        );
    }

    Ok(())
}

fn check_sheet(config: &Config) -> Result<()> {
    info!("Checking {:?}", config.input.path);

    let source = CsvSource::from_config(config);
    let report =
        check(&source).with_context(|| format!("Failed to check {:?}", config.input.path))?;

    info!(
        "{} tickets with {} questions, {} blank rows skipped",
        report.tickets, report.questions, report.rows_skipped
    );

    if !report.is_clean() {
        bail!(
            "{} tickets would be rejected on import",
            report.rejected.len()
        );
    }

    Ok(())
}
