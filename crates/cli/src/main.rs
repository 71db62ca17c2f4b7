use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use repaircost_log::{chunk_messages, LogParser, ParserConfig};
use repaircost_pricing::PriceTable;

mod flags;
mod report;

use flags::{PairingFlag, SchemaFlag};

/// Transport message-size limit the chunked output defaults to
const DEFAULT_CHUNK_LIMIT: usize = 2000;

#[derive(Parser)]
#[command(name = "repaircost")]
#[command(about = "Extract repair events from server chat logs and price them", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors (stdout is reserved for output)
    #[arg(long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a chat log and report the cost of every detected repair
    Analyze {
        /// Path to the chat log
        log: PathBuf,

        /// Path to the TOML price table
        #[arg(long)]
        prices: PathBuf,

        /// Log schema variant the records were written with
        #[arg(long, value_enum, default_value = "minimal")]
        schema: SchemaFlag,

        /// Boundary pairing policy
        #[arg(long, value_enum, default_value = "reuse-open")]
        pairing: PairingFlag,

        /// Transport message-size limit for output chunks
        #[arg(long, default_value_t = DEFAULT_CHUNK_LIMIT)]
        chunk_limit: usize,

        /// Emit machine-readable JSON instead of chunked text
        #[arg(long)]
        json: bool,
    },
}

fn init_logging(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "debug"
    } else if quiet {
        "warn"
    } else {
        "info"
    };
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level));
    builder.target(env_logger::Target::Stderr).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Analyze {
            log,
            prices,
            schema,
            pairing,
            chunk_limit,
            json,
        } => analyze(&log, &prices, schema, pairing, chunk_limit, json),
    }
}

fn analyze(
    log_path: &Path,
    prices_path: &Path,
    schema: SchemaFlag,
    pairing: PairingFlag,
    chunk_limit: usize,
    json: bool,
) -> Result<()> {
    let content = std::fs::read_to_string(log_path)
        .with_context(|| format!("failed to read log {}", log_path.display()))?;
    let table = PriceTable::load(prices_path)
        .with_context(|| format!("failed to load price table {}", prices_path.display()))?;
    log::debug!("loaded {} material price(s)", table.len());

    let config = ParserConfig {
        schema: schema.as_domain(),
        pairing: pairing.as_domain(),
        ..ParserConfig::default()
    };
    let records = LogParser::new(config).parse_str(&content);

    if json {
        let outcomes = report::json_outcomes(&records, &table);
        serde_json::to_writer_pretty(std::io::stdout().lock(), &outcomes)?;
        println!();
        return Ok(());
    }

    let lines = report::report_lines(&records, &table);
    for (index, chunk) in chunk_messages(&lines, chunk_limit).iter().enumerate() {
        if index > 0 {
            println!();
        }
        println!("{chunk}");
    }
    Ok(())
}
