mod export;
mod parser;
mod record;
mod vocab;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::info;

use parser::{parse_listing, CountPolicy, ParseError, ParseOptions};
use record::Record;
use vocab::Vocabulary;

#[derive(Parser)]
#[command(
    name = "booth_stock",
    about = "Extract inventory records from pasted BOOTH item-management page text"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert pasted listing text to CSV or JSON
    Convert {
        /// Input text file (reads stdin when omitted)
        input: Option<PathBuf>,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Output format
        #[arg(short, long, value_enum, default_value = "csv")]
        format: Format,
        /// Drop records that have no reference URL
        #[arg(long)]
        require_url: bool,
        /// How payment-pending/unshipped markers are counted across variations
        #[arg(long, value_enum, default_value = "per-variation")]
        count_policy: CountPolicy,
    },
    /// Parse and print a preview table
    Show {
        /// Input text file (reads stdin when omitted)
        input: Option<PathBuf>,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let vocab = Vocabulary::default();

    match cli.command {
        Commands::Convert {
            input,
            output,
            format,
            require_url,
            count_policy,
        } => {
            let text = read_input(input.as_deref())?;
            let opts = ParseOptions {
                count_policy,
                ..ParseOptions::default()
            };
            let records = match parse_listing(&text, &vocab, &opts) {
                Ok(records) => records,
                Err(ParseError::EmptyInput) => {
                    anyhow::bail!("no input: paste or pipe the listing page text first")
                }
            };
            if records.is_empty() {
                println!("No records matched.");
                return Ok(());
            }
            let records = if require_url {
                export::require_url(records)
            } else {
                records
            };

            let rendered = match format {
                Format::Csv => export::to_csv_string(&records),
                Format::Json => serde_json::to_string_pretty(&records)?,
            };
            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!(records = records.len(), path = %path.display(), "wrote output");
                    println!("Wrote {} records to {}", records.len(), path.display());
                }
                None => print!("{rendered}"),
            }
            Ok(())
        }
        Commands::Show { input, limit } => {
            let text = read_input(input.as_deref())?;
            let records = match parse_listing(&text, &vocab, &ParseOptions::default()) {
                Ok(records) => records,
                Err(ParseError::EmptyInput) => {
                    anyhow::bail!("no input: paste or pipe the listing page text first")
                }
            };
            if records.is_empty() {
                println!("No records matched.");
                return Ok(());
            }
            print_table(&records, limit);
            Ok(())
        }
    }
}

fn read_input(path: Option<&Path>) -> anyhow::Result<String> {
    match path {
        Some(p) => std::fs::read_to_string(p).with_context(|| format!("reading {}", p.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn print_table(records: &[Record], limit: usize) {
    println!(
        "{:>3} | {:<24} | {:<16} | {:<11} | {:>7} | {:>5} | {:>5} | {:>8} | {:>6}",
        "#", "Product", "Variation", "Status", "Price", "Stock", "Sold", "Revenue", "Unship"
    );
    println!("{}", "-".repeat(102));

    let opt = |v: Option<i64>| v.map(|n| n.to_string()).unwrap_or_else(|| "-".into());
    for (i, r) in records.iter().take(limit).enumerate() {
        println!(
            "{:>3} | {:<24} | {:<16} | {:<11} | {:>7} | {:>5} | {:>5} | {:>8} | {:>6}",
            i + 1,
            truncate(&r.base_name, 24),
            truncate(&r.variation, 16),
            r.status.as_str(),
            opt(r.fields.price),
            opt(r.fields.stock),
            opt(r.fields.units_sold),
            opt(r.fields.revenue),
            r.fields.unshipped,
        );
    }

    println!("\n{} records", records.len());
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
