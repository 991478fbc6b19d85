use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use bris_parser::{parse_document, HorseRecord};

#[derive(Parser)]
#[command(name = "bris_parser", about = "Parse extracted racing-form text into per-horse records")]
struct Cli {
    /// Extracted page text (UTF-8, LF or CRLF line endings)
    file: PathBuf,
    /// One-line JSON instead of pretty-printed
    #[arg(long)]
    compact: bool,
    /// Aligned per-horse overview instead of JSON
    #[arg(long)]
    summary: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let text = fs::read_to_string(&cli.file)
        .with_context(|| format!("reading {}", cli.file.display()))?;

    let records = parse_document(&text);

    if cli.summary {
        print_summary(&records);
        return Ok(());
    }

    let json = if cli.compact {
        serde_json::to_string(&records)?
    } else {
        serde_json::to_string_pretty(&records)?
    };
    println!("{}", json);
    Ok(())
}

fn print_summary(records: &[HorseRecord]) {
    println!(
        "{:>4} | {:<24} | {:<24} | {:<20} | {:>4} | {:>4}",
        "Post", "Horse", "Trainer", "Jockey", "PPs", "Wks"
    );
    println!("{}", "-".repeat(92));

    for r in records {
        let post = r.post.map(|p| p.to_string()).unwrap_or_else(|| "-".into());
        println!(
            "{:>4} | {:<24} | {:<24} | {:<20} | {:>4} | {:>4}",
            post,
            truncate(&r.name, 24),
            truncate(&r.trainer, 24),
            truncate(&r.jockey.name, 20),
            r.past_performances.len(),
            r.workouts.len(),
        );
    }

    println!("\n{} horses", records.len());
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
