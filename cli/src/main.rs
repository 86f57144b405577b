mod config;

use std::fs;
use std::path::PathBuf;

use bible_plan_core::{BookParse, parse_books_file, write_json};
use bible_plan_sqlite::extract_plan;
use clap::Parser;
use tracing::warn;

use crate::config::ExtractConfig;

#[derive(Debug, Parser)]
#[command(name = "extract-bible-data")]
#[command(about = "Generate books.json and plan.json from Bible module sources")]
#[command(version)]
struct Cli {
    /// YAML file overriding the default locations.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Module format text file with the book blocks.
    #[arg(long)]
    format_file: Option<PathBuf>,
    /// SQLite reading-plan database.
    #[arg(long)]
    plan_db: Option<PathBuf>,
    /// Directory for the generated JSON files.
    #[arg(long)]
    output_dir: Option<PathBuf>,
    /// Only generate plan.json.
    #[arg(long, conflicts_with = "skip_plan")]
    skip_books: bool,
    /// Only generate books.json.
    #[arg(long)]
    skip_plan: bool,
    /// Log per-block and per-day details to stderr.
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let result = init_tracing(cli.verbose).and_then(|()| run(cli));

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

/// Installs a stderr subscriber; `BIBLE_PLAN_LOG` takes precedence over `--verbose`.
fn init_tracing(verbose: bool) -> Result<(), String> {
    let level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_env("BIBLE_PLAN_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| format!("Failed to initialize logging: {e}"))
}

fn resolve_config(cli: &Cli) -> Result<ExtractConfig, String> {
    let mut config = match &cli.config {
        Some(path) => ExtractConfig::load(path)?,
        None => ExtractConfig::default(),
    };
    if let Some(path) = &cli.format_file {
        config.format_path = path.clone();
    }
    if let Some(path) = &cli.plan_db {
        config.plan_db = path.clone();
    }
    if let Some(path) = &cli.output_dir {
        config.output_dir = path.clone();
    }
    Ok(config)
}

fn run(cli: Cli) -> Result<(), String> {
    let config = resolve_config(&cli)?;

    fs::create_dir_all(&config.output_dir).map_err(|err| {
        format!(
            "Failed to create output directory '{}': {err}",
            config.output_dir.display()
        )
    })?;

    if !cli.skip_books {
        run_books(&config)?;
    }
    if !cli.skip_plan {
        run_plan(&config)?;
    }

    println!("Done!");
    Ok(())
}

// ---------------------------------------------------------------------------
// books.json
// ---------------------------------------------------------------------------

fn run_books(config: &ExtractConfig) -> Result<(), String> {
    println!("Extracting books...");
    let parse = parse_books_file(&config.format_path).map_err(|e| {
        format!(
            "Failed to read format file '{}': {e}",
            config.format_path.display()
        )
    })?;
    report_book_diagnostics(&parse);

    let path = config.books_path();
    write_json(&path, &parse.books)
        .map_err(|e| format!("Failed to write '{}': {e}", path.display()))?;

    println!("Extracted {} books.", parse.len());
    Ok(())
}

fn report_book_diagnostics(parse: &BookParse) {
    if !parse.errors.is_empty() {
        let lines: Vec<String> = parse.errors.iter().map(|e| e.line.to_string()).collect();
        warn!(
            count = parse.errors.len(),
            lines = %lines.join(", "),
            "skipped malformed book blocks"
        );
    }
    if !parse.duplicates.is_empty() {
        warn!(
            count = parse.duplicates.len(),
            books = ?parse.duplicates,
            "duplicate book numbers overwritten"
        );
    }
}

// ---------------------------------------------------------------------------
// plan.json
// ---------------------------------------------------------------------------

fn run_plan(config: &ExtractConfig) -> Result<(), String> {
    println!("Extracting plan...");
    let doc = extract_plan(&config.plan_db).map_err(|e| {
        format!(
            "Failed to extract plan from '{}': {e}",
            config.plan_db.display()
        )
    })?;

    let path = config.plan_path();
    write_json(&path, &doc).map_err(|e| format!("Failed to write '{}': {e}", path.display()))?;

    println!(
        "Wrote {} days ({} readings) to {}",
        doc.plan.len(),
        doc.reading_count(),
        path.display()
    );
    Ok(())
}
