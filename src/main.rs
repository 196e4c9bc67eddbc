// src/main.rs
mod config;
mod extractors;
mod layout;
mod pages;
mod storage;
mod utils;

use std::io;
use std::path::PathBuf;

use clap::Parser;
use config::BotOptions;
use pages::Revisi2Bot;
use storage::StorageManager;
use utils::AppError;

/// Rewrites Nias Wiktionary entries into the Revisi2 page layout
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Wikitext file of a single page (title taken from the file name)
    #[arg(short, long)]
    page: Option<PathBuf>,

    /// File listing the page titles to work on, one per line
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// MediaWiki Special:Export XML file to work on
    #[arg(short, long)]
    export: Option<PathBuf>,

    /// Directory holding `<title>.wiki` files for titles given with --file
    #[arg(long, default_value = ".")]
    pages_dir: PathBuf,

    /// Output directory for revised pages and their metadata
    #[arg(short, long, default_value = "./output")]
    output_dir: PathBuf,

    /// Edit summary recorded with each saved page
    #[arg(short, long)]
    summary: Option<String>,

    /// Simulate: print revised pages instead of saving them
    #[arg(long)]
    dry_run: bool,

    /// Save without asking for confirmation on each page
    #[arg(short, long)]
    always: bool,

    /// Debug mode - write a marker report for each page
    #[arg(short, long)]
    debug: bool,
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // 1. Setup Logging (reads RUST_LOG env var)
    utils::logging::setup_logging(if args.debug { "debug" } else { "info" });
    tracing::info!("Starting Revisi2 run with args: {:?}", args);

    // 2. Resolve options and the page source
    let options = BotOptions {
        summary: config::resolve_summary(args.summary.as_deref()),
        dry_run: args.dry_run,
        always: args.always,
        debug: args.debug,
        output_dir: args.output_dir.clone(),
    };
    let source = config::resolve_source(args.page, args.file, args.export, args.pages_dir)?;

    // 3. Load pages
    let pages = source.load()?;
    tracing::info!("Loaded {} pages from {:?}", pages.len(), source);
    if pages.is_empty() {
        return Err(AppError::Config("The page source contains no pages".to_string()));
    }

    // 4. Run the bot
    let storage = StorageManager::new(&options.output_dir)?;
    let stdin = io::stdin();
    let mut bot = Revisi2Bot::new(options, storage, stdin.lock(), io::stdout());
    let stats = bot.run(pages)?;

    if stats.all_failed() {
        return Err(AppError::Processing(format!("Failed to save any of {} pages", stats.failed)));
    }

    Ok(())
}
