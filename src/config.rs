// src/config.rs
use std::path::PathBuf;

use crate::pages::source::PageSource;
use crate::utils::AppError;

pub const DEFAULT_SUMMARY: &str =
    "Add the missing sections from Revisi2 (see community decision 7 Oct 24).";

/// Environment override for the edit summary.
pub const SUMMARY_ENV: &str = "REVISI2_SUMMARY";

/// Options the bot runs with, resolved from the command line and environment.
#[derive(Debug, Clone)]
pub struct BotOptions {
    pub summary: String,
    pub dry_run: bool,
    pub always: bool,
    pub debug: bool,
    pub output_dir: PathBuf,
}

/// `--summary` wins, then `REVISI2_SUMMARY`, then the default.
pub fn resolve_summary(arg: Option<&str>) -> String {
    if let Some(summary) = arg.filter(|s| !s.trim().is_empty()) {
        tracing::debug!("Using summary from command line");
        return summary.to_string();
    }
    match std::env::var(SUMMARY_ENV) {
        Ok(summary) if !summary.trim().is_empty() => {
            tracing::debug!("Using summary from {}", SUMMARY_ENV);
            summary
        }
        _ => DEFAULT_SUMMARY.to_string(),
    }
}

/// Picks the single page source the operator asked for.
pub fn resolve_source(
    page: Option<PathBuf>,
    file: Option<PathBuf>,
    export: Option<PathBuf>,
    pages_dir: PathBuf,
) -> Result<PageSource, AppError> {
    match (page, file, export) {
        (Some(path), None, None) => Ok(PageSource::Single(path)),
        (None, Some(list), None) => Ok(PageSource::List { list, pages_dir }),
        (None, None, Some(path)) => Ok(PageSource::Export(path)),
        (None, None, None) => Err(AppError::Config(
            "No pages to work on: give one of --page, --file or --export".to_string(),
        )),
        _ => Err(AppError::Config(
            "Give only one of --page, --file or --export".to_string(),
        )),
    }
}
