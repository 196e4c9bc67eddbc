// src/pages/source.rs
use std::fs;
use std::path::{Path, PathBuf};

use super::export::parse_export;
use super::models::{file_stem_for, Page};
use crate::utils::error::PageError;

pub const PAGE_EXTENSION: &str = "wiki";

/// Where the bot gets its pages from.
#[derive(Debug, Clone)]
pub enum PageSource {
    /// One wikitext file; the title is the file stem.
    Single(PathBuf),
    /// A file of titles, one per line, each read from `<pages_dir>/<title>.wiki`.
    List { list: PathBuf, pages_dir: PathBuf },
    /// A MediaWiki `Special:Export` XML file.
    Export(PathBuf),
}

impl PageSource {
    /// Loads every page. Pages that cannot be read come back as per-page
    /// errors so the caller can skip them; only a failure of the source
    /// itself (unreadable list or export) fails the whole load.
    pub fn load(&self) -> Result<Vec<Result<Page, PageError>>, PageError> {
        match self {
            PageSource::Single(path) => {
                let title = path
                    .file_stem()
                    .map(|s| s.to_string_lossy().replace('_', " "))
                    .unwrap_or_default();
                Ok(vec![read_page_file(&title, path)])
            }
            PageSource::List { list, pages_dir } => {
                let titles = fs::read_to_string(list)?;
                let pages = titles
                    .lines()
                    .map(|line| line.trim().trim_start_matches("[[").trim_end_matches("]]").trim())
                    .filter(|title| !title.is_empty() && !title.starts_with('#'))
                    .map(|title| {
                        let path = pages_dir.join(format!("{}.{}", file_stem_for(title), PAGE_EXTENSION));
                        read_page_file(title, &path)
                    })
                    .collect();
                Ok(pages)
            }
            PageSource::Export(path) => {
                let xml = fs::read_to_string(path)?;
                parse_export(&xml)
            }
        }
    }
}

fn read_page_file(title: &str, path: &Path) -> Result<Page, PageError> {
    if !path.exists() {
        return Err(PageError::Missing(title.to_string()));
    }
    let text = fs::read_to_string(path)?;
    if text.trim().is_empty() {
        return Err(PageError::Missing(title.to_string()));
    }
    Ok(Page::new(title, text))
}
