// src/pages/bot.rs
use std::io::{BufRead, Write};

use super::models::{Page, PageOutcome};
use crate::config::BotOptions;
use crate::layout::Revisi2Layout;
use crate::storage::StorageManager;
use crate::utils::error::{AppError, PageError};
use crate::utils::marker_debug;

/// Operator answer to "save this page?".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Choice {
    Yes,
    No,
    All,
    Quit,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunStats {
    pub changed: usize,
    pub unchanged: usize,
    pub declined: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl RunStats {
    /// True when pages were attempted and every one of them failed to save.
    /// Skipped pages were never attempted; declined ones did not fail.
    pub fn all_failed(&self) -> bool {
        self.failed > 0 && self.changed + self.unchanged + self.declined == 0
    }
}

/// Applies the Revisi2 layout to a stream of pages, one at a time.
pub struct Revisi2Bot<R: BufRead, W: Write> {
    options: BotOptions,
    layout: Revisi2Layout,
    storage: StorageManager,
    input: R,
    output: W,
    quit: bool,
}

impl<R: BufRead, W: Write> Revisi2Bot<R, W> {
    pub fn new(options: BotOptions, storage: StorageManager, input: R, output: W) -> Self {
        Self { options, layout: Revisi2Layout::new(), storage, input, output, quit: false }
    }

    /// Runs every page through the layout, skipping unusable ones.
    pub fn run(&mut self, pages: Vec<Result<Page, PageError>>) -> Result<RunStats, AppError> {
        let mut stats = RunStats::default();

        for page in pages {
            if self.quit {
                tracing::info!("Stopped by operator");
                break;
            }

            let page = match page {
                Ok(page) => page,
                Err(e) => {
                    tracing::warn!("Skipping page: {}", e);
                    stats.skipped += 1;
                    continue;
                }
            };

            match self.treat_page(&page) {
                Ok(PageOutcome::Changed) => stats.changed += 1,
                Ok(PageOutcome::Unchanged) => stats.unchanged += 1,
                Ok(PageOutcome::Declined) => stats.declined += 1,
                Ok(PageOutcome::Skipped(reason)) => {
                    tracing::warn!("Skipping page '{}': {}", page.title, reason);
                    stats.skipped += 1;
                }
                Err(e) => {
                    tracing::error!("Failed to save page '{}': {}", page.title, e);
                    stats.failed += 1;
                }
            }
        }

        tracing::info!(
            "Processing finished. Changed: {}, Unchanged: {}, Declined: {}, Skipped: {}, Failed: {}",
            stats.changed, stats.unchanged, stats.declined, stats.skipped, stats.failed
        );
        Ok(stats)
    }

    /// Revises one page and, unless simulating, commits the new text.
    pub fn treat_page(&mut self, page: &Page) -> Result<PageOutcome, AppError> {
        if page.is_redirect() {
            return Ok(PageOutcome::Skipped(PageError::Redirect(page.title.clone()).to_string()));
        }

        tracing::info!("Processing page '{}' ({} bytes)", page.title, page.text.len());

        if self.options.debug {
            let path = self.storage.debug_path(page);
            if let Err(e) = marker_debug::save_marker_report(&page.title, &page.text, &path) {
                tracing::warn!("Failed to create marker report: {}", e);
            }
        }

        let revision = self.layout.revise(&page.text);
        if revision.text == page.text.trim() {
            tracing::info!("Page '{}' already follows Revisi2", page.title);
            return Ok(PageOutcome::Unchanged);
        }

        tracing::debug!(
            "Page '{}': found {:?}, defaulted {:?}",
            page.title, revision.sections_found, revision.sections_defaulted
        );

        if self.options.dry_run {
            writeln!(self.output, ">>> {} <<<\n{}\n", page.title, revision.text)?;
            return Ok(PageOutcome::Changed);
        }

        if !self.options.always {
            match self.ask(&page.title)? {
                Choice::Yes => {}
                Choice::All => self.options.always = true,
                Choice::No => return Ok(PageOutcome::Declined),
                Choice::Quit => {
                    self.quit = true;
                    return Ok(PageOutcome::Declined);
                }
            }
        }

        let path = self.storage.save_page(page, &revision)?;
        tracing::info!("Saved page '{}' to {}", page.title, path.display());
        let meta = self.storage.save_page_metadata(page, &revision, &self.options.summary)?;
        tracing::debug!("Saved metadata to {}", meta.display());

        Ok(PageOutcome::Changed)
    }

    fn ask(&mut self, title: &str) -> Result<Choice, AppError> {
        loop {
            write!(self.output, "Save changes to '{}'? ([y]es, [n]o, [a]ll, [q]uit) ", title)?;
            self.output.flush()?;

            let mut answer = String::new();
            if self.input.read_line(&mut answer)? == 0 {
                return Ok(Choice::Quit); // stdin closed
            }
            match answer.trim().to_lowercase().as_str() {
                "y" | "yes" => return Ok(Choice::Yes),
                "n" | "no" | "" => return Ok(Choice::No),
                "a" | "all" => return Ok(Choice::All),
                "q" | "quit" => return Ok(Choice::Quit),
                other => tracing::debug!("Unrecognized answer '{}'", other),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::Path;

    fn options(dir: &Path, dry_run: bool, always: bool) -> BotOptions {
        BotOptions {
            summary: "test".to_string(),
            dry_run,
            always,
            debug: false,
            output_dir: dir.to_path_buf(),
        }
    }

    fn bot(opts: BotOptions, answers: &str) -> Revisi2Bot<Cursor<Vec<u8>>, Vec<u8>> {
        let storage = StorageManager::new(&opts.output_dir).unwrap();
        Revisi2Bot::new(opts, storage, Cursor::new(answers.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn test_always_saves_changed_pages() {
        let dir = tempfile::tempdir().unwrap();
        let mut bot = bot(options(dir.path(), false, true), "");
        let stats = bot
            .run(vec![
                Ok(Page::new("omo", "{{nia}}\n# omo")),
                Ok(Page::new("Omo", "#REDIRECT [[omo]]")),
                Err(PageError::Missing("tanö".to_string())),
            ])
            .unwrap();

        assert_eq!(stats, RunStats { changed: 1, skipped: 2, ..Default::default() });
        let saved = std::fs::read_to_string(dir.path().join("omo.wiki")).unwrap();
        assert!(saved.starts_with("{{nia}}\n\n{{famoligö}}"));
        assert!(dir.path().join("omo_meta.json").exists());
    }

    #[test]
    fn test_dry_run_prints_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut bot = bot(options(dir.path(), true, false), "");
        let outcome = bot.treat_page(&Page::new("omo", "# omo")).unwrap();

        assert_eq!(outcome, PageOutcome::Changed);
        assert!(!dir.path().join("omo.wiki").exists());
        let printed = String::from_utf8(bot.output.clone()).unwrap();
        assert!(printed.starts_with(">>> omo <<<\n{{famoligö}}"));
        assert!(printed.contains("{{definisi}}\n:1. omo"));
    }

    #[test]
    fn test_revised_page_is_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        let revised = Revisi2Layout::new().revise("{{nia}}\n# omo").text;
        let mut bot = bot(options(dir.path(), false, true), "");
        assert_eq!(bot.treat_page(&Page::new("omo", revised)).unwrap(), PageOutcome::Unchanged);
    }

    #[test]
    fn test_operator_answers() {
        let dir = tempfile::tempdir().unwrap();
        let mut bot = bot(options(dir.path(), false, false), "n\nwhat\ny\nq\n");
        let stats = bot
            .run(vec![
                Ok(Page::new("a", "# a")),
                Ok(Page::new("b", "# b")),
                Ok(Page::new("c", "# c")),
                Ok(Page::new("d", "# d")),
            ])
            .unwrap();

        assert_eq!(stats, RunStats { changed: 1, declined: 2, ..Default::default() });
        assert!(!dir.path().join("a.wiki").exists());
        assert!(dir.path().join("b.wiki").exists());
        assert!(!dir.path().join("c.wiki").exists());
    }

    #[test]
    fn test_all_failed_counts_only_attempted_pages() {
        let only_failures = RunStats { failed: 2, skipped: 3, ..Default::default() };
        assert!(only_failures.all_failed());

        let with_declined = RunStats { failed: 1, declined: 1, ..Default::default() };
        assert!(!with_declined.all_failed());

        assert!(!RunStats { skipped: 1, ..Default::default() }.all_failed());
    }

    #[test]
    fn test_all_answer_stops_asking() {
        let dir = tempfile::tempdir().unwrap();
        let mut bot = bot(options(dir.path(), false, false), "a\n");
        let stats = bot
            .run(vec![Ok(Page::new("a", "# a")), Ok(Page::new("b", "# b"))])
            .unwrap();
        assert_eq!(stats.changed, 2);
    }
}
