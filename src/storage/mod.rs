// src/storage/mod.rs
use std::fs;
use std::path::{Path, PathBuf};
use crate::layout::Revision;
use crate::pages::models::Page;
use crate::pages::source::PAGE_EXTENSION;
use crate::utils::error::StorageError;
use std::io::Write;

pub struct StorageManager {
    base_dir: PathBuf,
}

impl StorageManager {
    /// Creates a new StorageManager with the specified base directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self, StorageError> {
        let base_path = base_dir.as_ref().to_path_buf();

        // Create the base directory if it doesn't exist
        if !base_path.exists() {
            fs::create_dir_all(&base_path)
                .map_err(StorageError::IoError)?;
        }

        Ok(Self { base_dir: base_path })
    }

    /// Where the marker report for `page` goes in debug mode.
    pub fn debug_path(&self, page: &Page) -> PathBuf {
        self.base_dir.join("debug").join(format!("{}_markers.txt", page.file_stem()))
    }

    /// Saves the revised page text to `<base_dir>/<title>.wiki`
    pub fn save_page(&self, page: &Page, revision: &Revision) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}.{}", page.file_stem(), PAGE_EXTENSION));

        let mut file = fs::File::create(&file_path)
            .map_err(StorageError::IoError)?;

        file.write_all(revision.text.as_bytes())
            .map_err(StorageError::IoError)?;

        tracing::debug!("Wrote {} bytes to {}", revision.text.len(), file_path.display());

        Ok(file_path)
    }

    /// Saves metadata about the revision in JSON format
    pub fn save_page_metadata(
        &self,
        page: &Page,
        revision: &Revision,
        summary: &str,
    ) -> Result<PathBuf, StorageError> {
        let file_path = self.base_dir.join(format!("{}_meta.json", page.file_stem()));

        let metadata = serde_json::json!({
            "title": page.title,
            "summary": summary,
            "revision": revision,
            "original_length": page.text.len(),
            "revised_length": revision.text.len(),
            "revision_timestamp": chrono::Utc::now().to_rfc3339(),
        });

        let metadata_str = serde_json::to_string_pretty(&metadata)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;

        fs::write(&file_path, metadata_str)
            .map_err(StorageError::IoError)?;

        Ok(file_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Revisi2Layout;

    #[test]
    fn test_save_page_and_metadata() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageManager::new(dir.path().join("out")).unwrap();
        let page = Page::new("omo sebua", "{{nia}}\n{{verba}}\n# omo sebua");
        let revision = Revisi2Layout::new().revise(&page.text);

        let text_path = storage.save_page(&page, &revision).unwrap();
        assert_eq!(text_path.file_name().unwrap(), "omo_sebua.wiki");
        assert_eq!(fs::read_to_string(&text_path).unwrap(), revision.text);

        let meta_path = storage.save_page_metadata(&page, &revision, "Revisi2").unwrap();
        let meta: serde_json::Value = serde_json::from_str(&fs::read_to_string(meta_path).unwrap()).unwrap();
        assert_eq!(meta["title"], "omo sebua");
        assert_eq!(meta["summary"], "Revisi2");
        assert_eq!(meta["revision"]["language_code"], "nia");
        assert_eq!(meta["revision"]["part_of_speech"], "verba");
        assert_eq!(meta["revision"]["sections_found"][0], "definition");
        assert!(meta["revision"].get("text").is_none());
    }
}
