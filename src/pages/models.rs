// src/pages/models.rs
/// One wiki page as handed to the bot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub title: String,
    pub text: String,
    pub redirect: bool, // Flagged by the page source (e.g. export `<redirect/>`)
}

impl Page {
    /// Builds a page, folding CRLF line endings to LF so heading lines match.
    pub fn new(title: impl Into<String>, text: impl AsRef<str>) -> Self {
        Self { title: title.into(), text: normalize_line_endings(text.as_ref()), redirect: false }
    }

    /// Redirect pages are never rewritten.
    pub fn is_redirect(&self) -> bool {
        if self.redirect {
            return true;
        }
        let head: String = self.text.trim_start().chars().take(9).collect::<String>().to_uppercase();
        head.starts_with("#REDIRECT") || head.starts_with("#ALIH")
    }

    /// File-system safe stem for this page's title.
    pub fn file_stem(&self) -> String {
        file_stem_for(&self.title)
    }
}

pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n")
}

/// Maps a title to a file stem: spaces become underscores (as in wiki URLs)
/// and characters that are unsafe in file names become `_`.
pub fn file_stem_for(title: &str) -> String {
    title
        .trim()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c => c,
        })
        .collect()
}

/// What the bot did with a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageOutcome {
    Changed,
    Unchanged,
    Declined,
    Skipped(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redirect_detection() {
        assert!(Page::new("A", "#REDIRECT [[B]]").is_redirect());
        assert!(Page::new("A", "  #alih [[B]]").is_redirect());
        assert!(!Page::new("A", "# omo\n#REDIRECT").is_redirect());

        let mut flagged = Page::new("A", "teks");
        flagged.redirect = true;
        assert!(flagged.is_redirect());
    }

    #[test]
    fn test_crlf_text_is_normalized() {
        let page = Page::new("omo", "{{sinonim}}\r\n* [[nomo]]\r\n");
        assert_eq!(page.text, "{{sinonim}}\n* [[nomo]]\n");
    }

    #[test]
    fn test_file_stem() {
        assert_eq!(file_stem_for("omo sebua"), "omo_sebua");
        assert_eq!(file_stem_for("Wiktionary:Bait/1"), "Wiktionary_Bait_1");
        assert_eq!(Page::new("nomö", "").file_stem(), "nomö");
    }
}
