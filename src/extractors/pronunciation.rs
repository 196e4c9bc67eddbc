// src/extractors/pronunciation.rs
use super::markers::{IPA_RE, PRONUNCIATION};
use super::section::Section;

/// Builds the `{{famoligö}}` section from the first IPA template on the page.
///
/// The heading is always `{{famoligö}}`: older entries open the block with a
/// part-of-speech marker instead, and the IPA line is carried over either way.
pub fn find_pronunciation(text: &str) -> Option<Section> {
    let ipa = IPA_RE.find(text)?;
    Some(Section::new("pronunciation", PRONUNCIATION, format!(":{}", ipa.as_str().trim())))
}
