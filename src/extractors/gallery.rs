// src/extractors/gallery.rs
use super::markers::{BERKAS_LINE_RE, FILE_LINE_RE, GALLERY_RE, IMAGE};
use super::section::Section;

/// Builds the `{{gambara}}` section.
///
/// A `<gallery>` block wins: its first line `File:a.jpg|caption` becomes the
/// thumbnail link `[[File:a.jpg|jmpl|caption]]`. Without a gallery, the first
/// `[[Berkas…` line is used, then the first `[[File…` line.
pub fn find_image(text: &str) -> Option<Section> {
    if let Some(caps) = GALLERY_RE.captures(text) {
        let images = caps.get(1).map(|m| m.as_str().trim()).unwrap_or_default();
        let first = images.lines().next().unwrap_or_default();
        let link = format!("[[{}]]", first.split('|').collect::<Vec<_>>().join("|jmpl|"));
        tracing::trace!("Image taken from gallery: {}", link);
        return Some(Section::new("image", IMAGE, link));
    }

    let line = BERKAS_LINE_RE.find(text).or_else(|| FILE_LINE_RE.find(text))?;
    let line = line.as_str().trim();
    (!line.is_empty()).then(|| Section::new("image", IMAGE, line))
}
