// src/utils/marker_debug.rs
use std::fs;
use std::path::Path;

use regex::Regex;

use crate::extractors::markers;
use crate::utils::error::AppError;

/// One recognized marker in a page, by byte offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerHit {
    pub start: usize,
    pub end: usize,
    pub kind: &'static str,
}

/// Finds every occurrence of every marker the layout recognizes.
pub fn scan_markers(text: &str) -> Vec<MarkerHit> {
    let literals: [(&str, &'static str); 14] = [
        (markers::PRONUNCIATION, "pronunciation"),
        (markers::DEFINITION, "definition"),
        (markers::EXAMPLES, "examples"),
        (markers::IMAGE, "image"),
        (markers::MEANING, "meaning"),
        (markers::SYNONYM, "synonym"),
        (markers::ANTONYM, "antonym"),
        (markers::ETYMOLOGY, "etymology"),
        (markers::DERIVED_TERM, "derived_term"),
        (markers::RELATED_TERM, "related_term"),
        (markers::IDIOM, "idiom"),
        (markers::PROVERB, "proverb"),
        (markers::COMPOUND_WORD, "compound_word"),
        (markers::USAGE, "usage"),
    ];
    let patterns: [(&Regex, &'static str); 6] = [
        (&*markers::LANGUAGE_CODE_RE, "language_code"),
        (&*markers::PART_OF_SPEECH_RE, "part_of_speech"),
        (&*markers::IPA_RE, "ipa"),
        (&*markers::GALLERY_RE, "gallery"),
        (&*markers::BERKAS_LINE_RE, "image_link"),
        (&*markers::FILE_LINE_RE, "image_link"),
    ];

    let mut hits = Vec::new();
    for (literal, kind) in literals {
        for (start, found) in text.match_indices(literal) {
            hits.push(MarkerHit { start, end: start + found.len(), kind });
        }
    }
    for (re, kind) in patterns {
        for m in re.find_iter(text) {
            hits.push(MarkerHit { start: m.start(), end: m.end(), kind });
        }
    }
    for (start, line) in line_offsets(text) {
        if line.starts_with(markers::CATEGORY_PREFIX) {
            hits.push(MarkerHit { start, end: start + line.len(), kind: "category" });
        }
    }

    hits.sort_by_key(|h| (h.start, h.end));
    hits
}

fn line_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split('\n').scan(0usize, |offset, line| {
        let start = *offset;
        *offset += line.len() + 1;
        Some((start, line))
    })
}

/// Lists the hits, then the page with each non-overlapping hit wrapped in
/// `<<kind|...>>`.
pub fn render_report(title: &str, text: &str, hits: &[MarkerHit]) -> String {
    let mut report = format!("== {} ==\n{} marker hits\n", title, hits.len());
    for hit in hits {
        report.push_str(&format!(
            "{:>6}-{:<6} {:<15} {:?}\n",
            hit.start,
            hit.end,
            hit.kind,
            &text[hit.start..hit.end]
        ));
    }

    report.push_str("\n--- annotated ---\n");
    let mut last_pos = 0;
    for hit in hits {
        if hit.start < last_pos {
            continue; // Nested inside an earlier hit
        }
        report.push_str(&text[last_pos..hit.start]);
        report.push_str(&format!("<<{}|{}>>", hit.kind, &text[hit.start..hit.end]));
        last_pos = hit.end;
    }
    report.push_str(&text[last_pos..]);
    report
}

/// Writes the marker report for one page.
pub fn save_marker_report(title: &str, text: &str, path: &Path) -> Result<(), AppError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let hits = scan_markers(text);
    fs::write(path, render_report(title, text, &hits))?;
    tracing::info!("Saved marker report ({} hits) to {}", hits.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_finds_markers_in_order() {
        let text = "{{nia}}\n{{sinonim}}\n:ina\n[[Kategori:Nomina]]";
        let kinds: Vec<_> = scan_markers(text).iter().map(|h| h.kind).collect();
        assert_eq!(kinds, vec!["language_code", "synonym", "category"]);
    }

    #[test]
    fn test_report_annotates_hits() {
        let text = "{{daha}}\n:si sara";
        let hits = scan_markers(text);
        let report = render_report("Omo", text, &hits);
        assert!(report.starts_with("== Omo ==\n1 marker hits\n"));
        assert!(report.ends_with("<<idiom|{{daha}}>>\n:si sara"));
    }

    #[test]
    fn test_overlapping_hits_annotate_outer_only() {
        let text = "<gallery>\n[[File:A.jpg]]\n</gallery>";
        let hits = scan_markers(text);
        assert_eq!(hits.len(), 2);
        let report = render_report("A", text, &hits);
        assert!(report.ends_with("<<gallery|<gallery>\n[[File:A.jpg]]\n</gallery>>>"));
    }

    #[test]
    fn test_save_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("debug").join("Omo.txt");
        save_marker_report("Omo", "{{umbu}}\n*a", &path).unwrap();
        let saved = fs::read_to_string(&path).unwrap();
        assert!(saved.contains("usage"));
    }
}
