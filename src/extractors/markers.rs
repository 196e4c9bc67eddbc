// src/extractors/markers.rs

// --- Imports ---
use regex::Regex;
use once_cell::sync::Lazy;

// --- Section Headings (bit-exact) ---
pub const PRONUNCIATION: &str = "{{famoligö}}";
pub const DEFINITION: &str = "{{definisi}}";
pub const EXAMPLES: &str = "{{duma-duma}}";
pub const IMAGE: &str = "{{gambara}}";
pub const MEANING: &str = "{{eluaha}}";
pub const SYNONYM: &str = "{{sinonim}}";
pub const ANTONYM: &str = "{{antonim}}";
pub const ETYMOLOGY: &str = "{{etimologi}}";
pub const DERIVED_TERM: &str = "{{nitöngöni}}";
pub const RELATED_TERM: &str = "{{fakhili}}";
pub const IDIOM: &str = "{{daha}}";
pub const PROVERB: &str = "{{fakhai}}";
pub const COMPOUND_WORD: &str = "{{baero}}";
pub const USAGE: &str = "{{umbu}}";

// --- Categories ---
pub const CATEGORY_PREFIX: &str = "[[Kategori";
pub const NO_CATEGORIES: &str = "No mufareso";
pub const NEEDS_CATEGORIES: &str = "Awena mufareso";
pub const NEEDS_CATEGORIES_LINE: &str = "[[Kategori:Awena mufareso]]";

// --- Allow-lists ---
pub const LANGUAGE_CODES: &[&str] = &[
    "ar", "de", "en", "es", "fr", "hu", "id", "it", "jp", "la", "ms", "nia", "pt", "sa", "zh",
];

pub const PARTS_OF_SPEECH: &[&str] = &[
    "adjektiva", "adverbia", "interjeksi", "konjungsi", "nomina",
    "partikel", "preposisi", "pronomina", "verba",
];

// --- Regex Patterns (Lazy Static) ---
pub static LANGUAGE_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{([a-z]{2,3})\}\}").expect("Failed to compile LANGUAGE_CODE_RE")
});

pub static PART_OF_SPEECH_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!(r"\{{\{{({})\}}\}}", PARTS_OF_SPEECH.join("|"));
    Regex::new(&pattern).expect("Failed to compile PART_OF_SPEECH_RE")
});

// `.` stops at the line end, so this runs to the last `}}` on the IPA line.
pub static IPA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{\{IPA.*\}\}").expect("Failed to compile IPA_RE")
});

pub static GALLERY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<gallery>\n(.*)</gallery>").expect("Failed to compile GALLERY_RE")
});

pub static BERKAS_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\[Berkas[^\n]*\n").expect("Failed to compile BERKAS_LINE_RE")
});

pub static FILE_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\[\[File[^\n]*\n").expect("Failed to compile FILE_LINE_RE")
});

// --- Cutoffs ---
// A block's content runs from just after its heading line up to the first
// cutoff match, or to the end of the text.

/// Next template marker or a category link.
pub static NEXT_MARKER_OR_CATEGORY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n\{\{|\[\[Kategori").expect("Failed to compile NEXT_MARKER_OR_CATEGORY")
});

/// Next template marker only.
pub static NEXT_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n\{\{").expect("Failed to compile NEXT_MARKER")
});

/// Next template marker, an image link, or a category link.
pub static NEXT_MARKER_IMAGE_OR_CATEGORY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n\{\{|\[\[Berkas|\[\[File|\[\[Kategori")
        .expect("Failed to compile NEXT_MARKER_IMAGE_OR_CATEGORY")
});

/// Category link only.
pub static CATEGORY_ONLY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\n\[\[Kategori").expect("Failed to compile CATEGORY_ONLY")
});
