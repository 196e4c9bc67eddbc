// src/extractors/language.rs
use super::markers::{LANGUAGE_CODES, LANGUAGE_CODE_RE, PARTS_OF_SPEECH, PART_OF_SPEECH_RE};

/// Returns the entry's language code when the first two-or-three letter
/// template on the page is an allow-listed code.
pub fn find_language_code(text: &str) -> Option<&'static str> {
    let code = LANGUAGE_CODE_RE.captures(text)?.get(1)?.as_str();
    let found = LANGUAGE_CODES.iter().copied().find(|c| *c == code);
    if found.is_none() {
        tracing::debug!("First short template '{{{{{}}}}}' is not an allowed language code", code);
    }
    found
}

/// First part-of-speech marker on the page, if any.
pub fn find_part_of_speech(text: &str) -> Option<&'static str> {
    let pos = PART_OF_SPEECH_RE.captures(text)?.get(1)?.as_str();
    PARTS_OF_SPEECH.iter().copied().find(|p| *p == pos)
}
