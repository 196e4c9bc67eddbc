// src/layout/assembler.rs

// --- Imports ---
use crate::extractors::markers;
use crate::extractors::section::{
    BlockRule, ANTONYM_RULE, COMPOUND_WORD_RULE, DERIVED_TERM_RULE, ETYMOLOGY_RULE, IDIOM_RULE,
    MEANING_RULE, PROVERB_RULE, RELATED_TERM_RULE, SYNONYM_RULE, USAGE_RULE,
};
use crate::extractors::{
    find_categories, find_definition_and_examples, find_image, find_language_code,
    find_part_of_speech, find_pronunciation, DefinitionSections, Section,
};
use serde::Serialize;

// --- Data Structures ---

/// Where a layout row gets its content from.
pub enum SectionSource {
    Pronunciation,
    Definition,
    Examples,
    Image,
    Block(&'static BlockRule),
}

/// One row of the Revisi2 layout: the heading it owns and the literal block
/// emitted when the page has nothing for it.
pub struct LayoutRow {
    pub name: &'static str,
    pub heading: &'static str,
    pub source: SectionSource,
    pub placeholder: &'static str,
}

/// Output order after the language code and before the categories.
pub static REVISI2_ROWS: &[LayoutRow] = &[
    LayoutRow {
        name: "pronunciation",
        heading: markers::PRONUNCIATION,
        source: SectionSource::Pronunciation,
        placeholder: "{{famoligö}}\n:{{IPA|ipa=|audio=}}\n\n",
    },
    LayoutRow {
        name: "definition",
        heading: markers::DEFINITION,
        source: SectionSource::Definition,
        placeholder: "{{definisi}}\n\n",
    },
    LayoutRow {
        name: "examples",
        heading: markers::EXAMPLES,
        source: SectionSource::Examples,
        placeholder: "{{duma-duma}}\n\n",
    },
    LayoutRow {
        name: "image",
        heading: markers::IMAGE,
        source: SectionSource::Image,
        placeholder: "{{gambara}}\n\n\n",
    },
    LayoutRow {
        name: "meaning",
        heading: markers::MEANING,
        source: SectionSource::Block(&MEANING_RULE),
        placeholder: "{{eluaha}}\n* {{-id-}}:\n* {{-en-}}:\n* {{-de-}}:\n\n",
    },
    LayoutRow {
        name: "synonym",
        heading: markers::SYNONYM,
        source: SectionSource::Block(&SYNONYM_RULE),
        placeholder: "{{sinonim}}\n:Lö hadöi\n\n",
    },
    LayoutRow {
        name: "antonym",
        heading: markers::ANTONYM,
        source: SectionSource::Block(&ANTONYM_RULE),
        placeholder: "{{antonim}}\n:Lö hadöi\n\n",
    },
    LayoutRow {
        name: "etymology",
        heading: markers::ETYMOLOGY,
        source: SectionSource::Block(&ETYMOLOGY_RULE),
        placeholder: "{{etimologi}}\n:Lö hadöi\n\n",
    },
    LayoutRow {
        name: "derived_term",
        heading: markers::DERIVED_TERM,
        source: SectionSource::Block(&DERIVED_TERM_RULE),
        placeholder: "{{nitöngöni}}\n:Lö hadöi\n\n",
    },
    LayoutRow {
        name: "related_term",
        heading: markers::RELATED_TERM,
        source: SectionSource::Block(&RELATED_TERM_RULE),
        placeholder: "{{fakhili}}\n:Lö hadöi\n\n",
    },
    LayoutRow {
        name: "idiom",
        heading: markers::IDIOM,
        source: SectionSource::Block(&IDIOM_RULE),
        placeholder: "{{daha}}\n:Lö hadöi\n\n",
    },
    LayoutRow {
        name: "proverb",
        heading: markers::PROVERB,
        source: SectionSource::Block(&PROVERB_RULE),
        placeholder: "{{fakhai}}\n:Lö hadöi\n\n",
    },
    LayoutRow {
        name: "compound_word",
        heading: markers::COMPOUND_WORD,
        source: SectionSource::Block(&COMPOUND_WORD_RULE),
        placeholder: "{{baero}}\n*Lö hadöi\n\n",
    },
    LayoutRow {
        name: "usage",
        heading: markers::USAGE,
        source: SectionSource::Block(&USAGE_RULE),
        placeholder: "{{umbu}}\n*Lö hadöi\n\n",
    },
];

/// Result of laying out one page.
#[derive(Debug, Clone, Serialize)]
pub struct Revision {
    #[serde(skip)]
    pub text: String,
    pub language_code: Option<&'static str>,
    pub part_of_speech: Option<&'static str>,
    pub sections_found: Vec<&'static str>,
    pub sections_defaulted: Vec<&'static str>,
}

// --- Assembler ---
#[derive(Debug, Default, Clone, Copy)]
pub struct Revisi2Layout;

impl Revisi2Layout {
    pub fn new() -> Self { Self {} }

    /// Rewrites one page into the Revisi2 layout. Never fails: anything the
    /// page lacks is filled from the row's placeholder.
    pub fn revise(&self, text: &str) -> Revision {
        let language_code = find_language_code(text);
        let part_of_speech = find_part_of_speech(text);
        let DefinitionSections { definition, examples } = find_definition_and_examples(text);

        let mut output = String::new();
        let mut sections_found = Vec::new();
        let mut sections_defaulted = Vec::new();

        if let Some(code) = language_code {
            output.push_str(&format!("{{{{{}}}}}\n\n", code));
        }

        for row in REVISI2_ROWS {
            let section: Option<Section> = match row.source {
                SectionSource::Pronunciation => find_pronunciation(text),
                SectionSource::Definition => definition.clone(),
                SectionSource::Examples => examples.clone(),
                SectionSource::Image => find_image(text),
                SectionSource::Block(rule) => rule.extract(text),
            };

            match section {
                Some(section) => {
                    tracing::debug!("Section '{}' found under {}", section.name, row.heading);
                    output.push_str(&section.render());
                    sections_found.push(row.name);
                }
                None => {
                    tracing::debug!("Section '{}' missing, using placeholder for {}", row.name, row.heading);
                    output.push_str(row.placeholder);
                    sections_defaulted.push(row.name);
                }
            }
        }

        output.push_str(&find_categories(text));

        Revision {
            text: output.trim().to_string(),
            language_code,
            part_of_speech,
            sections_found,
            sections_defaulted,
        }
    }
}
