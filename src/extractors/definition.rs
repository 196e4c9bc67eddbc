// src/extractors/definition.rs
use super::markers::{DEFINITION, EXAMPLES, NEXT_MARKER, NEXT_MARKER_IMAGE_OR_CATEGORY};
use super::section::{capture_block, Section};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DefinitionSections {
    pub definition: Option<Section>,
    pub examples: Option<Section>,
}

/// Finds the `{{definisi}}` and `{{duma-duma}}` sections.
///
/// Labeled blocks are used as-is when both headings are present. Otherwise
/// the raw numbered list is converted: every `#` line is a definition and
/// every `#*` line an example of the definition above it, both rewritten as
/// `:<n>. text`. A page with neither numbered lines nor both labels keeps
/// whichever labeled block it has.
pub fn find_definition_and_examples(text: &str) -> DefinitionSections {
    let labeled_definition = capture_block(text, DEFINITION, &NEXT_MARKER);
    let labeled_examples = capture_block(text, EXAMPLES, &NEXT_MARKER_IMAGE_OR_CATEGORY);

    if let (Some(definition), Some(examples)) = (labeled_definition, labeled_examples) {
        tracing::trace!("Using labeled definition and example blocks");
        return DefinitionSections {
            definition: non_empty("definition", DEFINITION, definition),
            examples: non_empty("examples", EXAMPLES, examples),
        };
    }

    let (definitions, examples) = renumber_list(text);
    if !definitions.is_empty() || !examples.is_empty() {
        tracing::debug!(
            "Renumbered {} definitions and {} examples from the raw list",
            definitions.len(),
            examples.len()
        );
        return DefinitionSections {
            definition: non_empty("definition", DEFINITION, &definitions.join("\n")),
            examples: non_empty("examples", EXAMPLES, &examples.join("\n")),
        };
    }

    DefinitionSections {
        definition: labeled_definition.and_then(|c| non_empty("definition", DEFINITION, c)),
        examples: labeled_examples.and_then(|c| non_empty("examples", EXAMPLES, c)),
    }
}

fn non_empty(name: &'static str, heading: &'static str, content: &str) -> Option<Section> {
    let content = content.trim();
    (!content.is_empty()).then(|| Section::new(name, heading, content))
}

/// Splits `#`/`#*` list lines into numbered definition and example lines.
/// Examples carry the ordinal of the most recent definition (0 before any).
fn renumber_list(text: &str) -> (Vec<String>, Vec<String>) {
    let mut definitions = Vec::new();
    let mut examples = Vec::new();
    let mut current = 0usize;

    for line in text.split('\n') {
        if let Some(example) = line.strip_prefix("#*") {
            // `#*text` without the space shows up on some CJK entries.
            let example = example.strip_prefix(' ').unwrap_or(example);
            examples.push(format!(":{}. {}", current, example));
        } else if let Some(definition) = line.strip_prefix('#') {
            current += 1;
            let definition = definition.strip_prefix(' ').unwrap_or(definition);
            definitions.push(format!(":{}. {}", current, definition));
        }
    }

    (definitions, examples)
}
