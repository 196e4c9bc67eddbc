// src/extractors/section.rs

// --- Imports ---
use super::markers;
use regex::Regex;
use once_cell::sync::Lazy;

// --- Data Structures ---
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub name: &'static str,    // e.g., "synonym"
    pub heading: &'static str, // e.g., "{{sinonim}}"
    pub content: String,       // Trimmed, normalized content
}

impl Section {
    pub fn new(name: &'static str, heading: &'static str, content: impl Into<String>) -> Self {
        Self { name, heading, content: content.into() }
    }

    /// Renders the section the way Revisi2 lays out a found block.
    pub fn render(&self) -> String {
        format!("{}\n{}\n\n", self.heading, self.content)
    }
}

/// Line-leading list bullet rewrite applied to a block after capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BulletStyle {
    Keep,
    /// `*` bullets become `:` indents.
    Indent,
    /// `:` indents become `*` bullets.
    Star,
}

impl BulletStyle {
    pub fn apply(self, content: &str) -> String {
        let (from, to) = match self {
            BulletStyle::Keep => return content.to_string(),
            BulletStyle::Indent => ('*', ':'),
            BulletStyle::Star => (':', '*'),
        };

        content
            .lines()
            .map(|line| {
                let depth = line.chars().take_while(|c| *c == from).count();
                if depth == 0 {
                    line.to_string()
                } else {
                    // Bullet chars are ASCII so `depth` is also a byte offset.
                    format!("{}{}", to.to_string().repeat(depth), &line[depth..])
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A simple "heading line, then content until cutoff" section.
pub struct BlockRule {
    pub name: &'static str,
    pub heading: &'static str,
    pub cutoff: &'static Lazy<Regex>,
    pub bullets: BulletStyle,
}

impl BlockRule {
    pub fn extract(&self, text: &str) -> Option<Section> {
        let content = capture_block(text, self.heading, self.cutoff)?;
        let content = self.bullets.apply(content);
        if content.is_empty() {
            tracing::trace!("Section '{}' present but empty", self.name);
            return None;
        }
        tracing::trace!("Found section '{}' ({} bytes)", self.name, content.len());
        Some(Section::new(self.name, self.heading, content))
    }
}

/// Captures the trimmed text after the first `heading` line, up to the first
/// `cutoff` match or the end of `text`. `None` when the heading line is absent.
pub fn capture_block<'t>(text: &'t str, heading: &str, cutoff: &Regex) -> Option<&'t str> {
    let heading_line = format!("{}\n", heading);
    let start = text.find(&heading_line)? + heading_line.len();
    let rest = &text[start..];
    let end = cutoff.find(rest).map(|m| m.start()).unwrap_or(rest.len());
    Some(rest[..end].trim())
}

// --- Rule Table ---
pub static MEANING_RULE: BlockRule = BlockRule {
    name: "meaning",
    heading: markers::MEANING,
    cutoff: &markers::NEXT_MARKER_OR_CATEGORY,
    bullets: BulletStyle::Keep,
};

pub static SYNONYM_RULE: BlockRule = BlockRule {
    name: "synonym",
    heading: markers::SYNONYM,
    cutoff: &markers::NEXT_MARKER_OR_CATEGORY,
    bullets: BulletStyle::Indent,
};

pub static ANTONYM_RULE: BlockRule = BlockRule {
    name: "antonym",
    heading: markers::ANTONYM,
    cutoff: &markers::NEXT_MARKER_OR_CATEGORY,
    bullets: BulletStyle::Indent,
};

pub static ETYMOLOGY_RULE: BlockRule = BlockRule {
    name: "etymology",
    heading: markers::ETYMOLOGY,
    cutoff: &markers::NEXT_MARKER_OR_CATEGORY,
    bullets: BulletStyle::Indent,
};

pub static DERIVED_TERM_RULE: BlockRule = BlockRule {
    name: "derived_term",
    heading: markers::DERIVED_TERM,
    cutoff: &markers::NEXT_MARKER_OR_CATEGORY,
    bullets: BulletStyle::Indent,
};

pub static RELATED_TERM_RULE: BlockRule = BlockRule {
    name: "related_term",
    heading: markers::RELATED_TERM,
    cutoff: &markers::NEXT_MARKER_OR_CATEGORY,
    bullets: BulletStyle::Indent,
};

pub static IDIOM_RULE: BlockRule = BlockRule {
    name: "idiom",
    heading: markers::IDIOM,
    cutoff: &markers::NEXT_MARKER_OR_CATEGORY,
    bullets: BulletStyle::Indent,
};

pub static PROVERB_RULE: BlockRule = BlockRule {
    name: "proverb",
    heading: markers::PROVERB,
    cutoff: &markers::NEXT_MARKER_OR_CATEGORY,
    bullets: BulletStyle::Indent,
};

pub static COMPOUND_WORD_RULE: BlockRule = BlockRule {
    name: "compound_word",
    heading: markers::COMPOUND_WORD,
    cutoff: &markers::NEXT_MARKER_OR_CATEGORY,
    bullets: BulletStyle::Star,
};

pub static USAGE_RULE: BlockRule = BlockRule {
    name: "usage",
    heading: markers::USAGE,
    cutoff: &markers::CATEGORY_ONLY,
    bullets: BulletStyle::Keep,
};

// --- Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_stops_at_next_marker() {
        let text = "{{sinonim}}\n* ina\n* ama\n{{antonim}}\n: tohu";
        assert_eq!(
            capture_block(text, markers::SYNONYM, &markers::NEXT_MARKER_OR_CATEGORY),
            Some("* ina\n* ama")
        );
    }

    #[test]
    fn test_capture_stops_at_category_link() {
        let text = "{{eluaha}}\n* {{-id-}}: rumah\n[[Kategori:Nomina]]";
        let section = MEANING_RULE.extract(text).unwrap();
        assert_eq!(section.content, "* {{-id-}}: rumah");
        assert_eq!(section.heading, "{{eluaha}}");
    }

    #[test]
    fn test_capture_runs_to_end_of_text() {
        let text = "{{etimologi}}\n:Moroi li Jawa.\n";
        assert_eq!(ETYMOLOGY_RULE.extract(text).unwrap().content, ":Moroi li Jawa.");
    }

    #[test]
    fn test_missing_heading_is_absent() {
        assert_eq!(SYNONYM_RULE.extract("{{antonim}}\n:ya"), None);
        // Heading must stand on its own line.
        assert_eq!(SYNONYM_RULE.extract("{{sinonim}} ya"), None);
    }

    #[test]
    fn test_empty_block_is_absent() {
        let text = "{{sinonim}}\n\n{{antonim}}\n:hulö";
        assert_eq!(SYNONYM_RULE.extract(text), None);
        assert_eq!(ANTONYM_RULE.extract(text).unwrap().content, ":hulö");
    }

    #[test]
    fn test_first_match_wins() {
        let text = "{{daha}}\n:si sara\n{{daha}}\n:si dua";
        assert_eq!(IDIOM_RULE.extract(text).unwrap().content, ":si sara");
    }

    #[test]
    fn test_indent_rewrites_leading_stars_only() {
        let content = "* [[ina]]\n** [[ama]] *teks*\nno bullet";
        assert_eq!(
            BulletStyle::Indent.apply(content),
            ": [[ina]]\n:: [[ama]] *teks*\nno bullet"
        );
    }

    #[test]
    fn test_compound_word_uses_star_bullets() {
        let text = "{{baero}}\n:[[omo nifolala]]\n:[[w:Nias]]\n[[Kategori:Nomina]]";
        let section = COMPOUND_WORD_RULE.extract(text).unwrap();
        assert_eq!(section.content, "*[[omo nifolala]]\n*[[w:Nias]]");
    }

    #[test]
    fn test_usage_block_ignores_template_cutoff() {
        let text = "{{umbu}}\n* {{cite|a}}\n{{ref}}\n[[Kategori:Nomina]]";
        assert_eq!(USAGE_RULE.extract(text).unwrap().content, "* {{cite|a}}\n{{ref}}");
    }

    #[test]
    fn test_render_layout() {
        let section = Section::new("idiom", markers::IDIOM, ":si sara");
        assert_eq!(section.render(), "{{daha}}\n:si sara\n\n");
    }
}
