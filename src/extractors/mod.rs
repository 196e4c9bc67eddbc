// src/extractors/mod.rs
pub mod categories;
pub mod definition;
pub mod gallery;
pub mod language;
pub mod markers;
pub mod pronunciation;
pub mod section;

// Re-export key extraction types for convenience
pub use categories::find_categories;
pub use definition::{find_definition_and_examples, DefinitionSections};
pub use gallery::find_image;
pub use language::{find_language_code, find_part_of_speech};
pub use pronunciation::find_pronunciation;
pub use section::Section;
