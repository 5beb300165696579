// src/engine/composer.rs
// Assembles a reply from one fragment of each bank

use super::emotion::EmotionCategory;
use super::fragments::{INSIGHTS, REFLECTIONS, SUGGESTIONS, VALIDATIONS};
use super::picker::Picker;

/// The four fragments chosen for one reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Composition {
    pub reflection: &'static str,
    pub validation: &'static str,
    pub insight: &'static str,
    pub suggestion: &'static str,
}

impl Composition {
    /// `"{reflection} {validation}\n\n{insight} {suggestion}"`
    pub fn render(&self) -> String {
        format!(
            "{} {}\n\n{} {}",
            self.reflection, self.validation, self.insight, self.suggestion
        )
    }
}

/// Pick one fragment per bank for `emotion`.
///
/// Picks happen in a fixed order (reflection, validation, insight,
/// suggestion) so a deterministic picker yields a deterministic reply.
pub fn compose<P: Picker>(emotion: EmotionCategory, picker: &mut P) -> Composition {
    Composition {
        reflection: picker.pick(REFLECTIONS.lookup(emotion)),
        validation: picker.pick(VALIDATIONS),
        insight: picker.pick(INSIGHTS.lookup(emotion)),
        suggestion: picker.pick(SUGGESTIONS.lookup(emotion)),
    }
}
