use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use tracing::debug;

use crate::dictionary;

// Maximal runs of word characters (Unicode letters, digits, underscore).
// Everything between them passes through untouched.
static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").unwrap());

/// Whole-word, case-preserving autocorrect over a fixed correction mapping.
///
/// Keys are lowercase misspellings; values are their replacements. The
/// mapping is fixed for the lifetime of the instance, so a pass is a pure
/// function of the input text.
pub struct AutoCorrect {
    corrections: HashMap<String, String>,
}

impl AutoCorrect {
    /// Build a corrector from the user dictionary at `custom_dict_path`,
    /// or from the built-in defaults when no usable dictionary is found.
    pub fn new(custom_dict_path: Option<&Path>) -> Self {
        Self::with_corrections(dictionary::load_corrections(custom_dict_path))
    }

    /// Build a corrector over an explicit mapping.
    pub fn with_corrections(corrections: HashMap<String, String>) -> Self {
        Self { corrections }
    }

    pub fn corrections(&self) -> &HashMap<String, String> {
        &self.corrections
    }

    /// Replace every whole word whose lowercase form is a mapping key.
    ///
    /// If the original word started with an uppercase letter, the
    /// replacement is emitted with its first character uppercased and the
    /// rest taken verbatim from the mapping value; otherwise the value is
    /// emitted as stored. Unmatched words and all non-word spans are
    /// unchanged. Note that an all-caps word comes back merely
    /// capitalized: only the first letter's case is inspected.
    pub fn correct_text(&self, text: &str) -> String {
        let corrected = correct_text(text, &self.corrections);
        if corrected != text {
            debug!("Correction pass changed text");
        }
        corrected
    }
}

/// Stateless form of [`AutoCorrect::correct_text`] for callers that manage
/// their own mapping.
pub fn correct_text(text: &str, corrections: &HashMap<String, String>) -> String {
    if corrections.is_empty() {
        return text.to_string();
    }

    WORD.replace_all(text, |caps: &Captures| {
        let word = &caps[0];
        match corrections.get(&word.to_lowercase()) {
            Some(replacement) => {
                let first_is_upper = word.chars().next().is_some_and(|c| c.is_uppercase());
                if first_is_upper {
                    capitalize(replacement)
                } else {
                    replacement.clone()
                }
            }
            None => word.to_string(),
        }
    })
    .into_owned()
}

// First character uppercased, the remainder verbatim.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
