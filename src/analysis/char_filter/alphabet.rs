use crate::alphabet::Alphabet;

use super::CharFilter;

/// A char filter that keeps only the letters of an [`Alphabet`].
///
/// Relative order of the kept characters is preserved; everything else
/// (spaces, punctuation, digits, diacritics, other scripts) is dropped.
#[derive(Debug, Clone)]
pub struct AlphabetCharFilter {
    alphabet: Alphabet,
}

impl AlphabetCharFilter {
    pub fn new(alphabet: Alphabet) -> Self {
        Self { alphabet }
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }
}

impl CharFilter for AlphabetCharFilter {
    fn filter(&self, input: &str) -> String {
        input.chars().filter(|&c| self.alphabet.contains(c)).collect()
    }

    fn name(&self) -> &'static str {
        "alphabet"
    }
}

/// Strip `text` down to the letters of `alphabet`.
pub fn normalize(text: &str, alphabet: &Alphabet) -> String {
    text.chars().filter(|&c| alphabet.contains(c)).collect()
}
