use crate::results::WordSearchError;
use rand::Rng;
use std::result::Result;

use crate::random::random_int;

static ENGLISH_LETTERS: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

static SPANISH_LETTERS: [char; 27] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'Ñ', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

static LANGUAGES: [Alphabet; 2] = [
    Alphabet {
        code: "en",
        letters: &ENGLISH_LETTERS,
    },
    Alphabet {
        code: "es",
        letters: &SPANISH_LETTERS,
    },
];

/// The letters of a language, used to fill the cells around the hidden words.
#[derive(Debug, PartialEq, Eq)]
pub struct Alphabet {
    code: &'static str,
    letters: &'static [char],
}

impl Alphabet {
    /// Looks up the alphabet registered for the given language code, e.g. `"en"` or `"es"`.
    ///
    /// The code must match exactly.
    ///
    /// ```
    /// use word_search_generator::{Alphabet, WordSearchError};
    ///
    /// assert_eq!(Alphabet::for_language("en")?.letters().len(), 26);
    /// assert!(Alphabet::for_language("xx").is_err());
    /// # Ok::<(), WordSearchError>(())
    /// ```
    pub fn for_language(code: &str) -> Result<&'static Alphabet, WordSearchError> {
        LANGUAGES
            .iter()
            .find(|alphabet| alphabet.code == code)
            .ok_or_else(|| WordSearchError::UnsupportedLanguage(code.to_string()))
    }

    /// The language code this alphabet is registered under.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// The upper-case letters of this alphabet, in alphabetical order.
    pub fn letters(&self) -> &'static [char] {
        self.letters
    }

    /// Returns a letter from this alphabet chosen uniformly at random.
    pub fn random_letter<R: Rng + ?Sized>(&self, rng: &mut R) -> char {
        self.letters[random_int(rng, self.letters.len())]
    }
}

/// Returns every registered alphabet.
pub fn supported_languages() -> &'static [Alphabet] {
    &LANGUAGES
}
