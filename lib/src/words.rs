use crate::results::WordSearchError;
use std::result::Result;

/// Removes every space from the word and converts it to upper case.
///
/// ```
/// use word_search_generator::clean_word;
///
/// assert_eq!(clean_word("spider monkey"), "SPIDERMONKEY");
/// ```
pub fn clean_word(word: &str) -> String {
    word.chars()
        .filter(|letter| *letter != ' ')
        .flat_map(char::to_uppercase)
        .collect()
}

/// Cleans each word with [`clean_word`], preserving the order of the list.
pub fn clean_words_list<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    words.iter().map(|word| clean_word(word.as_ref())).collect()
}

/// Returns the words ordered from longest to shortest. Words of equal length keep their
/// relative order.
///
/// Length is measured in letters, not bytes.
pub fn sort_words_by_length<S: AsRef<str>>(words: &[S]) -> Vec<String> {
    let mut sorted: Vec<String> = words.iter().map(|word| word.as_ref().to_string()).collect();
    sorted.sort_by_key(|word| std::cmp::Reverse(word_length(word)));
    sorted
}

/// Returns the length of the longest word once cleaned, which is the smallest width and height a
/// grid could have to hold every word.
///
/// This is only a lower bound: a grid of this size may still be too crowded to fit every word.
pub fn minimum_grid_size<S: AsRef<str>>(words: &[S]) -> Result<usize, WordSearchError> {
    words
        .iter()
        .map(|word| word_length(&clean_word(word.as_ref())))
        .max()
        .ok_or(WordSearchError::EmptyWordList)
}

/// Returns the word with its letters in reverse order.
pub fn reverse_word(word: &str) -> String {
    word.chars().rev().collect()
}

/// The number of grid cells the word occupies.
#[inline]
pub(crate) fn word_length(word: &str) -> usize {
    word.chars().count()
}
