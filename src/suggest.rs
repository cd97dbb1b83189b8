//! Spelling suggestions by single-edit mutation.
//!
//! [`WordChecker`] generates every candidate one edit away from a word and
//! keeps those found in a word [`Set`].

use alloc::string::String;
use alloc::vec::Vec;

use crate::ChainedHashSet;
use crate::set::Set;

/// The default candidate letters, matching an uppercase word list.
pub const UPPERCASE_ALPHABET: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Checks words against a word set and suggests corrections.
///
/// The checker only ever calls [`Set::contains`], so any [`Set`]
/// implementation works and no iteration order is assumed.
///
/// # Examples
///
/// ```rust
/// use chain_hash::ChainedHashSet;
/// use chain_hash::suggest::WordChecker;
///
/// let words: ChainedHashSet<String> = ["CAT", "DOG", "AT"]
///     .iter()
///     .map(|w| w.to_string())
///     .collect();
///
/// let checker = WordChecker::new(&words);
/// assert!(checker.word_exists("CAT"));
///
/// let suggestions = checker.find_suggestions("CAAT");
/// assert_eq!(suggestions, ["CAT"]);
/// ```
pub struct WordChecker<'a, S: ?Sized> {
    words: &'a S,
    alphabet: &'a [char],
}

impl<'a, S> WordChecker<'a, S>
where
    S: Set<String> + ?Sized,
{
    /// Creates a checker over `words` that proposes the letters `A` to `Z`.
    pub fn new(words: &'a S) -> Self {
        Self::with_alphabet(words, UPPERCASE_ALPHABET)
    }

    /// Creates a checker over `words` that proposes letters from `alphabet`
    /// for insertions and replacements.
    pub fn with_alphabet(words: &'a S, alphabet: &'a [char]) -> Self {
        Self { words, alphabet }
    }

    /// Returns `true` if `word` is in the word set.
    pub fn word_exists(&self, word: &str) -> bool {
        self.words.contains(&String::from(word))
    }

    /// Returns every word one edit away from `word` that is in the word set.
    ///
    /// Candidates are tried in this order: swapping adjacent characters,
    /// inserting a letter at each position, deleting a character, replacing a
    /// character, and splitting into two words with a space. A split is only
    /// suggested when both halves are words.
    ///
    /// The result holds no duplicates, keeps the order in which candidates
    /// were first found, and never includes `word` itself. An empty `word`
    /// gives no suggestions.
    pub fn find_suggestions(&self, word: &str) -> Vec<String> {
        let chars: Vec<char> = word.chars().collect();
        let mut found = Suggestions::new(word);
        if chars.is_empty() {
            return found.into_vec();
        }

        for i in 0..chars.len() - 1 {
            let mut candidate = chars.clone();
            candidate.swap(i, i + 1);
            self.offer(&mut found, collect(&candidate));
        }

        for i in 0..=chars.len() {
            for &letter in self.alphabet {
                let mut candidate = chars.clone();
                candidate.insert(i, letter);
                self.offer(&mut found, collect(&candidate));
            }
        }

        for i in 0..chars.len() {
            let mut candidate = chars.clone();
            candidate.remove(i);
            self.offer(&mut found, collect(&candidate));
        }

        for i in 0..chars.len() {
            for &letter in self.alphabet {
                if letter == chars[i] {
                    continue;
                }
                let mut candidate = chars.clone();
                candidate[i] = letter;
                self.offer(&mut found, collect(&candidate));
            }
        }

        for i in 1..chars.len() {
            let first = collect(&chars[..i]);
            let second = collect(&chars[i..]);
            if self.word_exists(&first) && self.word_exists(&second) {
                found.push(first + " " + &second);
            }
        }

        found.into_vec()
    }

    fn offer(&self, found: &mut Suggestions<'_>, candidate: String) {
        if self.words.contains(&candidate) {
            found.push(candidate);
        }
    }
}

fn collect(chars: &[char]) -> String {
    chars.iter().collect()
}

/// Ordered, duplicate-free suggestion list.
struct Suggestions<'w> {
    word: &'w str,
    seen: ChainedHashSet<String>,
    ordered: Vec<String>,
}

impl<'w> Suggestions<'w> {
    fn new(word: &'w str) -> Self {
        Self {
            word,
            seen: ChainedHashSet::new(),
            ordered: Vec::new(),
        }
    }

    fn push(&mut self, candidate: String) {
        if candidate != self.word && self.seen.insert(candidate.clone()) {
            self.ordered.push(candidate);
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.ordered
    }
}
