use std::{collections::HashMap, fmt, str::FromStr};

use super::{Guess, LetterState, WORD_LENGTH};

/// A playable word, validated to the fixed length. Lowercased on parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Word {
    letters: [char; WORD_LENGTH],
}

impl Word {
    pub(super) fn letters(&self) -> [char; WORD_LENGTH] {
        self.letters
    }

    /// Marks `word` as a guess against this answer. Exact matches are
    /// claimed first; wrong-position markers are only handed out while the
    /// answer still has unmatched occurrences of the letter, so a repeated
    /// letter never earns more markers than the answer contains.
    pub fn guess(&self, word: &Word) -> Guess {
        let mut guess = Guess::unmarked(word);
        let mut unmatched: HashMap<char, usize> = HashMap::new();

        for (index, (letter, state)) in guess.iter_mut().enumerate() {
            if self.letters[index] == *letter {
                *state = LetterState::Correct;
            } else {
                *unmatched.entry(self.letters[index]).or_insert(0) += 1;
            }
        }

        for (letter, state) in guess.iter_mut() {
            if *state == LetterState::Correct {
                continue;
            }

            if let Some(count) = unmatched.get_mut(letter) {
                if *count > 0 {
                    *state = LetterState::WrongPlace;
                    *count -= 1;
                }
            }
        }

        guess
    }
}

#[derive(Debug, Clone, thiserror::Error)]
#[error("word `{0}` must have 5 letters but has {}", .0.chars().count())]
pub struct ParseWordError(String);

impl FromStr for Word {
    type Err = ParseWordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let letters: [char; WORD_LENGTH] = s
            .to_lowercase()
            .chars()
            .collect::<Vec<char>>()
            .try_into()
            .map_err(|_| ParseWordError(s.to_owned()))?;

        Ok(Self { letters })
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters.iter().collect::<String>())
    }
}
