use std::{borrow::Cow, fmt};

use super::{AsEmoji, Word, WORD_LENGTH};

/// Marker for a single position of a guess.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum LetterState {
    #[default]
    NotPresent,
    WrongPlace,
    Correct,
}

impl AsEmoji for LetterState {
    fn as_emoji(&self) -> Cow<str> {
        match self {
            Self::Correct => "🟩",    // green square
            Self::WrongPlace => "🟨", // yellow square
            Self::NotPresent => "⬛", // black square
        }
        .into()
    }
}

impl fmt::Display for LetterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Correct => "O",
            Self::WrongPlace => "o",
            Self::NotPresent => ".",
        })
    }
}

/// One accepted guess: the guessed letters with their markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guess {
    letters: [(char, LetterState); WORD_LENGTH],
}

impl Guess {
    pub(super) fn unmarked(word: &Word) -> Self {
        let letters = word.letters().map(|letter| (letter, LetterState::NotPresent));

        Self { letters }
    }

    pub(super) fn iter_mut(&mut self) -> impl Iterator<Item = &mut (char, LetterState)> + '_ {
        self.letters.iter_mut()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(char, LetterState)> + '_ {
        self.letters.iter()
    }

    pub fn is_correct(&self) -> bool {
        self.letters
            .iter()
            .all(|(_, state)| *state == LetterState::Correct)
    }

    /// The guessed word, without markers.
    pub fn word(&self) -> String {
        self.letters.iter().map(|(letter, _)| letter).collect()
    }
}

impl AsEmoji for Guess {
    fn as_emoji(&self) -> Cow<str> {
        self.letters
            .iter()
            .map(|(_, state)| state.as_emoji())
            .collect::<String>()
            .into()
    }
}

impl AsEmoji for [Guess] {
    fn as_emoji(&self) -> Cow<str> {
        self.iter()
            .map(|guess| guess.as_emoji())
            .collect::<Vec<_>>()
            .join("\n")
            .into()
    }
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.letters
            .iter()
            .try_for_each(|(_, state)| write!(f, "{state}"))
    }
}

impl PartialEq<&str> for Guess {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == **other
    }
}
