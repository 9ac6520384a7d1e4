use std::collections::BTreeSet;

use super::core::{Guess, LetterState};

/// What the accepted guesses have revealed about individual letters. Each
/// guessed letter lands in exactly one set, keyed by the best marker it has
/// received across all guesses.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterKnowledge {
    pub correct: BTreeSet<char>,
    pub wrong_place: BTreeSet<char>,
    pub not_present: BTreeSet<char>,
}

impl LetterKnowledge {
    pub fn from_guesses(guesses: &[Guess]) -> Self {
        let mut knowledge = Self::default();

        for (letter, state) in guesses.iter().flat_map(Guess::iter) {
            match state {
                LetterState::Correct => {
                    knowledge.wrong_place.remove(letter);
                    knowledge.not_present.remove(letter);
                    knowledge.correct.insert(*letter);
                }
                LetterState::WrongPlace => {
                    if !knowledge.correct.contains(letter) {
                        knowledge.not_present.remove(letter);
                        knowledge.wrong_place.insert(*letter);
                    }
                }
                LetterState::NotPresent => {
                    if !knowledge.correct.contains(letter)
                        && !knowledge.wrong_place.contains(letter)
                    {
                        knowledge.not_present.insert(*letter);
                    }
                }
            }
        }

        knowledge
    }
}
