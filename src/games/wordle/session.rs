use std::ops::Not;

use tracing::trace;

use super::{
    core::{AsEmoji, Guess, Word},
    LetterKnowledge, WordsList,
};

/// A session concludes after this many accepted guesses.
pub const MAX_TURNS: usize = 6;

/// One wordle game: an answer, the guesses accepted so far, and whether the
/// game will accept more.
#[derive(Debug, Clone)]
pub struct Session {
    answer: Word,
    guesses: Vec<Guess>,
    active: bool,
}

impl Session {
    pub fn new(answer: Word) -> Self {
        Self {
            answer,
            guesses: Vec::with_capacity(MAX_TURNS),
            active: true,
        }
    }

    /// Starts a session with a random answer from the words list.
    pub fn random(words: &WordsList) -> Self {
        Self::new(words.random_answer())
    }

    /// Submits a guess. Words not in the list are discarded without
    /// consuming a turn. A solving guess, or the last allowed one,
    /// concludes the session.
    pub fn guess(&mut self, text: &str, words: &WordsList) -> Option<&Guess> {
        if self.active.not() {
            trace!("session concluded, ignoring guess");
            return None;
        }

        let Some(word) = words.get_word(text) else {
            trace!(text, "not in the words list, ignoring guess");
            return None;
        };

        let guess = self.answer.guess(&word);
        self.guesses.push(guess);

        if self.is_solved() || self.turns() >= MAX_TURNS {
            self.end();
        }

        self.guesses.last()
    }

    pub fn turns(&self) -> usize {
        self.guesses.len()
    }

    pub fn is_solved(&self) -> bool {
        self.guesses.last().is_some_and(Guess::is_correct)
    }

    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Concludes the session regardless of solve state. Idempotent.
    pub fn end(&mut self) {
        self.active = false;
    }

    pub const fn answer(&self) -> &Word {
        &self.answer
    }

    /// The accumulated marker lines for every accepted guess, one line per
    /// guess, oldest first.
    pub fn board(&self) -> String {
        self.guesses.as_emoji().into_owned()
    }

    /// `current/6`, counting the turn about to be played.
    pub fn turn_status(&self) -> String {
        format!("{}/{}", self.turns() + 1, MAX_TURNS)
    }

    /// The accepted guesses joined with `delimiter`.
    pub fn history_text(&self, delimiter: &str) -> String {
        self.guesses
            .iter()
            .map(Guess::word)
            .collect::<Vec<_>>()
            .join(delimiter)
    }

    /// What the guesses so far have revealed about each letter.
    pub fn letter_knowledge(&self) -> LetterKnowledge {
        LetterKnowledge::from_guesses(&self.guesses)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use pretty_assertions::assert_eq;
    use tracing_test::traced_test;

    use super::{Session, MAX_TURNS};
    use crate::games::wordle::{Word, WordsList};

    fn words() -> WordsList {
        ["crane", "slate", "pivot", "sugar", "toast"]
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    fn session(answer: &str) -> Session {
        Session::new(Word::from_str(answer).unwrap())
    }

    #[test]
    #[traced_test]
    fn unknown_words_cost_nothing() {
        let words = words();
        let mut session = session("crane");

        assert!(session.guess("zzzzz", &words).is_none());
        assert!(session.guess("ca", &words).is_none());

        assert_eq!(session.turns(), 0);
        assert_eq!(session.board(), "");
        assert_eq!(session.history_text(","), "");
        assert!(session.is_active());
    }

    #[test]
    fn solving_guess_concludes_the_session() {
        let words = words();
        let mut session = session("crane");

        let guess = session.guess("crane", &words).expect("crane is in the list");

        assert!(guess.is_correct());
        assert!(session.is_solved());
        assert!(!session.is_active());
        assert_eq!(session.turns(), 1);
    }

    #[test]
    fn six_misses_conclude_the_session() {
        let words = words();
        let mut session = session("crane");

        for _ in 0..MAX_TURNS {
            assert!(session.is_active());
            session.guess("slate", &words);
        }

        assert_eq!(session.turns(), MAX_TURNS);
        assert!(!session.is_solved());
        assert!(!session.is_active());

        // concluded sessions ignore further guesses
        assert!(session.guess("pivot", &words).is_none());
        assert_eq!(session.turns(), MAX_TURNS);
    }

    #[test]
    fn history_joins_with_the_delimiter() {
        let words = words();
        let mut session = session("pivot");

        session.guess("crane", &words);
        session.guess("slate", &words);

        assert_eq!(session.history_text(","), "crane,slate");
        assert_eq!(session.history_text("\n"), "crane\nslate");
    }

    #[test]
    fn board_accumulates_one_line_per_guess() {
        let words = words();
        let mut session = session("pivot");

        session.guess("crane", &words);
        assert_eq!(session.board().lines().count(), 1);

        session.guess("slate", &words);
        assert_eq!(session.board().lines().count(), 2);
    }

    #[test]
    fn turn_status_counts_the_upcoming_turn() {
        let words = words();
        let mut session = session("pivot");

        assert_eq!(session.turn_status(), "1/6");

        session.guess("crane", &words);
        assert_eq!(session.turn_status(), "2/6");
    }

    #[test]
    fn end_is_idempotent() {
        let mut session = session("crane");

        session.end();
        assert!(!session.is_active());

        session.end();
        assert!(!session.is_active());
    }
}
