use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use rand::seq::IteratorRandom;

use super::core::{Word, WORD_LENGTH};

#[derive(Debug, thiserror::Error)]
pub enum WordsError {
    #[error("could not read words file `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("words file `{}` has no words of the playable length", .path.display())]
    Empty { path: PathBuf },
}

/// The dictionary: every valid guess and potential answer.
#[derive(Debug, Clone)]
pub struct WordsList {
    words: HashSet<String>,
}

impl WordsList {
    /// Reads the words file, keeping only words of the playable length.
    /// Fails if the file is unreadable or nothing playable remains, so a
    /// bad deployment dies at startup instead of at the first `play`.
    pub fn load(path: &Path) -> Result<Self, WordsError> {
        let file = fs::read_to_string(path).map_err(|source| WordsError::Read {
            path: path.to_owned(),
            source,
        })?;

        let list = file
            .lines()
            .map(str::trim)
            .filter(|line| line.chars().count() == WORD_LENGTH)
            .map(str::to_owned)
            .collect::<Self>();

        if list.is_empty() {
            return Err(WordsError::Empty {
                path: path.to_owned(),
            });
        }

        Ok(list)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-sensitive exact membership.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Membership check and parse in one step.
    pub fn get_word(&self, text: &str) -> Option<Word> {
        self.contains(text)
            .then(|| Word::from_str(text).ok())
            .flatten()
    }

    /// A uniformly random answer. Nothing prevents the same answer from
    /// coming up in back-to-back games.
    pub fn random_answer(&self) -> Word {
        let word = self
            .words
            .iter()
            .choose(&mut rand::thread_rng())
            .expect("words list is validated non-empty at load");

        Word::from_str(word).expect("stored words have the playable length")
    }
}

impl FromIterator<String> for WordsList {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::WordsList;

    fn list() -> WordsList {
        ["brine", "chose", "glyph", "quart", "zonal"]
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn membership_is_exact() {
        let list = list();

        assert!(list.contains("brine"));
        assert!(!list.contains("BRINE"));
        assert!(!list.contains("brin"));
    }

    #[test]
    fn random_answer_comes_from_the_list() {
        let list = list();

        for _ in 0..10 {
            let answer = list.random_answer();
            assert!(list.contains(&answer.to_string()));
        }
    }

    #[test]
    fn load_keeps_only_the_playable_length() {
        let path = std::env::temp_dir().join("wordlebot-words-mixed.txt");
        std::fs::write(&path, "brine\nab\nquart\nstretch\n").unwrap();

        let list = WordsList::load(&path).unwrap();

        assert_eq!(list.len(), 2);
        assert!(list.contains("brine"));
        assert!(list.contains("quart"));
        assert!(!list.contains("ab"));
    }

    #[test]
    fn load_rejects_a_file_with_no_playable_words() {
        let path = std::env::temp_dir().join("wordlebot-words-empty.txt");
        std::fs::write(&path, "ab\ncd\n").unwrap();

        assert!(WordsList::load(&path).is_err());
    }

    #[test]
    fn load_rejects_a_missing_file() {
        let path = std::env::temp_dir().join("wordlebot-words-missing.txt");

        assert!(WordsList::load(&path).is_err());
    }
}
