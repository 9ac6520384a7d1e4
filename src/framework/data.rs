use tracing::info;

use crate::games::wordle::{ActiveSession, WordsError, WordsList};

use super::config::Config;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("problem loading config: {0}")]
    Config(#[from] super::config::Error),

    #[error("problem loading words list: {0}")]
    Words(#[from] WordsError),
}

/// Shared state handed to every command invocation.
#[derive(Debug, Clone)]
pub struct Data {
    config: Config,
    words: WordsList,
    wordle: ActiveSession,
}

impl Data {
    pub fn new() -> Result<Self, Error> {
        dotenvy::dotenv().ok();

        let config = Config::load()?;
        info!("config loaded");

        let words = WordsList::load(config.wordle.words_file())?;

        Ok(Self {
            config,
            words,
            wordle: ActiveSession::new(),
        })
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn words(&self) -> &WordsList {
        &self.words
    }

    pub const fn wordle(&self) -> &ActiveSession {
        &self.wordle
    }
}
