use std::path::{Path, PathBuf};

use poise::serenity_prelude::{ActivityData, ChannelId};
use serde::Deserialize;
use tracing::{info, warn};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config file could not be read: {0}")]
    Read(config::ConfigError),

    #[error("config file could not be parsed: {0}")]
    Parse(config::ConfigError),

    #[error("WORDLEBOT_TOKEN is not set in the environment")]
    MissingToken,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    pub bot: BotConfig,

    #[serde(default)]
    pub wordle: WordleConfig,
}

impl Config {
    pub fn load() -> Result<Self, Error> {
        let file = if let Ok(path) = std::env::var("WORDLEBOT_TOML") {
            info!(path, "looking for config file with WORDLEBOT_TOML...");
            path
        } else {
            let path = "./wordlebot.toml".to_owned();
            warn!(path, "WORDLEBOT_TOML env unset, using default path");
            path
        };

        ::config::Config::builder()
            .add_source(::config::File::new(&file, ::config::FileFormat::Toml))
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct BotConfig {
    prefix: String,
    activity: Option<String>,
    status_channel: Option<ChannelId>,
}

impl BotConfig {
    /// The token never goes in the config file, only the environment.
    pub fn token(&self) -> Result<String, Error> {
        std::env::var("WORDLEBOT_TOKEN").map_err(|_| Error::MissingToken)
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn activity(&self) -> Option<ActivityData> {
        let text = self.activity.as_deref()?;

        if text.is_empty() {
            warn!("bot.activity provided in config as empty string, defaulting to none");
            return None;
        }

        let activity = if let Some(name) = text.strip_prefix("playing ") {
            ActivityData::playing(name)
        } else if let Some(name) = text.strip_prefix("listening to ") {
            ActivityData::listening(name)
        } else if let Some(name) = text.strip_prefix("watching ") {
            ActivityData::watching(name)
        } else if let Some(name) = text.strip_prefix("competing in ") {
            ActivityData::competing(name)
        } else {
            warn!(
                "bot.activity in config could not be parsed - must start with `playing`, `listening to`, `watching` or `competing in`"
            );
            return None;
        };

        Some(activity)
    }

    pub fn status_channel(&self) -> Option<ChannelId> {
        self.status_channel
    }
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default)]
pub struct WordleConfig {
    words_file: Option<PathBuf>,
}

impl WordleConfig {
    pub fn words_file(&self) -> &Path {
        self.words_file
            .as_deref()
            .unwrap_or_else(|| Path::new("./words.txt"))
    }
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude::ActivityType;
    use pretty_assertions::assert_eq;

    use super::BotConfig;

    fn bot_config(activity: Option<&str>) -> BotConfig {
        BotConfig {
            prefix: "!".to_owned(),
            activity: activity.map(str::to_owned),
            status_channel: None,
        }
    }

    #[test]
    fn activity_parses_the_verb_prefix() {
        let activity = bot_config(Some("playing wordle")).activity().unwrap();

        assert_eq!(activity.kind, ActivityType::Playing);
        assert_eq!(activity.name, "wordle");
    }

    #[test]
    fn unparseable_activity_is_disabled() {
        assert!(bot_config(Some("doing nothing")).activity().is_none());
        assert!(bot_config(Some("")).activity().is_none());
        assert!(bot_config(None).activity().is_none());
    }

    #[test]
    fn words_file_defaults_next_to_the_binary() {
        let config = super::WordleConfig::default();

        assert_eq!(config.words_file(), std::path::Path::new("./words.txt"));
    }
}
