use std::borrow::Cow;

/// Render game state as Discord-friendly emoji text.
pub trait AsEmoji {
    fn as_emoji(&self) -> Cow<str>;
}

impl AsEmoji for char {
    fn as_emoji(&self) -> Cow<str> {
        let alphabet = 'a'..='z';
        let regional_indicators = '🇦'..='🇿';

        alphabet
            .zip(regional_indicators)
            .find_map(|(letter, emoji)| (*self == letter).then(|| emoji.to_string().into()))
            .unwrap_or_else(|| self.to_string().into())
    }
}
