use std::{collections::BTreeSet, ops::Not};

use poise::serenity_prelude as serenity;
use tracing::{instrument, trace};

use crate::{
    commands::LogCommands,
    games::wordle::{AsEmoji, Session},
    utils::poise::{CommandResult, Context},
    Result,
};

/// Wordle's green, for the board embed.
const BOARD_COLOR: u32 = 0x6AAA64;

/// start a new game
#[instrument(skip_all)]
#[poise::command(
    prefix_command,
    discard_spare_arguments,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn play(ctx: Context<'_>) -> Result<()> {
    ctx.log_command().await;
    _play(ctx).await?;
    Ok(())
}

async fn _play(ctx: Context<'_>) -> CommandResult {
    let mut slot = ctx.data().wordle().lock().await;

    if slot.as_ref().is_some_and(Session::is_active) {
        ctx.say(format!(
            "There's already an active game running! Use `{}end` to kill it and start anew.",
            ctx.prefix()
        ))
        .await?;

        return Ok(());
    }

    *slot = Some(Session::random(ctx.data().words()));

    ctx.say(format!(
        "Wordle has started! Send a word preceded by `{}guess` to play.",
        ctx.prefix()
    ))
    .await?;

    Ok(())
}

/// guess a word
#[instrument(skip_all)]
#[poise::command(
    prefix_command,
    discard_spare_arguments,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn guess(ctx: Context<'_>, word: String) -> Result<()> {
    ctx.log_command().await;
    _guess(ctx, word).await?;
    Ok(())
}

async fn _guess(ctx: Context<'_>, word: String) -> CommandResult {
    let mut slot = ctx.data().wordle().lock().await;

    let Some(session) = slot.as_mut().filter(|session| session.is_active()) else {
        trace!("no active game, ignoring");
        return Ok(());
    };

    session.guess(&word, ctx.data().words());

    ctx.send(poise::CreateReply::default().embed(board_embed(session)))
        .await?;

    if session.is_active().not() {
        ctx.say(farewell_message(session)).await?;
        slot.take();
    }

    Ok(())
}

fn board_embed(session: &Session) -> serenity::CreateEmbed {
    let board = session.board();

    serenity::CreateEmbed::new()
        .title("Wordle")
        .color(BOARD_COLOR)
        .description(if board.is_empty() {
            "no guesses yet!".to_owned()
        } else {
            board
        })
}

fn farewell_message(session: &Session) -> String {
    if session.is_solved() {
        format!(
            "Congrats! You guessed the answer in {} turns 🎉",
            session.turns()
        )
    } else {
        format!("So close! The answer was **{}**.", session.answer())
    }
}

/// reveal the answer without ending the game
#[instrument(skip_all)]
#[poise::command(
    prefix_command,
    discard_spare_arguments,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn answer(ctx: Context<'_>) -> Result<()> {
    ctx.log_command().await;
    _answer(ctx).await?;
    Ok(())
}

async fn _answer(ctx: Context<'_>) -> CommandResult {
    let slot = ctx.data().wordle().lock().await;

    let Some(session) = slot.as_ref().filter(|session| session.is_active()) else {
        trace!("no active game, ignoring");
        return Ok(());
    };

    ctx.say(format!("The answer is: ||{}||", session.answer()))
        .await?;

    Ok(())
}

/// show which turn is being played
#[instrument(skip_all)]
#[poise::command(
    prefix_command,
    discard_spare_arguments,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn turn(ctx: Context<'_>) -> Result<()> {
    ctx.log_command().await;
    _turn(ctx).await?;
    Ok(())
}

async fn _turn(ctx: Context<'_>) -> CommandResult {
    let slot = ctx.data().wordle().lock().await;

    let Some(session) = slot.as_ref().filter(|session| session.is_active()) else {
        trace!("no active game, ignoring");
        return Ok(());
    };

    ctx.say(session.turn_status()).await?;

    Ok(())
}

/// show what the guesses so far say about each letter
#[instrument(skip_all)]
#[poise::command(
    prefix_command,
    discard_spare_arguments,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn letters(ctx: Context<'_>) -> Result<()> {
    ctx.log_command().await;
    _letters(ctx).await?;
    Ok(())
}

async fn _letters(ctx: Context<'_>) -> CommandResult {
    let slot = ctx.data().wordle().lock().await;

    let Some(session) = slot.as_ref().filter(|session| session.is_active()) else {
        trace!("no active game, ignoring");
        return Ok(());
    };

    let knowledge = session.letter_knowledge();

    let response = format!(
        "correct: {}\nwrong place: {}\nnot present: {}",
        list_letters(&knowledge.correct),
        list_letters(&knowledge.wrong_place),
        list_letters(&knowledge.not_present),
    );

    ctx.say(response).await?;

    Ok(())
}

fn list_letters(letters: &BTreeSet<char>) -> String {
    if letters.is_empty() {
        "none".to_owned()
    } else {
        letters
            .iter()
            .map(AsEmoji::as_emoji)
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// list the words guessed so far
#[instrument(skip_all)]
#[poise::command(
    prefix_command,
    discard_spare_arguments,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn history(ctx: Context<'_>) -> Result<()> {
    ctx.log_command().await;
    _history(ctx).await?;
    Ok(())
}

async fn _history(ctx: Context<'_>) -> CommandResult {
    let slot = ctx.data().wordle().lock().await;

    let Some(session) = slot.as_ref().filter(|session| session.is_active()) else {
        trace!("no active game, ignoring");
        return Ok(());
    };

    let text = session.history_text("\n");

    if text.is_empty() {
        ctx.say("no guesses yet!").await?;
    } else {
        ctx.say(text).await?;
    }

    Ok(())
}

/// end the game early, revealing the answer
#[instrument(skip_all)]
#[poise::command(
    prefix_command,
    discard_spare_arguments,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn end(ctx: Context<'_>) -> Result<()> {
    ctx.log_command().await;
    _end(ctx).await?;
    Ok(())
}

async fn _end(ctx: Context<'_>) -> CommandResult {
    let mut slot = ctx.data().wordle().lock().await;

    let Some(session) = slot.as_mut().filter(|session| session.is_active()) else {
        trace!("no active game, ignoring");
        return Ok(());
    };

    ctx.say(format!(
        "Thanks for playing! The answer was **{}**",
        session.answer()
    ))
    .await?;

    session.end();
    slot.take();

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::{collections::BTreeSet, str::FromStr};

    use pretty_assertions::assert_eq;

    use crate::games::wordle::{Session, Word, WordsList};

    fn words() -> WordsList {
        ["crane", "slate"].into_iter().map(str::to_owned).collect()
    }

    #[test]
    fn farewell_after_a_win() {
        let mut session = Session::new(Word::from_str("crane").unwrap());
        session.guess("slate", &words());
        session.guess("crane", &words());

        assert_eq!(
            super::farewell_message(&session),
            "Congrats! You guessed the answer in 2 turns 🎉"
        );
    }

    #[test]
    fn farewell_after_a_loss() {
        let mut session = Session::new(Word::from_str("crane").unwrap());
        for _ in 0..6 {
            session.guess("slate", &words());
        }

        assert_eq!(
            super::farewell_message(&session),
            "So close! The answer was **crane**."
        );
    }

    #[test]
    fn listed_letters_read_as_emoji() {
        assert_eq!(super::list_letters(&BTreeSet::new()), "none");
        assert_eq!(super::list_letters(&BTreeSet::from(['a', 'c'])), "🇦, 🇨");
    }
}
