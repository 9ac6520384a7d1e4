use poise::{serenity_prelude as serenity, BoxFuture, FrameworkError};
use thiserror::Error as ThisError;
use tracing::{error, error_span, Instrument};

use crate::framework::data::Data;

pub fn handle_framework_error(err: FrameworkError<'_, Data, CommandError>) -> BoxFuture<()> {
    Box::pin(async move {
        match err {
            FrameworkError::Command { error, ctx, .. } => {
                let span = error_span!("command", name = ctx.invoked_command_name());

                async {
                    error!("{error}");

                    if let Err(err) = ctx.reply(error.to_string()).await {
                        error!("failed to report the error to the channel: {err}");
                    }
                }
                .instrument(span)
                .await;
            }
            FrameworkError::MissingBotPermissions {
                missing_permissions,
                ctx,
                ..
            } => {
                let span = error_span!("command", name = ctx.invoked_command_name());
                let _enter = span.enter();

                error!(%missing_permissions, "bot is missing permissions");
            }
            _ => {
                if let Err(err) = poise::builtins::on_error(err).await {
                    error!("failed to handle framework error: {err}");
                }
            }
        };
    })
}

/// Errors surfaced by command handlers. The game itself never fails -
/// invalid input is discarded - so all that remains is the transport.
#[derive(Debug, ThisError)]
pub enum CommandError {
    #[error("discord error: {0}")]
    Serenity(#[from] serenity::Error),
}
