use poise::PrefixFrameworkOptions;
use tracing::trace;

use crate::{commands, errors};

use super::data::Data;

pub fn build(data: Data) -> poise::Framework<Data, errors::CommandError> {
    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::list(),
            prefix_options: PrefixFrameworkOptions {
                prefix: Some(data.config().bot.prefix().to_owned()),
                ..Default::default()
            },
            on_error: errors::handle_framework_error,
            ..Default::default()
        })
        .setup(|ctx, _ready, _framework| {
            Box::pin(async move {
                ctx.set_activity(data.config().bot.activity());

                trace!("finished setup, accepting commands");

                if let Some(status_channel) = data.config().bot.status_channel() {
                    status_channel.say(&ctx.http, "ready!").await?;
                }

                Ok(data)
            })
        })
        .build()
}
