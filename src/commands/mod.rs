pub mod wordle;

use tracing::info;

use crate::utils::poise::{Command, Context};

pub fn list() -> Vec<Command> {
    vec![
        wordle::play(),
        wordle::guess(),
        wordle::answer(),
        wordle::turn(),
        wordle::letters(),
        wordle::history(),
        wordle::end(),
    ]
}

pub(crate) trait LogCommands {
    async fn log_command(&self);
}

impl LogCommands for Context<'_> {
    async fn log_command(&self) {
        let channel = self
            .channel_id()
            .name(self.serenity_context())
            .await
            .map_or("dms".to_owned(), |name| format!("#{name}"));

        info!(
            "@{} ({}): {}",
            self.author().name,
            channel,
            self.invocation_string()
        );
    }
}
