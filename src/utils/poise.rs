use crate::{errors::CommandError, framework::data::Data};

pub type Context<'a> = poise::Context<'a, Data, CommandError>;
pub type Command = poise::Command<Data, CommandError>;
pub type CommandResult = Result<(), CommandError>;
