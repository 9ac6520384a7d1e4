#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

mod commands;

mod errors;

mod framework;
use framework::data::Data;

mod games;

mod utils;

use poise::serenity_prelude::{self as serenity, GatewayIntents};

#[allow(unused_imports)]
use tracing::{debug, error, info, trace};
use tracing_unwrap::ResultExt;

pub type Result<T, E = errors::CommandError> = std::result::Result<T, E>;

#[tokio::main]
async fn main() {
    framework::logging::init_tracing();

    if let Err(err) = run().await {
        error!("{err}");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), framework::data::Error> {
    let data = Data::new()?;
    let token = data.config().bot.token()?;

    info!(words = data.words().len(), "dictionary loaded");

    let framework = framework::poise::build(data);

    let mut client = serenity::Client::builder(&token, GatewayIntents::all())
        .framework(framework)
        .await
        .expect_or_log("client should be valid");

    client
        .start()
        .await
        .expect_or_log("client should not return error");

    Ok(())
}
