use std::sync::Arc;

use republic_info_bot::{
    bot::{dispatcher::Dispatcher, register_commands, register_webhook},
    configuration::get_config,
    dialogues::ScreenRegistry,
    logic::{
        aggregator::NewsAggregator, fetcher::HttpFetcher, message_senders::TgTransport,
        sources::default_catalog,
    },
    set_env,
    telemetry::init_tracing,
    web::Application,
};
use secrecy::ExposeSecret;
use teloxide::{prelude::Requester, Bot};
use tokio::select;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    set_env();
    let settings = get_config()?;
    init_tracing();

    info!("Starting republic-info-bot");
    let bot = Bot::new(settings.bot.token.expose_secret());

    let screens = ScreenRegistry::new()?;
    let fetcher = Arc::new(HttpFetcher::new(&settings.news)?);
    let aggregator = NewsAggregator::new(fetcher, default_catalog())?;
    let transport = Arc::new(TgTransport::new(bot.clone()));
    let bot_username = match bot.get_me().await {
        Ok(me) => me.user.username.clone(),
        Err(err) => {
            warn!(error = ?err, "Failed to look up bot username, accepting all command mentions");
            None
        }
    };
    let dispatcher = Arc::new(
        Dispatcher::new(screens, aggregator, transport)?.with_bot_username(bot_username),
    );

    let server = Application::build(&settings.app, dispatcher).await?;

    if let Err(err) = register_commands(&bot).await {
        error!(error = ?err, "Bot commands are not registered");
    }
    if let Err(err) = register_webhook(&bot, &settings.bot).await {
        error!(error = ?err, "Webhook is not registered");
    }

    select! {
        res = server.serve_forever() => {
            if let Err(err) = res {
                error!(error = ?err, "Server failed");
            }
            info!("Server exited")
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Received Ctrl-C")
        }
    };
    info!("republic-info-bot shut down");
    Ok(())
}
