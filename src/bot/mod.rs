pub mod dispatcher;
pub mod handlers;

use anyhow::{Context, Result};
use teloxide::{prelude::*, utils::command::BotCommands};
use url::Url;

use crate::{
    configuration::BotSettings,
    dialogues::{Action, Caller, ScreenId},
};

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "начать работу с ботом")]
    Start,
    #[command(description = "доступ к книжной библиотеке")]
    Books,
    #[command(description = "программы для ПК")]
    Programs,
    #[command(description = "полезные ресурсы")]
    Resources,
    #[command(description = "свежие новости")]
    News,
    #[command(description = "помощь по боту")]
    Help,
    #[command(description = "настройки бота")]
    Settings,
    #[command(description = "ваш профиль")]
    Profile,
}

impl Command {
    /// Parses a bare command name such as `books`.
    pub fn from_name(name: &str) -> Option<Self> {
        Command::parse(&format!("/{name}"), "").ok()
    }
}

impl From<Command> for Action {
    fn from(command: Command) -> Self {
        Action::Open(match command {
            Command::Start => ScreenId::Home,
            Command::Books => ScreenId::Books,
            Command::Programs => ScreenId::Programs,
            Command::Resources => ScreenId::Resources,
            Command::News => ScreenId::NewsHome,
            Command::Help => ScreenId::Help,
            Command::Settings => ScreenId::Settings,
            Command::Profile => ScreenId::Profile,
        })
    }
}

/// An update the dispatcher knows how to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inbound {
    pub chat_id: i64,
    pub caller: Caller,
    pub input: Input,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    /// Command name without the leading slash and bot mention.
    Command(String),
    Button {
        callback_id: String,
        data: String,
        message_id: i32,
    },
}

pub async fn register_webhook(bot: &Bot, settings: &BotSettings) -> Result<()> {
    let Some(webhook_url) = settings.webhook_url() else {
        tracing::warn!("Public url is not configured, webhook is not registered");
        return Ok(());
    };
    let url = Url::parse(&webhook_url)
        .with_context(|| format!("Invalid webhook url {webhook_url}"))?;
    bot.set_webhook(url)
        .await
        .with_context(|| "Failed to register webhook")?;
    tracing::info!(%webhook_url, "Webhook registered");
    Ok(())
}

pub async fn register_commands(bot: &Bot) -> Result<()> {
    bot.set_my_commands(Command::bot_commands())
        .await
        .with_context(|| "Failed to register bot commands")?;
    Ok(())
}
