use async_trait::async_trait;
use teloxide::{
    payloads::{EditMessageTextSetters, SendMessageSetters},
    prelude::Requester,
    types::{ChatId, InlineKeyboardButton, InlineKeyboardMarkup, MessageId, ParseMode},
    ApiError, Bot, RequestError,
};
use thiserror::Error;

use crate::dialogues::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    New,
    /// Replace the text and keyboard of a message the bot sent earlier.
    Edit(i32),
}

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Telegram request failed")]
    Request(#[from] RequestError),
}

/// Telegram refuses to edit a message into exactly what it already shows.
/// The user sees the intended screen either way, so that is not a failure.
pub fn edit_outcome<T>(result: Result<T, RequestError>) -> Result<(), TransportError> {
    match result {
        Ok(_) | Err(RequestError::Api(ApiError::MessageNotModified)) => Ok(()),
        Err(err) => Err(err.into()),
    }
}

/// Outbound side of the chat platform.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn send_display(
        &self,
        chat_id: i64,
        delivery: Delivery,
        display: &Display,
    ) -> Result<(), TransportError>;

    async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), TransportError>;

    async fn answer_callback(&self, callback_id: &str) -> Result<(), TransportError>;
}

pub struct TgTransport {
    bot: Bot,
}

impl TgTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

fn keyboard_markup(display: &Display) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(display.keyboard.iter().map(|row| {
        row.iter()
            .map(|button| InlineKeyboardButton::callback(button.label.clone(), button.action.id()))
            .collect::<Vec<_>>()
    }))
}

#[async_trait]
impl Transport for TgTransport {
    async fn send_display(
        &self,
        chat_id: i64,
        delivery: Delivery,
        display: &Display,
    ) -> Result<(), TransportError> {
        let markup = keyboard_markup(display);
        match delivery {
            Delivery::New => {
                self.bot
                    .send_message(ChatId(chat_id), display.text.clone())
                    .parse_mode(ParseMode::Html)
                    .disable_web_page_preview(!display.link_preview)
                    .reply_markup(markup)
                    .await?;
            }
            Delivery::Edit(message_id) => {
                let edited = self
                    .bot
                    .edit_message_text(ChatId(chat_id), MessageId(message_id), display.text.clone())
                    .parse_mode(ParseMode::Html)
                    .disable_web_page_preview(!display.link_preview)
                    .reply_markup(markup)
                    .await;
                edit_outcome(edited)?;
            }
        }
        Ok(())
    }

    async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), TransportError> {
        self.bot.send_message(ChatId(chat_id), text).await?;
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<(), TransportError> {
        self.bot.answer_callback_query(callback_id).await?;
        Ok(())
    }
}
