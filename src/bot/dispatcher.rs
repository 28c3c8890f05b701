use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, error, warn, Instrument};

use super::{Command, Inbound, Input};
use crate::{
    dialogues::{
        news, Action, Caller, Display, NewsCategory, RegistryError, ScreenRegistry, UnknownAction,
    },
    logic::{
        aggregator::{NewsAggregator, NewsError},
        message_senders::{Delivery, Transport, TransportError},
    },
};

pub const GENERIC_ERROR: &str = "⚠️ Произошла ошибка при обработке команды. \
    Попробуйте еще раз или обратитесь к разработчику @Alex_De_White";

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Unknown command `/{0}`")]
    UnknownCommand(String),

    #[error(transparent)]
    UnknownAction(#[from] UnknownAction),

    #[error("Screen registry error")]
    Registry(#[from] RegistryError),

    #[error("News error")]
    News(#[from] NewsError),

    #[error("Failed to deliver reply")]
    Transport(#[from] TransportError),
}

/// Routes commands and button presses to screens or news digests and sends the result.
pub struct Dispatcher {
    screens: ScreenRegistry,
    aggregator: NewsAggregator,
    transport: Arc<dyn Transport>,
    bot_username: Option<String>,
}

impl Dispatcher {
    /// Fails if any button, on a screen or on a news digest, leads nowhere.
    pub fn new(
        screens: ScreenRegistry,
        aggregator: NewsAggregator,
        transport: Arc<dyn Transport>,
    ) -> Result<Self, RegistryError> {
        for (origin, category) in screens.news_links() {
            if !aggregator.supports(category) {
                return Err(RegistryError::UnresolvableAction {
                    origin,
                    label: category.id().to_owned(),
                    action: category.id(),
                });
            }
        }
        for category in NewsCategory::ALL.into_iter().filter(|c| aggregator.supports(*c)) {
            if news::loading(category).text.trim().is_empty() {
                return Err(RegistryError::EmptyText(category.id()));
            }
            screens.check_display(category.id(), &news::digest(category, &[]), |c| {
                aggregator.supports(c)
            })?;
        }
        Ok(Dispatcher {
            screens,
            aggregator,
            transport,
            bot_username: None,
        })
    }

    /// Commands mentioning any other bot are left alone.
    pub fn with_bot_username(mut self, username: Option<String>) -> Self {
        self.bot_username = username;
        self
    }

    pub fn bot_username(&self) -> Option<&str> {
        self.bot_username.as_deref()
    }

    pub fn resolve_command(name: &str) -> Result<Action, DispatchError> {
        Command::from_name(name)
            .map(Action::from)
            .ok_or_else(|| DispatchError::UnknownCommand(name.to_owned()))
    }

    pub async fn render(&self, action: Action, caller: &Caller) -> Result<Display, DispatchError> {
        match action {
            Action::Open(screen) => Ok(self.screens.render(screen, caller)?),
            Action::News(category) => Ok(self.aggregator.aggregate(category).await?),
        }
    }

    /// Handles one update end to end. Never fails: errors end up in the log and
    /// the user gets a generic apology instead.
    pub async fn handle(&self, inbound: Inbound) {
        if let Input::Button { callback_id, .. } = &inbound.input {
            if let Err(err) = self.transport.answer_callback(callback_id).await {
                warn!(error = ?err, "Failed to answer callback query");
            }
        }
        if let Err(err) = self.process(&inbound).await {
            error!(
                error = ?err,
                chat_id = inbound.chat_id,
                caller = inbound.caller.id,
                input = ?inbound.input,
                "Failed to handle update"
            );
            self.report_failure(inbound.chat_id).await;
        }
    }

    /// Runs [`Dispatcher::handle`] in its own task; a panic inside is logged and
    /// reported to the user like any other error.
    pub fn spawn(self: &Arc<Self>, inbound: Inbound) {
        let dispatcher = Arc::clone(self);
        let chat_id = inbound.chat_id;
        let span = tracing::info_span!("update", chat_id, caller = inbound.caller.id);
        tokio::spawn(
            async move {
                let worker = Arc::clone(&dispatcher);
                let handled = tokio::spawn(async move { worker.handle(inbound).await }).await;
                if let Err(err) = handled {
                    error!(error = ?err, "Update handler crashed");
                    dispatcher.report_failure(chat_id).await;
                }
            }
            .instrument(span),
        );
    }

    async fn process(&self, inbound: &Inbound) -> Result<(), DispatchError> {
        let (action, delivery) = match &inbound.input {
            Input::Command(name) => (Self::resolve_command(name)?, Delivery::New),
            Input::Button {
                data, message_id, ..
            } => (data.parse::<Action>()?, Delivery::Edit(*message_id)),
        };
        debug!(%action, ?delivery, "Dispatching");

        if let (Action::News(category), Delivery::Edit(_)) = (action, delivery) {
            if let Err(err) = self
                .transport
                .send_display(inbound.chat_id, delivery, &news::loading(category))
                .await
            {
                warn!(error = ?err, "Failed to show loading placeholder");
            }
        }

        let display = self.render(action, &inbound.caller).await?;
        self.transport
            .send_display(inbound.chat_id, delivery, &display)
            .await?;
        Ok(())
    }

    async fn report_failure(&self, chat_id: i64) {
        if let Err(err) = self.transport.send_text(chat_id, GENERIC_ERROR).await {
            error!(error = ?err, chat_id, "Failed to report error to user");
        }
    }
}
