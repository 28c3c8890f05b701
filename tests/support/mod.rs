pub mod markup;

use std::{collections::HashMap, sync::Arc};

use async_trait::async_trait;
use republic_info_bot::{
    bot::{dispatcher::Dispatcher, Inbound, Input},
    dialogues::{Caller, Display, ScreenRegistry},
    logic::{
        aggregator::NewsAggregator,
        fetcher::{FetchError, FetchPage},
        message_senders::{Delivery, Transport, TransportError},
        sources::{default_catalog, CategorySources},
    },
};
use reqwest::StatusCode;
use teloxide::{ApiError, RequestError};
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Display {
        chat_id: i64,
        delivery: Delivery,
        display: Display,
    },
    Text {
        chat_id: i64,
        text: String,
    },
    CallbackAnswer(String),
}

/// Records everything the dispatcher tries to send.
#[derive(Default)]
pub struct RecordingTransport {
    pub sent: Mutex<Vec<Sent>>,
    pub fail_displays: bool,
}

impl RecordingTransport {
    pub fn failing() -> Self {
        RecordingTransport {
            sent: Mutex::default(),
            fail_displays: true,
        }
    }

    pub async fn take(&self) -> Vec<Sent> {
        std::mem::take(&mut *self.sent.lock().await)
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_display(
        &self,
        chat_id: i64,
        delivery: Delivery,
        display: &Display,
    ) -> Result<(), TransportError> {
        if self.fail_displays {
            return Err(RequestError::Api(ApiError::MessageCantBeEdited).into());
        }
        self.sent.lock().await.push(Sent::Display {
            chat_id,
            delivery,
            display: display.clone(),
        });
        Ok(())
    }

    async fn send_text(&self, chat_id: i64, text: &str) -> Result<(), TransportError> {
        self.sent.lock().await.push(Sent::Text {
            chat_id,
            text: text.to_owned(),
        });
        Ok(())
    }

    async fn answer_callback(&self, callback_id: &str) -> Result<(), TransportError> {
        self.sent
            .lock()
            .await
            .push(Sent::CallbackAnswer(callback_id.to_owned()));
        Ok(())
    }
}

/// Serves canned pages by url; unknown urls answer 503.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, String>,
    pub requested: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn with_page(mut self, url: &str, markup: String) -> Self {
        self.pages.insert(url.to_owned(), markup);
        self
    }
}

#[async_trait]
impl FetchPage for StubFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        self.requested.lock().await.push(url.to_owned());
        self.pages
            .get(url)
            .cloned()
            .ok_or(FetchError::Status(StatusCode::SERVICE_UNAVAILABLE))
    }
}

pub fn aggregator(fetcher: Arc<StubFetcher>, catalog: Vec<CategorySources>) -> NewsAggregator {
    NewsAggregator::new(fetcher, catalog).expect("catalog must compile")
}

pub fn dispatcher_with(
    fetcher: StubFetcher,
    transport: Arc<RecordingTransport>,
) -> Arc<Dispatcher> {
    let screens = ScreenRegistry::new().expect("screens must validate");
    let aggregator = aggregator(Arc::new(fetcher), default_catalog());
    Arc::new(Dispatcher::new(screens, aggregator, transport).expect("dispatcher must validate"))
}

pub const CHAT: i64 = 4242;

pub fn caller() -> Caller {
    Caller {
        id: 77,
        full_name: Some("Фёдор Иванов".into()),
        username: Some("fedor".into()),
    }
}

pub fn command(name: &str) -> Inbound {
    Inbound {
        chat_id: CHAT,
        caller: caller(),
        input: Input::Command(name.into()),
    }
}

pub fn button(data: &str) -> Inbound {
    Inbound {
        chat_id: CHAT,
        caller: caller(),
        input: Input::Button {
            callback_id: format!("cb-{data}"),
            data: data.into(),
            message_id: 10,
        },
    }
}
