use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::configuration::NewsSettings;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected status {0}")]
    Status(StatusCode),
}

/// Downloads a source page. A failure means "nothing from this source this time".
#[async_trait]
pub trait FetchPage: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(settings: &NewsSettings) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .user_agent(settings.user_agent.clone())
            .build()?;
        Ok(HttpFetcher { client })
    }
}

#[async_trait]
impl FetchPage for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        Ok(response.text().await?)
    }
}
