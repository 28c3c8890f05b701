use std::{
    net::{IpAddr, SocketAddr},
    path::PathBuf,
    time::Duration,
};

use secrecy::SecretString;
use serde::Deserialize;
use serde_aux::field_attributes::deserialize_number_from_string;

#[derive(Deserialize, Clone)]
pub struct Settings {
    pub app: AppSettings,
    pub bot: BotSettings,
    pub news: NewsSettings,
}

#[derive(Deserialize, Clone)]
pub struct AppSettings {
    pub host: IpAddr,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub port: u16,
}

impl AppSettings {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[derive(Deserialize, Clone)]
pub struct BotSettings {
    pub token: SecretString,
    /// Public base url of this service; the webhook is registered at `<public_url>/webhook`.
    #[serde(default)]
    pub public_url: Option<String>,
}

impl BotSettings {
    pub fn webhook_url(&self) -> Option<String> {
        self.public_url
            .as_deref()
            .map(|base| base.trim().trim_end_matches('/'))
            .filter(|base| !base.is_empty())
            .map(|base| format!("{base}/webhook"))
    }
}

#[derive(Deserialize, Clone)]
pub struct NewsSettings {
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl NewsSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

pub enum Environment {
    Local,
    Production,
}
impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            other => Err(format!(
                "Unsupported environment type: {}. Use `local` or `production`",
                other
            )),
        }
    }
}

pub fn get_config() -> Result<Settings, config::ConfigError> {
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(config::ConfigError::Message)?;
    let config_dir: PathBuf = std::env::var("CONFIG_DIR")
        .unwrap_or_else(|_| "configuration".into())
        .into();
    config::Config::builder()
        .add_source(config::File::from(config_dir.join("base")).required(true))
        .add_source(config::File::from(config_dir.join(environment.as_str())).required(false))
        .add_source(
            config::Environment::with_prefix("app")
                .prefix_separator("_")
                .separator("__"),
        )
        // Variables set by the hosting platform win over everything else.
        .set_override_option("bot.token", std::env::var("BOT_TOKEN").ok())?
        .set_override_option("app.port", std::env::var("PORT").ok())?
        .set_override_option("bot.public_url", std::env::var("RENDER_EXTERNAL_URL").ok())?
        .build()?
        .try_deserialize()
}
