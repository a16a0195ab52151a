use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use tracing::debug;
use url::Url;
use url::form_urlencoded::byte_serialize;

use super::{DrawSource, SourceError};

/// One way of reaching the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Relay {
    /// The endpoint itself.
    Direct,
    /// `prefix` followed by the percent-encoded target.
    Encoded(String),
    /// `prefix` followed by the target as is.
    Raw(String),
}

impl Relay {
    /// Direct first, then the public relays in order of reliability.
    pub fn standard() -> Vec<Relay> {
        vec![
            Relay::Direct,
            Relay::Encoded("https://api.allorigins.win/raw?url=".to_string()),
            Relay::Raw("https://thingproxy.freeboard.io/fetch/".to_string()),
            Relay::Encoded("https://api.codetabs.com/v1/proxy?quest=".to_string()),
        ]
    }

    pub fn url_for(&self, target: &str) -> String {
        match self {
            Relay::Direct => target.to_string(),
            Relay::Encoded(prefix) => {
                let encoded: String = byte_serialize(target.as_bytes()).collect();
                format!("{prefix}{encoded}")
            }
            Relay::Raw(prefix) => format!("{prefix}{target}"),
        }
    }

    /// `direct`, or the relay's host.
    pub fn name(&self) -> String {
        match self {
            Relay::Direct => "direct".to_string(),
            Relay::Encoded(prefix) | Relay::Raw(prefix) => Url::parse(prefix)
                .ok()
                .and_then(|url| url.host_str().map(str::to_string))
                .unwrap_or_else(|| prefix.clone()),
        }
    }
}

/// Tries each relay in turn until one returns a JSON body.
pub struct RelayChain {
    client: reqwest::Client,
    api_base: String,
    relays: Vec<Relay>,
}

impl RelayChain {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self::with_relays(api_base, Relay::standard())
    }

    pub fn with_relays(api_base: impl Into<String>, relays: Vec<Relay>) -> Self {
        let client = reqwest::Client::builder()
            .user_agent(concat!("sift/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());

        Self {
            client,
            api_base: api_base.into(),
            relays,
        }
    }

    /// Endpoint URL for `rows` draws, with a cache-busting timestamp.
    pub fn target_url(&self, rows: u32) -> String {
        let separator = if self.api_base.contains('?') { '&' } else { '?' };
        format!(
            "{}{separator}row={rows}&t={}",
            self.api_base,
            Utc::now().timestamp_millis()
        )
    }

    async fn attempt(&self, relay: &Relay, target: &str) -> Result<Value, SourceError> {
        let response = self.client.get(relay.url_for(target)).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        match serde_json::from_str::<Value>(&body)? {
            Value::Null => Err(SourceError::Empty),
            value => Ok(value),
        }
    }
}

#[async_trait]
impl DrawSource for RelayChain {
    fn name(&self) -> &str {
        &self.api_base
    }

    async fn fetch(&self, rows: u32) -> Result<Value, SourceError> {
        let target = self.target_url(rows);
        for relay in &self.relays {
            match self.attempt(relay, &target).await {
                Ok(value) => {
                    debug!(relay = %relay.name(), rows, "draw data received");
                    return Ok(value);
                }
                Err(err) => debug!(relay = %relay.name(), error = %err, "relay failed"),
            }
        }
        Err(SourceError::Exhausted(self.relays.len()))
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
