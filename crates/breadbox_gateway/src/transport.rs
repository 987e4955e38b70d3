use std::time::Duration;

use serde::{Deserialize, Serialize};
use widget_logging::{widget_debug, widget_warn};

use crate::{RequestId, SendFailure};

/// Path of the chat endpoint, relative to the backend origin.
pub const CHAT_PATH: &str = "api/chat";

#[derive(Debug, Clone)]
pub struct TransportSettings {
    /// Full endpoint URL, `<backend-origin>/api/chat`.
    pub endpoint: url::Url,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for TransportSettings {
    fn default() -> Self {
        Self {
            endpoint: url::Url::parse("http://localhost:5000/api/chat")
                .expect("default endpoint URL"),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl TransportSettings {
    /// Settings for a given backend origin, default timeouts.
    pub fn for_origin(origin: &url::Url) -> Result<Self, url::ParseError> {
        Ok(Self {
            endpoint: origin.join(CHAT_PATH)?,
            ..Self::default()
        })
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    message: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatReplyBody {
    response: String,
}

#[async_trait::async_trait]
pub trait ChatTransport: Send + Sync {
    async fn send(&self, request_id: RequestId, message: &str) -> Result<String, SendFailure>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    settings: TransportSettings,
}

impl ReqwestTransport {
    pub fn new(settings: TransportSettings) -> Self {
        Self { settings }
    }

    fn build_client(&self) -> Result<reqwest::Client, SendFailure> {
        reqwest::Client::builder()
            .connect_timeout(self.settings.connect_timeout)
            .timeout(self.settings.request_timeout)
            .build()
            .map_err(|err| SendFailure::Network(err.to_string()))
    }
}

#[async_trait::async_trait]
impl ChatTransport for ReqwestTransport {
    async fn send(&self, request_id: RequestId, message: &str) -> Result<String, SendFailure> {
        let client = self.build_client()?;

        widget_debug!(
            "chat send request_id={} endpoint={}",
            request_id,
            self.settings.endpoint
        );

        let response = client
            .post(self.settings.endpoint.clone())
            .json(&ChatRequest { message })
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(SendFailure::HttpStatus(status.as_u16()));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let reply: ChatReplyBody = serde_json::from_slice(&body).map_err(|err| {
            widget_warn!("chat reply request_id={} unparseable: {}", request_id, err);
            SendFailure::MalformedReply
        })?;

        Ok(reply.response)
    }
}

fn map_reqwest_error(err: reqwest::Error) -> SendFailure {
    if err.is_timeout() {
        return SendFailure::Timeout;
    }
    SendFailure::Network(err.to_string())
}
