//! HTTP driver for chat delivery.
//!
//! Posts `{"channel": ..., "text": ...}` to an incoming-webhook style endpoint
//! (Slack, Mattermost and Rocket.Chat all accept this shape).

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;

use std::time::Duration;

use async_trait::async_trait;
use hookrelay_chat_interface::{ChatError, ChatService};
use hookrelay_config::Config;
use reqwest::{Client, ClientBuilder};
use serde::Serialize;
use tracing::debug;

pub use crate::errors::HttpChatError;

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    channel: &'a str,
    text: &'a str,
}

/// HTTP chat service.
#[derive(Clone)]
pub struct HttpChatService {
    client: Client,
    url: String,
    token: Option<String>,
}

impl HttpChatService {
    /// Build a service from configuration.
    pub fn new(config: &Config) -> Result<Self, HttpChatError> {
        let client = ClientBuilder::new()
            .connect_timeout(Duration::from_millis(config.chat.http.timeout))
            .timeout(Duration::from_millis(config.chat.http.timeout))
            .user_agent(format!("hookrelay/{}", config.version))
            .build()?;

        let token = Some(config.chat.http.token.clone()).filter(|t| !t.is_empty());

        Ok(Self {
            client,
            url: config.chat.http.url.clone(),
            token,
        })
    }

    async fn post(&self, channel: &str, message: &str) -> Result<(), HttpChatError> {
        let mut request = self.client.post(&self.url).json(&ChatMessage {
            channel,
            text: message,
        });

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            debug!(channel = %channel, status = %status, message = "Chat message delivered");
            Ok(())
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(HttpChatError::UnexpectedStatus {
                channel: channel.into(),
                status: status.as_u16(),
                body,
            })
        }
    }
}

#[async_trait]
impl ChatService for HttpChatService {
    #[tracing::instrument(skip(self, message))]
    async fn send(&self, channel: &str, message: &str) -> Result<(), ChatError> {
        self.post(channel, message).await.map_err(Into::into)
    }

    #[tracing::instrument(skip(self))]
    async fn health_check(&self) -> Result<(), ChatError> {
        // Any HTTP answer means the endpoint is reachable.
        let response = self
            .client
            .head(&self.url)
            .send()
            .await
            .map_err(HttpChatError::from)?;
        debug!(status = %response.status(), message = "Chat endpoint reachable");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    use super::*;

    fn config_for(server: &MockServer, token: &str) -> Config {
        let mut config = Config::default();
        config.chat.http.url = format!("{}/hooks/relay", server.uri());
        config.chat.http.token = token.into();
        config
    }

    #[tokio::test]
    async fn send_posts_channel_and_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/hooks/relay"))
            .and(header("authorization", "Bearer s3cr3t"))
            .and(body_json(serde_json::json!({
                "channel": "#releases",
                "text": "MyRepo v1.2.0 published"
            })))
            .respond_with(ResponseTemplate::new(200))
            .expect(1)
            .mount(&server)
            .await;

        let service = HttpChatService::new(&config_for(&server, "s3cr3t")).unwrap();
        service
            .send("#releases", "MyRepo v1.2.0 published")
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn health_check_accepts_any_http_answer() {
        let server = MockServer::start().await;
        Mock::given(method("HEAD"))
            .and(path("/hooks/relay"))
            .respond_with(ResponseTemplate::new(405))
            .expect(1)
            .mount(&server)
            .await;

        let service = HttpChatService::new(&config_for(&server, "")).unwrap();
        service.health_check().await.unwrap();
    }

    #[tokio::test]
    async fn health_check_fails_when_unreachable() {
        let mut config = Config::default();
        config.chat.http.url = "http://127.0.0.1:1/hooks/relay".into();

        let service = HttpChatService::new(&config).unwrap();
        let err = service.health_check().await.unwrap_err();

        assert!(matches!(err, ChatError::ImplementationError { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn send_reports_rejections() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(404).set_body_string("channel_not_found"))
            .mount(&server)
            .await;

        let service = HttpChatService::new(&config_for(&server, "")).unwrap();
        let err = service.send("#missing", "hello").await.unwrap_err();

        match err {
            ChatError::Rejected { channel, reason } => {
                assert_eq!(channel, "#missing");
                assert!(reason.contains("404"), "{reason}");
                assert!(reason.contains("channel_not_found"), "{reason}");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
