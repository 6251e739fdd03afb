use async_trait::async_trait;
use reqwest::Client;

use crate::domain::ports::Notifier;

/// Push-message API endpoint used by [`PushNotifier::with_token`].
pub const DEFAULT_PUSH_API: &str = "https://notify-api.line.me/api/notify";

/// Incoming-webhook channel (Slack-compatible): posts `{"text": ...}` as
/// JSON to a configured URL.
pub struct WebhookNotifier {
    client: Client,
    webhook_url: String,
}

impl WebhookNotifier {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            webhook_url: webhook_url.into(),
        }
    }
}

#[async_trait]
impl Notifier for WebhookNotifier {
    async fn notify(&self, text: &str) -> bool {
        let body = serde_json::json!({ "text": text });
        match self.client.post(&self.webhook_url).json(&body).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                tracing::warn!("webhook rejected notification: {}", response.status());
                false
            }
            Err(e) => {
                tracing::warn!("webhook request failed: {}", e);
                false
            }
        }
    }
}

/// Push-message channel: bearer-token form POST with a `message` field.
pub struct PushNotifier {
    client: Client,
    api_url: String,
    token: String,
}

impl PushNotifier {
    pub fn new(api_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_url: api_url.into(),
            token: token.into(),
        }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self::new(DEFAULT_PUSH_API, token)
    }
}

#[async_trait]
impl Notifier for PushNotifier {
    async fn notify(&self, text: &str) -> bool {
        let message = format!("\n{}", text);
        let result = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.token)
            .form(&[("message", message.as_str())])
            .send()
            .await;

        match result {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                tracing::warn!("push API rejected notification: {}", response.status());
                false
            }
            Err(e) => {
                tracing::warn!("push API request failed: {}", e);
                false
            }
        }
    }
}

/// Fallback channel that only writes the report to the log. Keeps the
/// binary usable when no webhook or token is configured.
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify(&self, text: &str) -> bool {
        tracing::info!("notification:\n{}", text);
        true
    }
}
