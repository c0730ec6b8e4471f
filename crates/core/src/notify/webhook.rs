use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::Serialize;

use super::notify_traits::NotifierTrait;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct WebhookPayload<'a> {
    text: &'a str,
}

/// Posts `{"text": ...}` to a chat webhook.
pub struct WebhookNotifier {
    client: Client,
    url: String,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_timeout(url, DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            url: url.into(),
        }
    }
}

#[async_trait]
impl NotifierTrait for WebhookNotifier {
    fn name(&self) -> &str {
        "webhook"
    }

    async fn send(&self, text: &str) -> bool {
        let response = match self
            .client
            .post(&self.url)
            .json(&WebhookPayload { text })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Webhook delivery failed: {}", e);
                return false;
            }
        };

        let status = response.status();
        if status.is_success() {
            debug!("Webhook accepted message ({})", status);
            true
        } else {
            warn!("Webhook rejected message with HTTP {}", status);
            false
        }
    }
}
