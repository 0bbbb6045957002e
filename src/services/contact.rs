use crate::config::TelegramConfig;
use crate::models::ContactRequest;
use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ContactError {
    #[error("messaging bot credentials are not configured")]
    NotConfigured,
    #[error("messaging bot request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("messaging bot answered {0}")]
    Rejected(StatusCode),
}

/// Relays contact form submissions to a Telegram chat. One attempt per
/// submission.
#[derive(Clone)]
pub struct ContactForwarder {
    client: reqwest::Client,
    api_base: String,
    bot_token: Option<String>,
    chat_id: Option<String>,
}

impl ContactForwarder {
    pub fn new(client: reqwest::Client, config: &TelegramConfig) -> Self {
        Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            bot_token: config.bot_token.clone().filter(|t| !t.is_empty()),
            chat_id: config.chat_id.clone().filter(|c| !c.is_empty()),
        }
    }

    pub async fn forward(&self, request: &ContactRequest) -> Result<(), ContactError> {
        let (Some(token), Some(chat_id)) = (&self.bot_token, &self.chat_id) else {
            tracing::warn!(
                "Telegram credentials not set, dropping contact form from {} ({})",
                request.name,
                request.phone
            );
            return Err(ContactError::NotConfigured);
        };

        let url = format!("{}/bot{}/sendMessage", self.api_base, token);
        let text = request.message();
        let response = self
            .client
            .post(&url)
            .form(&[("chat_id", chat_id.as_str()), ("text", text.as_str())])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ContactError::Rejected(status));
        }

        tracing::info!("Contact form from {} forwarded", request.name);
        Ok(())
    }
}
