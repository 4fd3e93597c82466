/**
 * Email Provider
 *
 * Sends transactional email through the Brevo HTTP API. The only caller
 * today is account registration, which mails the verification link.
 */

use std::time::Duration;

use reqwest::Client;

use crate::error::ApiError;
use crate::server::config::AppConfig;

const BREVO_SEND_URL: &str = "https://api.brevo.com/v3/smtp/email";

/// Transactional email client
///
/// Holds the shared `reqwest` client and the sender identity from
/// configuration. Cloning is cheap; every clone reuses the same
/// connection pool.
#[derive(Clone)]
pub struct Mailer {
    client: Client,
    api_key: String,
    sender_email: String,
    sender_name: String,
}

impl Mailer {
    /// Build a mailer from loaded configuration
    pub fn new(config: &AppConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_default();

        Self {
            client,
            api_key: config.brevo_api_key.clone(),
            sender_email: config.admin_email_address.clone(),
            sender_name: config.admin_email_name.clone(),
        }
    }

    /// Send one HTML email to a single recipient
    ///
    /// # Arguments
    ///
    /// * `to` - Recipient address
    /// * `subject` - Message subject line
    /// * `html_content` - HTML body
    pub async fn send(&self, to: &str, subject: &str, html_content: &str) -> Result<(), ApiError> {
        let body = serde_json::json!({
            "sender": {
                "name": self.sender_name,
                "email": self.sender_email,
            },
            "to": [{ "email": to }],
            "subject": subject,
            "htmlContent": html_content,
        });

        let response = self
            .client
            .post(BREVO_SEND_URL)
            .header("api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Email API request failed: {:?}", e);
                ApiError::internal("Failed to send email")
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_else(|_| status.to_string());
            tracing::error!("Email API error ({}): {}", status, text);
            return Err(ApiError::internal("Failed to send email"));
        }

        Ok(())
    }
}
