use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;

use super::email::OutboundEmail;

/// Outbound e-mail delivery boundary. Any provider that can send one message
/// and report success synchronously fits behind it.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    async fn send(&self, api_key: &str, email: &OutboundEmail) -> Result<(), DeliveryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    /// The provider answered, but not with a 2xx status.
    #[error("provider rejected message with status {status}: {body}")]
    Rejected { status: StatusCode, body: String },
    /// The request never produced a provider response.
    #[error("provider request failed: {0}")]
    Transport(String),
}

/// SendGrid v3 mail-send client.
#[derive(Debug, Clone)]
pub struct SendGridClient {
    http: reqwest::Client,
    endpoint: String,
}

impl SendGridClient {
    pub fn new(api_base_url: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self::with_client(http, api_base_url))
    }

    pub fn with_client(http: reqwest::Client, api_base_url: &str) -> Self {
        Self {
            http,
            endpoint: format!("{}/v3/mail/send", api_base_url.trim_end_matches('/')),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl EmailProvider for SendGridClient {
    async fn send(&self, api_key: &str, email: &OutboundEmail) -> Result<(), DeliveryError> {
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&MailSendRequest::from(email))
            .send()
            .await
            .map_err(|err| DeliveryError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DeliveryError::Rejected { status, body });
        }

        Ok(())
    }
}

#[derive(Debug, Serialize)]
struct MailSendRequest<'a> {
    personalizations: [Personalization<'a>; 1],
    from: Address<'a>,
    reply_to: Address<'a>,
    content: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
    to: [Address<'a>; 1],
    subject: &'a str,
}

#[derive(Debug, Serialize)]
struct Address<'a> {
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    value: &'a str,
}

impl<'a> From<&'a OutboundEmail> for MailSendRequest<'a> {
    fn from(email: &'a OutboundEmail) -> Self {
        Self {
            personalizations: [Personalization {
                to: [Address {
                    email: &email.to,
                    name: None,
                }],
                subject: &email.subject,
            }],
            from: Address {
                email: &email.from,
                name: None,
            },
            reply_to: Address {
                email: &email.reply_to.email,
                name: email.reply_to.name.as_deref(),
            },
            content: [Content {
                kind: mime::TEXT_PLAIN.essence_str(),
                value: &email.body,
            }],
        }
    }
}
