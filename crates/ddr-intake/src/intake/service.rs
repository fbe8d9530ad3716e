use std::sync::Arc;

use serde_json::Value;
use tracing::{error, info};

use super::domain::{ApplicationSubmission, SubmissionPayload, ValidationError};
use super::email::OutboundEmail;
use super::provider::{DeliveryError, EmailProvider};
use crate::config::MailConfig;

/// Submission endpoint logic: validate, compose, deliver once.
///
/// Holds no mutable state; concurrent requests share only the read-only
/// configuration and the provider client.
pub struct SubmissionService<P> {
    config: MailConfig,
    provider: Arc<P>,
}

impl<P> SubmissionService<P>
where
    P: EmailProvider + 'static,
{
    pub fn new(config: MailConfig, provider: Arc<P>) -> Self {
        Self { config, provider }
    }

    /// Handle one parsed request body.
    ///
    /// Nothing leaves the process unless validation and the credential check
    /// both pass, and the provider is called at most once.
    pub async fn handle(&self, payload: SubmissionPayload) -> Result<(), SubmitError> {
        let submission = ApplicationSubmission::try_from(payload)?;

        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(SubmitError::MissingCredential)?;

        let email = OutboundEmail::compose(&submission, &self.config);
        self.provider.send(api_key, &email).await?;

        info!(company = %submission.company, "application e-mail delivered");
        Ok(())
    }

    /// Parse a raw request body and handle it.
    ///
    /// A JSON `null` cannot be read as a record and fails like invalid JSON.
    /// Any other value that is not an object carries no fields, so it is
    /// handled as an empty submission and fails validation.
    pub async fn handle_body(&self, body: &[u8]) -> Result<(), SubmitError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|err| SubmitError::MalformedBody(err.to_string()))?;

        let payload = match value {
            Value::Null => {
                return Err(SubmitError::MalformedBody("request body is null".to_string()));
            }
            Value::Object(_) => serde_json::from_value(value)
                .map_err(|err| SubmitError::MalformedBody(err.to_string()))?,
            _ => SubmissionPayload::default(),
        };
        self.handle(payload).await
    }
}

/// Every way a submission can fail. Each variant is terminal for the request.
#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("e-mail provider API key not configured")]
    MissingCredential,
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
    #[error("request body could not be parsed: {0}")]
    MalformedBody(String),
    #[error("request body could not be read: {0}")]
    UnreadableBody(String),
}

impl SubmitError {
    /// Message returned to the caller. Diagnostic detail stays in the logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            SubmitError::Validation(_) => "Missing required fields",
            SubmitError::MissingCredential => "Server configuration error",
            SubmitError::Delivery(DeliveryError::Rejected { .. }) => "Email send failed",
            SubmitError::Delivery(DeliveryError::Transport(_))
            | SubmitError::MalformedBody(_)
            | SubmitError::UnreadableBody(_) => "Server error",
        }
    }

    pub(crate) fn log(&self) {
        match self {
            SubmitError::Validation(_) => {}
            SubmitError::MissingCredential => error!("SendGrid API key not configured"),
            SubmitError::Delivery(DeliveryError::Rejected { status, body }) => {
                error!(%status, provider_body = %body, "SendGrid error")
            }
            SubmitError::Delivery(DeliveryError::Transport(_))
            | SubmitError::MalformedBody(_)
            | SubmitError::UnreadableBody(_) => error!(error = %self, "submit error"),
        }
    }
}
