use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::StatusCode;
use axum::response::Response;
use serde_json::{json, Value};

use crate::config::MailConfig;
use crate::intake::domain::SubmissionPayload;
use crate::intake::email::OutboundEmail;
use crate::intake::provider::{DeliveryError, EmailProvider};
use crate::intake::SubmissionService;

/// Provider double recording every message it is asked to send.
#[derive(Default)]
pub(super) struct RecordingProvider {
    sent: Mutex<Vec<(String, OutboundEmail)>>,
    reject_with: Option<StatusCode>,
    unreachable: bool,
}

impl RecordingProvider {
    pub(super) fn rejecting(status: StatusCode) -> Self {
        Self {
            reject_with: Some(status),
            ..Self::default()
        }
    }

    pub(super) fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub(super) fn sent(&self) -> Vec<(String, OutboundEmail)> {
        self.sent.lock().expect("provider mutex poisoned").clone()
    }
}

#[async_trait]
impl EmailProvider for RecordingProvider {
    async fn send(&self, api_key: &str, email: &OutboundEmail) -> Result<(), DeliveryError> {
        self.sent
            .lock()
            .expect("provider mutex poisoned")
            .push((api_key.to_string(), email.clone()));

        if self.unreachable {
            return Err(DeliveryError::Transport("connection refused".to_string()));
        }
        if let Some(status) = self.reject_with {
            return Err(DeliveryError::Rejected {
                status: reqwest::StatusCode::from_u16(status.as_u16()).expect("valid status"),
                body: r#"{"errors":[{"message":"forbidden"}]}"#.to_string(),
            });
        }
        Ok(())
    }
}

pub(super) fn mail_config() -> MailConfig {
    MailConfig::new(Some("SG.test-key".to_string()))
}

pub(super) fn build_service(
    provider: RecordingProvider,
) -> (Arc<SubmissionService<RecordingProvider>>, Arc<RecordingProvider>) {
    build_service_with(mail_config(), provider)
}

pub(super) fn build_service_with(
    config: MailConfig,
    provider: RecordingProvider,
) -> (Arc<SubmissionService<RecordingProvider>>, Arc<RecordingProvider>) {
    let provider = Arc::new(provider);
    let service = Arc::new(SubmissionService::new(config, provider.clone()));
    (service, provider)
}

pub(super) fn ada_body() -> Value {
    json!({
        "name": "Ada",
        "email": "ada@x.com",
        "company": "Acme",
        "role": "engineering",
        "useCase": "loan approval",
    })
}

pub(super) fn payload(body: Value) -> SubmissionPayload {
    serde_json::from_value(body).expect("payload deserializes")
}

pub(super) fn without(mut body: Value, field: &str) -> Value {
    body.as_object_mut()
        .expect("object payload")
        .remove(field);
    body
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
