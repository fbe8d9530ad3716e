use async_trait::async_trait;

use super::FormValues;
use crate::intake::SUBMIT_PATH;

/// Carries one serialized form to the submission endpoint and reports the
/// HTTP status it answered with.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn post(&self, values: &FormValues) -> Result<u16, TransportError>;
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("submission request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// Posts the form as JSON to `{base_url}/api/submit`.
#[derive(Debug, Clone)]
pub struct HttpSubmissionTransport {
    http: reqwest::Client,
    url: String,
}

impl HttpSubmissionTransport {
    pub fn new(base_url: &str) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder().build()?;
        Ok(Self {
            http,
            url: format!("{}{}", base_url.trim_end_matches('/'), SUBMIT_PATH),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl SubmissionTransport for HttpSubmissionTransport {
    async fn post(&self, values: &FormValues) -> Result<u16, TransportError> {
        let response = self.http.post(&self.url).json(values).send().await?;
        Ok(response.status().as_u16())
    }
}
