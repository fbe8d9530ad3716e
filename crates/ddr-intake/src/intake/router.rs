use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::json;

use super::provider::EmailProvider;
use super::service::{SubmissionService, SubmitError};

pub const SUBMIT_PATH: &str = "/api/submit";

/// Router exposing the lead-capture submission endpoint.
pub fn submission_router<P>(service: Arc<SubmissionService<P>>) -> Router
where
    P: EmailProvider + 'static,
{
    Router::new()
        .route(SUBMIT_PATH, post(submit_handler::<P>))
        .with_state(service)
}

pub(crate) async fn submit_handler<P>(
    State(service): State<Arc<SubmissionService<P>>>,
    body: Result<Bytes, BytesRejection>,
) -> Response
where
    P: EmailProvider + 'static,
{
    let body = match body {
        Ok(body) => body,
        Err(rejection) => {
            return SubmitError::UnreadableBody(rejection.body_text()).into_response();
        }
    };

    match service.handle_body(&body).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "success": true }))).into_response(),
        Err(err) => err.into_response(),
    }
}

impl IntoResponse for SubmitError {
    fn into_response(self) -> Response {
        self.log();

        let status = match self {
            SubmitError::Validation(_) => StatusCode::BAD_REQUEST,
            SubmitError::MissingCredential
            | SubmitError::Delivery(_)
            | SubmitError::MalformedBody(_)
            | SubmitError::UnreadableBody(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.public_message() }));
        (status, body).into_response()
    }
}
