use super::common::*;
use axum::http::StatusCode;
use serde_json::json;

use crate::config::MailConfig;
use crate::intake::domain::{ValidationError, REQUIRED_FIELDS};
use crate::intake::provider::DeliveryError;
use crate::intake::SubmitError;

#[tokio::test]
async fn delivers_one_email_for_complete_submission() {
    let (service, provider) = build_service(RecordingProvider::default());

    service
        .handle(payload(ada_body()))
        .await
        .expect("submission delivered");

    let sent = provider.sent();
    assert_eq!(sent.len(), 1);
    let (api_key, email) = &sent[0];
    assert_eq!(api_key, "SG.test-key");
    assert_eq!(
        email.subject,
        "[DDR Governance Testing] Application from Ada at Acme"
    );
    assert_eq!(email.to, "decisionloop@getdigdev.com");
    assert_eq!(email.from, "contact@getdigdev.com");
    for section in [
        "=== APPLICANT INFO ===",
        "=== USE CASE ===\nloan approval",
        "=== SAFETY REQUIREMENTS ===\nNot provided",
        "=== CURRENT CHALLENGES ===\nNot provided",
    ] {
        assert!(email.body.contains(section), "missing section {section}");
    }
    assert!(email.body.contains("Regulated Industry: No"));
}

#[tokio::test]
async fn each_missing_required_field_blocks_delivery() {
    for field in REQUIRED_FIELDS {
        let (service, provider) = build_service(RecordingProvider::default());

        let err = service
            .handle(payload(without(ada_body(), field)))
            .await
            .expect_err("incomplete submission rejected");

        assert!(matches!(
            err,
            SubmitError::Validation(ValidationError::MissingFields(ref fields)) if fields == &vec![field]
        ));
        assert_eq!(err.public_message(), "Missing required fields");
        assert!(provider.sent().is_empty(), "{field} missing but e-mail sent");
    }
}

#[tokio::test]
async fn validation_runs_before_credential_check() {
    let (service, provider) =
        build_service_with(MailConfig::new(None), RecordingProvider::default());

    let err = service
        .handle(payload(json!({ "name": "Ada" })))
        .await
        .expect_err("incomplete submission rejected");

    assert!(matches!(err, SubmitError::Validation(_)));
    assert!(provider.sent().is_empty());
}

#[tokio::test]
async fn missing_credential_is_reported_without_outbound_call() {
    let (service, provider) =
        build_service_with(MailConfig::new(None), RecordingProvider::default());

    for _ in 0..2 {
        let err = service
            .handle(payload(ada_body()))
            .await
            .expect_err("credential required");
        assert!(matches!(err, SubmitError::MissingCredential));
        assert_eq!(err.public_message(), "Server configuration error");
    }

    assert!(provider.sent().is_empty());
}

#[tokio::test]
async fn provider_rejection_maps_to_send_failure_without_retry() {
    let (service, provider) = build_service(RecordingProvider::rejecting(StatusCode::FORBIDDEN));

    let err = service
        .handle(payload(ada_body()))
        .await
        .expect_err("provider rejection surfaces");

    assert!(matches!(
        err,
        SubmitError::Delivery(DeliveryError::Rejected { .. })
    ));
    assert_eq!(err.public_message(), "Email send failed");
    assert_eq!(provider.sent().len(), 1);
}

#[tokio::test]
async fn unreachable_provider_maps_to_generic_error() {
    let (service, provider) = build_service(RecordingProvider::unreachable());

    let err = service
        .handle(payload(ada_body()))
        .await
        .expect_err("transport failure surfaces");

    assert_eq!(err.public_message(), "Server error");
    assert_eq!(provider.sent().len(), 1);
}

#[tokio::test]
async fn optional_fields_are_interpolated_verbatim() {
    let (service, provider) = build_service(RecordingProvider::default());
    let mut body = ada_body();
    body["regulatedIndustry"] = json!(true);
    body["safetyRequirements"] = json!("Credit decisions are regulated");
    body["currentChallenges"] = json!("No audit trail");

    service.handle(payload(body)).await.expect("delivered");

    let (_, email) = provider.sent().pop().expect("one e-mail");
    assert!(email.body.contains("Regulated Industry: Yes"));
    assert!(email
        .body
        .contains("=== SAFETY REQUIREMENTS ===\nCredit decisions are regulated"));
    assert!(email
        .body
        .contains("=== CURRENT CHALLENGES ===\nNo audit trail"));
}

#[tokio::test]
async fn configured_sender_is_used_as_from_address() {
    let mut config = mail_config();
    config.from_email = "apply@example.com".to_string();
    let (service, provider) = build_service_with(config, RecordingProvider::default());

    service.handle(payload(ada_body())).await.expect("delivered");

    let (_, email) = provider.sent().pop().expect("one e-mail");
    assert_eq!(email.from, "apply@example.com");
    assert_eq!(email.reply_to.email, "ada@x.com");
}

#[tokio::test]
async fn unparsable_body_is_a_server_error() {
    let (service, provider) = build_service(RecordingProvider::default());

    let err = service
        .handle_body(b"{not json")
        .await
        .expect_err("malformed body rejected");

    assert!(matches!(err, SubmitError::MalformedBody(_)));
    assert_eq!(err.public_message(), "Server error");
    assert!(provider.sent().is_empty());
}

#[tokio::test]
async fn null_body_is_a_server_error() {
    let (service, provider) = build_service(RecordingProvider::default());

    let err = service
        .handle_body(b"null")
        .await
        .expect_err("null body rejected");

    assert!(matches!(err, SubmitError::MalformedBody(_)));
    assert_eq!(err.public_message(), "Server error");
    assert!(provider.sent().is_empty());
}

#[tokio::test]
async fn scalar_and_array_bodies_fail_validation() {
    let (service, provider) = build_service(RecordingProvider::default());

    for body in [&b"\"hello\""[..], b"5", b"true", b"[]"] {
        let err = service
            .handle_body(body)
            .await
            .expect_err("fieldless body rejected");

        assert!(
            matches!(err, SubmitError::Validation(_)),
            "unexpected error for {}: {err:?}",
            String::from_utf8_lossy(body)
        );
    }
    assert!(provider.sent().is_empty());
}
