use canrev_calc::contact::{handle_form_submission, ContactSubmission, HttpSubmissionGateway};
use canrev_calc::domain::ports::SubmissionGateway;
use canrev_calc::CalcError;
use httpmock::prelude::*;

fn submission(email: &str) -> ContactSubmission {
    ContactSubmission {
        first_name: "Ana".to_string(),
        last_name: "Silva".to_string(),
        email: email.to_string(),
        phone: Some("+351 912 345 678".to_string()),
        message: "Can we book a demo next week?".to_string(),
    }
}

#[tokio::test]
async fn test_gateway_posts_urlencoded_form() {
    let server = MockServer::start();
    let form_mock = server.mock(|when, then| {
        when.method(POST)
            .path("/.netlify/functions/form-submission")
            .header("content-type", "application/x-www-form-urlencoded")
            .body_contains("form-name=contact-form")
            .body_contains("firstName=Ana")
            .body_contains("email=ana%40example.com");
        then.status(200)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "success": true }));
    });

    let gateway = HttpSubmissionGateway::new(server.url("/.netlify/functions/form-submission")).unwrap();
    let receipt = gateway.submit(&submission("ana@example.com")).await.unwrap();

    form_mock.assert();
    assert_eq!(receipt.status, 200);
}

#[tokio::test]
async fn test_gateway_reports_server_error_message() {
    let server = MockServer::start();
    let form_mock = server.mock(|when, then| {
        when.method(POST).path("/submit");
        then.status(400)
            .header("Content-Type", "application/json")
            .json_body(serde_json::json!({ "error": "Missing required fields" }));
    });

    let gateway = HttpSubmissionGateway::new(server.url("/submit")).unwrap();
    let err = gateway.submit(&submission("ana@example.com")).await.unwrap_err();

    form_mock.assert();
    match err {
        CalcError::SubmissionError { status, message } => {
            assert_eq!(status, 400);
            assert_eq!(message, "Missing required fields");
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[tokio::test]
async fn test_gateway_rejects_bad_email_without_sending() {
    let server = MockServer::start();
    let form_mock = server.mock(|when, then| {
        when.method(POST).path("/submit");
        then.status(200);
    });

    let gateway = HttpSubmissionGateway::new(server.url("/submit")).unwrap();
    let err = gateway.submit(&submission("ana.example.com")).await.unwrap_err();

    assert!(matches!(err, CalcError::ValidationError { .. }));
    form_mock.assert_hits(0);
}

#[test]
fn test_client_encoding_is_accepted_by_handler() {
    let encoded = submission("ana@example.com").to_urlencoded();
    let response = handle_form_submission("POST", encoded.as_bytes());

    assert_eq!(response.status, 200);
    assert_eq!(response.body, r#"{"success":true}"#);
}
