//! tests/api/waitlist.rs

use crate::helpers::{setup, setup_readable, setup_unconfigured, setup_with_endpoint};
use mycandid::waitlist::{SubmissionResult, CONFIG_ERROR, INVALID_EMAIL};
use wiremock::matchers::{any, method};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn a_valid_signup_returns_a_200_and_is_forwarded() {
    // Arrange
    let test = setup().await;

    Mock::given(any())
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test.endpoint_server)
        .await;

    // Act
    let body = "email=Ursula.Le.Guin%40Gmail.COM&source=hero-form";
    let response = test.post("/waitlist", body.into()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());

    let result: SubmissionResult = response.json().await.expect("Failed to parse the response.");
    assert!(result.success);
    assert_eq!(result.message, "Successfully added to waitlist!");

    let requests = test.endpoint_server.received_requests().await.unwrap();
    let forwarded: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(forwarded["email"], "ursula.le.guin@gmail.com");
    assert_eq!(forwarded["source"], "hero-form");
}

#[tokio::test]
async fn the_source_defaults_to_website_when_missing() {
    // Arrange
    let test = setup().await;

    Mock::given(any())
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&test.endpoint_server)
        .await;

    // Act
    let response = test.post("/waitlist", "email=ursula%40gmail.com".into()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());

    let requests = test.endpoint_server.received_requests().await.unwrap();
    let forwarded: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(forwarded["source"], "website");
}

#[tokio::test]
async fn an_invalid_email_returns_a_400_and_nothing_is_sent() {
    // Arrange
    let test = setup().await;

    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&test.endpoint_server)
        .await;

    let test_cases = vec![
        ("email=", "an empty email"),
        ("email=not-an-email", "no at sign"),
        ("email=ursula%40gmail", "no dot after the at sign"),
        ("email=ursula%40gmail.c", "a single character suffix"),
    ];

    for (body, description) in test_cases {
        // Act
        let response = test.post("/waitlist", body.into()).await;

        // Assert
        assert_eq!(
            400,
            response.status().as_u16(),
            // Additional customised error message on test failure
            "The API did not fail with 400 Bad Request when the payload had {}.",
            description
        );

        let result: SubmissionResult = response.json().await.unwrap();
        assert!(!result.success);
        assert_eq!(result.error.as_deref(), Some(INVALID_EMAIL));
        assert_eq!(result.message, "Please enter a valid email address");
    }
}

#[tokio::test]
async fn a_payload_without_an_email_field_returns_a_400() {
    // Arrange
    let test = setup().await;

    // Act
    let response = test.post("/waitlist", "source=hero-form".into()).await;

    // Assert
    assert_eq!(400, response.status().as_u16());
}

#[tokio::test]
async fn a_missing_endpoint_configuration_returns_a_500() {
    // Arrange
    let test = setup_unconfigured().await;

    // Act
    let response = test.post("/waitlist", "email=ursula%40gmail.com".into()).await;

    // Assert
    assert_eq!(500, response.status().as_u16());

    let result: SubmissionResult = response.json().await.unwrap();
    assert!(!result.success);
    assert_eq!(result.error.as_deref(), Some(CONFIG_ERROR));
    assert_eq!(
        result.message,
        "Service configuration error. Please try again later."
    );
    assert!(test
        .endpoint_server
        .received_requests()
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn an_unreachable_endpoint_returns_a_502() {
    // Arrange: an address that refuses connections, found by binding a port
    // and freeing it again.
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let test = setup_with_endpoint(format!("http://127.0.0.1:{}", port)).await;

    // Act
    let response = test.post("/waitlist", "email=ursula%40gmail.com".into()).await;

    // Assert
    assert_eq!(502, response.status().as_u16());

    let result: SubmissionResult = response.json().await.unwrap();
    assert!(!result.success);
    assert_eq!(result.message, "Unable to submit. Please try again later.");
    assert!(result.error.is_some());
}

#[tokio::test]
async fn a_remote_failure_is_invisible_in_opaque_mode() {
    // Arrange
    let test = setup().await;

    Mock::given(any())
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&test.endpoint_server)
        .await;

    // Act
    let response = test.post("/waitlist", "email=ursula%40gmail.com".into()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());

    let result: SubmissionResult = response.json().await.unwrap();
    assert!(result.success);
}

#[tokio::test]
async fn a_remote_rejection_in_readable_mode_stays_a_200() {
    // Arrange
    let test = setup_readable().await;

    Mock::given(any())
        .and(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": false,
            "message": "Email already registered"
        })))
        .expect(1)
        .mount(&test.endpoint_server)
        .await;

    // Act
    let response = test.post("/waitlist", "email=ursula%40gmail.com".into()).await;

    // Assert
    assert_eq!(200, response.status().as_u16());

    let result: SubmissionResult = response.json().await.unwrap();
    assert!(!result.success);
    assert_eq!(result.message, "Email already registered");
    assert_eq!(result.error, None);
}
