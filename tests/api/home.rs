//! tests/api/home.rs

use crate::helpers::{setup, test_configuration};
use claims::assert_err;
use mycandid::startup::build;

#[tokio::test]
async fn the_landing_page_is_served_as_html() {
    // Arrange
    let test = setup().await;

    // Act
    let response = test.get("/").await;

    // Assert
    assert!(response.status().is_success());
    let content_type = response
        .headers()
        .get("content-type")
        .expect("No content-type header.")
        .to_str()
        .unwrap();
    assert!(content_type.starts_with("text/html"));
}

#[tokio::test]
async fn the_landing_page_carries_the_pre_rendered_markup() {
    // Arrange
    let test = setup().await;

    // Act
    let html = test
        .get("/")
        .await
        .text()
        .await
        .expect("Failed to read the response body.");

    // Assert
    assert!(html.contains(r#"<div id="root"><header class="sr-only">"#));
    assert!(html.contains("MyCandid: Authentic Social Media Platform"));
    assert!(html.contains(r#"value="hero-form""#));
    assert!(html.contains(r#"value="cta-form""#));
    // The body is the pre-rendered document, byte for byte.
    let stored =
        std::fs::read_to_string(&test.document).expect("Failed to read the landing document.");
    assert_eq!(stored, html);
}

#[test]
fn startup_fails_with_a_hint_when_the_landing_document_is_missing() {
    // Arrange
    let config = test_configuration();
    let document = config.site.document.clone();
    std::fs::remove_file(&document).expect("Failed to remove the landing document.");

    // Act
    let error = assert_err!(build(config));

    // Assert
    let message = error.to_string();
    assert!(
        message.contains(&document.display().to_string()),
        "The error does not name the missing document: {message}"
    );
    assert!(
        message.contains("Run the prerender binary first"),
        "The error does not point at the pre-render step: {message}"
    );
}
