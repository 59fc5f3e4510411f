//! tests/api/helpers.rs

use mycandid::configuration::{get_configuration, ResponseMode, Settings, WaitlistSettings};
use mycandid::startup::build;
use mycandid::telemetry::{get_subscriber, init_subscriber};
use mycandid::{prerender, site};
use once_cell::sync::Lazy;
use std::path::PathBuf;
use uuid::Uuid;
use wiremock::MockServer;

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // Set TEST_LOG=true to see logs during tests
    // Use bunyan to format the logs nicely:
    // $ TEST_LOG=true cargo test| bunyan
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber);
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber);
    };
});

const TEMPLATE: &str = r#"<!doctype html>
<html lang="en">
  <head>
    <meta charset="UTF-8">
    <title>MyCandid</title>
  </head>
  <body>
    <div id="root"></div>
  </body>
</html>
"#;

pub struct Test {
    pub address: String,
    pub document: PathBuf,
    pub endpoint_server: MockServer,
}

impl Test {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::get(&format!("{}{}", self.address, path))
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post(&self, path: &str, body: String) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}{}", self.address, path))
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

/// A server wired to a fresh endpoint double and a fresh pre-rendered
/// document.
pub async fn setup() -> Test {
    Lazy::force(&TRACING);

    let endpoint_server = MockServer::start().await;

    let mut config = test_configuration();
    config.set_waitlist_url(endpoint_server.uri());

    boot(config, endpoint_server).await
}

/// A server with no collection endpoint configured at all.
pub async fn setup_unconfigured() -> Test {
    Lazy::force(&TRACING);

    let endpoint_server = MockServer::start().await;

    let mut config = test_configuration();
    config.waitlist = None;

    boot(config, endpoint_server).await
}

/// A server pointed at an arbitrary endpoint URL. The bundled double is
/// started but not wired in.
pub async fn setup_with_endpoint(endpoint_url: String) -> Test {
    Lazy::force(&TRACING);

    let endpoint_server = MockServer::start().await;

    let mut config = test_configuration();
    config.set_waitlist_url(endpoint_url);

    boot(config, endpoint_server).await
}

/// A server whose endpoint double speaks the readable acknowledgement format.
pub async fn setup_readable() -> Test {
    Lazy::force(&TRACING);

    let endpoint_server = MockServer::start().await;

    let mut config = test_configuration();
    config.waitlist = Some(WaitlistSettings {
        endpoint_url: endpoint_server.uri(),
        response_mode: ResponseMode::Readable,
    });

    boot(config, endpoint_server).await
}

pub fn test_configuration() -> Settings {
    let mut config = get_configuration().expect("Failed to read configuration.");
    config.application.port = 0;

    // Every test pre-renders its own uniquely named document.
    let document = std::env::temp_dir().join(format!("{}.html", Uuid::new_v4()));
    std::fs::write(&document, TEMPLATE).expect("Failed to write the landing template.");
    prerender::run(&document, site::render).expect("Failed to pre-render the landing page.");
    config.site.document = document;

    config
}

async fn boot(mut config: Settings, endpoint_server: MockServer) -> Test {
    let document = config.site.document.clone();

    // Launch the server
    let app = build(config.clone()).expect("Failed to build server.");
    let address = format!("http://127.0.0.1:{}", app.port());
    config.application.port = app.port();

    tracing::info!("Test running with the following Settings:\n{:#?}", config);

    // Launch the server as a background task
    let _ = tokio::spawn(app.run());

    Test {
        address,
        document,
        endpoint_server,
    }
}
