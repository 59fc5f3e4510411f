//! src/startup.rs
use crate::configuration::Settings;
use crate::routes::{health_check, home, join_waitlist};
use crate::waitlist::WaitlistClient;
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::net::TcpListener;
use tracing_actix_web::TracingLogger;

/// The pre-rendered landing document, loaded once at startup and shared
/// read-only across workers.
pub struct LandingPage(pub String);

pub struct Application {
    port: u16,
    server: Server,
}

impl std::fmt::Debug for Application {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `Server` has no `Debug` impl, so only the port is shown.
        f.debug_struct("Application")
            .field("port", &self.port)
            .finish_non_exhaustive()
    }
}

impl Application {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }
}

pub fn build(config: Settings) -> Result<Application, anyhow::Error> {
    let address = format!("{}:{}", config.application.host, config.application.port);
    let tcp_listener =
        TcpListener::bind(&address).with_context(|| format!("Failed to bind {}", address))?;
    let port = tcp_listener.local_addr()?.port();

    let document = std::fs::read_to_string(&config.site.document).with_context(|| {
        format!(
            "Failed to read the landing document at {}. Run the prerender binary first.",
            config.site.document.display()
        )
    })?;
    let client = WaitlistClient::new(config.waitlist);

    let server = run(tcp_listener, client, LandingPage(document))?;

    Ok(Application { port, server })
}

pub fn run(
    listener: TcpListener,
    client: WaitlistClient,
    page: LandingPage,
) -> Result<Server, std::io::Error> {
    let client = web::Data::new(client);
    let page = web::Data::new(page);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .route("/health_check", web::get().to(health_check))
            .route("/waitlist", web::post().to(join_waitlist))

            // serving HTML files
            .route("/", web::get().to(home))

            .app_data(client.clone())
            .app_data(page.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
