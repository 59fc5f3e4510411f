//! src/bin/prerender.rs
//!
//! Runs the static pre-render over the built template: splices the rendered
//! app markup into the root container and synchronizes the document metadata,
//! in one read and write. Any failure aborts with a non-zero exit.
use mycandid::configuration::get_configuration;
use mycandid::telemetry::{get_subscriber, init_subscriber};
use mycandid::{prerender, site};

fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("prerender".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration().expect("Failed to read configuration.");
    let document = config.site.document;

    tracing::info!("Pre-rendering the landing page into {}", document.display());
    prerender::run_with(&document, |template| {
        site::meta::apply(
            &prerender::splice(template, &site::render()),
            &config.site.meta,
        )
    })?;
    tracing::info!("Pre-render complete");

    Ok(())
}
