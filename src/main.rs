use mycandid::configuration::get_configuration;
use mycandid::startup::build;
use mycandid::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("mycandid".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_configuration().expect("Failed to read configuration.");
    let app = build(config)?;
    app.run().await?;

    Ok(())
}
