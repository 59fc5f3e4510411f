use mycandid::configuration::get_configuration;
use mycandid::waitlist::WaitlistClient;

#[tokio::main]
async fn main() {
    let config = get_configuration().expect("Failed to read configuration.");
    let client = WaitlistClient::new(config.waitlist);

    let result = client.submit("demo@mycandid.social", "demo").await;

    println!("{:#?}", result);
}
