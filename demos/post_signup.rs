#[tokio::main]
async fn main() {
    let client = reqwest::Client::new();

    let uuid = uuid::Uuid::new_v4();
    let body = format!("email={}%40mycandid.social&source=demo", uuid);
    let response = client
        .post(&format!("{}/waitlist", "http://localhost:8000"))
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(body)
        .send()
        .await
        .expect("Failed to execute request.");

    println!("{:#?}", response);
}
