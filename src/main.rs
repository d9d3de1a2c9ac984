#[tokio::main]
async fn main() {
    seniorease_server::run().await;
}
