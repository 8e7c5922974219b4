#[tokio::main]
async fn main() {
    store_booking::run().await;
}
