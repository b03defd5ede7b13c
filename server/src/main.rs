#[tokio::main]
async fn main() -> anyhow::Result<()> {
    potluck_server::start_server().await
}
