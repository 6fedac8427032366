#[tokio::main]
async fn main() -> anyhow::Result<()> {
    swapi_gateway::run_server().await
}
