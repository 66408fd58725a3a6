//! Textlens - HTTP NLP analysis service binary.

use textlens::ServiceConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Pick up a local .env if present
    dotenvy::dotenv().ok();

    let config = ServiceConfig::load()?;
    textlens::start_server(config).await?;

    Ok(())
}
