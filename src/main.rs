use anyhow::Result;
use climatediff::config::ClimateDiffConfig;
use climatediff::web;
use tracing_subscriber::EnvFilter;

fn init_tracing(config: &ClimateDiffConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .json()
            .init(),
        _ => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let config = ClimateDiffConfig::load()?;
    init_tracing(&config);

    web::run(config).await
}
