use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> appinfo::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    appinfo::run().await
}
