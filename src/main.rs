//! morse-web entry point.
//!
//! No CLI flags, no environment variables: the service always binds `:8080`
//! and writes results into the working directory.

use morse_web::WebServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .init();

    WebServer::new().run().await
}
