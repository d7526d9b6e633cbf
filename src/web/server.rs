//! Server configuration and the listener loop.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use hyper::server::conn::http1;
use hyper_util::rt::{TokioIo, TokioTimer};
use hyper_util::service::TowerToHyperService;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use super::routes::{self, AppState};
use super::{DEFAULT_BIND, DEFAULT_PORT, DEFAULT_UPLOAD_LIMIT};

/// Server configuration.
///
/// The three timeouts mirror the original service: a header read deadline,
/// a request completion deadline and a whole keep-alive connection deadline.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port to listen on.
    pub port: u16,
    /// Address to bind to.
    pub bind: String,
    /// Maximum accepted request body size in bytes.
    pub upload_limit: usize,
    /// Deadline for reading a request head.
    pub read_timeout: Duration,
    /// Deadline for producing a complete response.
    pub write_timeout: Duration,
    /// Deadline for a whole keep-alive connection.
    pub idle_timeout: Duration,
    /// Directory converted results are written to.
    pub output_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            bind: DEFAULT_BIND.to_string(),
            upload_limit: DEFAULT_UPLOAD_LIMIT,
            read_timeout: Duration::from_secs(5),
            write_timeout: Duration::from_secs(10),
            idle_timeout: Duration::from_secs(15),
            output_dir: PathBuf::from("."),
        }
    }
}

impl ServerConfig {
    /// Set the port to listen on.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Set the address to bind to.
    pub fn with_bind(mut self, bind: impl Into<String>) -> Self {
        self.bind = bind.into();
        self
    }

    /// Set the maximum accepted request body size.
    pub fn with_upload_limit(mut self, limit: usize) -> Self {
        self.upload_limit = limit;
        self
    }

    /// Set the directory converted results are written to.
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Get the socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, std::net::AddrParseError> {
        format!("{}:{}", self.bind, self.port).parse()
    }
}

/// Web server instance.
pub struct WebServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl WebServer {
    /// Create a web server with the default configuration.
    pub fn new() -> Self {
        Self::with_config(ServerConfig::default())
    }

    /// Create a web server with the given configuration.
    pub fn with_config(config: ServerConfig) -> Self {
        let state = AppState {
            output_dir: config.output_dir.clone(),
            ..AppState::new()
        };
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// Get the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Build the two-route router with its layer stack.
    pub fn router(&self) -> Router {
        Router::new()
            .route("/", get(routes::serve_index))
            .route("/upload", post(routes::upload))
            .layer(TraceLayer::new_for_http())
            .layer(TimeoutLayer::new(self.config.write_timeout))
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(self.config.upload_limit))
            .with_state(self.state.clone())
    }

    /// Bind the listener and serve connections until the process exits.
    ///
    /// Bind failures are fatal. Accept and per-connection errors are logged
    /// and the loop continues; no single bad request terminates the server.
    pub async fn run(&self) -> anyhow::Result<()> {
        let addr = self.config.socket_addr()?;
        let listener = tokio::net::TcpListener::bind(addr).await?;
        tracing::info!("Сервер запущен на http://{addr}");

        let service = TowerToHyperService::new(self.router());
        loop {
            let (stream, peer) = match listener.accept().await {
                Ok(conn) => conn,
                Err(err) => {
                    tracing::warn!(error = %err, "accept failed");
                    continue;
                }
            };

            let service = service.clone();
            let read_timeout = self.config.read_timeout;
            let idle_timeout = self.config.idle_timeout;
            tokio::spawn(async move {
                let mut builder = http1::Builder::new();
                builder
                    .timer(TokioTimer::new())
                    .keep_alive(true)
                    .header_read_timeout(read_timeout);

                let conn = builder.serve_connection(TokioIo::new(stream), service);
                match tokio::time::timeout(idle_timeout, conn).await {
                    Ok(Ok(())) => {}
                    Ok(Err(err)) => tracing::debug!(%peer, error = %err, "connection error"),
                    Err(_) => tracing::debug!(%peer, "connection deadline reached"),
                }
            });
        }
    }
}

impl Default for WebServer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults() {
        let config = ServerConfig::default();
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind, "0.0.0.0");
        assert_eq!(config.upload_limit, 10 * 1024 * 1024);
        assert_eq!(config.read_timeout, Duration::from_secs(5));
        assert_eq!(config.write_timeout, Duration::from_secs(10));
        assert_eq!(config.idle_timeout, Duration::from_secs(15));
        assert_eq!(config.output_dir, PathBuf::from("."));
    }

    #[test]
    fn config_builder() {
        let config = ServerConfig::default()
            .with_port(3000)
            .with_bind("127.0.0.1")
            .with_upload_limit(1024)
            .with_output_dir("/tmp");
        assert_eq!(config.port, 3000);
        assert_eq!(config.bind, "127.0.0.1");
        assert_eq!(config.upload_limit, 1024);
        assert_eq!(config.output_dir, PathBuf::from("/tmp"));
    }

    #[test]
    fn socket_addr_parses() {
        let addr = ServerConfig::default().socket_addr().unwrap();
        assert_eq!(addr.port(), 8080);
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
    }

    #[test]
    fn server_exposes_config() {
        let server = WebServer::with_config(ServerConfig::default().with_port(9000));
        assert_eq!(server.config().port, 9000);
    }
}
