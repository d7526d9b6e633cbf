//! HTTP layer: two routes over the codec plus result persistence.
//!
//! `GET /` serves the static upload page, `POST /upload` runs the
//! conversion and writes the result to a timestamp-named file. The core
//! codec has no knowledge of this layer.

mod persistence;
mod routes;
mod server;

pub use persistence::{timestamped_name, write_result, StoreError};
pub use routes::{AppError, AppState};
pub use server::{ServerConfig, WebServer};

/// Default server port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default bind address.
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// Maximum accepted upload body size in bytes (10 MiB).
pub const DEFAULT_UPLOAD_LIMIT: usize = 10 * 1024 * 1024;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_constants() {
        assert_eq!(DEFAULT_PORT, 8080);
        assert_eq!(DEFAULT_BIND, "0.0.0.0");
        assert_eq!(DEFAULT_UPLOAD_LIMIT, 10 * 1024 * 1024);
    }
}
