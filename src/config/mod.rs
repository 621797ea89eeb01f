use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Runtime configuration for the order ingestion service.
///
/// Constructed once at startup and carried in [`crate::AppState`];
/// nothing outside `main` reads the process environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Directory where uploaded order files are persisted (default: "uploads")
    pub upload_dir: PathBuf,

    /// Maximum request body size in bytes (default: 32 MB)
    pub max_upload_size: usize,

    /// Capacity of the in-process job queue (default: 64)
    pub queue_capacity: usize,

    /// Listen address (default: 127.0.0.1:3000)
    pub bind_addr: SocketAddr,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            upload_dir: PathBuf::from("uploads"),
            max_upload_size: 32 * 1024 * 1024, // 32 MB
            queue_capacity: 64,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let default = Self::default();

        Self {
            upload_dir: env::var("UPLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or(default.upload_dir),

            max_upload_size: env::var("MAX_UPLOAD_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.max_upload_size),

            queue_capacity: env::var("JOB_QUEUE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.queue_capacity),

            bind_addr: env::var("BIND_ADDR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.bind_addr),
        }
    }

    /// Create config for development and tests (small limits, ephemeral port)
    pub fn development() -> Self {
        Self {
            upload_dir: PathBuf::from("tmp/uploads"),
            max_upload_size: 8 * 1024 * 1024,
            queue_capacity: 8,
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 0)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.upload_dir, PathBuf::from("uploads"));
        assert_eq!(config.max_upload_size, 32 * 1024 * 1024);
        assert_eq!(config.queue_capacity, 64);
        assert_eq!(config.bind_addr.port(), 3000);
    }

    #[test]
    fn test_development_config() {
        let config = AppConfig::development();
        assert_eq!(config.bind_addr.port(), 0);
        assert!(config.queue_capacity < AppConfig::default().queue_capacity);
    }
}
