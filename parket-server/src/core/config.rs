use std::path::{Path, PathBuf};

/// Server configuration.
///
/// # Environment variables
///
/// Every field can be overridden through the environment:
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | /var/lib/parket | Working directory (database, logs) |
/// | HTTP_PORT | 3000 | HTTP API port |
/// | ENVIRONMENT | development | Runtime environment |
/// | LOG_LEVEL | info | Log level filter |
/// | LOG_DIR | (unset) | Daily-rolling log files, stdout only when unset |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/data/parket HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Working directory holding the embedded database and log files
    pub work_dir: String,
    /// HTTP API port
    pub http_port: u16,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Log level filter, `RUST_LOG` syntax
    pub log_level: Option<String>,
    /// Directory for daily-rolling log files
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Unset variables fall back to their defaults.
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "/var/lib/parket".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").ok(),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Override work dir and port on top of the environment values.
    ///
    /// Mostly used by tests.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config
    }

    /// Directory holding the embedded database files
    pub fn database_dir(&self) -> PathBuf {
        Path::new(&self.work_dir).join("database")
    }

    /// Create the working directory tree if it does not exist yet
    pub fn ensure_work_dir_structure(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.work_dir)?;
        std::fs::create_dir_all(self.database_dir())?;
        if let Some(dir) = &self.log_dir {
            std::fs::create_dir_all(dir)?;
        }
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_replace_work_dir_and_port() {
        let config = Config::with_overrides("/tmp/parket-test", 4321);
        assert_eq!(config.work_dir, "/tmp/parket-test");
        assert_eq!(config.http_port, 4321);
    }

    #[test]
    fn database_dir_lives_under_work_dir() {
        let config = Config::with_overrides("/tmp/parket-test", 3000);
        assert_eq!(
            config.database_dir(),
            PathBuf::from("/tmp/parket-test/database")
        );
    }

    #[test]
    fn environment_checks() {
        let mut config = Config::with_overrides("/tmp/parket-test", 3000);
        config.environment = "production".into();
        assert!(config.is_production());
        assert!(!config.is_development());

        config.environment = "development".into();
        assert!(config.is_development());
    }

    #[test]
    fn ensure_work_dir_structure_creates_directories() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("parket");
        let config = Config::with_overrides(root.to_string_lossy().to_string(), 3000);

        config.ensure_work_dir_structure().unwrap();

        assert!(root.is_dir());
        assert!(root.join("database").is_dir());
    }
}
