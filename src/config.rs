use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,

    pub server: ServerConfig,

    pub fixtures: FixtureConfig,

    pub sentiment: SentimentConfig,

    pub observability: ObservabilityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub database_path: String,

    pub log_level: String,

    /// Number of tokio worker threads (default: 2)
    /// Set to 0 to use the number of CPU cores
    pub worker_threads: usize,

    /// Maximum database connections (default: 5)
    pub max_db_connections: u32,

    /// Minimum database connections (default: 1)
    pub min_db_connections: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            database_path: "sqlite:data/dealership.db".to_string(),
            log_level: "info".to_string(),
            worker_threads: 2,
            max_db_connections: 5,
            min_db_connections: 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub enabled: bool,

    pub port: u16,

    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            port: 3030,
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

/// Locations of the JSON fixtures the collections are seeded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FixtureConfig {
    pub dealerships_path: String,

    pub reviews_path: String,

    pub cars_path: String,

    /// Drop and reload every collection from the fixtures when the server starts.
    pub seed_on_startup: bool,
}

impl Default for FixtureConfig {
    fn default() -> Self {
        Self {
            dealerships_path: "data/dealerships.json".to_string(),
            reviews_path: "data/reviews.json".to_string(),
            cars_path: "data/car_records.json".to_string(),
            seed_on_startup: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentConfig {
    /// When disabled every review is reported as neutral.
    pub enabled: bool,

    pub url: String,

    pub request_timeout_seconds: u64,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            url: "http://localhost:5050/analyze".to_string(),
            request_timeout_seconds: 10,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    pub metrics_enabled: bool,

    pub loki_enabled: bool,

    pub loki_url: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            metrics_enabled: true,
            loki_enabled: false,
            loki_url: "http://localhost:3100".to_string(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let paths = Self::config_paths();

        for path in &paths {
            if path.exists() {
                info!("Loading config from: {}", path.display());
                return Self::load_from_path(path);
            }
        }

        info!("No config file found, using defaults");
        Ok(Self::default())
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Config saved to: {}", path.display());
        Ok(())
    }

    fn config_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from("config.toml")];

        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join("dealership").join("config.toml"));
        }

        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".dealership").join("config.toml"));
        }

        paths
    }

    fn default_config_path() -> PathBuf {
        PathBuf::from("config.toml")
    }

    pub fn create_default_if_missing() -> Result<bool> {
        let path = Self::default_config_path();
        if path.exists() {
            Ok(false)
        } else {
            let config = Self::default();
            config.save_to_path(&path)?;
            info!("Created default config file: {}", path.display());
            Ok(true)
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.server.enabled && self.server.port == 0 {
            anyhow::bail!("Server port cannot be 0 when the server is enabled");
        }

        if self.fixtures.seed_on_startup {
            let fixtures = [
                ("dealerships_path", &self.fixtures.dealerships_path),
                ("reviews_path", &self.fixtures.reviews_path),
                ("cars_path", &self.fixtures.cars_path),
            ];
            for (name, path) in fixtures {
                if path.trim().is_empty() {
                    anyhow::bail!("fixtures.{name} cannot be empty when seeding on startup");
                }
            }
        }

        if self.sentiment.enabled && self.sentiment.url.trim().is_empty() {
            anyhow::bail!("Sentiment analyzer URL cannot be empty when enabled");
        }

        if self.general.min_db_connections > self.general.max_db_connections {
            anyhow::bail!(
                "min_db_connections ({}) cannot exceed max_db_connections ({})",
                self.general.min_db_connections,
                self.general.max_db_connections
            );
        }

        Ok(())
    }

    #[must_use]
    pub fn fixture_paths(&self) -> crate::db::FixturePaths {
        crate::db::FixturePaths {
            dealerships: PathBuf::from(&self.fixtures.dealerships_path),
            reviews: PathBuf::from(&self.fixtures.reviews_path),
            cars: PathBuf::from(&self.fixtures.cars_path),
        }
    }
}
