use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

use crate::services::{ranker::DEFAULT_RECOMMENDATION_COUNT, PosterSettings};

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Path to the catalog artifact (JSON array of movie records)
    #[serde(default = "default_catalog_path")]
    pub catalog_path: PathBuf,

    /// Path to the similarity artifact (JSON N x N matrix)
    #[serde(default = "default_similarity_path")]
    pub similarity_path: PathBuf,

    /// TMDB API key
    pub tmdb_api_key: String,

    /// TMDB API base URL
    #[serde(default = "default_tmdb_api_url")]
    pub tmdb_api_url: String,

    /// Base URL that poster paths are appended to
    #[serde(default = "default_poster_image_base_url")]
    pub poster_image_base_url: String,

    /// Poster shown when TMDB has no image for a movie
    #[serde(default = "default_poster_placeholder_url")]
    pub poster_placeholder_url: String,

    /// Poster shown when the lookup failed
    #[serde(default = "default_poster_error_url")]
    pub poster_error_url: String,

    /// Timeout for a single poster lookup, in milliseconds
    #[serde(default = "default_poster_timeout_ms")]
    pub poster_timeout_ms: u64,

    /// Number of recommendations returned per title
    #[serde(default = "default_recommendation_count")]
    pub recommendation_count: usize,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_catalog_path() -> PathBuf {
    PathBuf::from("data/catalog.json")
}

fn default_similarity_path() -> PathBuf {
    PathBuf::from("data/similarity.json")
}

fn default_tmdb_api_url() -> String {
    "https://api.themoviedb.org".to_string()
}

fn default_poster_image_base_url() -> String {
    "https://image.tmdb.org/t/p/w500".to_string()
}

fn default_poster_placeholder_url() -> String {
    "https://via.placeholder.com/500x750?text=No+Image".to_string()
}

fn default_poster_error_url() -> String {
    "https://via.placeholder.com/500x750?text=Error".to_string()
}

fn default_poster_timeout_ms() -> u64 {
    5000
}

fn default_recommendation_count() -> usize {
    DEFAULT_RECOMMENDATION_COUNT
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects settings that would produce empty poster URLs or unbounded lookups
    pub fn validate(&self) -> anyhow::Result<()> {
        let urls = [
            ("POSTER_IMAGE_BASE_URL", &self.poster_image_base_url),
            ("POSTER_PLACEHOLDER_URL", &self.poster_placeholder_url),
            ("POSTER_ERROR_URL", &self.poster_error_url),
        ];
        for (name, value) in urls {
            if value.trim().is_empty() {
                anyhow::bail!("{} must not be empty", name);
            }
        }

        if self.poster_timeout_ms == 0 {
            anyhow::bail!("POSTER_TIMEOUT_MS must be greater than zero");
        }

        if self.recommendation_count == 0 {
            anyhow::bail!("RECOMMENDATION_COUNT must be greater than zero");
        }

        Ok(())
    }

    pub fn poster_timeout(&self) -> Duration {
        Duration::from_millis(self.poster_timeout_ms)
    }

    pub fn poster_settings(&self) -> PosterSettings {
        PosterSettings {
            image_base_url: self.poster_image_base_url.clone(),
            placeholder_url: self.poster_placeholder_url.clone(),
            error_url: self.poster_error_url.clone(),
            timeout: self.poster_timeout(),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
