//! TMDB poster provider
//!
//! Resolves posters through the movie details endpoint:
//! `GET {api_url}/3/movie/{movie_id}?api_key=...&language=en-US`
//!
//! Only `poster_path` is read from the response. The enricher turns that relative path
//! into a full image URL.
use crate::{
    error::{AppError, AppResult},
    models::{MovieId, PosterLookup, TmdbMovieDetails},
    services::providers::PosterProvider,
};
use reqwest::{Client as HttpClient, StatusCode};
use std::time::Duration;

const LANGUAGE: &str = "en-US";

#[derive(Clone)]
pub struct TmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl TmdbProvider {
    /// Creates a provider whose requests give up after `timeout`
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn details_url(&self, movie_id: MovieId) -> String {
        format!("{}/3/movie/{}", self.api_url, movie_id)
    }

    /// Fetches movie details; `Ok(None)` means TMDB has no such movie
    ///
    /// Transport errors are stripped of their URL, which carries the API key.
    async fn fetch_details(&self, movie_id: MovieId) -> AppResult<Option<TmdbMovieDetails>> {
        let response = self
            .http_client
            .get(self.details_url(movie_id))
            .query(&[("api_key", self.api_key.as_str()), ("language", LANGUAGE)])
            .send()
            .await
            .map_err(|e| AppError::HttpClient(e.without_url()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TMDB API returned status {}: {}",
                status, body
            )));
        }

        let response_text = response
            .text()
            .await
            .map_err(|e| AppError::HttpClient(e.without_url()))?;
        let details: TmdbMovieDetails = serde_json::from_str(&response_text).map_err(|e| {
            tracing::debug!(
                error = %e,
                response = %response_text,
                "Failed to deserialize TMDB response"
            );
            AppError::ExternalApi(format!("Failed to parse TMDB response: {}", e))
        })?;

        Ok(Some(details))
    }
}

#[async_trait::async_trait]
impl PosterProvider for TmdbProvider {
    async fn lookup(&self, movie_id: MovieId) -> PosterLookup {
        match self.fetch_details(movie_id).await {
            Ok(Some(details)) => {
                let lookup = details.into_lookup();
                tracing::debug!(
                    movie_id,
                    outcome = %lookup,
                    provider = "tmdb",
                    "Poster lookup completed"
                );
                lookup
            }
            Ok(None) => {
                tracing::debug!(movie_id, provider = "tmdb", "Movie not found on TMDB");
                PosterLookup::NotAvailable
            }
            Err(e) => PosterLookup::LookupFailed(e.to_string()),
        }
    }

    fn name(&self) -> &'static str {
        "tmdb"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_provider(api_url: &str) -> TmdbProvider {
        TmdbProvider::new(
            "test_key".to_string(),
            api_url.to_string(),
            Duration::from_secs(1),
        )
        .unwrap()
    }

    #[test]
    fn test_details_url() {
        let provider = create_test_provider("https://api.themoviedb.org");
        assert_eq!(
            provider.details_url(19995),
            "https://api.themoviedb.org/3/movie/19995"
        );
    }

    #[test]
    fn test_details_url_trailing_slash() {
        let provider = create_test_provider("http://test.local/");
        assert_eq!(provider.details_url(285), "http://test.local/3/movie/285");
    }

    #[tokio::test]
    async fn test_lookup_unreachable_host_fails() {
        // Port 9 (discard) on localhost is not expected to accept HTTP connections
        let provider = create_test_provider("http://127.0.0.1:9");
        let outcome = provider.lookup(19995).await;
        assert!(matches!(outcome, PosterLookup::LookupFailed(_)));
    }

    #[tokio::test]
    async fn test_lookup_failure_reason_hides_api_key() {
        let provider = TmdbProvider::new(
            "SECRET_KEY_123".to_string(),
            "http://127.0.0.1:9".to_string(),
            Duration::from_millis(500),
        )
        .unwrap();

        match provider.lookup(19995).await {
            PosterLookup::LookupFailed(reason) => {
                assert!(!reason.contains("SECRET_KEY_123"), "reason: {}", reason);
                assert!(!reason.contains("api_key"), "reason: {}", reason);
            }
            other => panic!("expected a failed lookup, got {:?}", other),
        }
    }
}
