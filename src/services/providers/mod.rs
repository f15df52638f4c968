/// Poster data provider abstraction
///
/// The enricher only depends on this trait, so the TMDB client can be swapped for another
/// catalog service (or a stub in tests) without touching the recommendation pipeline.
use crate::models::{MovieId, PosterLookup};

pub mod tmdb;

pub use tmdb::TmdbProvider;

/// Trait for poster lookup providers
///
/// Implementations never return an error: every failure mode is folded into
/// [`PosterLookup::LookupFailed`], and a valid answer without an image is
/// [`PosterLookup::NotAvailable`]. Callers still bound each call with a timeout.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PosterProvider: Send + Sync {
    /// Look up the poster path for a movie by its external id
    async fn lookup(&self, movie_id: MovieId) -> PosterLookup;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
