use std::sync::Arc;
use std::time::Duration;

use crate::{
    error::{AppError, AppResult},
    models::{Catalog, DisplayRecord, PosterLookup, ScoredCandidate},
    services::providers::PosterProvider,
};

/// How poster lookups are bounded and turned into URLs
#[derive(Debug, Clone)]
pub struct PosterSettings {
    /// Prefix joined with the provider's relative poster path
    pub image_base_url: String,
    /// Used when the provider has no image for the movie
    pub placeholder_url: String,
    /// Used when the lookup failed or timed out
    pub error_url: String,
    /// Upper bound for a single lookup
    pub timeout: Duration,
}

impl PosterSettings {
    /// Maps a lookup outcome to the URL shown to the user
    pub fn poster_url(&self, lookup: &PosterLookup) -> String {
        match lookup {
            PosterLookup::Found(path) => format!(
                "{}/{}",
                self.image_base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            ),
            PosterLookup::NotAvailable => self.placeholder_url.clone(),
            PosterLookup::LookupFailed(_) => self.error_url.clone(),
        }
    }
}

/// Turns ranked candidates into display records, preserving their order
///
/// Lookups run concurrently, one task per candidate, each bounded by
/// `settings.timeout`. A failed, timed out or panicked lookup only degrades its own
/// record to the error placeholder. The only error returned is a candidate index that
/// is not in the catalog, which never happens for ranker output.
pub async fn enrich(
    catalog: &Catalog,
    candidates: &[ScoredCandidate],
    provider: Arc<dyn PosterProvider>,
    settings: &PosterSettings,
) -> AppResult<Vec<DisplayRecord>> {
    let records = candidates
        .iter()
        .map(|candidate| {
            catalog.get(candidate.index).ok_or_else(|| {
                AppError::Internal(format!(
                    "Candidate index {} is outside the catalog",
                    candidate.index
                ))
            })
        })
        .collect::<AppResult<Vec<_>>>()?;

    let mut tasks = Vec::with_capacity(records.len());
    for record in &records {
        let provider = provider.clone();
        let movie_id = record.movie_id;
        let timeout = settings.timeout;
        let task = tokio::spawn(async move {
            match tokio::time::timeout(timeout, provider.lookup(movie_id)).await {
                Ok(lookup) => lookup,
                Err(_) => PosterLookup::LookupFailed(format!(
                    "lookup timed out after {}ms",
                    timeout.as_millis()
                )),
            }
        });
        tasks.push(task);
    }

    let mut enriched = Vec::with_capacity(records.len());
    let mut degraded = 0;

    for ((record, candidate), task) in records.iter().zip(candidates).zip(tasks) {
        let lookup = match task.await {
            Ok(lookup) => lookup,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    movie_id = record.movie_id,
                    "Poster lookup task failed"
                );
                PosterLookup::LookupFailed(e.to_string())
            }
        };

        match &lookup {
            PosterLookup::Found(_) => {}
            PosterLookup::NotAvailable => {
                tracing::debug!(movie_id = record.movie_id, "No poster available");
            }
            PosterLookup::LookupFailed(reason) => {
                degraded += 1;
                tracing::warn!(
                    movie_id = record.movie_id,
                    provider = provider.name(),
                    reason = %reason,
                    "Poster lookup failed, using error placeholder"
                );
            }
        }

        enriched.push(DisplayRecord {
            movie_id: record.movie_id,
            title: record.title.clone(),
            poster_url: settings.poster_url(&lookup),
            score: candidate.score,
        });
    }

    if degraded > 0 {
        tracing::warn!(
            success_count = enriched.len() - degraded,
            error_count = degraded,
            "Partial poster enrichment failure"
        );
    }

    Ok(enriched)
}
