use std::sync::Arc;

use crate::{
    data::RecommendationModel,
    error::AppResult,
    models::DisplayRecord,
    services::{
        enricher::{enrich, PosterSettings},
        providers::PosterProvider,
        ranker::rank_similar,
        resolver::resolve_title,
    },
};

/// Generates "more like this" recommendations for a single title
///
/// Holds only read-only handles: the shared model, the poster provider and settings.
/// Each call resolves the title, ranks its similarity row and enriches the top matches
/// with posters.
#[derive(Clone)]
pub struct Recommender {
    model: Arc<RecommendationModel>,
    poster_provider: Arc<dyn PosterProvider>,
    poster_settings: PosterSettings,
    count: usize,
}

impl Recommender {
    pub fn new(
        model: Arc<RecommendationModel>,
        poster_provider: Arc<dyn PosterProvider>,
        poster_settings: PosterSettings,
        count: usize,
    ) -> Self {
        Self {
            model,
            poster_provider,
            poster_settings,
            count,
        }
    }

    pub fn model(&self) -> &RecommendationModel {
        &self.model
    }

    /// Returns up to `count` movies similar to `title`, most similar first
    ///
    /// Fails with `TitleNotFound` before any ranking or poster lookup when the title is
    /// not in the catalog. Poster problems never fail the request.
    pub async fn recommend(&self, title: &str) -> AppResult<Vec<DisplayRecord>> {
        let index = resolve_title(self.model.catalog(), title)?;
        let candidates = rank_similar(self.model.similarity(), index, self.count);

        tracing::debug!(
            title = %title,
            index,
            candidates = candidates.len(),
            "Ranked similar movies"
        );

        enrich(
            self.model.catalog(),
            &candidates,
            self.poster_provider.clone(),
            &self.poster_settings,
        )
        .await
    }
}
