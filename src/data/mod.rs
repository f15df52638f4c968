//! Precomputed artifacts: the movie catalog and its similarity matrix.
//!
//! Both are loaded once, validated against each other and then shared read-only for the
//! lifetime of the process.

use chrono::{DateTime, Utc};
use std::path::Path;
use std::sync::{Arc, OnceLock};

use crate::error::DataLoadError;
use crate::models::{Catalog, SimilarityMatrix};

pub mod loader;

pub use loader::{load_catalog, load_similarity};

/// Catalog and similarity matrix, guaranteed to have matching dimensions
#[derive(Debug)]
pub struct RecommendationModel {
    catalog: Catalog,
    similarity: SimilarityMatrix,
    loaded_at: DateTime<Utc>,
}

impl RecommendationModel {
    /// Pairs a catalog with its similarity matrix, failing if their sizes differ
    pub fn new(catalog: Catalog, similarity: SimilarityMatrix) -> Result<Self, DataLoadError> {
        if catalog.len() != similarity.size() {
            return Err(DataLoadError::DimensionMismatch {
                catalog: catalog.len(),
                matrix: similarity.size(),
            });
        }

        if catalog.duplicate_titles() > 0 {
            tracing::warn!(
                duplicates = catalog.duplicate_titles(),
                "Catalog contains duplicate titles; lookups resolve to the first occurrence"
            );
        }

        Ok(Self {
            catalog,
            similarity,
            loaded_at: Utc::now(),
        })
    }

    /// Loads and validates both artifacts from disk
    pub fn load(catalog_path: &Path, similarity_path: &Path) -> Result<Self, DataLoadError> {
        let catalog = load_catalog(catalog_path)?;
        let similarity = load_similarity(similarity_path)?;
        let model = Self::new(catalog, similarity)?;

        tracing::info!(
            movies = model.catalog.len(),
            catalog = %catalog_path.display(),
            similarity = %similarity_path.display(),
            "Recommendation model loaded"
        );

        Ok(model)
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn similarity(&self) -> &SimilarityMatrix {
        &self.similarity
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

static SHARED_MODEL: OnceLock<Arc<RecommendationModel>> = OnceLock::new();

/// Returns the process-wide model, loading it on first use
///
/// Later calls return the same instance and ignore their arguments. A failed load leaves
/// nothing cached.
pub fn shared_model(
    catalog_path: &Path,
    similarity_path: &Path,
) -> Result<Arc<RecommendationModel>, DataLoadError> {
    if let Some(model) = SHARED_MODEL.get() {
        return Ok(model.clone());
    }

    let loaded = Arc::new(RecommendationModel::load(catalog_path, similarity_path)?);
    Ok(SHARED_MODEL.get_or_init(|| loaded).clone())
}
