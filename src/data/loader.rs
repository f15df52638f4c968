use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::error::DataLoadError;
use crate::models::{Catalog, MovieId, SimilarityMatrix};

/// One entry of the catalog artifact
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    #[serde(default)]
    index: Option<usize>,
    movie_id: MovieId,
    title: String,
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, DataLoadError> {
    let display = path.display().to_string();
    let bytes = fs::read(path).map_err(|source| DataLoadError::Io {
        path: display.clone(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| DataLoadError::Parse {
        path: display,
        source,
    })
}

/// Loads the catalog artifact: a JSON array of `{ "movie_id", "title" }` objects
///
/// Record order defines the index. An explicit `index` field is accepted only when it
/// agrees with the record's position.
pub fn load_catalog(path: &Path) -> Result<Catalog, DataLoadError> {
    let entries: Vec<CatalogEntry> = read_json(path)?;

    for (position, entry) in entries.iter().enumerate() {
        if let Some(declared) = entry.index {
            if declared != position {
                return Err(DataLoadError::IndexMismatch { position, declared });
            }
        }
    }

    let catalog = Catalog::from_entries(entries.into_iter().map(|e| (e.title, e.movie_id)));

    tracing::debug!(path = %path.display(), movies = catalog.len(), "Catalog loaded");

    Ok(catalog)
}

/// Loads the similarity artifact: a JSON array of equally sized numeric rows
pub fn load_similarity(path: &Path) -> Result<SimilarityMatrix, DataLoadError> {
    let rows: Vec<Vec<f32>> = read_json(path)?;
    let matrix = SimilarityMatrix::from_rows(rows)?;

    tracing::debug!(path = %path.display(), size = matrix.size(), "Similarity matrix loaded");

    Ok(matrix)
}
