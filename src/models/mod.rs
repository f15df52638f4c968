use serde::{Deserialize, Serialize};
use std::fmt::Display;

pub mod catalog;
pub mod similarity;

pub use catalog::Catalog;
pub use similarity::SimilarityMatrix;

/// External catalog identifier (TMDB movie id)
pub type MovieId = u64;

/// A single movie in the catalog
#[derive(Debug, Clone, PartialEq)]
pub struct MovieRecord {
    /// Position in the catalog, shared with the similarity matrix rows and columns
    pub index: usize,
    /// Title shown to the user and used as the lookup key
    pub title: String,
    /// Identifier used to query the poster service
    pub movie_id: MovieId,
}

/// A candidate produced by the ranker
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredCandidate {
    pub index: usize,
    pub score: f32,
}

/// Outcome of a single poster lookup
///
/// `NotAvailable` means the service answered but has no image (data absence);
/// `LookupFailed` covers transport errors, bad statuses, malformed bodies and timeouts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PosterLookup {
    /// Relative image path, e.g. "/kqjL17yufvn9OVLyXYpvtyrFfak.jpg"
    Found(String),
    NotAvailable,
    LookupFailed(String),
}

impl Display for PosterLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PosterLookup::Found(path) => write!(f, "found:{}", path),
            PosterLookup::NotAvailable => write!(f, "not_available"),
            PosterLookup::LookupFailed(reason) => write!(f, "failed:{}", reason),
        }
    }
}

/// A recommendation ready for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DisplayRecord {
    pub movie_id: MovieId,
    pub title: String,
    /// Real poster URL or one of the placeholder URLs, never empty
    pub poster_url: String,
    pub score: f32,
}

// ============================================================================
// TMDB API Types
// ============================================================================

/// Subset of the TMDB response from GET /3/movie/{id}
#[derive(Debug, Clone, Deserialize)]
pub struct TmdbMovieDetails {
    #[serde(default)]
    pub poster_path: Option<String>,
}

impl TmdbMovieDetails {
    /// Converts the response into a lookup outcome, treating blank paths as missing
    pub fn into_lookup(self) -> PosterLookup {
        match self.poster_path {
            Some(path) if !path.trim().is_empty() => PosterLookup::Found(path),
            _ => PosterLookup::NotAvailable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tmdb_details_with_poster() {
        let json = r#"{
            "id": 19995,
            "title": "Avatar",
            "poster_path": "/kyeqWdyUXW608qlYkRqosgbbJyK.jpg",
            "original_language": "en"
        }"#;

        let details: TmdbMovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(
            details.into_lookup(),
            PosterLookup::Found("/kyeqWdyUXW608qlYkRqosgbbJyK.jpg".to_string())
        );
    }

    #[test]
    fn test_tmdb_details_null_poster() {
        let json = r#"{ "id": 1, "poster_path": null }"#;
        let details: TmdbMovieDetails = serde_json::from_str(json).unwrap();
        assert_eq!(details.into_lookup(), PosterLookup::NotAvailable);
    }

    #[test]
    fn test_tmdb_details_missing_and_blank_poster() {
        // TMDB error bodies ({"status_code": 34, ...}) carry no poster_path at all
        let missing: TmdbMovieDetails =
            serde_json::from_str(r#"{ "status_code": 34, "success": false }"#).unwrap();
        assert_eq!(missing.into_lookup(), PosterLookup::NotAvailable);

        let blank: TmdbMovieDetails = serde_json::from_str(r#"{ "poster_path": "  " }"#).unwrap();
        assert_eq!(blank.into_lookup(), PosterLookup::NotAvailable);
    }

    #[test]
    fn test_display_record_serialization() {
        let record = DisplayRecord {
            movie_id: 285,
            title: "Pirates of the Caribbean: At World's End".to_string(),
            poster_url: "https://image.tmdb.org/t/p/w500/poster.jpg".to_string(),
            score: 0.5,
        };

        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["movie_id"], 285);
        assert_eq!(json["title"], "Pirates of the Caribbean: At World's End");
        assert_eq!(json["poster_url"], "https://image.tmdb.org/t/p/w500/poster.jpg");
    }
}
