use std::cmp::Ordering;

use crate::models::{ScoredCandidate, SimilarityMatrix};

/// Default number of recommendations per request
pub const DEFAULT_RECOMMENDATION_COUNT: usize = 5;

/// Ranks the movies most similar to `index`
///
/// Candidates are every other movie, ordered by descending score with ties broken by
/// ascending catalog index, truncated to `count`. The movie itself is filtered out by
/// index, whatever its self-similarity score is. An out-of-range index yields no candidates.
pub fn rank_similar(
    similarity: &SimilarityMatrix,
    index: usize,
    count: usize,
) -> Vec<ScoredCandidate> {
    let Some(row) = similarity.row(index) else {
        return Vec::new();
    };

    let mut candidates: Vec<ScoredCandidate> = row
        .iter()
        .enumerate()
        .filter(|(candidate, _)| *candidate != index)
        .map(|(candidate, &score)| ScoredCandidate {
            index: candidate,
            score,
        })
        .collect();

    // Scores are finite, so partial_cmp is total here and treats -0.0 == 0.0
    candidates.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(Ordering::Equal)
            .then(a.index.cmp(&b.index))
    });
    candidates.truncate(count);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(candidates: &[ScoredCandidate]) -> Vec<usize> {
        candidates.iter().map(|c| c.index).collect()
    }

    fn matrix(rows: Vec<Vec<f32>>) -> SimilarityMatrix {
        SimilarityMatrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_rank_ties_by_ascending_index() {
        let similarity = matrix(vec![
            vec![1.0, 0.9, 0.9],
            vec![0.9, 1.0, 0.5],
            vec![0.9, 0.5, 1.0],
        ]);

        let ranked = rank_similar(&similarity, 0, DEFAULT_RECOMMENDATION_COUNT);
        assert_eq!(indices(&ranked), vec![1, 2]);
    }

    #[test]
    fn test_signed_zero_scores_tie_by_index() {
        let similarity = matrix(vec![
            vec![1.0, -0.0, 0.0],
            vec![-0.0, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ]);

        let ranked = rank_similar(&similarity, 0, DEFAULT_RECOMMENDATION_COUNT);
        assert_eq!(indices(&ranked), vec![1, 2]);
    }

    #[test]
    fn test_rank_tie_order_independent_of_row_position() {
        // Equal scores at indices 1 and 3 with a higher score between them
        let similarity = matrix(vec![
            vec![1.0, 0.4, 0.8, 0.4],
            vec![0.4, 1.0, 0.1, 0.1],
            vec![0.8, 0.1, 1.0, 0.1],
            vec![0.4, 0.1, 0.1, 1.0],
        ]);

        let ranked = rank_similar(&similarity, 0, DEFAULT_RECOMMENDATION_COUNT);
        assert_eq!(indices(&ranked), vec![2, 1, 3]);
    }

    #[test]
    fn test_self_excluded_when_not_maximal() {
        // Self-similarity is lower than every other score
        let similarity = matrix(vec![
            vec![0.1, 0.7, 0.6],
            vec![0.7, 0.1, 0.3],
            vec![0.6, 0.3, 0.1],
        ]);

        let ranked = rank_similar(&similarity, 0, DEFAULT_RECOMMENDATION_COUNT);
        assert_eq!(indices(&ranked), vec![1, 2]);
    }

    #[test]
    fn test_non_self_tied_with_self_is_kept() {
        // Dropping the first sorted entry would lose movie 0 here, not the query movie
        let similarity = matrix(vec![
            vec![1.0, 1.0, 0.2],
            vec![1.0, 1.0, 0.3],
            vec![0.2, 0.3, 1.0],
        ]);

        let ranked = rank_similar(&similarity, 1, DEFAULT_RECOMMENDATION_COUNT);
        assert_eq!(indices(&ranked), vec![0, 2]);
    }

    #[test]
    fn test_truncates_to_count() {
        let similarity = matrix(vec![
            vec![1.0, 0.1, 0.2, 0.3, 0.4, 0.5, 0.6, 0.7],
            vec![0.1, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            vec![0.2, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0],
            vec![0.3, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0],
            vec![0.4, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0],
            vec![0.5, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0],
            vec![0.6, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0],
            vec![0.7, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0],
        ]);

        let ranked = rank_similar(&similarity, 0, DEFAULT_RECOMMENDATION_COUNT);
        assert_eq!(indices(&ranked), vec![7, 6, 5, 4, 3]);
        assert_eq!(ranked[0].score, 0.7);
    }

    #[test]
    fn test_single_movie_catalog_has_no_candidates() {
        let similarity = matrix(vec![vec![1.0]]);
        assert!(rank_similar(&similarity, 0, DEFAULT_RECOMMENDATION_COUNT).is_empty());
    }

    #[test]
    fn test_negative_scores_rank_last() {
        let similarity = matrix(vec![
            vec![1.0, -0.5, 0.0],
            vec![-0.5, 1.0, 0.0],
            vec![0.0, 0.0, 1.0],
        ]);

        let ranked = rank_similar(&similarity, 0, DEFAULT_RECOMMENDATION_COUNT);
        assert_eq!(indices(&ranked), vec![2, 1]);
    }

    #[test]
    fn test_out_of_range_index() {
        let similarity = matrix(vec![vec![1.0, 0.5], vec![0.5, 1.0]]);
        assert!(rank_similar(&similarity, 5, DEFAULT_RECOMMENDATION_COUNT).is_empty());
    }

    #[test]
    fn test_zero_count() {
        let similarity = matrix(vec![vec![1.0, 0.5], vec![0.5, 1.0]]);
        assert!(rank_similar(&similarity, 0, 0).is_empty());
    }
}
