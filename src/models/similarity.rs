use crate::error::DataLoadError;

/// Square matrix of pairwise similarity scores, stored row-major
#[derive(Debug, Clone, Default)]
pub struct SimilarityMatrix {
    size: usize,
    scores: Vec<f32>,
}

impl SimilarityMatrix {
    /// Builds a matrix from rows, rejecting ragged rows and non-finite scores
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, DataLoadError> {
        let size = rows.len();
        let mut scores = Vec::with_capacity(size * size);

        for (row_index, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(DataLoadError::RaggedRow {
                    row: row_index,
                    expected: size,
                    found: row.len(),
                });
            }
            if let Some(column) = row.iter().position(|s| !s.is_finite()) {
                return Err(DataLoadError::NonFiniteScore {
                    row: row_index,
                    column,
                });
            }
            scores.extend(row);
        }

        Ok(Self { size, scores })
    }

    /// Number of rows (and columns)
    pub fn size(&self) -> usize {
        self.size
    }

    /// Similarity of movie `index` to every movie, itself included
    pub fn row(&self, index: usize) -> Option<&[f32]> {
        if index >= self.size {
            return None;
        }
        let start = index * self.size;
        Some(&self.scores[start..start + self.size])
    }
}
