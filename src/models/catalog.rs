use std::collections::HashMap;

use super::{MovieId, MovieRecord};

/// Ordered, immutable collection of movie records
///
/// Record `i` always has `index == i`. Titles are expected to be unique; when they are
/// not, lookups resolve to the first record in catalog order.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    records: Vec<MovieRecord>,
    first_index_by_title: HashMap<String, usize>,
    duplicate_titles: usize,
}

impl Catalog {
    /// Builds a catalog from `(title, movie_id)` pairs, assigning indices by position
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, MovieId)>,
        S: Into<String>,
    {
        let records: Vec<MovieRecord> = entries
            .into_iter()
            .enumerate()
            .map(|(index, (title, movie_id))| MovieRecord {
                index,
                title: title.into(),
                movie_id,
            })
            .collect();

        let mut first_index_by_title = HashMap::with_capacity(records.len());
        let mut duplicate_titles = 0;
        for record in &records {
            if first_index_by_title.contains_key(&record.title) {
                duplicate_titles += 1;
            } else {
                first_index_by_title.insert(record.title.clone(), record.index);
            }
        }

        Self {
            records,
            first_index_by_title,
            duplicate_titles,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&MovieRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    /// Index of the first record whose title matches exactly
    pub fn first_index_of(&self, title: &str) -> Option<usize> {
        self.first_index_by_title.get(title).copied()
    }

    /// Number of records whose title repeats an earlier record's title
    pub fn duplicate_titles(&self) -> usize {
        self.duplicate_titles
    }

    /// Titles in catalog order
    pub fn titles(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|r| r.title.as_str())
    }
}
