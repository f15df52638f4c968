use crate::models::Catalog;

/// Lists catalog titles for the selection control
///
/// Titles keep catalog order. When `query` is non-blank only titles containing it
/// (case-insensitive) are returned. Duplicate titles are listed once.
pub fn list_titles(catalog: &Catalog, query: Option<&str>, limit: Option<usize>) -> Vec<String> {
    let needle = query
        .map(str::trim)
        .filter(|q| !q.is_empty())
        .map(str::to_lowercase);

    catalog
        .records()
        .iter()
        .filter(|record| catalog.first_index_of(&record.title) == Some(record.index))
        .filter(|record| match &needle {
            Some(needle) => record.title.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .take(limit.unwrap_or(usize::MAX))
        .map(|record| record.title.clone())
        .collect()
}
