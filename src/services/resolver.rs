use crate::{
    error::{AppError, AppResult},
    models::Catalog,
};

/// Resolves a title to its catalog index
///
/// Matching is exact. Duplicate titles resolve to the first record in catalog order.
pub fn resolve_title(catalog: &Catalog, title: &str) -> AppResult<usize> {
    catalog
        .first_index_of(title)
        .ok_or_else(|| AppError::TitleNotFound(title.to_string()))
}
