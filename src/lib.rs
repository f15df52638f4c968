//! Movie recommendation service.
//!
//! Given a title from a precomputed catalog, returns the most similar movies according to a
//! precomputed similarity matrix, each with a poster URL resolved through TMDB.

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
