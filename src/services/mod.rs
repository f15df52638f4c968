pub mod enricher;
pub mod providers;
pub mod ranker;
pub mod recommendations;
pub mod resolver;
pub mod title_search;

pub use enricher::PosterSettings;
pub use recommendations::Recommender;
