pub mod catalog;
pub mod filter;
pub mod ranker;
pub mod view;

pub use catalog::{CatalogBuild, build_catalog};
pub use filter::{SearchState, filter_catalog};
pub use ranker::rank_preferred;
pub use view::LanguageOverlayView;
