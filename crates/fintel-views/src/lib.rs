//! # fintel-views
//!
//! View models over [`fintel_db::service::FintelService`]. Each view owns a
//! [`QueryState`] (`data`, `loading`, `error`), starts out loading, and
//! settles after every fetch. Errors are kept as the backend's message.
//! Nothing retries.

pub mod collections;
pub mod comparisons;
pub mod franchises;
pub mod insights;
pub mod state;

#[cfg(test)]
mod test_support;

pub use collections::CollectionsView;
pub use comparisons::ComparisonsView;
pub use franchises::{FeaturedView, FranchiseDetailView, FranchisesView};
pub use insights::InsightsView;
pub use state::QueryState;
