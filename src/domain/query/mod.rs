pub mod engine;
pub mod error;
pub mod state;

pub use engine::{compute_visible, SearchTerms};
pub use error::QueryError;
pub use state::{QueryState, SortBy, SortDirection, ViewMode};
