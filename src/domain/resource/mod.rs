pub mod error;
pub mod model;

pub use error::ResourceError;
pub use model::{admit_records, parse_date_added, Resource, ResourceInput};
