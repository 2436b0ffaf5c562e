pub mod middleware;
pub mod request_id;
pub mod token;

pub use middleware::{access_middleware, RequestAccess};
pub use request_id::request_id_middleware;
pub use token::{AccessTokenValidator, Claims};
