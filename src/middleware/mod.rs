pub mod json;
pub mod query;
pub mod response;

pub use json::JsonBody;
pub use query::QueryParams;
pub use response::{ApiResponse, ApiResult};
