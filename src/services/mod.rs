pub mod errors;
pub mod products;
pub mod view;

pub use errors::{ServiceError, ServiceResult};
