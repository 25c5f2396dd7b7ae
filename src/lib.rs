pub mod cache;
pub mod errors;
pub mod instrument;
pub mod storeclient;
pub mod storemessage;
pub mod storeserver;
pub mod value;

pub use cache::Cache;
pub use errors::{CacheError, Result};
pub use value::Value;
