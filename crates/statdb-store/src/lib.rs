pub mod error;
pub mod loader;

pub use error::{Result, StoreError};
pub use loader::Store;
