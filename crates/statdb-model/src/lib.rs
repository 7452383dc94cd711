pub mod error;
pub mod ident;
pub mod infer;
pub mod schema;

pub use error::{Result, SchemaError};
pub use ident::{quote_identifier, sanitize_identifier};
pub use infer::StorageKind;
pub use schema::{ColumnDef, TableSchema, YEAR_COLUMN};
