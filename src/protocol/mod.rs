//! Serverless protocol vocabulary
//!
//! Translation from native MySQL results into the HTTP protocol payloads:
//! - `types`: column type code + flags → protocol type label
//! - `row`: native row → base64 values + lengths
//! - `result`: field descriptors, query result, query error

pub mod result;
pub mod row;
pub mod types;
pub mod value;

pub use result::{ColumnDescriptor, NativeColumn, QueryError, QueryResult};
pub use row::{encode_row, Row, NULL_LENGTH};
pub use types::{map_type, native_type_name, ColumnFlags, ProtocolType};
pub use value::NativeValue;
