//! Query result and error payloads

use serde::Serialize;

use super::row::{encode_row, Row};
use super::types::{map_type, ProtocolType};
use super::value::NativeValue;

/// MySQL client error code for failures without a server errno
pub const CLIENT_UNKNOWN_ERRNO: u16 = 2000;
/// Generic SQL state for client-side failures
pub const CLIENT_UNKNOWN_SQLSTATE: &str = "HY000";

/// Column metadata as sent to protocol clients
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ProtocolType,
    pub table: String,
    #[serde(rename = "orgTable")]
    pub origin_table: String,
    pub database: String,
    #[serde(rename = "orgName")]
    pub origin_name: String,
}

/// Native column metadata read from the connection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NativeColumn {
    pub name: String,
    pub type_code: u8,
    pub flags: u16,
    pub table: String,
    pub origin_table: String,
    pub database: String,
    pub origin_name: String,
}

impl NativeColumn {
    pub fn describe(&self) -> ColumnDescriptor {
        ColumnDescriptor {
            name: self.name.clone(),
            column_type: map_type(self.type_code, self.flags),
            table: self.table.clone(),
            origin_table: self.origin_table.clone(),
            database: self.database.clone(),
            origin_name: self.origin_name.clone(),
        }
    }
}

impl From<&mysql_async::Column> for NativeColumn {
    fn from(column: &mysql_async::Column) -> Self {
        Self {
            name: column.name_str().into_owned(),
            type_code: column.column_type() as u8,
            flags: column.flags().bits(),
            table: column.table_str().into_owned(),
            origin_table: column.org_table_str().into_owned(),
            database: column.schema_str().into_owned(),
            origin_name: column.org_name_str().into_owned(),
        }
    }
}

/// Successful query payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub fields: Vec<ColumnDescriptor>,
    pub rows: Vec<Row>,
    pub insert_id: u64,
    pub rows_affected: u64,
}

impl QueryResult {
    /// Assemble a result from native columns and rows.
    pub fn from_native(
        columns: &[NativeColumn],
        rows: &[Vec<NativeValue>],
        insert_id: Option<u64>,
        rows_affected: u64,
    ) -> Self {
        let fields: Vec<ColumnDescriptor> = columns.iter().map(NativeColumn::describe).collect();
        let rows = rows.iter().map(|row| encode_row(row, &fields)).collect();

        Self {
            fields,
            rows,
            insert_id: insert_id.unwrap_or(0),
            rows_affected,
        }
    }
}

/// Failed execution payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryError {
    pub message: String,
}

impl QueryError {
    /// Compose the four-line message: native text, errno, sqlstate, SQL.
    pub fn native(message: &str, errno: u16, sqlstate: &str, sql: &str) -> Self {
        Self {
            message: format!(
                "{}\n(errno {})\n(sqlstate {})\nSql: \"{}\"",
                message, errno, sqlstate, sql
            ),
        }
    }

    /// Client-side failure without a server errno.
    pub fn client(message: &str, sql: &str) -> Self {
        Self::native(message, CLIENT_UNKNOWN_ERRNO, CLIENT_UNKNOWN_SQLSTATE, sql)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::types::{ColumnFlags, TYPE_LONGLONG, TYPE_VAR_STRING};

    fn column(name: &str, type_code: u8, flags: u16) -> NativeColumn {
        NativeColumn {
            name: name.to_string(),
            type_code,
            flags,
            table: "users".to_string(),
            origin_table: "users".to_string(),
            database: "app".to_string(),
            origin_name: name.to_string(),
        }
    }

    #[test]
    fn test_query_error_has_four_lines() {
        let err = QueryError::native(
            "Duplicate entry '1' for key 'PRIMARY'",
            1062,
            "23000",
            "INSERT INTO t VALUES (1)",
        );
        let lines: Vec<&str> = err.message.lines().collect();
        assert_eq!(
            lines,
            vec![
                "Duplicate entry '1' for key 'PRIMARY'",
                "(errno 1062)",
                "(sqlstate 23000)",
                "Sql: \"INSERT INTO t VALUES (1)\"",
            ]
        );
    }

    #[test]
    fn test_client_error_uses_generic_codes() {
        let err = QueryError::client("packet out of order", "SELECT 1");
        assert!(err.message.contains("(errno 2000)"));
        assert!(err.message.contains("(sqlstate HY000)"));
    }

    #[test]
    fn test_from_native_maps_fields_and_rows() {
        let columns = vec![
            column("id", TYPE_LONGLONG, ColumnFlags::UNSIGNED),
            column("name", TYPE_VAR_STRING, 0),
        ];
        let rows = vec![
            vec![NativeValue::text("7"), NativeValue::text("kit")],
            vec![NativeValue::text("8"), NativeValue::Null],
        ];

        let result = QueryResult::from_native(&columns, &rows, None, 0);

        assert_eq!(result.fields.len(), 2);
        assert_eq!(result.fields[0].column_type, ProtocolType::Uint64);
        assert_eq!(result.fields[1].column_type, ProtocolType::Varchar);
        assert_eq!(result.rows[0].lengths, vec![1, 3]);
        assert_eq!(result.rows[1].lengths, vec![1, -1]);
        assert_eq!(result.insert_id, 0);
        assert_eq!(result.rows_affected, 0);
    }

    #[test]
    fn test_serialized_field_names() {
        let result = QueryResult::from_native(
            &[column("id", TYPE_LONGLONG, 0)],
            &[vec![NativeValue::text("1")]],
            Some(5),
            1,
        );
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["insertId"], 5);
        assert_eq!(json["rowsAffected"], 1);
        assert_eq!(
            json["fields"][0],
            serde_json::json!({
                "name": "id",
                "type": "INT64",
                "table": "users",
                "orgTable": "users",
                "database": "app",
                "orgName": "id",
            })
        );
        assert_eq!(json["rows"][0]["values"], "MQ==");
    }

    #[test]
    fn test_native_column_from_driver_column() {
        use mysql_async::consts::{ColumnFlags as DriverFlags, ColumnType};

        let driver_column = mysql_async::Column::new(ColumnType::MYSQL_TYPE_LONGLONG)
            .with_flags(DriverFlags::UNSIGNED_FLAG | DriverFlags::NOT_NULL_FLAG)
            .with_name(b"id")
            .with_org_name(b"user_id")
            .with_table(b"u")
            .with_org_table(b"users")
            .with_schema(b"app");

        let native = NativeColumn::from(&driver_column);
        assert_eq!(native.type_code, TYPE_LONGLONG);
        assert!(ColumnFlags::from_bits(native.flags).is_unsigned());

        let descriptor = native.describe();
        assert_eq!(descriptor.name, "id");
        assert_eq!(descriptor.column_type, ProtocolType::Uint64);
        assert_eq!(descriptor.table, "u");
        assert_eq!(descriptor.origin_table, "users");
        assert_eq!(descriptor.database, "app");
        assert_eq!(descriptor.origin_name, "user_id");
    }

    #[test]
    fn test_binary_driver_column_maps_to_varbinary() {
        use mysql_async::consts::{ColumnFlags as DriverFlags, ColumnType};

        let driver_column = mysql_async::Column::new(ColumnType::MYSQL_TYPE_VAR_STRING)
            .with_flags(DriverFlags::BINARY_FLAG)
            .with_name(b"payload");

        let native = NativeColumn::from(&driver_column);
        assert_eq!(native.type_code, TYPE_VAR_STRING);
        assert_eq!(native.describe().column_type, ProtocolType::Varbinary);
    }
}
