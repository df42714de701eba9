//! Connection seam
//!
//! The dispatcher talks to the database through [`SqlConnection`]: execute
//! one SQL string, get back one result set. [`MySqlConnection`] is the live
//! implementation over a single `mysql_async` connection.

use async_trait::async_trait;
use mysql_async::prelude::Queryable;
use mysql_async::{Conn, Opts, OptsBuilder};

use super::config::DatabaseConfig;
use super::errors::ConnectionError;
use crate::protocol::{NativeColumn, NativeValue};

/// Raw outcome of one executed statement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Execution {
    pub columns: Vec<NativeColumn>,
    pub rows: Vec<Vec<NativeValue>>,
    pub last_insert_id: Option<u64>,
    pub affected_rows: u64,
}

/// A connection that processes one command at a time
#[async_trait]
pub trait SqlConnection: Send {
    /// Execute `sql` and collect its single result set.
    async fn execute(&mut self, sql: &str) -> Result<Execution, ConnectionError>;

    /// Server-assigned connection id, when known
    fn connection_id(&self) -> Option<u32> {
        None
    }

    /// Close the connection politely.
    async fn close(self: Box<Self>) -> Result<(), ConnectionError>;
}

/// Single live MySQL connection
pub struct MySqlConnection {
    conn: Conn,
}

impl MySqlConnection {
    /// Perform the connection handshake.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, ConnectionError> {
        let conn = Conn::new(Self::opts(config)).await?;
        Ok(Self { conn })
    }

    fn opts(config: &DatabaseConfig) -> Opts {
        OptsBuilder::default()
            .ip_or_hostname(config.host.clone())
            .tcp_port(config.port)
            .user(config.user.clone())
            .pass(config.password.clone())
            .db_name(config.database.clone())
            .into()
    }
}

#[async_trait]
impl SqlConnection for MySqlConnection {
    async fn execute(&mut self, sql: &str) -> Result<Execution, ConnectionError> {
        let mut result = self.conn.query_iter(sql).await?;

        let columns: Vec<NativeColumn> = result
            .columns()
            .map(|columns| columns.iter().map(NativeColumn::from).collect())
            .unwrap_or_default();

        let rows: Vec<mysql_async::Row> = result.collect().await?;
        let rows = rows
            .into_iter()
            .map(|row| {
                mysql_async::Row::unwrap(row)
                    .into_iter()
                    .map(NativeValue::from)
                    .collect()
            })
            .collect();

        let last_insert_id = result.last_insert_id();
        let affected_rows = result.affected_rows();

        // Only the first result set is returned
        result.drop_result().await?;

        Ok(Execution {
            columns,
            rows,
            last_insert_id,
            affected_rows,
        })
    }

    fn connection_id(&self) -> Option<u32> {
        Some(self.conn.id())
    }

    async fn close(self: Box<Self>) -> Result<(), ConnectionError> {
        self.conn.disconnect().await?;
        Ok(())
    }
}
