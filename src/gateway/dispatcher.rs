//! Query dispatch over the single shared connection
//!
//! The dispatcher owns the connection and its transaction state behind one
//! FIFO async mutex. The guard check and the execution happen under the same
//! lock, so dispatch order is execution order and no other request can slip
//! in between them.

use tokio::sync::Mutex;

use super::connection::SqlConnection;
use super::errors::{GatewayError, GatewayResult};
use super::transaction::{guard, TransactionBoundary, TransactionState};
use crate::observability::{Event, Logger};
use crate::protocol::QueryResult;

/// Connection lifecycle
enum Link {
    Connected(Box<dyn SqlConnection>),
    Disconnected,
}

struct Session {
    link: Link,
    transaction: TransactionState,
}

/// Executes protocol queries against the shared connection
pub struct QueryDispatcher {
    session: Mutex<Session>,
}

impl QueryDispatcher {
    pub fn new(connection: Box<dyn SqlConnection>) -> Self {
        Self {
            session: Mutex::new(Session {
                link: Link::Connected(connection),
                transaction: TransactionState::new(),
            }),
        }
    }

    /// Run one SQL statement and build its protocol payload.
    pub async fn dispatch(&self, sql: &str) -> GatewayResult<QueryResult> {
        let mut session = self.session.lock().await;
        let Session { link, transaction } = &mut *session;

        let boundary = guard(transaction, sql)?;

        let outcome = match link {
            Link::Connected(connection) => connection.execute(sql).await,
            Link::Disconnected => {
                if boundary == TransactionBoundary::Begin {
                    transaction.reset();
                }
                return Err(GatewayError::ConnectionUnavailable);
            }
        };

        match outcome {
            Ok(execution) => Ok(QueryResult::from_native(
                &execution.columns,
                &execution.rows,
                execution.last_insert_id,
                execution.affected_rows,
            )),
            Err(err) => {
                if boundary == TransactionBoundary::Begin {
                    transaction.reset();
                }
                if err.is_disconnect() {
                    let reason = err.to_string();
                    Logger::error(Event::ConnectionLost, &[("reason", reason.as_str())]);
                    *link = Link::Disconnected;
                    return Err(GatewayError::ConnectionUnavailable);
                }
                Err(GatewayError::Execution(err.to_query_error(sql)))
            }
        }
    }

    /// Whether an open transaction is being tracked
    pub async fn in_transaction(&self) -> bool {
        self.session.lock().await.transaction.in_transaction()
    }

    /// Whether the connection is still usable
    pub async fn is_connected(&self) -> bool {
        matches!(self.session.lock().await.link, Link::Connected(_))
    }

    /// Disconnect from the database; later dispatches report
    /// [`GatewayError::ConnectionUnavailable`].
    pub async fn close(&self) {
        let mut session = self.session.lock().await;
        let link = std::mem::replace(&mut session.link, Link::Disconnected);
        session.transaction.reset();

        if let Link::Connected(connection) = link {
            if let Err(err) = connection.close().await {
                let reason = err.to_string();
                Logger::warn(Event::DisconnectFailed, &[("reason", reason.as_str())]);
            }
        }
    }
}
