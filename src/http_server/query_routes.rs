//! Protocol HTTP Routes
//!
//! - `GET /` health check
//! - `POST /` with `{"query": "<SQL>"}` executes one statement
//! - `OPTIONS` on any path answers 200 with an empty body
//! - any other method on `/` answers 200 with an empty JSON body
//! - any other path is 404 with an empty body

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::Value;

use crate::gateway::{GatewayError, GatewayResult, QueryDispatcher};
use crate::observability::{Event, Logger};
use crate::protocol::{QueryError, QueryResult};

/// Health check response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Extract the SQL text from a request body.
///
/// Anything other than a JSON object with a non-empty string `query`
/// is [`GatewayError::InvalidQuery`].
pub fn parse_query_body(body: &[u8]) -> GatewayResult<String> {
    let value: Value = serde_json::from_slice(body).map_err(|_| GatewayError::InvalidQuery)?;

    match value.get("query").and_then(Value::as_str) {
        Some(query) if !query.is_empty() => Ok(query.to_string()),
        _ => Err(GatewayError::InvalidQuery),
    }
}

/// Create the protocol routes
pub fn query_routes(dispatcher: Arc<QueryDispatcher>) -> Router {
    Router::new()
        .route(
            "/",
            get(status_handler)
                .post(query_handler)
                .options(options_handler)
                .fallback(empty_json_handler),
        )
        .fallback(fallback_handler)
        .with_state(dispatcher)
}

async fn status_handler() -> impl IntoResponse {
    let response = StatusResponse {
        status: "OK".to_string(),
    };

    (StatusCode::OK, Json(response))
}

async fn query_handler(
    State(dispatcher): State<Arc<QueryDispatcher>>,
    body: Bytes,
) -> Result<Json<QueryResult>, GatewayError> {
    let sql = match parse_query_body(&body) {
        Ok(sql) => sql,
        Err(err) => {
            Logger::info(Event::QueryRejected, &[("reason", "invalid body")]);
            return Err(err);
        }
    };

    match run_detached(dispatcher, &sql).await {
        Ok(result) => {
            let rows = result.rows.len().to_string();
            Logger::trace(
                Event::QueryComplete,
                &[("rows", rows.as_str()), ("sql", sql.as_str())],
            );
            Ok(Json(result))
        }
        Err(err) => {
            let message = err.to_string();
            match &err {
                GatewayError::TransactionInProgress => {
                    Logger::warn(Event::TransactionRejected, &[("sql", sql.as_str())]);
                }
                GatewayError::Execution(_) => {
                    Logger::warn(Event::QueryFailed, &[("message", message.as_str())]);
                }
                // Logged by the dispatcher when the connection dropped
                GatewayError::ConnectionUnavailable | GatewayError::InvalidQuery => {}
            }
            Err(err)
        }
    }
}

/// Dispatch on its own task so a dropped request cannot cancel a statement
/// between the guard and the execution.
async fn run_detached(dispatcher: Arc<QueryDispatcher>, sql: &str) -> GatewayResult<QueryResult> {
    let owned = sql.to_string();
    let task = tokio::spawn(async move { dispatcher.dispatch(&owned).await });

    match task.await {
        Ok(outcome) => outcome,
        Err(join_error) => {
            let reason = format!("query task failed: {}", join_error);
            Err(GatewayError::Execution(QueryError::client(&reason, sql)))
        }
    }
}

async fn options_handler() -> StatusCode {
    StatusCode::OK
}

async fn empty_json_handler() -> impl IntoResponse {
    (StatusCode::OK, [(header::CONTENT_TYPE, "application/json")])
}

async fn fallback_handler(method: Method) -> StatusCode {
    if method == Method::OPTIONS {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    }
}
