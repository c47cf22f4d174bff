/**
 * Error Conversion
 *
 * Turns backend errors into HTTP responses and translates database
 * constraint failures into client-facing errors.
 *
 * # HTTP Response Conversion
 *
 * `BackendError` implements `IntoResponse`, so handlers return
 * `Result<_, BackendError>` and use `?` throughout. Server-side failures
 * are logged here, once, with their full detail.
 */

use axum::response::{IntoResponse, Json, Response};

use crate::backend::error::types::BackendError;

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if self.is_server_error() {
            tracing::error!("Request failed: {}", self);
        } else {
            tracing::debug!("Request rejected with {}: {}", status, self);
        }

        (status, Json(self.body())).into_response()
    }
}

/// Whether a store error is a unique-constraint violation
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_unique_violation())
}

/// Whether a store error is a foreign-key violation
pub fn is_foreign_key_violation(err: &sqlx::Error) -> bool {
    err.as_database_error()
        .is_some_and(|db_err| db_err.is_foreign_key_violation())
}
