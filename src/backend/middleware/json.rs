/**
 * Validated JSON Extraction
 *
 * `ValidatedJson<T>` decodes a JSON body into one of the shared input
 * schemas and runs its validation rules. Both a body that does not decode
 * and one that breaks a rule are rejected as invalid input (411), before
 * the handler runs.
 */

use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

use crate::backend::error::BackendError;
use crate::shared::{SharedError, Validate};

/// JSON body that has passed its schema's validation
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::warn!("Rejected request body: {}", rejection.body_text());
            BackendError::InvalidInput(SharedError::serialization(rejection.body_text()))
        })?;

        value.validate().map_err(|e| {
            tracing::warn!("Invalid input: {}", e);
            BackendError::InvalidInput(e)
        })?;

        Ok(Self(value))
    }
}
