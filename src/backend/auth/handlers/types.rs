/**
 * Authentication Handler Types
 *
 * Request bodies live in `shared::inputs` so clients can reuse them; this
 * module holds what the handlers send back.
 */

use serde::{Deserialize, Serialize};

/// Auth response
///
/// Returned by signup and signin. Contains only the bearer token.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AuthResponse {
    /// Signed token to send as `Authorization: Bearer <jwt>`
    pub jwt: String,
}
