//! Middleware Module
//!
//! Request processing that runs before handlers.
//!
//! - **`auth`** - Auth gate for blog routes and the `AuthUser` extractor
//! - **`json`** - `ValidatedJson`, which decodes a body and checks it
//!   against its shared input schema
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::from_fn_with_state;
//! use inkpost::backend::middleware::auth_middleware;
//!
//! let protected = router.route_layer(from_fn_with_state(state, auth_middleware));
//! ```

pub mod auth;

pub mod json;

pub use auth::{auth_middleware, bearer_token, AuthUser, AuthenticatedUser};
pub use json::ValidatedJson;
