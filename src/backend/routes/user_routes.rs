/**
 * User Routes
 *
 * Public endpoints; no token is needed to sign up or sign in.
 *
 * - `POST /user/signup` - User registration
 * - `POST /user/signin` - User authentication
 */

use axum::{routing::post, Router};

use crate::backend::auth::{signin, signup};
use crate::backend::server::state::AppState;

/// Configure user routes
pub fn configure_user_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/user/signup", post(signup))
        .route("/user/signin", post(signin))
}
