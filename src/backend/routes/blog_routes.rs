/**
 * Blog Routes
 *
 * Every route here sits behind the auth gate, applied with `route_layer`
 * so it only runs for requests that matched a blog route. Unknown paths
 * still fall through to the 404 fallback instead of answering 401.
 *
 * - `POST /blog/` - Create a post
 * - `PUT /blog/` - Update an owned post
 * - `GET /blog/bulk` - List all posts
 * - `GET /blog/{id}` - Get a post by ID
 *
 * `/blog` without the trailing slash is accepted for create and update.
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};

use crate::backend::blog::{create_post, get_post, list_posts, update_post};
use crate::backend::middleware::auth_middleware;
use crate::backend::server::state::AppState;

/// Configure blog routes
///
/// # Arguments
///
/// * `router` - The router to add routes to
/// * `app_state` - State handed to the auth gate
pub fn configure_blog_routes(router: Router<AppState>, app_state: AppState) -> Router<AppState> {
    let blog = Router::new()
        .route("/blog", post(create_post).put(update_post))
        .route("/blog/", post(create_post).put(update_post))
        // Static segment wins over the `{id}` capture
        .route("/blog/bulk", get(list_posts))
        .route("/blog/{id}", get(get_post))
        .route_layer(from_fn_with_state(app_state, auth_middleware));

    router.merge(blog)
}
