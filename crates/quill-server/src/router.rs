use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the axum router with all blog routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/posts", get(handlers::list_posts).post(handlers::create_post))
        .route("/new-post", get(handlers::new_post_form))
        .route("/posts/:id", get(handlers::post_detail))
        .route(
            "/posts/:id/edit",
            get(handlers::edit_post_form).post(handlers::update_post),
        )
        .route("/posts/:id/delete", post(handlers::delete_post))
        .route(
            "/posts/:id/comments",
            get(handlers::list_comments).post(handlers::add_comment),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
