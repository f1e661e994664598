use axum::{
    Router,
    extract::DefaultBodyLimit,
    http::StatusCode,
    response::Redirect,
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::state::AppState;
use crate::{paths, posts, tags, users};

/// Cap on user form bodies. `image_url` may carry an inline base64 photo.
pub const USER_FORM_LIMIT: usize = 16 * 1024 * 1024;

/// The full HTTP surface of the blog.
pub fn router(state: AppState) -> Router {
    let user_routes = Router::new()
        .route("/users", get(users::list_users).post(users::create_user))
        .route("/users/{user_id}", get(users::show_user).post(users::user_action))
        .route("/users/{user_id}/edit", get(users::edit_user_form).post(users::edit_user))
        .layer(DefaultBodyLimit::max(USER_FORM_LIMIT));

    let post_routes = Router::new()
        .route("/users/{user_id}/new-post", get(posts::new_post_form).post(posts::create_post))
        .route(
            "/users/{user_id}/post/{post_id}/{title}",
            get(posts::show_post).post(posts::post_action),
        )
        .route(
            "/users/{user_id}/post/{post_id}/{title}/edit",
            get(posts::edit_post_form).post(posts::edit_post),
        );

    let tag_routes = Router::new()
        .route("/tags", get(tags::list_tags).post(tags::create_tag))
        .route("/tags/{tag_id}", get(tags::show_tag).post(tags::tag_action))
        .route("/tags/{tag_id}/edit", get(tags::edit_tag_form).post(tags::edit_tag));

    Router::new()
        .route("/", get(|| async { Redirect::to(paths::USERS) }))
        .merge(user_routes)
        .merge(post_routes)
        .merge(tag_routes)
        .fallback(|| async { (StatusCode::NOT_FOUND, "Not Found") })
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
