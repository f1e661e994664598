use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use blogly_db::Database;
use tracing::warn;

use blogly_types::forms::{ActionForm, PostForm};

use crate::dispatch::{self, PostTarget};
use crate::error::AppResult;
use crate::ops;
use crate::paths;
use crate::state::{AppState, blocking};
use crate::views::{NewPostPage, PostEditPage, PostPage};

/// `/users/{user_id}/post/{post_id}/{title}` and its `/edit` child.
type PostPath = Path<(i64, i64, String)>;

/// Posts are only reachable under their author's URL. Anything else goes back
/// to the user list without touching the post.
fn owned(db: &Database, user_id: i64, post_id: i64) -> AppResult<bool> {
    let owned = ops::posts::belongs_to(db, user_id, post_id)?;
    if !owned {
        warn!("Post {} is not owned by user {}, redirecting", post_id, user_id);
    }
    Ok(owned)
}

fn to_user_list() -> Response {
    Redirect::to(paths::USERS).into_response()
}

/// GET /users/{user_id}/new-post
pub async fn new_post_form(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Html<String>> {
    blocking(&state, move |app| {
        let user = ops::users::get_user(&app.db, user_id)?;
        let choices = ops::posts::tag_choices(&app.db, None)?;
        app.render("users/new_post.html", &NewPostPage::new(&user, &choices))
    })
    .await
}

/// POST /users/{user_id}/new-post
pub async fn create_post(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Form(form): Form<PostForm>,
) -> AppResult<Redirect> {
    blocking(&state, move |app| {
        let post = ops::posts::create_post(&app.db, user_id, &form)?;
        Ok(Redirect::to(&paths::post(user_id, post.id, &post.title)))
    })
    .await
}

/// GET /users/{user_id}/post/{post_id}/{title}
pub async fn show_post(
    State(state): State<AppState>,
    Path((user_id, post_id, _title)): PostPath,
) -> AppResult<Response> {
    blocking(&state, move |app| {
        if !owned(&app.db, user_id, post_id)? {
            return Ok(to_user_list());
        }
        let detail = ops::posts::post_detail(&app.db, post_id)?;
        Ok(app.render("posts/detail.html", &PostPage::from(&detail))?.into_response())
    })
    .await
}

/// POST /users/{user_id}/post/{post_id}/{title} — edit or delete.
pub async fn post_action(
    State(state): State<AppState>,
    Path((user_id, post_id, title)): PostPath,
    Form(form): Form<ActionForm>,
) -> AppResult<Response> {
    blocking(&state, move |app| {
        if !owned(&app.db, user_id, post_id)? {
            return Ok(to_user_list());
        }
        let target = PostTarget {
            user_id,
            post_id,
            title,
        };
        Ok(dispatch::dispatch(&app.db, &target, form.action)?.into_response())
    })
    .await
}

/// GET /users/{user_id}/post/{post_id}/{title}/edit
pub async fn edit_post_form(
    State(state): State<AppState>,
    Path((user_id, post_id, _title)): PostPath,
) -> AppResult<Response> {
    blocking(&state, move |app| {
        if !owned(&app.db, user_id, post_id)? {
            return Ok(to_user_list());
        }
        let detail = ops::posts::post_detail(&app.db, post_id)?;
        let choices = ops::posts::tag_choices(&app.db, Some(post_id))?;
        let page = app.render("posts/edit.html", &PostEditPage::new(&detail, &choices))?;
        Ok(page.into_response())
    })
    .await
}

/// POST /users/{user_id}/post/{post_id}/{title}/edit — lands on the post under
/// its new title.
pub async fn edit_post(
    State(state): State<AppState>,
    Path((user_id, post_id, _title)): PostPath,
    Form(form): Form<PostForm>,
) -> AppResult<Response> {
    blocking(&state, move |app| {
        if !owned(&app.db, user_id, post_id)? {
            return Ok(to_user_list());
        }
        let post = ops::posts::edit_post(&app.db, post_id, &form)?;
        Ok(Redirect::to(&paths::post(user_id, post.id, &post.title)).into_response())
    })
    .await
}
