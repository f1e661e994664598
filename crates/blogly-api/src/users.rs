use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use axum_extra::extract::Form;
use tracing::debug;

use blogly_types::forms::{ActionForm, UserForm};

use crate::dispatch::{self, UserTarget};
use crate::error::{AppError, AppResult};
use crate::ops;
use crate::paths;
use crate::state::{AppState, blocking};
use crate::views::{UserEditPage, UserPage, UsersPage};

/// GET /users
pub async fn list_users(State(state): State<AppState>) -> AppResult<Html<String>> {
    blocking(&state, |app| {
        let users = ops::users::list_users(&app.db)?;
        debug!("Listing {} users", users.len());
        app.render("users/list.html", &UsersPage::new(&users))
    })
    .await
}

/// POST /users — blank names re-show the list with the form refilled.
pub async fn create_user(
    State(state): State<AppState>,
    Form(form): Form<UserForm>,
) -> AppResult<Response> {
    blocking(&state, move |app| {
        match ops::users::create_user(&app.db, &form, &app.default_image_url) {
            Ok(user_id) => Ok(Redirect::to(&paths::user(user_id)).into_response()),
            Err(AppError::Validation(message)) => {
                let users = ops::users::list_users(&app.db)?;
                let page = app.render("users/list.html", &UsersPage::rejected(&users, &form, message))?;
                Ok((StatusCode::BAD_REQUEST, page).into_response())
            }
            Err(other) => Err(other),
        }
    })
    .await
}

/// GET /users/{user_id}
pub async fn show_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Html<String>> {
    blocking(&state, move |app| {
        let detail = ops::users::user_detail(&app.db, user_id)?;
        app.render("users/detail.html", &UserPage::from(&detail))
    })
    .await
}

/// POST /users/{user_id} — edit, delete or new-post.
pub async fn user_action(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Form(form): Form<ActionForm>,
) -> AppResult<Redirect> {
    blocking(&state, move |app| {
        dispatch::dispatch(&app.db, &UserTarget { user_id }, form.action)
    })
    .await
}

/// GET /users/{user_id}/edit
pub async fn edit_user_form(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> AppResult<Html<String>> {
    blocking(&state, move |app| {
        let user = ops::users::get_user(&app.db, user_id)?;
        app.render("users/edit.html", &UserEditPage::new(&user))
    })
    .await
}

/// POST /users/{user_id}/edit
pub async fn edit_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
    Form(form): Form<UserForm>,
) -> AppResult<Response> {
    blocking(&state, move |app| match ops::users::edit_user(&app.db, user_id, &form) {
        Ok(()) => Ok(Redirect::to(&paths::user(user_id)).into_response()),
        Err(AppError::Validation(message)) => {
            let user = ops::users::get_user(&app.db, user_id)?;
            let page = app.render("users/edit.html", &UserEditPage::rejected(&user, &form, message))?;
            Ok((StatusCode::BAD_REQUEST, page).into_response())
        }
        Err(other) => Err(other),
    })
    .await
}
