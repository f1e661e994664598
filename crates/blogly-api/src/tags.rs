use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
};
use axum_extra::extract::Form;

use blogly_types::forms::{ActionForm, TagForm};

use crate::dispatch::{self, TagTarget};
use crate::error::AppResult;
use crate::ops;
use crate::ops::tags::{TagCreation, TagRename};
use crate::paths;
use crate::state::{AppState, blocking};
use crate::views::{TagEditPage, TagPage, TagsPage};

/// GET /tags
pub async fn list_tags(State(state): State<AppState>) -> AppResult<Html<String>> {
    blocking(&state, |app| {
        let tags = ops::tags::list_tags(&app.db)?;
        app.render("tags/list.html", &TagsPage::new(&tags))
    })
    .await
}

/// POST /tags
pub async fn create_tag(
    State(state): State<AppState>,
    Form(form): Form<TagForm>,
) -> AppResult<Redirect> {
    let outcome = blocking(&state, move |app| ops::tags::create_tag(&app.db, &form)).await?;

    Ok(match outcome {
        TagCreation::Created(tag_id) => Redirect::to(&paths::tag(tag_id)),
        TagCreation::Rejected { .. } => Redirect::to(paths::TAGS),
    })
}

/// GET /tags/{tag_id}
pub async fn show_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<i64>,
) -> AppResult<Html<String>> {
    blocking(&state, move |app| {
        let detail = ops::tags::tag_detail(&app.db, tag_id)?;
        app.render("tags/detail.html", &TagPage::from(&detail))
    })
    .await
}

/// POST /tags/{tag_id} — edit or delete.
pub async fn tag_action(
    State(state): State<AppState>,
    Path(tag_id): Path<i64>,
    Form(form): Form<ActionForm>,
) -> AppResult<Redirect> {
    blocking(&state, move |app| {
        dispatch::dispatch(&app.db, &TagTarget { tag_id }, form.action)
    })
    .await
}

/// GET /tags/{tag_id}/edit
pub async fn edit_tag_form(
    State(state): State<AppState>,
    Path(tag_id): Path<i64>,
) -> AppResult<Html<String>> {
    blocking(&state, move |app| {
        let tag = ops::tags::get_tag(&app.db, tag_id)?;
        app.render("tags/edit.html", &TagEditPage::new(&tag))
    })
    .await
}

/// POST /tags/{tag_id}/edit — a blank name goes back to the form.
pub async fn edit_tag(
    State(state): State<AppState>,
    Path(tag_id): Path<i64>,
    Form(form): Form<TagForm>,
) -> AppResult<Redirect> {
    let outcome = blocking(&state, move |app| ops::tags::edit_tag(&app.db, tag_id, &form)).await?;

    Ok(match outcome {
        TagRename::Renamed => Redirect::to(&paths::tag(tag_id)),
        TagRename::Unchanged => Redirect::to(&paths::tag_edit(tag_id)),
    })
}
