use std::sync::Arc;

use axum::response::Html;
use blogly_db::Database;
use blogly_types::models::DEFAULT_IMAGE_URL;
use serde::Serialize;

use crate::error::AppResult;
use crate::views::{MiniJinjaRenderer, ViewRenderer};

pub type AppState = Arc<AppStateInner>;

pub struct AppStateInner {
    pub db: Database,
    pub views: Box<dyn ViewRenderer>,
    /// Avatar given to users created without an image.
    pub default_image_url: String,
}

impl AppStateInner {
    pub fn new(db: Database) -> AppResult<Self> {
        Ok(Self {
            db,
            views: Box::new(MiniJinjaRenderer::new()?),
            default_image_url: DEFAULT_IMAGE_URL.to_string(),
        })
    }

    pub fn with_default_image_url(mut self, url: impl Into<String>) -> Self {
        self.default_image_url = url.into();
        self
    }

    pub fn render<C: Serialize>(&self, template: &str, context: &C) -> AppResult<Html<String>> {
        let body = self
            .views
            .render(template, minijinja::Value::from_serialize(context))?;
        Ok(Html(body))
    }
}

/// Run blocking store work off the async runtime.
pub async fn blocking<F, T>(state: &AppState, f: F) -> AppResult<T>
where
    F: FnOnce(&AppStateInner) -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    let state = state.clone();
    tokio::task::spawn_blocking(move || f(&state)).await?
}
