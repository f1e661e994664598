//! The button row on every detail page posts an `ACTION` field. Users, posts
//! and tags all answer it the same way, so the policy lives here once and each
//! resource only supplies its paths and its delete.

use axum::response::Redirect;
use blogly_db::Database;
use blogly_types::Action;
use tracing::debug;

use crate::error::AppResult;
use crate::ops;
use crate::paths;

pub trait ActionTarget {
    /// Where `delete` and unrecognized actions land.
    fn list_path(&self) -> String;
    fn edit_path(&self) -> String;
    /// Only users can start a new post.
    fn new_post_path(&self) -> Option<String> {
        None
    }
    fn delete(&self, db: &Database) -> AppResult<()>;
}

pub fn dispatch<T: ActionTarget>(db: &Database, target: &T, action: Action) -> AppResult<Redirect> {
    let location = match action {
        Action::Edit => target.edit_path(),
        Action::Delete => {
            target.delete(db)?;
            target.list_path()
        }
        Action::NewPost => target.new_post_path().unwrap_or_else(|| target.list_path()),
        Action::Unknown => {
            debug!("Unrecognized action, falling back to {}", target.list_path());
            target.list_path()
        }
    };
    Ok(Redirect::to(&location))
}

pub struct UserTarget {
    pub user_id: i64,
}

impl ActionTarget for UserTarget {
    fn list_path(&self) -> String {
        paths::USERS.to_string()
    }

    fn edit_path(&self) -> String {
        paths::user_edit(self.user_id)
    }

    fn new_post_path(&self) -> Option<String> {
        Some(paths::new_post(self.user_id))
    }

    fn delete(&self, db: &Database) -> AppResult<()> {
        ops::users::delete_user(db, self.user_id)
    }
}

/// A post's list view is its author's page.
pub struct PostTarget {
    pub user_id: i64,
    pub post_id: i64,
    pub title: String,
}

impl ActionTarget for PostTarget {
    fn list_path(&self) -> String {
        paths::user(self.user_id)
    }

    fn edit_path(&self) -> String {
        paths::post_edit(self.user_id, self.post_id, &self.title)
    }

    fn delete(&self, db: &Database) -> AppResult<()> {
        ops::posts::delete_post(db, self.post_id)
    }
}

pub struct TagTarget {
    pub tag_id: i64,
}

impl ActionTarget for TagTarget {
    fn list_path(&self) -> String {
        paths::TAGS.to_string()
    }

    fn edit_path(&self) -> String {
        paths::tag_edit(self.tag_id)
    }

    fn delete(&self, db: &Database) -> AppResult<()> {
        ops::tags::delete_tag(db, self.tag_id)
    }
}
