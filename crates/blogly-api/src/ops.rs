//! Domain operations. Each public function is one atomic unit of work against
//! the store, run through [`blogly_db::Database::transaction`].

pub mod posts;
pub mod tags;
pub mod users;

use crate::error::{AppError, AppResult};

/// Reject a field that is empty after trimming. The value itself is kept as
/// submitted.
fn required<'a>(value: &'a str, label: &str) -> AppResult<&'a str> {
    if value.trim().is_empty() {
        return Err(AppError::validation(format!("{} is required", label)));
    }
    Ok(value)
}

#[cfg(test)]
pub(crate) mod fixtures {
    use blogly_db::Database;
    use blogly_types::forms::{PostForm, TagForm, UserForm};

    use super::{posts, tags, users};

    pub fn db() -> Database {
        Database::open_in_memory().unwrap()
    }

    pub fn user(db: &Database, first: &str, last: &str) -> i64 {
        let form = UserForm {
            first_name: first.into(),
            last_name: last.into(),
            image_url: String::new(),
        };
        users::create_user(db, &form, "https://example.com/default.png").unwrap()
    }

    pub fn tag(db: &Database, name: &str) -> i64 {
        let form = TagForm {
            tag_name: name.into(),
        };
        match tags::create_tag(db, &form).unwrap() {
            tags::TagCreation::Created(id) => id,
            other => panic!("tag {} not created: {:?}", name, other),
        }
    }

    pub fn post(db: &Database, user_id: i64, title: &str, tags: &[&str]) -> i64 {
        let form = PostForm {
            title: title.into(),
            content: "Some content".into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
        };
        posts::create_post(db, user_id, &form).unwrap().id
    }
}
