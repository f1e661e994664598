use blogly_db::{Database, Filter, NewUser};
use blogly_types::forms::UserForm;
use blogly_types::{Post, User};
use tracing::info;

use super::required;
use crate::error::AppResult;

/// A user together with the posts they own, in creation order.
#[derive(Debug, Clone)]
pub struct UserDetail {
    pub user: User,
    pub posts: Vec<Post>,
}

pub fn list_users(db: &Database) -> AppResult<Vec<User>> {
    db.transaction(|store| Ok(store.list(None)?))
}

pub fn user_detail(db: &Database, user_id: i64) -> AppResult<UserDetail> {
    db.transaction(|store| {
        let user: User = store.get(user_id)?;
        let posts = store.list(Some(Filter::user_id(user_id)))?;
        Ok(UserDetail { user, posts })
    })
}

pub fn get_user(db: &Database, user_id: i64) -> AppResult<User> {
    db.transaction(|store| Ok(store.get(user_id)?))
}

/// Names are stored as submitted. A blank image falls back to
/// `default_image_url`; anything else, however large, is kept verbatim.
pub fn create_user(db: &Database, form: &UserForm, default_image_url: &str) -> AppResult<i64> {
    let first_name = required(&form.first_name, "First name")?;
    let last_name = required(&form.last_name, "Last name")?;
    let image_url = if form.image_url.trim().is_empty() {
        default_image_url
    } else {
        form.image_url.as_str()
    };

    let new_user = NewUser {
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        image_url: image_url.to_string(),
    };

    let id = db.transaction(|store| store.insert(&new_user))?;
    info!("Created user {} ({} {})", id, new_user.first_name, new_user.last_name);
    Ok(id)
}

/// Full overwrite of all three fields. The image is stored as given, even
/// when empty; the default only applies at creation.
pub fn edit_user(db: &Database, user_id: i64, form: &UserForm) -> AppResult<()> {
    db.transaction(|store| -> AppResult<()> {
        let mut user: User = store.get(user_id)?;

        user.first_name = required(&form.first_name, "First name")?.to_string();
        user.last_name = required(&form.last_name, "Last name")?.to_string();
        user.image_url = form.image_url.clone();

        store.update(&user)?;
        Ok(())
    })?;

    info!("Updated user {}", user_id);
    Ok(())
}

/// Removes the user, their posts and those posts' tag links. Tags survive.
pub fn delete_user(db: &Database, user_id: i64) -> AppResult<()> {
    db.transaction(|store| store.delete::<User>(user_id))?;
    info!("Deleted user {}", user_id);
    Ok(())
}
