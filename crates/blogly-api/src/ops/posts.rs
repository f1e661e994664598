use blogly_db::{Database, NewPost, Store, StoreError, StoreResult};
use blogly_types::forms::PostForm;
use blogly_types::models::UNTITLED_POST;
use blogly_types::{Post, Tag, User};
use chrono::Utc;
use tracing::{debug, info};

use crate::error::AppResult;

/// A post with its author and tags, as shown on the post page.
#[derive(Debug, Clone)]
pub struct PostDetail {
    pub post: Post,
    pub author: User,
    pub tags: Vec<Tag>,
}

/// One checkbox on a post form.
#[derive(Debug, Clone)]
pub struct TagChoice {
    pub tag: Tag,
    pub checked: bool,
}

fn title_or_default(title: &str) -> String {
    match title.trim() {
        "" => UNTITLED_POST.to_string(),
        trimmed => trimmed.to_string(),
    }
}

fn content_or_none(content: &str) -> Option<String> {
    match content.trim() {
        "" => None,
        trimmed => Some(trimmed.to_string()),
    }
}

/// Link the post to each named tag that exists. Unknown names are skipped;
/// this path never creates tags.
fn link_tags(store: &Store<'_>, post_id: i64, names: &[String]) -> StoreResult<()> {
    for name in names {
        match store.find_tag_by_name(name)? {
            Some(tag) => store.associate(post_id, tag.id)?,
            None => debug!("Skipping unknown tag {:?} for post {}", name, post_id),
        }
    }
    Ok(())
}

pub fn create_post(db: &Database, user_id: i64, form: &PostForm) -> AppResult<Post> {
    let post = db.transaction(|store| {
        store.get::<User>(user_id)?;

        let id = store.insert(&NewPost {
            title: title_or_default(&form.title),
            content: content_or_none(&form.content),
            created_at: Utc::now(),
            user_id,
        })?;
        link_tags(store, id, &form.tags)?;

        store.get::<Post>(id)
    })?;

    info!("User {} created post {} ({:?})", user_id, post.id, post.title);
    Ok(post)
}

/// Overwrite title and content, then replace the tag set: every existing link
/// is dropped before the submitted names are applied.
pub fn edit_post(db: &Database, post_id: i64, form: &PostForm) -> AppResult<Post> {
    let post = db.transaction(|store| {
        let mut post: Post = store.get(post_id)?;
        post.title = title_or_default(&form.title);
        post.content = content_or_none(&form.content);
        store.update(&post)?;

        store.dissociate_all(post_id)?;
        link_tags(store, post_id, &form.tags)?;

        Ok::<_, StoreError>(post)
    })?;

    info!("Updated post {} ({:?})", post.id, post.title);
    Ok(post)
}

pub fn delete_post(db: &Database, post_id: i64) -> AppResult<()> {
    db.transaction(|store| store.delete::<Post>(post_id))?;
    info!("Deleted post {}", post_id);
    Ok(())
}

/// Whether `post_id` is one of `user_id`'s posts. Guards the
/// `/users/{id}/post/...` URLs; a missing user is `NotFound`, a missing or
/// foreign post is `false`.
pub fn belongs_to(db: &Database, user_id: i64, post_id: i64) -> AppResult<bool> {
    db.transaction(|store| {
        store.get::<User>(user_id)?;
        let post = store.find::<Post>(post_id)?;
        Ok(post.is_some_and(|post| post.user_id == user_id))
    })
}

pub fn post_detail(db: &Database, post_id: i64) -> AppResult<PostDetail> {
    db.transaction(|store| {
        let post: Post = store.get(post_id)?;
        let author = store.get(post.user_id)?;
        let tags = store.tags_for_post(post_id)?;
        Ok(PostDetail { post, author, tags })
    })
}

/// Every tag, checked when `post_id` is already linked to it.
pub fn tag_choices(db: &Database, post_id: Option<i64>) -> AppResult<Vec<TagChoice>> {
    db.transaction(|store| {
        let tags: Vec<Tag> = store.list(None)?;
        tags.into_iter()
            .map(|tag| -> AppResult<TagChoice> {
                let checked = match post_id {
                    Some(post_id) => store.post_has_tag(post_id, tag.id)?,
                    None => false,
                };
                Ok(TagChoice { tag, checked })
            })
            .collect()
    })
}
