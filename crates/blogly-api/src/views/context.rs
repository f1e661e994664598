use blogly_types::forms::UserForm;
use blogly_types::{Post, Tag, User};
use serde::Serialize;

use crate::ops::posts::{PostDetail, TagChoice};
use crate::ops::tags::TagDetail;
use crate::ops::users::UserDetail;
use crate::paths;

// -- Shared fragments --

#[derive(Debug, Clone, Serialize)]
pub struct UserView {
    id: i64,
    first_name: String,
    last_name: String,
    full_name: String,
    image_url: String,
    url: String,
}

impl From<&User> for UserView {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            full_name: user.full_name(),
            image_url: user.image_url.clone(),
            url: paths::user(user.id),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostView {
    id: i64,
    title: String,
    content: Option<String>,
    created: String,
    url: String,
}

impl From<&Post> for PostView {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            created: post.display_date(),
            url: paths::post(post.user_id, post.id, &post.title),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TagView {
    id: i64,
    name: String,
    url: String,
}

impl From<&Tag> for TagView {
    fn from(tag: &Tag) -> Self {
        Self {
            id: tag.id,
            name: tag.name.clone(),
            url: paths::tag(tag.id),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TagCheckbox {
    name: String,
    checked: bool,
}

impl From<&TagChoice> for TagCheckbox {
    fn from(choice: &TagChoice) -> Self {
        Self {
            name: choice.tag.name.clone(),
            checked: choice.checked,
        }
    }
}

/// Values shown in a user form; refilled from the submission after a
/// validation failure.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UserFields {
    first_name: String,
    last_name: String,
    image_url: String,
}

impl From<&UserForm> for UserFields {
    fn from(form: &UserForm) -> Self {
        Self {
            first_name: form.first_name.clone(),
            last_name: form.last_name.clone(),
            image_url: form.image_url.clone(),
        }
    }
}

impl From<&User> for UserFields {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            image_url: user.image_url.clone(),
        }
    }
}

// -- Users --

#[derive(Debug, Clone, Serialize)]
pub struct UsersPage {
    users: Vec<UserView>,
    fields: UserFields,
    error: Option<String>,
}

impl UsersPage {
    pub fn new(users: &[User]) -> Self {
        Self {
            users: users.iter().map(UserView::from).collect(),
            fields: UserFields::default(),
            error: None,
        }
    }

    pub fn rejected(users: &[User], form: &UserForm, error: String) -> Self {
        Self {
            fields: form.into(),
            error: Some(error),
            ..Self::new(users)
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserPage {
    user: UserView,
    posts: Vec<PostView>,
}

impl From<&UserDetail> for UserPage {
    fn from(detail: &UserDetail) -> Self {
        Self {
            user: (&detail.user).into(),
            posts: detail.posts.iter().map(PostView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct UserEditPage {
    user: UserView,
    fields: UserFields,
    action_url: String,
    error: Option<String>,
}

impl UserEditPage {
    pub fn new(user: &User) -> Self {
        Self {
            user: user.into(),
            fields: user.into(),
            action_url: paths::user_edit(user.id),
            error: None,
        }
    }

    pub fn rejected(user: &User, form: &UserForm, error: String) -> Self {
        Self {
            fields: form.into(),
            error: Some(error),
            ..Self::new(user)
        }
    }
}

// -- Posts --

#[derive(Debug, Clone, Serialize)]
pub struct NewPostPage {
    user: UserView,
    tags: Vec<TagCheckbox>,
    action_url: String,
}

impl NewPostPage {
    pub fn new(user: &User, choices: &[TagChoice]) -> Self {
        Self {
            user: user.into(),
            tags: choices.iter().map(TagCheckbox::from).collect(),
            action_url: paths::new_post(user.id),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostPage {
    post: PostView,
    author: UserView,
    tags: Vec<TagView>,
}

impl From<&PostDetail> for PostPage {
    fn from(detail: &PostDetail) -> Self {
        Self {
            post: (&detail.post).into(),
            author: (&detail.author).into(),
            tags: detail.tags.iter().map(TagView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PostEditPage {
    post: PostView,
    author: UserView,
    tags: Vec<TagCheckbox>,
    action_url: String,
}

impl PostEditPage {
    pub fn new(detail: &PostDetail, choices: &[TagChoice]) -> Self {
        let post = &detail.post;
        Self {
            post: post.into(),
            author: (&detail.author).into(),
            tags: choices.iter().map(TagCheckbox::from).collect(),
            action_url: paths::post_edit(post.user_id, post.id, &post.title),
        }
    }
}

// -- Tags --

#[derive(Debug, Clone, Serialize)]
pub struct TagsPage {
    tags: Vec<TagView>,
}

impl TagsPage {
    pub fn new(tags: &[Tag]) -> Self {
        Self {
            tags: tags.iter().map(TagView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TagPage {
    tag: TagView,
    posts: Vec<PostView>,
}

impl From<&TagDetail> for TagPage {
    fn from(detail: &TagDetail) -> Self {
        Self {
            tag: (&detail.tag).into(),
            posts: detail.posts.iter().map(PostView::from).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TagEditPage {
    tag: TagView,
    action_url: String,
}

impl TagEditPage {
    pub fn new(tag: &Tag) -> Self {
        Self {
            tag: tag.into(),
            action_url: paths::tag_edit(tag.id),
        }
    }
}
