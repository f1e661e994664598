use serde::Deserialize;

use crate::action::Action;

// Request bodies are `application/x-www-form-urlencoded`. Every field defaults
// so that a missing value reaches the operation as blank and is judged there.

// -- Users --

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserForm {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub image_url: String,
}

// -- Posts --

#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// Names of the tags checked on the form; repeated `tag` keys collect here.
    #[serde(default, rename = "tag")]
    pub tags: Vec<String>,
}

// -- Tags --

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TagForm {
    #[serde(default)]
    pub tag_name: String,
}

// -- Detail page buttons --

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionForm {
    #[serde(default, rename = "ACTION")]
    pub action: Action,
}
