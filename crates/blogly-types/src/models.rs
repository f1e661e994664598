use std::fmt;

use chrono::{DateTime, Utc};

/// Avatar stored for users created without an image.
pub const DEFAULT_IMAGE_URL: &str =
    "https://cdn.pixabay.com/photo/2015/10/05/22/37/blank-profile-picture-973460_960_720.png";

/// Title stored for posts saved with a blank title.
pub const UNTITLED_POST: &str = "Untitled Post";

/// Display format for post timestamps, e.g. `Thursday, March 07, 2024, 03:42 PM`.
pub const POST_DATE_FORMAT: &str = "%A, %B %d, %Y, %I:%M %p";

/// The three entity kinds that own rows in the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    User,
    Post,
    Tag,
}

impl EntityKind {
    /// List view that a request falls back to when a lookup of this kind misses.
    pub fn list_path(self) -> &'static str {
        match self {
            Self::User | Self::Post => "/users",
            Self::Tag => "/tags",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::User => "user",
            Self::Post => "post",
            Self::Tag => "tag",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
}

impl Post {
    pub fn display_date(&self) -> String {
        self.created_at.format(POST_DATE_FORMAT).to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}
