//! Row mapping between SQLite tables and the domain models in `blogly-types`.

use blogly_types::{EntityKind, Post, Tag, User};
use chrono::{DateTime, NaiveDateTime, Utc};
use rusqlite::types::Type;
use rusqlite::{Connection, Row};

/// A stored entity with a surrogate `id` and a fixed column set.
pub trait Record: Sized {
    const KIND: EntityKind;
    const TABLE: &'static str;
    /// Column list in the order `from_row` reads it; always starts with `id`.
    const COLUMNS: &'static str;

    fn id(&self) -> i64;

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self>;

    /// Overwrite every mutable column of the row with this value's fields.
    /// Returns the number of rows touched.
    fn write_changes(&self, conn: &Connection) -> rusqlite::Result<usize>;
}

/// Field set for a row that does not exist yet; the store assigns the id.
pub trait NewRecord {
    type Record: Record;

    fn insert_into(&self, conn: &Connection) -> rusqlite::Result<()>;
}

// -- Users --

impl Record for User {
    const KIND: EntityKind = EntityKind::User;
    const TABLE: &'static str = "users";
    const COLUMNS: &'static str = "id, first_name, last_name, image_url";

    fn id(&self) -> i64 {
        self.id
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(User {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            image_url: row.get(3)?,
        })
    }

    fn write_changes(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(
            "UPDATE users SET first_name = ?1, last_name = ?2, image_url = ?3 WHERE id = ?4",
            rusqlite::params![self.first_name, self.last_name, self.image_url, self.id],
        )
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub image_url: String,
}

impl NewRecord for NewUser {
    type Record = User;

    fn insert_into(&self, conn: &Connection) -> rusqlite::Result<()> {
        conn.execute(
            "INSERT INTO users (first_name, last_name, image_url) VALUES (?1, ?2, ?3)",
            (&self.first_name, &self.last_name, &self.image_url),
        )?;
        Ok(())
    }
}

// -- Posts --

impl Record for Post {
    const KIND: EntityKind = EntityKind::Post;
    const TABLE: &'static str = "posts";
    const COLUMNS: &'static str = "id, title, content, created_at, user_id";

    fn id(&self) -> i64 {
        self.id
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        let created_at: String = row.get(3)?;
        Ok(Post {
            id: row.get(0)?,
            title: row.get(1)?,
            content: row.get(2)?,
            created_at: parse_timestamp(3, &created_at)?,
            user_id: row.get(4)?,
        })
    }

    // created_at and user_id are fixed at creation.
    fn write_changes(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(
            "UPDATE posts SET title = ?1, content = ?2 WHERE id = ?3",
            rusqlite::params![self.title, self.content, self.id],
        )
    }
}

#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: Option<String>,
    pub created_at: DateTime<Utc>,
    pub user_id: i64,
}

impl NewRecord for NewPost {
    type Record = Post;

    fn insert_into(&self, conn: &Connection) -> rusqlite::Result<()> {
        conn.execute(
            "INSERT INTO posts (title, content, created_at, user_id) VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
                self.title,
                self.content,
                self.created_at.to_rfc3339(),
                self.user_id
            ],
        )?;
        Ok(())
    }
}

// -- Tags --

impl Record for Tag {
    const KIND: EntityKind = EntityKind::Tag;
    const TABLE: &'static str = "tags";
    const COLUMNS: &'static str = "id, name";

    fn id(&self) -> i64 {
        self.id
    }

    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Tag {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    }

    fn write_changes(&self, conn: &Connection) -> rusqlite::Result<usize> {
        conn.execute(
            "UPDATE tags SET name = ?1 WHERE id = ?2",
            rusqlite::params![self.name, self.id],
        )
    }
}

#[derive(Debug, Clone)]
pub struct NewTag {
    pub name: String,
}

impl NewRecord for NewTag {
    type Record = Tag;

    fn insert_into(&self, conn: &Connection) -> rusqlite::Result<()> {
        conn.execute("INSERT INTO tags (name) VALUES (?1)", [&self.name])?;
        Ok(())
    }
}

/// Timestamps are written as RFC 3339. Rows filled by the column default
/// carry SQLite's "YYYY-MM-DD HH:MM:SS" instead, which is read as naive UTC.
fn parse_timestamp(column: usize, value: &str) -> rusqlite::Result<DateTime<Utc>> {
    value
        .parse::<DateTime<Utc>>()
        .or_else(|_| {
            NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S").map(|ndt| ndt.and_utc())
        })
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(column, Type::Text, Box::new(e)))
}
