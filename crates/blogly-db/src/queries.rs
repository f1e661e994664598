use blogly_types::{Post, Tag};
use rusqlite::Connection;
use tracing::debug;

use crate::models::{NewRecord, Record};
use crate::{StoreError, StoreResult};

/// Equality predicate on an integer column, e.g. posts by owner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Filter {
    column: &'static str,
    value: i64,
}

impl Filter {
    pub fn user_id(value: i64) -> Self {
        Self {
            column: "user_id",
            value,
        }
    }
}

/// Table operations against one open transaction.
///
/// Obtained from [`crate::Database::transaction`]; never outlives it.
pub struct Store<'c> {
    conn: &'c Connection,
}

impl<'c> Store<'c> {
    pub(crate) fn new(conn: &'c Connection) -> Self {
        Self { conn }
    }

    // -- Generic row access --

    /// Persist a new row and return the id the database assigned to it.
    pub fn insert<N: NewRecord>(&self, new: &N) -> StoreResult<i64> {
        new.insert_into(self.conn)?;
        let id = self.conn.last_insert_rowid();
        debug!("Inserted {} {}", N::Record::KIND, id);
        Ok(id)
    }

    pub fn get<R: Record>(&self, id: i64) -> StoreResult<R> {
        self.find::<R>(id)?
            .ok_or_else(|| StoreError::not_found(R::KIND, id))
    }

    pub fn find<R: Record>(&self, id: i64) -> StoreResult<Option<R>> {
        let sql = format!("SELECT {} FROM {} WHERE id = ?1", R::COLUMNS, R::TABLE);
        self.conn.query_row(&sql, [id], R::from_row).optional()
    }

    /// All rows of a kind in insertion order, optionally narrowed by `filter`.
    pub fn list<R: Record>(&self, filter: Option<Filter>) -> StoreResult<Vec<R>> {
        match filter {
            Some(filter) => {
                let sql = format!(
                    "SELECT {} FROM {} WHERE {} = ?1 ORDER BY id",
                    R::COLUMNS,
                    R::TABLE,
                    filter.column
                );
                self.collect(&sql, [filter.value])
            }
            None => {
                let sql = format!("SELECT {} FROM {} ORDER BY id", R::COLUMNS, R::TABLE);
                self.collect(&sql, [])
            }
        }
    }

    /// Overwrite all mutable columns of an existing row.
    pub fn update<R: Record>(&self, record: &R) -> StoreResult<()> {
        match record.write_changes(self.conn)? {
            0 => Err(StoreError::not_found(R::KIND, record.id())),
            _ => Ok(()),
        }
    }

    /// Remove a row. Foreign keys cascade: a user takes its posts, and posts
    /// or tags take their `post_tags` rows with them.
    pub fn delete<R: Record>(&self, id: i64) -> StoreResult<()> {
        let sql = format!("DELETE FROM {} WHERE id = ?1", R::TABLE);
        match self.conn.execute(&sql, [id])? {
            0 => Err(StoreError::not_found(R::KIND, id)),
            _ => {
                debug!("Deleted {} {}", R::KIND, id);
                Ok(())
            }
        }
    }

    // -- Post/tag association --

    /// Link a post and a tag. Linking an existing pair is a no-op.
    pub fn associate(&self, post_id: i64, tag_id: i64) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR IGNORE INTO post_tags (post_id, tag_id) VALUES (?1, ?2)",
            [post_id, tag_id],
        )?;
        Ok(())
    }

    pub fn dissociate_all(&self, post_id: i64) -> StoreResult<()> {
        self.conn
            .execute("DELETE FROM post_tags WHERE post_id = ?1", [post_id])?;
        Ok(())
    }

    pub fn post_has_tag(&self, post_id: i64, tag_id: i64) -> StoreResult<bool> {
        let found = self
            .conn
            .query_row(
                "SELECT 1 FROM post_tags WHERE post_id = ?1 AND tag_id = ?2",
                [post_id, tag_id],
                |_| Ok(()),
            )
            .optional()?;
        Ok(found.is_some())
    }

    pub fn tags_for_post(&self, post_id: i64) -> StoreResult<Vec<Tag>> {
        self.collect(
            "SELECT t.id, t.name
             FROM tags t
             JOIN post_tags pt ON pt.tag_id = t.id
             WHERE pt.post_id = ?1
             ORDER BY t.id",
            [post_id],
        )
    }

    pub fn posts_for_tag(&self, tag_id: i64) -> StoreResult<Vec<Post>> {
        self.collect(
            "SELECT p.id, p.title, p.content, p.created_at, p.user_id
             FROM posts p
             JOIN post_tags pt ON pt.post_id = p.id
             WHERE pt.tag_id = ?1
             ORDER BY p.id",
            [tag_id],
        )
    }

    /// Exact, case-sensitive name match.
    pub fn find_tag_by_name(&self, name: &str) -> StoreResult<Option<Tag>> {
        let sql = format!("SELECT {} FROM tags WHERE name = ?1", Tag::COLUMNS);
        self.conn.query_row(&sql, [name], Tag::from_row).optional()
    }

    fn collect<R: Record, P: rusqlite::Params>(&self, sql: &str, params: P) -> StoreResult<Vec<R>> {
        let mut stmt = self.conn.prepare(sql)?;
        let rows = stmt
            .query_map(params, R::from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

/// Extension trait for optional query results
trait OptionalExt<T> {
    fn optional(self) -> StoreResult<Option<T>>;
}

impl<T> OptionalExt<T> for std::result::Result<T, rusqlite::Error> {
    fn optional(self) -> StoreResult<Option<T>> {
        match self {
            Ok(val) => Ok(Some(val)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
