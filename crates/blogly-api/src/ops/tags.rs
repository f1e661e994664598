use blogly_db::{Database, NewTag, StoreError};
use blogly_types::forms::TagForm;
use blogly_types::{Post, Tag};
use tracing::{info, warn};

use crate::error::AppResult;

#[derive(Debug, Clone)]
pub struct TagDetail {
    pub tag: Tag,
    pub posts: Vec<Post>,
}

/// Result of submitting the new-tag form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagCreation {
    Created(i64),
    /// Nothing was written: the name was blank, or taken by `existing`.
    Rejected { existing: Option<i64> },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagRename {
    Renamed,
    /// Blank name; the tag was left as it was.
    Unchanged,
}

pub fn list_tags(db: &Database) -> AppResult<Vec<Tag>> {
    db.transaction(|store| Ok(store.list(None)?))
}

pub fn get_tag(db: &Database, tag_id: i64) -> AppResult<Tag> {
    db.transaction(|store| Ok(store.get(tag_id)?))
}

pub fn tag_detail(db: &Database, tag_id: i64) -> AppResult<TagDetail> {
    db.transaction(|store| {
        let tag: Tag = store.get(tag_id)?;
        let posts = store.posts_for_tag(tag_id)?;
        Ok(TagDetail { tag, posts })
    })
}

/// Blank or duplicate (exact, case-sensitive) names are a silent no-op.
pub fn create_tag(db: &Database, form: &TagForm) -> AppResult<TagCreation> {
    let name = form.tag_name.trim();
    if name.is_empty() {
        warn!("Rejected blank tag name");
        return Ok(TagCreation::Rejected { existing: None });
    }

    let outcome = db.transaction(|store| {
        if let Some(existing) = store.find_tag_by_name(name)? {
            return Ok::<_, StoreError>(TagCreation::Rejected {
                existing: Some(existing.id),
            });
        }
        let id = store.insert(&NewTag {
            name: name.to_string(),
        })?;
        Ok(TagCreation::Created(id))
    })?;

    match outcome {
        TagCreation::Created(id) => info!("Created tag {} ({:?})", id, name),
        TagCreation::Rejected { .. } => warn!("Rejected duplicate tag name {:?}", name),
    }
    Ok(outcome)
}

/// Rename a tag. Unlike creation there is no duplicate pre-check here; a name
/// already used by another tag is refused by the unique index and surfaces as
/// a constraint violation.
pub fn edit_tag(db: &Database, tag_id: i64, form: &TagForm) -> AppResult<TagRename> {
    let name = form.tag_name.trim();

    let outcome = db.transaction(|store| {
        let mut tag: Tag = store.get(tag_id)?;
        if name.is_empty() {
            return Ok::<_, StoreError>(TagRename::Unchanged);
        }
        tag.name = name.to_string();
        store.update(&tag)?;
        Ok(TagRename::Renamed)
    })?;

    if outcome == TagRename::Renamed {
        info!("Renamed tag {} to {:?}", tag_id, name);
    }
    Ok(outcome)
}

/// Removes the tag and its post links; the posts stay.
pub fn delete_tag(db: &Database, tag_id: i64) -> AppResult<()> {
    db.transaction(|store| store.delete::<Tag>(tag_id))?;
    info!("Deleted tag {}", tag_id);
    Ok(())
}
