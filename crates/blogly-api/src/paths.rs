//! Builders for the URLs the handlers redirect to and the templates link to.

pub const USERS: &str = "/users";
pub const TAGS: &str = "/tags";

pub fn user(user_id: i64) -> String {
    format!("/users/{}", user_id)
}

pub fn user_edit(user_id: i64) -> String {
    format!("/users/{}/edit", user_id)
}

pub fn new_post(user_id: i64) -> String {
    format!("/users/{}/new-post", user_id)
}

/// The title segment is decoration; lookups only use `post_id`.
pub fn post(user_id: i64, post_id: i64, title: &str) -> String {
    format!("/users/{}/post/{}/{}", user_id, post_id, title_segment(title))
}

/// Percent-encode a title for use as one path segment. A segment made only of
/// dots would be collapsed by the client as `.` or `..`, so its dots are
/// escaped too.
fn title_segment(title: &str) -> String {
    let encoded = urlencoding::encode(title);
    if !encoded.is_empty() && encoded.chars().all(|c| c == '.') {
        return encoded.replace('.', "%2E");
    }
    encoded.into_owned()
}

pub fn post_edit(user_id: i64, post_id: i64, title: &str) -> String {
    format!("{}/edit", post(user_id, post_id, title))
}

pub fn tag(tag_id: i64) -> String {
    format!("/tags/{}", tag_id)
}

pub fn tag_edit(tag_id: i64) -> String {
    format!("/tags/{}/edit", tag_id)
}
