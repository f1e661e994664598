use serde::Deserialize;

/// Button submitted from a detail page in the `ACTION` form field.
///
/// Any value other than the known ones is kept as [`Action::Unknown`] so the
/// dispatcher can fall back to the list view instead of rejecting the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Action {
    Edit,
    Delete,
    NewPost,
    #[default]
    Unknown,
}

impl Action {
    pub fn parse(value: &str) -> Self {
        match value {
            "edit" => Self::Edit,
            "delete" => Self::Delete,
            "new-post" => Self::NewPost,
            _ => Self::Unknown,
        }
    }
}

impl From<String> for Action {
    fn from(value: String) -> Self {
        Self::parse(&value)
    }
}
