//! The Tutorial entity as stored in the `tutorials` table and exchanged as JSON.

use serde::{Deserialize, Deserializer, Serialize};

/// One row of the `tutorials` table.
///
/// Missing JSON fields fall back to their defaults and `null` strings become
/// empty, so every persisted record has all four fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct Tutorial {
    pub id: i64,
    #[serde(deserialize_with = "null_as_empty")]
    pub title: String,
    #[serde(deserialize_with = "null_as_empty")]
    pub description: String,
    pub published: bool,
}

impl Tutorial {
    /// Unsaved record; the store assigns the id.
    pub fn new(title: impl Into<String>, description: impl Into<String>, published: bool) -> Self {
        Tutorial {
            id: 0,
            title: title.into(),
            description: description.into(),
            published,
        }
    }

    /// True when no store has assigned an id yet.
    pub fn is_new(&self) -> bool {
        self.id <= 0
    }

    /// Replace the mutable fields with those of `patch`. The id is kept.
    pub fn overwrite_from(&mut self, patch: &Tutorial) {
        self.title.clone_from(&patch.title);
        self.description.clone_from(&patch.description);
        self.published = patch.published;
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
