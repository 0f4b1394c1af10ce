//! Builds parameterized SELECT, INSERT, UPDATE, DELETE for the tutorials table.

/// Columns in wire order; every statement selects or returns exactly these.
pub const COLUMNS: &str = "\"id\", \"title\", \"description\", \"published\"";

pub const TABLE_NAME: &str = "tutorials";

/// Quote identifier for PostgreSQL (safe: only from config).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Schema-qualified tutorials table.
#[derive(Clone, Debug)]
pub struct TutorialTable {
    qualified: String,
    schema: String,
}

impl TutorialTable {
    pub fn new(schema: &str) -> Self {
        TutorialTable {
            qualified: format!("{}.{}", quoted(schema), quoted(TABLE_NAME)),
            schema: schema.to_string(),
        }
    }

    pub fn qualified(&self) -> &str {
        &self.qualified
    }

    pub fn create_schema(&self) -> String {
        format!("CREATE SCHEMA IF NOT EXISTS {}", quoted(&self.schema))
    }

    pub fn create_table(&self) -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (\
             \"id\" BIGSERIAL PRIMARY KEY, \
             \"title\" TEXT NOT NULL DEFAULT '', \
             \"description\" TEXT NOT NULL DEFAULT '', \
             \"published\" BOOLEAN NOT NULL DEFAULT FALSE)",
            self.qualified
        )
    }

    pub fn select_all(&self) -> String {
        format!("SELECT {} FROM {} ORDER BY \"id\"", COLUMNS, self.qualified)
    }

    /// Caller binds the id as $1.
    pub fn select_by_id(&self) -> String {
        format!("SELECT {} FROM {} WHERE \"id\" = $1", COLUMNS, self.qualified)
    }

    /// Caller binds `like_contains_pattern(substring)` as $1.
    pub fn select_by_title_containing(&self) -> String {
        format!(
            "SELECT {} FROM {} WHERE \"title\" LIKE $1 ESCAPE '\\' ORDER BY \"id\"",
            COLUMNS, self.qualified
        )
    }

    /// Caller binds the flag as $1.
    pub fn select_by_published(&self) -> String {
        format!(
            "SELECT {} FROM {} WHERE \"published\" = $1 ORDER BY \"id\"",
            COLUMNS, self.qualified
        )
    }

    /// Binds: $1 title, $2 description, $3 published. The id comes from the sequence.
    pub fn insert(&self) -> String {
        format!(
            "INSERT INTO {} (\"title\", \"description\", \"published\") VALUES ($1, $2, $3) RETURNING {}",
            self.qualified, COLUMNS
        )
    }

    /// Binds: $1 id, $2 title, $3 description, $4 published.
    pub fn update_by_id(&self) -> String {
        format!(
            "UPDATE {} SET \"title\" = $2, \"description\" = $3, \"published\" = $4 WHERE \"id\" = $1 RETURNING {}",
            self.qualified, COLUMNS
        )
    }

    pub fn delete_by_id(&self) -> String {
        format!("DELETE FROM {} WHERE \"id\" = $1", self.qualified)
    }

    pub fn delete_all(&self) -> String {
        format!("DELETE FROM {}", self.qualified)
    }
}

/// LIKE pattern matching `needle` literally anywhere in the column (escape char is `\`).
pub fn like_contains_pattern(needle: &str) -> String {
    let mut out = String::with_capacity(needle.len() + 2);
    out.push('%');
    for ch in needle.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(ch);
    }
    out.push('%');
    out
}
