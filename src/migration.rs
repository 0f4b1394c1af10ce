//! Database bootstrap: create the target database and the tutorials table if missing.

use crate::error::{AppError, ConfigError};
use crate::sql::TutorialTable;
use sqlx::postgres::PgConnectOptions;
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Create the database named in `database_url` if it does not exist yet.
/// Connects to the `postgres` maintenance database on the same server to do so.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let Some((admin, db_name)) = maintenance_target(database_url)? else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Idempotent: CREATE SCHEMA / CREATE TABLE IF NOT EXISTS.
pub async fn ensure_tutorials_table(pool: &PgPool, schema: &str) -> Result<(), AppError> {
    let table = TutorialTable::new(schema);
    sqlx::query(&table.create_schema()).execute(pool).await?;
    sqlx::query(&table.create_table()).execute(pool).await?;
    tracing::debug!(table = %table.qualified(), "tutorials table ready");
    Ok(())
}

/// Options for the `postgres` maintenance database plus the database to create.
/// `None` when the URL names no database or names `postgres` itself.
fn maintenance_target(database_url: &str) -> Result<Option<(PgConnectOptions, String)>, AppError> {
    let opts = PgConnectOptions::from_str(database_url).map_err(|e| ConfigError::Invalid {
        var: "DATABASE_URL",
        reason: e.to_string(),
    })?;
    let db_name = match opts.get_database() {
        Some(name) if !name.is_empty() && name != "postgres" => name.to_string(),
        _ => return Ok(None),
    };
    Ok(Some((opts.database("postgres"), db_name)))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn targets_maintenance_db_on_same_server() {
        let (admin, db) = maintenance_target("postgres://u:p@db.internal:5433/tutorials?sslmode=disable")
            .unwrap()
            .unwrap();
        assert_eq!(db, "tutorials");
        assert_eq!(admin.get_database(), Some("postgres"));
        assert_eq!(admin.get_host(), "db.internal");
        assert_eq!(admin.get_port(), 5433);
    }

    #[test]
    fn url_without_database_creates_nothing() {
        assert!(maintenance_target("postgres://user@db.internal:5432").unwrap().is_none());
        assert!(maintenance_target("postgres://user@db.internal:5432/postgres").unwrap().is_none());
    }

    #[test]
    fn slash_in_query_string_does_not_move_db_name() {
        let (admin, db) = maintenance_target("postgres://u@h/db?application_name=a/b").unwrap().unwrap();
        assert_eq!(db, "db");
        assert_eq!(admin.get_host(), "h");
        assert_eq!(admin.get_database(), Some("postgres"));
    }

    #[test]
    fn unparsable_url_is_a_config_error() {
        let err = maintenance_target("not a url").unwrap_err();
        assert!(matches!(err, AppError::Config(ConfigError::Invalid { var: "DATABASE_URL", .. })));
    }

    #[test]
    fn quotes_embedded_quotes() {
        assert_eq!(quote_ident("we\"ird"), "\"we\"\"ird\"");
    }
}
