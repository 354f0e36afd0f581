//! # SmartPantry
//!
//! `smartpantry` is a small HTTP service that tracks pantry items and their
//! expiry dates. It exposes the pantry over JSON (`/pantry`, `/items`) and
//! answers `GET /alerts` with the names of items expiring within a
//! configurable window (7 days by default), which is what the bundled
//! client-side conveniences in [`ui`] consume.
//!
//! ## Pieces
//!
//! - [`api`]: the axum router, middleware stack and handlers.
//! - [`pantry`]: the domain model (expiry classification, stats) and the
//!   `PostgreSQL` store behind it.
//! - [`ui`]: client-side helpers — the password-visibility toggle and the
//!   one-shot expiry notifier that builds the user-facing alert message.
//! - [`cli`]: clap command, dispatch and the `server`/`alerts` actions.
//!
//! ## Expiry lifecycle
//!
//! Expired rows (expiry strictly before today) are deleted when the pantry
//! view is requested; the purge count is reported in that view's stats.
//! `GET /alerts` never reports already-expired items, only those inside the
//! `[today, today + window]` range.

pub mod api;
pub mod cli;
pub mod pantry;
pub mod ui;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{ensure, Context, Result};
    use std::fs;
    use std::path::{Path, PathBuf};

    #[test]
    fn test_git_commit_hash_format() {
        if GIT_COMMIT_HASH == "unknown" {
            // Acceptable in non-git build environments
            return;
        }
        assert!(
            GIT_COMMIT_HASH.chars().all(|c| c.is_ascii_hexdigit()),
            "GIT_COMMIT_HASH should be a hex string, got: {GIT_COMMIT_HASH}"
        );
        assert!(
            GIT_COMMIT_HASH.len() >= 7,
            "GIT_COMMIT_HASH should be at least 7 characters long, got: {GIT_COMMIT_HASH}"
        );
    }

    #[test]
    fn test_user_agent_format() {
        assert!(APP_USER_AGENT.starts_with("smartpantry/"));
    }

    // Normalize SQL to avoid brittle formatting checks in schema tests.
    fn canonicalize_sql(sql: &str) -> String {
        sql.chars()
            .filter(|ch| !ch.is_whitespace())
            .map(|ch| ch.to_ascii_lowercase())
            .collect()
    }

    fn canonical_schema() -> Result<(PathBuf, String)> {
        let path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("sql/schema.sql");
        let sql = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read SQL file at {}", path.display()))?;
        let canonical = canonicalize_sql(&sql);
        Ok((path, canonical))
    }

    fn assert_contains(path: &Path, canonical: &str, needle: &str) -> Result<()> {
        ensure!(
            canonical.contains(needle),
            "Expected {needle} in {}",
            path.display()
        );
        Ok(())
    }

    #[test]
    fn schema_sql_items_table() -> Result<()> {
        let (path, canonical) = canonical_schema()?;
        assert_contains(&path, &canonical, "createtableifnotexistsitems")?;
        assert_contains(&path, &canonical, "iduuidprimarykeydefaultgen_random_uuid()")?;
        assert_contains(&path, &canonical, "expirydatenotnull")
    }

    #[test]
    fn schema_sql_image_fallback_matches_code() -> Result<()> {
        let (path, canonical) = canonical_schema()?;
        let expected = canonicalize_sql(&format!(
            "default '{}'",
            crate::pantry::images::FALLBACK_IMAGE
        ));
        assert_contains(&path, &canonical, &expected)
    }

    #[test]
    fn schema_sql_has_no_user_column() -> Result<()> {
        // Authentication is out of scope; the schema must stay global.
        let (path, canonical) = canonical_schema()?;
        ensure!(
            !canonical.contains("username") && !canonical.contains("userid"),
            "Unexpected user column in {}",
            path.display()
        );
        Ok(())
    }
}
