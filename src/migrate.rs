use anyhow::Result;

use crate::config::Config;
use crate::store;

pub async fn run_migrations(config: &Config) -> Result<()> {
    let pool = store::connect_pool(config).await?;

    // One row per physical copy. Content duplicates across rows are
    // expected — identity lookup is what surfaces them.
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS files (
            name TEXT NOT NULL,
            path TEXT NOT NULL,
            size INTEGER NOT NULL,
            host TEXT NOT NULL,
            created TEXT NOT NULL,
            modified TEXT NOT NULL,
            sha256 TEXT NOT NULL
        )
        "#,
    )
    .execute(&pool)
    .await?;

    // Identity lookups filter on (size, sha256).
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_files_identity ON files(size, sha256)")
        .execute(&pool)
        .await?;

    if config.registry.enforce_natural_key {
        sqlx::query(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_files_natural_key ON files(path, name, host)",
        )
        .execute(&pool)
        .await?;
    }

    pool.close().await;
    Ok(())
}
