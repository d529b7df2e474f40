use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

const CREATE_FINDINGS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS hallazgos_kitteo (
        id TEXT PRIMARY KEY NOT NULL,
        fecha TEXT NOT NULL,
        area TEXT NOT NULL,
        no_orden TEXT NOT NULL,
        hallazgo TEXT NOT NULL,
        no_parte TEXT NOT NULL,
        no_parte_requerido TEXT,
        cantidad INTEGER NOT NULL DEFAULT 1,
        usuario TEXT NOT NULL,
        usuario_kitteo TEXT,
        created_at TEXT NOT NULL
    );
"#;

const CREATE_FINDINGS_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS idx_hallazgos_kitteo_created_at
        ON hallazgos_kitteo (created_at);
"#;

/// Строка подключения SQLite для файла
pub fn sqlite_url(db_file: &Path) -> anyhow::Result<String> {
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    Ok(format!("sqlite://{}{}?mode=rwc", prefix, normalized))
}

/// Открыть файл базы (каталог создаётся при необходимости) и
/// подготовить схему
pub async fn connect(db_file: &Path) -> anyhow::Result<DatabaseConnection> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let conn = Database::connect(sqlite_url(db_file)?).await?;
    ensure_schema(&conn).await?;
    Ok(conn)
}

/// Создать таблицу находок, если её ещё нет
pub async fn ensure_schema(conn: &DatabaseConnection) -> anyhow::Result<()> {
    for sql in [CREATE_FINDINGS_TABLE, CREATE_FINDINGS_INDEX] {
        conn.execute(Statement::from_string(DatabaseBackend::Sqlite, sql.to_string()))
            .await?;
    }
    Ok(())
}

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    tracing::info!("Opening database: {}", db_file.display());
    let conn = connect(db_file).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

pub fn get_connection() -> anyhow::Result<&'static DatabaseConnection> {
    DB_CONN
        .get()
        .ok_or_else(|| anyhow::anyhow!("Database connection has not been initialized"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_url_for_absolute_path() {
        let url = sqlite_url(Path::new("/var/lib/kitteo/app.db")).unwrap();
        assert_eq!(url, "sqlite:///var/lib/kitteo/app.db?mode=rwc");
    }
}
