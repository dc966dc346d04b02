use crate::errors::AppError;
use rusqlite::Connection;
use std::{
    path::Path,
    sync::{Arc, Mutex},
};
use tracing::info;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS exercises (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    muscle_group TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS progress (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    exercise_id INTEGER NOT NULL,
    weight REAL NOT NULL,
    date TEXT NOT NULL,
    FOREIGN KEY (exercise_id) REFERENCES exercises (id)
);
";

/// Shared handle to the SQLite store. Every access holds the connection lock,
/// so queries and read-then-write commands never interleave.
#[derive(Clone)]
pub struct Store {
    conn: Arc<Mutex<Connection>>,
}

impl Store {
    pub fn open(path: &Path) -> Result<Self, AppError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        let store = Self::init(conn)?;
        info!("opened store at {}", path.display());
        Ok(store)
    }

    pub fn open_in_memory() -> Result<Self, AppError> {
        Self::init(Connection::open_in_memory()?)
    }

    fn init(conn: Connection) -> Result<Self, AppError> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    /// Runs `f` against the connection on the blocking pool.
    pub async fn call<T, F>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut Connection) -> Result<T, AppError> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.clone();
        tokio::task::spawn_blocking(move || store.with_conn(f))
            .await
            .map_err(AppError::internal)?
    }

    pub fn with_conn<T>(
        &self,
        f: impl FnOnce(&mut Connection) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let mut conn = self
            .conn
            .lock()
            .map_err(|_| AppError::internal("store connection lock poisoned"))?;
        f(&mut *conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table_names(store: &Store) -> Vec<String> {
        store
            .with_conn(|conn| {
                let mut stmt = conn.prepare(
                    "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
                )?;
                let names = stmt
                    .query_map([], |row| row.get::<_, String>(0))?
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(names)
            })
            .unwrap()
    }

    #[test]
    fn in_memory_store_has_both_tables() {
        let store = Store::open_in_memory().unwrap();
        assert_eq!(table_names(&store), vec!["exercises", "progress"]);
    }

    #[test]
    fn reopening_a_file_keeps_rows() {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("gym_tracker_store_{}_{}", std::process::id(), nanos));
        path.push("gym.db");

        let store = Store::open(&path).unwrap();
        store
            .with_conn(|conn| {
                conn.execute(
                    "INSERT INTO exercises (name, muscle_group) VALUES ('Squat', 'Legs')",
                    [],
                )?;
                Ok(())
            })
            .unwrap();
        drop(store);

        let reopened = Store::open(&path).unwrap();
        let count: i64 = reopened
            .with_conn(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM exercises", [], |row| row.get(0))?))
            .unwrap();
        assert_eq!(count, 1);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[tokio::test]
    async fn call_runs_on_blocking_pool() {
        let store = Store::open_in_memory().unwrap();
        let count: i64 = store
            .call(|conn| Ok(conn.query_row("SELECT COUNT(*) FROM progress", [], |row| row.get(0))?))
            .await
            .unwrap();
        assert_eq!(count, 0);
    }
}
