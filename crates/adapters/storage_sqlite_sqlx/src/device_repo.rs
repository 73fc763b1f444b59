//! `SQLite` implementation of [`DeviceRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use netinv_app::ports::DeviceRepository;
use netinv_domain::device::{Device, NewDevice};
use netinv_domain::error::{ConflictError, InventoryError, NotFoundError};
use netinv_domain::id::DeviceId;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Device`].
struct Wrapper(Device);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;
        let ip: String = row.try_get("ip")?;
        let name: String = row.try_get("name")?;
        let traffic_rate: f64 = row.try_get("traffic_rate")?;

        Ok(Self(Device {
            id: DeviceId::new(id),
            ip,
            name,
            traffic_rate,
        }))
    }
}

const INSERT: &str = "INSERT INTO devices (ip, name, traffic_rate) VALUES (?, ?, ?)";
const SELECT_ALL: &str = "SELECT id, ip, name, traffic_rate FROM devices ORDER BY id";
const DELETE_BY_ID: &str = "DELETE FROM devices WHERE id = ?";

/// `SQLite`-backed device repository.
///
/// Holds a handle to the shared pool; every call checks a connection out
/// for a single statement and returns it when the statement completes.
pub struct SqliteDeviceRepository {
    pool: SqlitePool,
}

impl SqliteDeviceRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn insert_error(err: sqlx::Error, ip: &str) -> InventoryError {
    match &err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => ConflictError {
            key: "ip",
            value: ip.to_string(),
        }
        .into(),
        _ => StorageError::from(err).into(),
    }
}

impl DeviceRepository for SqliteDeviceRepository {
    fn list_all(&self) -> impl Future<Output = Result<Vec<Device>, InventoryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn insert(
        &self,
        device: NewDevice,
    ) -> impl Future<Output = Result<Device, InventoryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(INSERT)
                .bind(device.ip())
                .bind(device.name())
                .bind(device.traffic_rate())
                .execute(&pool)
                .await
                .map_err(|err| insert_error(err, device.ip()))?;

            Ok(device.into_device(DeviceId::new(result.last_insert_rowid())))
        }
    }

    fn delete(&self, id: DeviceId) -> impl Future<Output = Result<(), InventoryError>> + Send {
        let pool = self.pool.clone();
        async move {
            let result = sqlx::query(DELETE_BY_ID)
                .bind(id.as_i64())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            if result.rows_affected() == 0 {
                return Err(NotFoundError {
                    entity: "device",
                    id: id.to_string(),
                }
                .into());
            }
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;
    use netinv_domain::status::TrafficStatus;

    async fn setup() -> SqliteDeviceRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteDeviceRepository::new(db.pool().clone())
    }

    fn new_device(ip: &str, name: &str, rate: &str) -> NewDevice {
        NewDevice::builder()
            .ip(ip)
            .name(name)
            .traffic_rate(rate)
            .build()
            .unwrap()
    }

    #[tokio::test]
    async fn should_insert_and_list_device_when_valid() {
        let repo = setup().await;

        let created = repo.insert(new_device("10.0.0.1", "R1", "10")).await.unwrap();

        let all = repo.list_all().await.unwrap();
        assert_eq!(all, vec![created.clone()]);
        assert_eq!(all[0].name, "R1");
        assert_eq!(all[0].status(), TrafficStatus::Normal);
    }

    #[tokio::test]
    async fn should_list_devices_in_insertion_order() {
        let repo = setup().await;
        let names = ["core", "edge", "access"];
        for (i, name) in names.iter().enumerate() {
            repo.insert(new_device(&format!("10.0.0.{i}"), name, "1"))
                .await
                .unwrap();
        }

        let listed: Vec<String> = repo
            .list_all()
            .await
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(listed, names);
    }

    #[tokio::test]
    async fn should_return_conflict_when_ip_already_stored() {
        let repo = setup().await;
        repo.insert(new_device("10.0.0.1", "R1", "10")).await.unwrap();

        let result = repo.insert(new_device("10.0.0.1", "R2", "90")).await;

        assert!(matches!(
            result,
            Err(InventoryError::Conflict(ConflictError { key: "ip", .. }))
        ));
        assert_eq!(repo.list_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_allow_duplicate_names() {
        let repo = setup().await;
        repo.insert(new_device("10.0.0.1", "switch", "1")).await.unwrap();
        repo.insert(new_device("10.0.0.2", "switch", "1")).await.unwrap();

        assert_eq!(repo.list_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn should_delete_device_when_exists() {
        let repo = setup().await;
        let created = repo.insert(new_device("10.0.0.1", "R1", "10")).await.unwrap();

        repo.delete(created.id).await.unwrap();

        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_return_not_found_when_deleting_missing_id() {
        let repo = setup().await;
        let result = repo.delete(DeviceId::new(404)).await;
        assert!(matches!(result, Err(InventoryError::NotFound(_))));
    }

    #[tokio::test]
    async fn should_not_reuse_ids_after_delete() {
        let repo = setup().await;
        let first = repo.insert(new_device("10.0.0.1", "R1", "1")).await.unwrap();
        repo.delete(first.id).await.unwrap();

        let second = repo.insert(new_device("10.0.0.1", "R1", "1")).await.unwrap();

        assert!(second.id > first.id);
    }

    #[tokio::test]
    async fn should_let_exactly_one_concurrent_insert_win() {
        let dir = std::env::temp_dir().join(format!("netinv-test-{}", uuid::Uuid::new_v4()));
        let db = Config {
            database_url: format!("sqlite:{}", dir.join("devices.db").display()),
        }
        .build()
        .await
        .unwrap();
        let repo = SqliteDeviceRepository::new(db.pool().clone());

        let (a, b) = tokio::join!(
            repo.insert(new_device("10.0.0.9", "A", "1")),
            repo.insert(new_device("10.0.0.9", "B", "2")),
        );

        let outcomes = [a, b];
        let wins = outcomes.iter().filter(|r| r.is_ok()).count();
        let conflicts = outcomes
            .iter()
            .filter(|r| matches!(r, Err(InventoryError::Conflict(_))))
            .count();
        assert_eq!((wins, conflicts), (1, 1));
        assert_eq!(repo.list_all().await.unwrap().len(), 1);

        db.pool().close().await;
        let _ = std::fs::remove_dir_all(dir);
    }
}
