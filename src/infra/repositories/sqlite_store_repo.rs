use crate::domain::{models::store::{NewStore, Store}, ports::StoreRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{types::Json, SqlitePool};

pub struct SqliteStoreRepo {
    pool: SqlitePool,
}

impl SqliteStoreRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl StoreRepository for SqliteStoreRepo {
    async fn create(&self, store: &NewStore) -> Result<Store, AppError> {
        sqlx::query_as::<_, Store>(
            r#"INSERT INTO stores (name, address, phone, email, opening_days, start_time, end_time, lunch_start_time, lunch_end_time, subscribe)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&store.name)
            .bind(&store.address)
            .bind(&store.phone)
            .bind(&store.email)
            .bind(Json(&store.opening_days))
            .bind(store.start_time)
            .bind(store.end_time)
            .bind(store.lunch_start_time)
            .bind(store.lunch_end_time)
            .bind(store.subscribe)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Store>, AppError> {
        sqlx::query_as::<_, Store>("SELECT * FROM stores WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Store>, AppError> {
        sqlx::query_as::<_, Store>("SELECT * FROM stores WHERE name = ?")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Store>, AppError> {
        sqlx::query_as::<_, Store>("SELECT * FROM stores ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, store: &Store) -> Result<Store, AppError> {
        sqlx::query_as::<_, Store>(
            r#"UPDATE stores SET name=?, address=?, phone=?, email=?, opening_days=?, start_time=?, end_time=?,
               lunch_start_time=?, lunch_end_time=?, subscribe=?
               WHERE id=?
               RETURNING *"#
        )
            .bind(&store.name)
            .bind(&store.address)
            .bind(&store.phone)
            .bind(&store.email)
            .bind(&store.opening_days)
            .bind(store.start_time)
            .bind(store.end_time)
            .bind(store.lunch_start_time)
            .bind(store.lunch_end_time)
            .bind(store.subscribe)
            .bind(store.id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Store not found".into()))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM stores WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Store not found".into()));
        }
        Ok(())
    }
}
