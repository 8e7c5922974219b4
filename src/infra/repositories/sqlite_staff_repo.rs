use std::collections::HashMap;

use crate::domain::{models::staff::{NewStaff, Staff}, ports::StaffRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::{types::Json, SqlitePool, Sqlite, Transaction};

pub struct SqliteStaffRepo {
    pool: SqlitePool,
}

impl SqliteStaffRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn attach_stores(&self, mut members: Vec<Staff>) -> Result<Vec<Staff>, AppError> {
        let links: Vec<(i64, i64)> = sqlx::query_as("SELECT staff_id, store_id FROM staff_stores ORDER BY store_id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;

        let mut by_staff: HashMap<i64, Vec<i64>> = HashMap::new();
        for (staff_id, store_id) in links {
            by_staff.entry(staff_id).or_default().push(store_id);
        }
        for member in &mut members {
            member.stores = by_staff.remove(&member.id).unwrap_or_default();
        }
        Ok(members)
    }

    async fn store_ids(&self, staff_id: i64) -> Result<Vec<i64>, AppError> {
        sqlx::query_scalar("SELECT store_id FROM staff_stores WHERE staff_id = ? ORDER BY store_id ASC")
            .bind(staff_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}

async fn replace_links(tx: &mut Transaction<'_, Sqlite>, staff_id: i64, store_ids: &[i64]) -> Result<(), AppError> {
    sqlx::query("DELETE FROM staff_stores WHERE staff_id = ?")
        .bind(staff_id)
        .execute(&mut **tx)
        .await
        .map_err(AppError::Database)?;

    for store_id in store_ids {
        sqlx::query("INSERT OR IGNORE INTO staff_stores (staff_id, store_id) VALUES (?, ?)")
            .bind(staff_id)
            .bind(store_id)
            .execute(&mut **tx)
            .await
            .map_err(AppError::Database)?;
    }
    Ok(())
}

#[async_trait]
impl StaffRepository for SqliteStaffRepo {
    async fn create(&self, staff: &NewStaff, store_ids: &[i64]) -> Result<Staff, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let mut created = sqlx::query_as::<_, Staff>(
            r#"INSERT INTO staff (username, first_name, last_name, email, phone, active, role, schedule)
               VALUES (?, ?, ?, ?, ?, ?, ?, ?)
               RETURNING *"#
        )
            .bind(&staff.username)
            .bind(&staff.first_name)
            .bind(&staff.last_name)
            .bind(&staff.email)
            .bind(&staff.phone)
            .bind(staff.active)
            .bind(&staff.role)
            .bind(Json(&staff.schedule))
            .fetch_one(&mut *tx)
            .await
            .map_err(AppError::Database)?;

        replace_links(&mut tx, created.id, store_ids).await?;
        tx.commit().await.map_err(AppError::Database)?;

        created.stores = self.store_ids(created.id).await?;
        Ok(created)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Staff>, AppError> {
        let found = sqlx::query_as::<_, Staff>("SELECT * FROM staff WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?;

        match found {
            Some(mut staff) => {
                staff.stores = self.store_ids(staff.id).await?;
                Ok(Some(staff))
            }
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Staff>, AppError> {
        let members = sqlx::query_as::<_, Staff>("SELECT * FROM staff ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        self.attach_stores(members).await
    }

    async fn list_by_store(&self, store_id: i64) -> Result<Vec<Staff>, AppError> {
        let members = sqlx::query_as::<_, Staff>(
            "SELECT s.* FROM staff s JOIN staff_stores ss ON ss.staff_id = s.id WHERE ss.store_id = ? ORDER BY s.id ASC"
        )
            .bind(store_id)
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)?;
        self.attach_stores(members).await
    }

    async fn update(&self, staff: &Staff, store_ids: Option<&[i64]>) -> Result<Staff, AppError> {
        let mut tx = self.pool.begin().await.map_err(AppError::Database)?;

        let mut updated = sqlx::query_as::<_, Staff>(
            r#"UPDATE staff SET username=?, first_name=?, last_name=?, email=?, phone=?, active=?, role=?, schedule=?
               WHERE id=?
               RETURNING *"#
        )
            .bind(&staff.username)
            .bind(&staff.first_name)
            .bind(&staff.last_name)
            .bind(&staff.email)
            .bind(&staff.phone)
            .bind(staff.active)
            .bind(&staff.role)
            .bind(&staff.schedule)
            .bind(staff.id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(AppError::Database)?
            .ok_or(AppError::NotFound("Staff member not found".into()))?;

        if let Some(store_ids) = store_ids {
            replace_links(&mut tx, updated.id, store_ids).await?;
        }
        tx.commit().await.map_err(AppError::Database)?;

        updated.stores = self.store_ids(updated.id).await?;
        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM staff WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Staff member not found".into()));
        }
        Ok(())
    }
}
