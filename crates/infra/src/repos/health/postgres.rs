use super::IHealthRecordRepo;
use petpals_domain::{HealthRecord, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresHealthRecordRepo {
    pool: PgPool,
}

impl PostgresHealthRecordRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct HealthRecordRaw {
    health_record_uid: Uuid,
    pet_uid: Uuid,
    size: f64,
    weight: f64,
    date: i64,
}

impl From<HealthRecordRaw> for HealthRecord {
    fn from(raw: HealthRecordRaw) -> Self {
        Self {
            id: raw.health_record_uid.into(),
            pet_id: raw.pet_uid.into(),
            size: raw.size,
            weight: raw.weight,
            date: raw.date,
        }
    }
}

#[async_trait::async_trait]
impl IHealthRecordRepo for PostgresHealthRecordRepo {
    async fn insert(&self, record: &HealthRecord) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO health_records
            (health_record_uid, pet_uid, size, weight, date)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(record.id.inner_ref())
        .bind(record.pet_id.inner_ref())
        .bind(record.size)
        .bind(record.weight)
        .bind(record.date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, record: &HealthRecord) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE health_records
            SET size = $2, weight = $3, date = $4
            WHERE health_record_uid = $1
            "#,
        )
        .bind(record.id.inner_ref())
        .bind(record.size)
        .bind(record.weight)
        .bind(record.date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, record_id: &ID) -> Option<HealthRecord> {
        sqlx::query_as::<_, HealthRecordRaw>(
            r#"
            SELECT * FROM health_records
            WHERE health_record_uid = $1
            "#,
        )
        .bind(record_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|record| record.into())
    }

    async fn find_by_pet(&self, pet_id: &ID) -> Vec<HealthRecord> {
        sqlx::query_as::<_, HealthRecordRaw>(
            r#"
            SELECT * FROM health_records
            WHERE pet_uid = $1
            ORDER BY date ASC
            "#,
        )
        .bind(pet_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|record| record.into())
        .collect()
    }

    async fn delete(&self, record_id: &ID) -> Option<HealthRecord> {
        sqlx::query_as::<_, HealthRecordRaw>(
            r#"
            DELETE FROM health_records
            WHERE health_record_uid = $1
            RETURNING *
            "#,
        )
        .bind(record_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|record| record.into())
    }

    async fn delete_by_pet(&self, pet_id: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM health_records
            WHERE pet_uid = $1
            "#,
        )
        .bind(pet_id.inner_ref())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
