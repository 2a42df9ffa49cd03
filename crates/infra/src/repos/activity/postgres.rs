use super::{IActivityRepo, TimeRange};
use petpals_domain::{Activity, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresActivityRepo {
    pool: PgPool,
}

impl PostgresActivityRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ActivityRaw {
    activity_uid: Uuid,
    pet_uid: Uuid,
    activity: String,
    frequency: i64,
    date: i64,
}

impl From<ActivityRaw> for Activity {
    fn from(raw: ActivityRaw) -> Self {
        Self {
            id: raw.activity_uid.into(),
            pet_id: raw.pet_uid.into(),
            activity: raw.activity,
            frequency: raw.frequency,
            date: raw.date,
        }
    }
}

#[async_trait::async_trait]
impl IActivityRepo for PostgresActivityRepo {
    async fn insert(&self, activity: &Activity) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO activities
            (activity_uid, pet_uid, activity, frequency, date)
            VALUES($1, $2, $3, $4, $5)
            "#,
        )
        .bind(activity.id.inner_ref())
        .bind(activity.pet_id.inner_ref())
        .bind(&activity.activity)
        .bind(activity.frequency)
        .bind(activity.date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, activity: &Activity) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE activities
            SET activity = $2, frequency = $3, date = $4
            WHERE activity_uid = $1
            "#,
        )
        .bind(activity.id.inner_ref())
        .bind(&activity.activity)
        .bind(activity.frequency)
        .bind(activity.date)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, activity_id: &ID) -> Option<Activity> {
        sqlx::query_as::<_, ActivityRaw>(
            r#"
            SELECT * FROM activities
            WHERE activity_uid = $1
            "#,
        )
        .bind(activity_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|activity| activity.into())
    }

    async fn find_by_pet(&self, pet_id: &ID) -> Vec<Activity> {
        sqlx::query_as::<_, ActivityRaw>(
            r#"
            SELECT * FROM activities
            WHERE pet_uid = $1
            ORDER BY date ASC
            "#,
        )
        .bind(pet_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|activity| activity.into())
        .collect()
    }

    async fn delete(&self, activity_id: &ID) -> Option<Activity> {
        sqlx::query_as::<_, ActivityRaw>(
            r#"
            DELETE FROM activities
            WHERE activity_uid = $1
            RETURNING *
            "#,
        )
        .bind(activity_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|activity| activity.into())
    }

    async fn delete_by_pet(&self, pet_id: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM activities
            WHERE pet_uid = $1
            "#,
        )
        .bind(pet_id.inner_ref())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn sum_frequency(&self, pet_id: &ID, activity: &str, range: Option<TimeRange>) -> i64 {
        // SUM over bigint yields numeric, hence the cast
        match range {
            Some(range) => sqlx::query_scalar::<_, i64>(
                r#"
                SELECT COALESCE(SUM(frequency), 0)::bigint FROM activities
                WHERE pet_uid = $1 AND activity = $2 AND date >= $3 AND date <= $4
                "#,
            )
            .bind(pet_id.inner_ref())
            .bind(activity)
            .bind(range.start)
            .bind(range.end)
            .fetch_one(&self.pool)
            .await
            .unwrap_or(0),
            None => sqlx::query_scalar::<_, i64>(
                r#"
                SELECT COALESCE(SUM(frequency), 0)::bigint FROM activities
                WHERE pet_uid = $1 AND activity = $2
                "#,
            )
            .bind(pet_id.inner_ref())
            .bind(activity)
            .fetch_one(&self.pool)
            .await
            .unwrap_or(0),
        }
    }
}
