use super::IEventRepo;
use petpals_domain::{Event, EventType, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresEventRepo {
    pool: PgPool,
}

impl PostgresEventRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn event_type_to_str(event_type: EventType) -> &'static str {
    match event_type {
        EventType::HealthCare => "health_care",
        EventType::Walk => "walk",
    }
}

fn event_type_from_str(s: &str) -> EventType {
    match s {
        "health_care" => EventType::HealthCare,
        _ => EventType::Walk,
    }
}

#[derive(Debug, FromRow)]
struct EventRaw {
    event_uid: Uuid,
    pet_uid: Uuid,
    user_uid: Uuid,
    start_time: i64,
    end_time: Option<i64>,
    description: String,
    event_type: String,
    detail: Option<String>,
    frequency: Option<i64>,
}

impl From<EventRaw> for Event {
    fn from(raw: EventRaw) -> Self {
        Self {
            id: raw.event_uid.into(),
            pet_id: raw.pet_uid.into(),
            user_id: raw.user_uid.into(),
            start_time: raw.start_time,
            end_time: raw.end_time,
            description: raw.description,
            event_type: event_type_from_str(&raw.event_type),
            detail: raw.detail,
            frequency: raw.frequency,
        }
    }
}

#[async_trait::async_trait]
impl IEventRepo for PostgresEventRepo {
    async fn insert(&self, event: &Event) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO events
            (event_uid, pet_uid, user_uid, start_time, end_time, description, event_type, detail, frequency)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(event.id.inner_ref())
        .bind(event.pet_id.inner_ref())
        .bind(event.user_id.inner_ref())
        .bind(event.start_time)
        .bind(event.end_time)
        .bind(&event.description)
        .bind(event_type_to_str(event.event_type))
        .bind(&event.detail)
        .bind(event.frequency)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, event: &Event) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE events
            SET start_time = $2, end_time = $3, description = $4, event_type = $5, detail = $6, frequency = $7
            WHERE event_uid = $1
            "#,
        )
        .bind(event.id.inner_ref())
        .bind(event.start_time)
        .bind(event.end_time)
        .bind(&event.description)
        .bind(event_type_to_str(event.event_type))
        .bind(&event.detail)
        .bind(event.frequency)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, event_id: &ID) -> Option<Event> {
        sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM events
            WHERE event_uid = $1
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|event| event.into())
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Event> {
        sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM events
            WHERE user_uid = $1
            ORDER BY start_time ASC
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|event| event.into())
        .collect()
    }

    async fn find_by_pet(&self, pet_id: &ID) -> Vec<Event> {
        sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM events
            WHERE pet_uid = $1
            ORDER BY start_time ASC
            "#,
        )
        .bind(pet_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|event| event.into())
        .collect()
    }

    async fn find_all(&self) -> anyhow::Result<Vec<Event>> {
        let events = sqlx::query_as::<_, EventRaw>(
            r#"
            SELECT * FROM events
            "#,
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(events.into_iter().map(|event| event.into()).collect())
    }

    async fn delete(&self, event_id: &ID) -> Option<Event> {
        sqlx::query_as::<_, EventRaw>(
            r#"
            DELETE FROM events
            WHERE event_uid = $1
            RETURNING *
            "#,
        )
        .bind(event_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|event| event.into())
    }

    async fn delete_by_pet(&self, pet_id: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM events
            WHERE pet_uid = $1
            "#,
        )
        .bind(pet_id.inner_ref())
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM events
            WHERE user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
