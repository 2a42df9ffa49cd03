use super::IPetRepo;
use petpals_domain::{Pet, PetSpecies, Sex, ID};
use sqlx::{types::Uuid, FromRow, PgPool};

pub struct PostgresPetRepo {
    pool: PgPool,
}

impl PostgresPetRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn sex_to_str(sex: Sex) -> &'static str {
    match sex {
        Sex::Female => "female",
        Sex::Male => "male",
    }
}

fn sex_from_str(s: &str) -> Sex {
    match s {
        "male" => Sex::Male,
        _ => Sex::Female,
    }
}

fn species_to_str(species: PetSpecies) -> &'static str {
    match species {
        PetSpecies::Dog => "dog",
        PetSpecies::Cat => "cat",
        PetSpecies::Bird => "bird",
        PetSpecies::Other => "other",
    }
}

fn species_from_str(s: &str) -> PetSpecies {
    match s {
        "dog" => PetSpecies::Dog,
        "cat" => PetSpecies::Cat,
        "bird" => PetSpecies::Bird,
        _ => PetSpecies::Other,
    }
}

#[derive(Debug, FromRow)]
struct PetRaw {
    pet_uid: Uuid,
    user_uid: Uuid,
    name: String,
    sex: String,
    species: String,
    date_of_birth: i64,
}

impl From<PetRaw> for Pet {
    fn from(raw: PetRaw) -> Self {
        Self {
            id: raw.pet_uid.into(),
            user_id: raw.user_uid.into(),
            name: raw.name,
            sex: sex_from_str(&raw.sex),
            species: species_from_str(&raw.species),
            date_of_birth: raw.date_of_birth,
        }
    }
}

#[async_trait::async_trait]
impl IPetRepo for PostgresPetRepo {
    async fn insert(&self, pet: &Pet) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO pets
            (pet_uid, user_uid, name, sex, species, date_of_birth)
            VALUES($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(pet.id.inner_ref())
        .bind(pet.user_id.inner_ref())
        .bind(&pet.name)
        .bind(sex_to_str(pet.sex))
        .bind(species_to_str(pet.species))
        .bind(pet.date_of_birth)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn save(&self, pet: &Pet) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE pets
            SET name = $2, sex = $3, species = $4, date_of_birth = $5
            WHERE pet_uid = $1
            "#,
        )
        .bind(pet.id.inner_ref())
        .bind(&pet.name)
        .bind(sex_to_str(pet.sex))
        .bind(species_to_str(pet.species))
        .bind(pet.date_of_birth)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn find(&self, pet_id: &ID) -> Option<Pet> {
        sqlx::query_as::<_, PetRaw>(
            r#"
            SELECT * FROM pets
            WHERE pet_uid = $1
            "#,
        )
        .bind(pet_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|pet| pet.into())
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Pet> {
        sqlx::query_as::<_, PetRaw>(
            r#"
            SELECT * FROM pets
            WHERE user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .fetch_all(&self.pool)
        .await
        .unwrap_or_default()
        .into_iter()
        .map(|pet| pet.into())
        .collect()
    }

    async fn delete(&self, pet_id: &ID) -> Option<Pet> {
        sqlx::query_as::<_, PetRaw>(
            r#"
            DELETE FROM pets
            WHERE pet_uid = $1
            RETURNING *
            "#,
        )
        .bind(pet_id.inner_ref())
        .fetch_optional(&self.pool)
        .await
        .ok()
        .flatten()
        .map(|pet| pet.into())
    }

    async fn delete_by_user(&self, user_id: &ID) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            DELETE FROM pets
            WHERE user_uid = $1
            "#,
        )
        .bind(user_id.inner_ref())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
