use crate::error::PetpalsError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use petpals_api_structs::create_health_record::*;
use petpals_domain::{HealthRecord, ID};
use petpals_infra::PetpalsContext;

pub async fn create_health_record_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PetpalsContext>,
) -> Result<HttpResponse, PetpalsError> {
    let body = body.0;
    let usecase = CreateHealthRecordUseCase {
        pet_id: path_params.pet_id.clone(),
        size: body.size,
        weight: body.weight,
        date: body.date,
    };

    execute(usecase, &ctx)
        .await
        .map(|record| HttpResponse::Created().json(APIResponse::new(record)))
        .map_err(PetpalsError::from)
}

#[derive(Debug)]
pub struct CreateHealthRecordUseCase {
    pub pet_id: ID,
    pub size: f64,
    pub weight: f64,
    pub date: i64,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    PetNotFound(ID),
    StorageError,
}

impl From<UseCaseErrors> for PetpalsError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::PetNotFound(pet_id) => {
                Self::NotFound(format!("The pet with id: {}, was not found.", pet_id))
            }
            UseCaseErrors::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateHealthRecordUseCase {
    type Response = HealthRecord;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &PetpalsContext) -> Result<Self::Response, Self::Errors> {
        if ctx.repos.pets.find(&self.pet_id).await.is_none() {
            return Err(UseCaseErrors::PetNotFound(self.pet_id.clone()));
        }

        let record = HealthRecord::new(self.pet_id.clone(), self.size, self.weight, self.date);
        match ctx.repos.health_records.insert(&record).await {
            Ok(_) => Ok(record),
            Err(_) => Err(UseCaseErrors::StorageError),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use petpals_domain::{Pet, PetSpecies, Sex, User};
    use petpals_infra::setup_context;

    #[actix_web::main]
    #[test]
    async fn creates_health_record_for_existing_pet() {
        let ctx = setup_context().await;
        let user = User::new("vet@petpals.test", "Vet");
        ctx.repos.users.insert(&user).await.unwrap();
        let pet = Pet::new(user.id.clone(), "Rex", Sex::Male, PetSpecies::Dog, 0);
        ctx.repos.pets.insert(&pet).await.unwrap();

        let usecase = CreateHealthRecordUseCase {
            pet_id: pet.id.clone(),
            size: 54.0,
            weight: 21.5,
            date: 1614556800000,
        };
        let res = execute(usecase, &ctx).await;
        assert!(res.is_ok());

        let records = ctx.repos.health_records.find_by_pet(&pet.id).await;
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].weight, 21.5);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_pet() {
        let ctx = setup_context().await;

        let usecase = CreateHealthRecordUseCase {
            pet_id: Default::default(),
            size: 54.0,
            weight: 21.5,
            date: 1614556800000,
        };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseErrors::PetNotFound(_))
        ));
    }
}
