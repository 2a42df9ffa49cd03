use crate::error::PetpalsError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use petpals_api_structs::get_pet_health::*;
use petpals_domain::{HealthRecord, ID};
use petpals_infra::PetpalsContext;

fn handle_error(e: UseCaseErrors) -> PetpalsError {
    match e {
        UseCaseErrors::PetNotFound(pet_id) => {
            PetpalsError::NotFound(format!("The pet with id: {}, was not found.", pet_id))
        }
    }
}

pub async fn get_pet_health_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PetpalsContext>,
) -> Result<HttpResponse, PetpalsError> {
    let usecase = GetPetHealthUseCase {
        pet_id: path_params.pet_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|records| HttpResponse::Ok().json(APIResponse::new(records)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetPetHealthUseCase {
    pub pet_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    PetNotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetPetHealthUseCase {
    type Response = Vec<HealthRecord>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &PetpalsContext) -> Result<Self::Response, Self::Errors> {
        if ctx.repos.pets.find(&self.pet_id).await.is_none() {
            return Err(UseCaseErrors::PetNotFound(self.pet_id.clone()));
        }

        Ok(ctx.repos.health_records.find_by_pet(&self.pet_id).await)
    }
}
