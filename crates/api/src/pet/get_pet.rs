use crate::error::PetpalsError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use petpals_api_structs::get_pet::*;
use petpals_domain::{Pet, ID};
use petpals_infra::PetpalsContext;

fn handle_error(e: UseCaseErrors) -> PetpalsError {
    match e {
        UseCaseErrors::NotFound(pet_id) => {
            PetpalsError::NotFound(format!("The pet with id: {}, was not found.", pet_id))
        }
    }
}

pub async fn get_pet_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PetpalsContext>,
) -> Result<HttpResponse, PetpalsError> {
    let usecase = GetPetUseCase {
        pet_id: path_params.pet_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|pet| HttpResponse::Ok().json(APIResponse::new(pet)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetPetUseCase {
    pub pet_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetPetUseCase {
    type Response = Pet;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &PetpalsContext) -> Result<Self::Response, Self::Errors> {
        match ctx.repos.pets.find(&self.pet_id).await {
            Some(pet) => Ok(pet),
            None => Err(UseCaseErrors::NotFound(self.pet_id.clone())),
        }
    }
}
