use crate::error::PetpalsError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use petpals_api_structs::get_pet_events::*;
use petpals_domain::{Event, ID};
use petpals_infra::PetpalsContext;

fn handle_error(e: UseCaseErrors) -> PetpalsError {
    match e {
        UseCaseErrors::PetNotFound(pet_id) => {
            PetpalsError::NotFound(format!("The pet with id: {}, was not found.", pet_id))
        }
    }
}

pub async fn get_pet_events_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PetpalsContext>,
) -> Result<HttpResponse, PetpalsError> {
    let usecase = GetPetEventsUseCase {
        pet_id: path_params.pet_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|events| HttpResponse::Ok().json(APIResponse::new(events)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetPetEventsUseCase {
    pub pet_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    PetNotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetPetEventsUseCase {
    type Response = Vec<Event>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &PetpalsContext) -> Result<Self::Response, Self::Errors> {
        if ctx.repos.pets.find(&self.pet_id).await.is_none() {
            return Err(UseCaseErrors::PetNotFound(self.pet_id.clone()));
        }

        Ok(ctx.repos.events.find_by_pet(&self.pet_id).await)
    }
}
