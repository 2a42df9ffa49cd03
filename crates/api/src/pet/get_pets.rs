use crate::error::PetpalsError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use petpals_api_structs::get_pets::*;
use petpals_domain::{Pet, ID};
use petpals_infra::PetpalsContext;

fn handle_error(e: UseCaseErrors) -> PetpalsError {
    match e {
        UseCaseErrors::UserNotFound(user_id) => {
            PetpalsError::NotFound(format!("The user with id: {}, was not found.", user_id))
        }
    }
}

pub async fn get_pets_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PetpalsContext>,
) -> Result<HttpResponse, PetpalsError> {
    let usecase = GetPetsUseCase {
        user_id: path_params.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|pets| HttpResponse::Ok().json(APIResponse::new(pets)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetPetsUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    UserNotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetPetsUseCase {
    type Response = Vec<Pet>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &PetpalsContext) -> Result<Self::Response, Self::Errors> {
        if ctx.repos.users.find(&self.user_id).await.is_none() {
            return Err(UseCaseErrors::UserNotFound(self.user_id.clone()));
        }

        Ok(ctx.repos.pets.find_by_user(&self.user_id).await)
    }
}
