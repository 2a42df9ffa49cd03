use crate::error::PetpalsError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use petpals_api_structs::delete_activity::*;
use petpals_domain::{Activity, ID};
use petpals_infra::PetpalsContext;

fn handle_error(e: UseCaseErrors) -> PetpalsError {
    match e {
        UseCaseErrors::NotFound(activity_id) => PetpalsError::NotFound(format!(
            "The activity with id: {}, was not found.",
            activity_id
        )),
    }
}

pub async fn delete_activity_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PetpalsContext>,
) -> Result<HttpResponse, PetpalsError> {
    let usecase = DeleteActivityUseCase {
        activity_id: path_params.activity_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|activity| HttpResponse::Ok().json(APIResponse::new(activity)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct DeleteActivityUseCase {
    pub activity_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteActivityUseCase {
    type Response = Activity;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &PetpalsContext) -> Result<Self::Response, Self::Errors> {
        match ctx.repos.activities.delete(&self.activity_id).await {
            Some(activity) => Ok(activity),
            None => Err(UseCaseErrors::NotFound(self.activity_id.clone())),
        }
    }
}
