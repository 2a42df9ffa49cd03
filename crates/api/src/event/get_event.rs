use crate::error::PetpalsError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use petpals_api_structs::get_event::*;
use petpals_domain::{Event, ID};
use petpals_infra::PetpalsContext;

fn handle_error(e: UseCaseErrors) -> PetpalsError {
    match e {
        UseCaseErrors::NotFound(event_id) => {
            PetpalsError::NotFound(format!("The event with id: {}, was not found.", event_id))
        }
    }
}

pub async fn get_event_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PetpalsContext>,
) -> Result<HttpResponse, PetpalsError> {
    let usecase = GetEventUseCase {
        event_id: path_params.event_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetEventUseCase {
    pub event_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetEventUseCase {
    type Response = Event;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &PetpalsContext) -> Result<Self::Response, Self::Errors> {
        match ctx.repos.events.find(&self.event_id).await {
            Some(event) => Ok(event),
            None => Err(UseCaseErrors::NotFound(self.event_id.clone())),
        }
    }
}
