use crate::error::PetpalsError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use petpals_api_structs::update_activity::*;
use petpals_domain::{Activity, ID};
use petpals_infra::PetpalsContext;

fn handle_error(e: UseCaseErrors) -> PetpalsError {
    match e {
        UseCaseErrors::NotFound(activity_id) => PetpalsError::NotFound(format!(
            "The activity with id: {}, was not found.",
            activity_id
        )),
        UseCaseErrors::StorageError => PetpalsError::InternalError,
    }
}

pub async fn update_activity_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PetpalsContext>,
) -> Result<HttpResponse, PetpalsError> {
    let body = body.0;
    let usecase = UpdateActivityUseCase {
        activity_id: path_params.activity_id.clone(),
        activity: body.activity,
        frequency: body.frequency,
        date: body.date,
    };

    execute(usecase, &ctx)
        .await
        .map(|activity| HttpResponse::Ok().json(APIResponse::new(activity)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct UpdateActivityUseCase {
    pub activity_id: ID,
    pub activity: Option<String>,
    pub frequency: Option<i64>,
    pub date: Option<i64>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateActivityUseCase {
    type Response = Activity;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &PetpalsContext) -> Result<Self::Response, Self::Errors> {
        let mut activity = match ctx.repos.activities.find(&self.activity_id).await {
            Some(activity) => activity,
            None => return Err(UseCaseErrors::NotFound(self.activity_id.clone())),
        };

        if let Some(name) = &self.activity {
            activity.activity = name.clone();
        }
        if let Some(frequency) = self.frequency {
            activity.frequency = frequency;
        }
        if let Some(date) = self.date {
            activity.date = date;
        }

        ctx.repos
            .activities
            .save(&activity)
            .await
            .map(|_| activity)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
