use crate::error::PetpalsError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use petpals_api_structs::delete_health_record::*;
use petpals_domain::{HealthRecord, ID};
use petpals_infra::PetpalsContext;

fn handle_error(e: UseCaseErrors) -> PetpalsError {
    match e {
        UseCaseErrors::NotFound(record_id) => PetpalsError::NotFound(format!(
            "The health record with id: {}, was not found.",
            record_id
        )),
    }
}

pub async fn delete_health_record_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PetpalsContext>,
) -> Result<HttpResponse, PetpalsError> {
    let usecase = DeleteHealthRecordUseCase {
        record_id: path_params.record_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|record| HttpResponse::Ok().json(APIResponse::new(record)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct DeleteHealthRecordUseCase {
    pub record_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteHealthRecordUseCase {
    type Response = HealthRecord;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &PetpalsContext) -> Result<Self::Response, Self::Errors> {
        match ctx.repos.health_records.delete(&self.record_id).await {
            Some(record) => Ok(record),
            None => Err(UseCaseErrors::NotFound(self.record_id.clone())),
        }
    }
}
