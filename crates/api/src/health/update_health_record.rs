use crate::error::PetpalsError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use petpals_api_structs::update_health_record::*;
use petpals_domain::{HealthRecord, ID};
use petpals_infra::PetpalsContext;

fn handle_error(e: UseCaseErrors) -> PetpalsError {
    match e {
        UseCaseErrors::NotFound(record_id) => PetpalsError::NotFound(format!(
            "The health record with id: {}, was not found.",
            record_id
        )),
        UseCaseErrors::StorageError => PetpalsError::InternalError,
    }
}

pub async fn update_health_record_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PetpalsContext>,
) -> Result<HttpResponse, PetpalsError> {
    let body = body.0;
    let usecase = UpdateHealthRecordUseCase {
        record_id: path_params.record_id.clone(),
        size: body.size,
        weight: body.weight,
        date: body.date,
    };

    execute(usecase, &ctx)
        .await
        .map(|record| HttpResponse::Ok().json(APIResponse::new(record)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct UpdateHealthRecordUseCase {
    pub record_id: ID,
    pub size: Option<f64>,
    pub weight: Option<f64>,
    pub date: Option<i64>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateHealthRecordUseCase {
    type Response = HealthRecord;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &PetpalsContext) -> Result<Self::Response, Self::Errors> {
        let mut record = match ctx.repos.health_records.find(&self.record_id).await {
            Some(record) => record,
            None => return Err(UseCaseErrors::NotFound(self.record_id.clone())),
        };

        if let Some(size) = self.size {
            record.size = size;
        }
        if let Some(weight) = self.weight {
            record.weight = weight;
        }
        if let Some(date) = self.date {
            record.date = date;
        }

        ctx.repos
            .health_records
            .save(&record)
            .await
            .map(|_| record)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}
