use crate::error::PetpalsError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use petpals_api_structs::create_event::*;
use petpals_domain::{Event, EventType, ID};
use petpals_infra::PetpalsContext;

pub async fn create_event_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PetpalsContext>,
) -> Result<HttpResponse, PetpalsError> {
    let body = body.0;
    let usecase = CreateEventUseCase {
        pet_id: path_params.pet_id.clone(),
        start_time: body.start_time,
        end_time: body.end_time,
        description: body.description,
        event_type: body.event_type,
        detail: body.detail,
        frequency: body.frequency,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Created().json(APIResponse::new(event)))
        .map_err(PetpalsError::from)
}

#[derive(Debug)]
pub struct CreateEventUseCase {
    pub pet_id: ID,
    pub start_time: i64,
    pub end_time: Option<i64>,
    pub description: String,
    pub event_type: EventType,
    pub detail: Option<String>,
    pub frequency: Option<i64>,
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
impl UseCase for CreateEventUseCase {
    type Response = Event;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &PetpalsContext) -> Result<Self::Response, Self::Errors> {
        let pet = match ctx.repos.pets.find(&self.pet_id).await {
            Some(pet) => pet,
            None => return Err(UseCaseErrors::PetNotFound(self.pet_id.clone())),
        };

        let event = Event {
            id: Default::default(),
            pet_id: pet.id.clone(),
            user_id: pet.user_id.clone(),
            start_time: self.start_time,
            end_time: self.end_time,
            description: self.description.clone(),
            event_type: self.event_type,
            detail: self.detail.clone(),
            frequency: self.frequency,
        };
        match ctx.repos.events.insert(&event).await {
            Ok(_) => Ok(event),
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
    async fn creates_event_with_owner_from_pet() {
        let ctx = setup_context().await;
        let user = User::new("owner@petpals.test", "Owner");
        ctx.repos.users.insert(&user).await.unwrap();
        let pet = Pet::new(user.id.clone(), "Mocha", Sex::Female, PetSpecies::Cat, 0);
        ctx.repos.pets.insert(&pet).await.unwrap();

        let usecase = CreateEventUseCase {
            pet_id: pet.id.clone(),
            start_time: 1614556800000,
            end_time: None,
            description: "Vaccination".into(),
            event_type: EventType::HealthCare,
            detail: Some("Rabies booster".into()),
            frequency: None,
        };
        let res = execute(usecase, &ctx).await;
        assert!(res.is_ok());

        let event = res.unwrap();
        assert_eq!(event.user_id, user.id);

        let stored = ctx.repos.events.find(&event.id).await.unwrap();
        assert_eq!(stored.description, "Vaccination");
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_pet() {
        let ctx = setup_context().await;

        let usecase = CreateEventUseCase {
            pet_id: Default::default(),
            start_time: 0,
            end_time: None,
            description: "Vaccination".into(),
            event_type: EventType::HealthCare,
            detail: None,
            frequency: None,
        };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseErrors::PetNotFound(_))
        ));
    }
}
