use crate::error::PetpalsError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use petpals_api_structs::update_event::*;
use petpals_domain::{Event, EventType, ID};
use petpals_infra::PetpalsContext;

fn handle_error(e: UseCaseErrors) -> PetpalsError {
    match e {
        UseCaseErrors::NotFound(event_id) => {
            PetpalsError::NotFound(format!("The event with id: {}, was not found.", event_id))
        }
        UseCaseErrors::StorageError => PetpalsError::InternalError,
    }
}

pub async fn update_event_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PetpalsContext>,
) -> Result<HttpResponse, PetpalsError> {
    let body = body.0;
    let usecase = UpdateEventUseCase {
        event_id: path_params.event_id.clone(),
        start_time: body.start_time,
        end_time: body.end_time,
        description: body.description,
        event_type: body.event_type,
        detail: body.detail,
        frequency: body.frequency,
    };

    execute(usecase, &ctx)
        .await
        .map(|event| HttpResponse::Ok().json(APIResponse::new(event)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct UpdateEventUseCase {
    pub event_id: ID,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub description: Option<String>,
    pub event_type: Option<EventType>,
    pub detail: Option<String>,
    pub frequency: Option<i64>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdateEventUseCase {
    type Response = Event;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &PetpalsContext) -> Result<Self::Response, Self::Errors> {
        let mut event = match ctx.repos.events.find(&self.event_id).await {
            Some(event) => event,
            None => return Err(UseCaseErrors::NotFound(self.event_id.clone())),
        };

        if let Some(start_time) = self.start_time {
            event.start_time = start_time;
        }
        if let Some(end_time) = self.end_time {
            event.end_time = Some(end_time);
        }
        if let Some(description) = &self.description {
            event.description = description.clone();
        }
        if let Some(event_type) = self.event_type {
            event.event_type = event_type;
        }
        if let Some(detail) = &self.detail {
            event.detail = Some(detail.clone());
        }
        if let Some(frequency) = self.frequency {
            event.frequency = Some(frequency);
        }

        ctx.repos
            .events
            .save(&event)
            .await
            .map(|_| event)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use petpals_domain::{Pet, PetSpecies, Sex, User};
    use petpals_infra::setup_context;

    #[actix_web::main]
    #[test]
    async fn reschedules_event() {
        let ctx = setup_context().await;
        let user = User::new("sched@petpals.test", "Sched");
        ctx.repos.users.insert(&user).await.unwrap();
        let pet = Pet::new(user.id.clone(), "Ivy", Sex::Female, PetSpecies::Cat, 0);
        ctx.repos.pets.insert(&pet).await.unwrap();
        let event = Event {
            id: Default::default(),
            pet_id: pet.id.clone(),
            user_id: user.id.clone(),
            start_time: 100,
            end_time: None,
            description: "Checkup".into(),
            event_type: EventType::HealthCare,
            detail: None,
            frequency: None,
        };
        ctx.repos.events.insert(&event).await.unwrap();

        let mut usecase = UpdateEventUseCase {
            event_id: event.id.clone(),
            start_time: Some(500),
            end_time: None,
            description: None,
            event_type: None,
            detail: None,
            frequency: None,
        };
        let updated = usecase.execute(&ctx).await.unwrap();
        assert_eq!(updated.start_time, 500);
        assert_eq!(updated.description, "Checkup");
    }
}
