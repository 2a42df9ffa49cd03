use crate::error::PetpalsError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use petpals_api_structs::get_user_events::*;
use petpals_domain::{EventWithOwner, ID};
use petpals_infra::PetpalsContext;

fn handle_error(e: UseCaseErrors) -> PetpalsError {
    match e {
        UseCaseErrors::UserNotFound(user_id) => {
            PetpalsError::NotFound(format!("The user with id: {}, was not found.", user_id))
        }
    }
}

pub async fn get_user_events_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PetpalsContext>,
) -> Result<HttpResponse, PetpalsError> {
    let usecase = GetUserEventsUseCase {
        user_id: path_params.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|events| HttpResponse::Ok().json(APIResponse::new(events)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetUserEventsUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    UserNotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUserEventsUseCase {
    type Response = Vec<EventWithOwner>;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &PetpalsContext) -> Result<Self::Response, Self::Errors> {
        let user = match ctx.repos.users.find(&self.user_id).await {
            Some(user) => user,
            None => return Err(UseCaseErrors::UserNotFound(self.user_id.clone())),
        };

        let events = ctx.repos.events.find_by_user(&self.user_id).await;
        let mut with_owner = Vec::with_capacity(events.len());
        for event in events {
            // Events whose pet has been deleted are skipped rather
            // than failing the whole listing
            let pet = match ctx.repos.pets.find(&event.pet_id).await {
                Some(pet) => pet,
                None => continue,
            };
            with_owner.push(EventWithOwner {
                event,
                pet_name: pet.name,
                owner_email: user.email.clone(),
            });
        }

        Ok(with_owner)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use petpals_domain::{Event, EventType, Pet, PetSpecies, Sex, User};
    use petpals_infra::setup_context;

    fn event_for(pet: &Pet, start_time: i64) -> Event {
        Event {
            id: Default::default(),
            pet_id: pet.id.clone(),
            user_id: pet.user_id.clone(),
            start_time,
            end_time: None,
            description: "Walk in the park".into(),
            event_type: EventType::Walk,
            detail: None,
            frequency: None,
        }
    }

    #[actix_web::main]
    #[test]
    async fn lists_events_with_pet_names() {
        let ctx = setup_context().await;
        let user = User::new("lister@petpals.test", "Lister");
        ctx.repos.users.insert(&user).await.unwrap();
        let pet = Pet::new(user.id.clone(), "Pixel", Sex::Male, PetSpecies::Bird, 0);
        ctx.repos.pets.insert(&pet).await.unwrap();
        ctx.repos.events.insert(&event_for(&pet, 100)).await.unwrap();
        ctx.repos.events.insert(&event_for(&pet, 200)).await.unwrap();

        let usecase = GetUserEventsUseCase {
            user_id: user.id.clone(),
        };
        let events = execute(usecase, &ctx).await.unwrap();
        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.pet_name == "Pixel"));
        assert!(events.iter().all(|e| e.owner_email == user.email));
    }

    #[actix_web::main]
    #[test]
    async fn skips_events_of_deleted_pets() {
        let ctx = setup_context().await;
        let user = User::new("lister2@petpals.test", "Lister");
        ctx.repos.users.insert(&user).await.unwrap();
        let pet = Pet::new(user.id.clone(), "Pixel", Sex::Male, PetSpecies::Bird, 0);
        ctx.repos.pets.insert(&pet).await.unwrap();
        ctx.repos.events.insert(&event_for(&pet, 100)).await.unwrap();
        ctx.repos.pets.delete(&pet.id).await.unwrap();

        let usecase = GetUserEventsUseCase {
            user_id: user.id.clone(),
        };
        let events = execute(usecase, &ctx).await.unwrap();
        assert!(events.is_empty());
    }
}
