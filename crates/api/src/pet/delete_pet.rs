use crate::error::PetpalsError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use petpals_api_structs::delete_pet::*;
use petpals_domain::{Pet, ID};
use petpals_infra::PetpalsContext;

fn handle_error(e: UseCaseErrors) -> PetpalsError {
    match e {
        UseCaseErrors::NotFound(pet_id) => {
            PetpalsError::NotFound(format!("The pet with id: {}, was not found.", pet_id))
        }
        UseCaseErrors::StorageError => PetpalsError::InternalError,
    }
}

pub async fn delete_pet_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PetpalsContext>,
) -> Result<HttpResponse, PetpalsError> {
    let usecase = DeletePetUseCase {
        pet_id: path_params.pet_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|pet| HttpResponse::Ok().json(APIResponse::new(pet)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct DeletePetUseCase {
    pub pet_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeletePetUseCase {
    type Response = Pet;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &PetpalsContext) -> Result<Self::Response, Self::Errors> {
        if ctx.repos.pets.find(&self.pet_id).await.is_none() {
            return Err(UseCaseErrors::NotFound(self.pet_id.clone()));
        }

        // Everything belonging to the pet goes with it
        ctx.repos
            .events
            .delete_by_pet(&self.pet_id)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        ctx.repos
            .health_records
            .delete_by_pet(&self.pet_id)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        ctx.repos
            .activities
            .delete_by_pet(&self.pet_id)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        match ctx.repos.pets.delete(&self.pet_id).await {
            Some(pet) => Ok(pet),
            None => Err(UseCaseErrors::NotFound(self.pet_id.clone())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use petpals_domain::{Activity, Event, EventType, HealthRecord, PetSpecies, Sex, User};
    use petpals_infra::setup_context;

    #[actix_web::main]
    #[test]
    async fn deletes_pet_and_everything_it_owns() {
        let ctx = setup_context().await;
        let user = User::new("cascade@petpals.test", "Cascade");
        ctx.repos.users.insert(&user).await.unwrap();
        let pet = Pet::new(user.id.clone(), "Rex", Sex::Male, PetSpecies::Dog, 0);
        ctx.repos.pets.insert(&pet).await.unwrap();

        let record = HealthRecord::new(pet.id.clone(), 50.0, 20.0, 100);
        ctx.repos.health_records.insert(&record).await.unwrap();
        let activity = Activity::new(pet.id.clone(), "walk", 2, 100);
        ctx.repos.activities.insert(&activity).await.unwrap();
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

        let usecase = DeletePetUseCase {
            pet_id: pet.id.clone(),
        };
        assert!(execute(usecase, &ctx).await.is_ok());

        assert!(ctx.repos.pets.find(&pet.id).await.is_none());
        assert!(ctx.repos.health_records.find(&record.id).await.is_none());
        assert!(ctx.repos.activities.find(&activity.id).await.is_none());
        assert!(ctx.repos.events.find(&event.id).await.is_none());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_pet() {
        let ctx = setup_context().await;

        let usecase = DeletePetUseCase {
            pet_id: Default::default(),
        };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseErrors::NotFound(_))
        ));
    }
}
