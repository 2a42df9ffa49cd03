use crate::error::PetpalsError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use petpals_api_structs::delete_user::*;
use petpals_domain::{User, ID};
use petpals_infra::PetpalsContext;

fn handle_error(e: UseCaseErrors) -> PetpalsError {
    match e {
        UseCaseErrors::NotFound(user_id) => {
            PetpalsError::NotFound(format!("The user with id: {}, was not found.", user_id))
        }
        UseCaseErrors::StorageError => PetpalsError::InternalError,
    }
}

pub async fn delete_user_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<PetpalsContext>,
) -> Result<HttpResponse, PetpalsError> {
    let usecase = DeleteUserUseCase {
        user_id: path_params.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|user| HttpResponse::Ok().json(APIResponse::new(user)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct DeleteUserUseCase {
    pub user_id: ID,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for DeleteUserUseCase {
    type Response = User;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &PetpalsContext) -> Result<Self::Response, Self::Errors> {
        if ctx.repos.users.find(&self.user_id).await.is_none() {
            return Err(UseCaseErrors::NotFound(self.user_id.clone()));
        }

        // The user's pets go with them, along with everything the
        // pets own
        for pet in ctx.repos.pets.find_by_user(&self.user_id).await {
            ctx.repos
                .health_records
                .delete_by_pet(&pet.id)
                .await
                .map_err(|_| UseCaseErrors::StorageError)?;
            ctx.repos
                .activities
                .delete_by_pet(&pet.id)
                .await
                .map_err(|_| UseCaseErrors::StorageError)?;
        }
        ctx.repos
            .events
            .delete_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;
        ctx.repos
            .pets
            .delete_by_user(&self.user_id)
            .await
            .map_err(|_| UseCaseErrors::StorageError)?;

        match ctx.repos.users.delete(&self.user_id).await {
            Some(user) => Ok(user),
            None => Err(UseCaseErrors::NotFound(self.user_id.clone())),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use petpals_domain::{Activity, Event, EventType, HealthRecord, Pet, PetSpecies, Sex};
    use petpals_infra::setup_context;

    #[actix_web::main]
    #[test]
    async fn deletes_user_and_everything_they_own() {
        let ctx = setup_context().await;
        let user = User::new("leaving@petpals.test", "Leaving");
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

        let usecase = DeleteUserUseCase {
            user_id: user.id.clone(),
        };
        assert!(execute(usecase, &ctx).await.is_ok());

        assert!(ctx.repos.users.find(&user.id).await.is_none());
        assert!(ctx.repos.pets.find(&pet.id).await.is_none());
        assert!(ctx.repos.health_records.find(&record.id).await.is_none());
        assert!(ctx.repos.activities.find(&activity.id).await.is_none());
        assert!(ctx.repos.events.find(&event.id).await.is_none());
    }

    #[actix_web::main]
    #[test]
    async fn does_not_touch_other_users_data() {
        let ctx = setup_context().await;
        let user = User::new("gone@petpals.test", "Gone");
        ctx.repos.users.insert(&user).await.unwrap();
        let other = User::new("stays@petpals.test", "Stays");
        ctx.repos.users.insert(&other).await.unwrap();
        let other_pet = Pet::new(other.id.clone(), "Luna", Sex::Female, PetSpecies::Cat, 0);
        ctx.repos.pets.insert(&other_pet).await.unwrap();

        let usecase = DeleteUserUseCase {
            user_id: user.id.clone(),
        };
        assert!(execute(usecase, &ctx).await.is_ok());

        assert!(ctx.repos.users.find(&other.id).await.is_some());
        assert!(ctx.repos.pets.find(&other_pet.id).await.is_some());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_user() {
        let ctx = setup_context().await;

        let usecase = DeleteUserUseCase {
            user_id: Default::default(),
        };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseErrors::NotFound(_))
        ));
    }
}
