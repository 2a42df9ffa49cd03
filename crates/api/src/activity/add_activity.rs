use crate::error::PetpalsError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use petpals_api_structs::add_activity::*;
use petpals_domain::{Activity, ID};
use petpals_infra::PetpalsContext;

pub async fn add_activity_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PetpalsContext>,
) -> Result<HttpResponse, PetpalsError> {
    let body = body.0;
    let usecase = AddActivityUseCase {
        pet_id: path_params.pet_id.clone(),
        activity: body.activity,
        frequency: body.frequency,
        date: body.date,
    };

    execute(usecase, &ctx)
        .await
        .map(|activity| HttpResponse::Created().json(APIResponse::new(activity)))
        .map_err(PetpalsError::from)
}

#[derive(Debug)]
pub struct AddActivityUseCase {
    pub pet_id: ID,
    pub activity: String,
    pub frequency: i64,
    pub date: i64,
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
impl UseCase for AddActivityUseCase {
    type Response = Activity;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &PetpalsContext) -> Result<Self::Response, Self::Errors> {
        if ctx.repos.pets.find(&self.pet_id).await.is_none() {
            return Err(UseCaseErrors::PetNotFound(self.pet_id.clone()));
        }

        let activity = Activity::new(self.pet_id.clone(), &self.activity, self.frequency, self.date);
        match ctx.repos.activities.insert(&activity).await {
            Ok(_) => Ok(activity),
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
    async fn adds_activity_for_existing_pet() {
        let ctx = setup_context().await;
        let user = User::new("walker@petpals.test", "Walker");
        ctx.repos.users.insert(&user).await.unwrap();
        let pet = Pet::new(user.id.clone(), "Milo", Sex::Male, PetSpecies::Dog, 0);
        ctx.repos.pets.insert(&pet).await.unwrap();

        let usecase = AddActivityUseCase {
            pet_id: pet.id.clone(),
            activity: "walk".into(),
            frequency: 2,
            date: 1614556800000,
        };
        let res = execute(usecase, &ctx).await;
        assert!(res.is_ok());

        let activities = ctx.repos.activities.find_by_pet(&pet.id).await;
        assert_eq!(activities.len(), 1);
        assert_eq!(activities[0].activity, "walk");
        assert_eq!(activities[0].frequency, 2);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_pet() {
        let ctx = setup_context().await;

        let usecase = AddActivityUseCase {
            pet_id: Default::default(),
            activity: "walk".into(),
            frequency: 1,
            date: 0,
        };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseErrors::PetNotFound(_))
        ));
    }
}
