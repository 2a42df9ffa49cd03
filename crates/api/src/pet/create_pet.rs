use crate::error::PetpalsError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use petpals_api_structs::create_pet::*;
use petpals_domain::{Pet, PetSpecies, Sex, ID};
use petpals_infra::PetpalsContext;

pub async fn create_pet_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PetpalsContext>,
) -> Result<HttpResponse, PetpalsError> {
    let body = body.0;
    let usecase = CreatePetUseCase {
        user_id: path_params.user_id.clone(),
        name: body.name,
        sex: body.sex,
        species: body.species,
        date_of_birth: body.date_of_birth,
    };

    execute(usecase, &ctx)
        .await
        .map(|pet| HttpResponse::Created().json(APIResponse::new(pet)))
        .map_err(PetpalsError::from)
}

#[derive(Debug)]
pub struct CreatePetUseCase {
    pub user_id: ID,
    pub name: String,
    pub sex: Sex,
    pub species: PetSpecies,
    pub date_of_birth: i64,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
    UserNotFound(ID),
}

impl From<UseCaseErrors> for PetpalsError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::StorageError => Self::InternalError,
            UseCaseErrors::UserNotFound(user_id) => {
                Self::NotFound(format!("The user with id: {}, was not found.", user_id))
            }
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreatePetUseCase {
    type Response = Pet;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &PetpalsContext) -> Result<Self::Response, Self::Errors> {
        let user = match ctx.repos.users.find(&self.user_id).await {
            Some(user) => user,
            None => return Err(UseCaseErrors::UserNotFound(self.user_id.clone())),
        };

        let pet = Pet::new(
            user.id,
            &self.name,
            self.sex,
            self.species,
            self.date_of_birth,
        );
        match ctx.repos.pets.insert(&pet).await {
            Ok(_) => Ok(pet),
            Err(_) => Err(UseCaseErrors::StorageError),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use petpals_domain::User;
    use petpals_infra::setup_context;

    #[actix_web::main]
    #[test]
    async fn creates_pet_for_existing_user() {
        let ctx = setup_context().await;
        let user = User::new("carol@petpals.test", "Carol");
        ctx.repos.users.insert(&user).await.unwrap();

        let usecase = CreatePetUseCase {
            user_id: user.id.clone(),
            name: "Buddy".into(),
            sex: Sex::Male,
            species: PetSpecies::Dog,
            date_of_birth: 0,
        };
        let res = execute(usecase, &ctx).await;
        assert!(res.is_ok());

        let pet = res.unwrap();
        assert_eq!(pet.user_id, user.id);
        assert_eq!(ctx.repos.pets.find_by_user(&user.id).await.len(), 1);
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_user() {
        let ctx = setup_context().await;

        let usecase = CreatePetUseCase {
            user_id: Default::default(),
            name: "Ghost".into(),
            sex: Sex::Female,
            species: PetSpecies::Cat,
            date_of_birth: 0,
        };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseErrors::UserNotFound(_))
        ));
    }
}
