use crate::error::PetpalsError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use petpals_api_structs::create_user::*;
use petpals_domain::User;
use petpals_infra::PetpalsContext;

pub async fn create_user_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<PetpalsContext>,
) -> Result<HttpResponse, PetpalsError> {
    let body = body.0;
    let usecase = CreateUserUseCase {
        email: body.email,
        name: body.name,
    };

    execute(usecase, &ctx)
        .await
        .map(|usecase_res| HttpResponse::Created().json(APIResponse::new(usecase_res.user)))
        .map_err(PetpalsError::from)
}

#[derive(Debug)]
pub struct CreateUserUseCase {
    pub email: String,
    pub name: String,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub user: User,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    StorageError,
    UserAlreadyExists(String),
}

impl From<UseCaseErrors> for PetpalsError {
    fn from(e: UseCaseErrors) -> Self {
        match e {
            UseCaseErrors::StorageError => Self::InternalError,
            UseCaseErrors::UserAlreadyExists(email) => Self::Conflict(format!(
                "A user with email: {}, already exists. Emails need to be unique.",
                email
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateUserUseCase {
    type Response = UseCaseRes;
    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &PetpalsContext) -> Result<Self::Response, Self::Errors> {
        if ctx.repos.users.find_by_email(&self.email).await.is_some() {
            return Err(UseCaseErrors::UserAlreadyExists(self.email.clone()));
        }

        let user = User::new(&self.email, &self.name);
        match ctx.repos.users.insert(&user).await {
            Ok(_) => Ok(UseCaseRes { user }),
            Err(_) => Err(UseCaseErrors::StorageError),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use petpals_infra::setup_context;

    #[actix_web::main]
    #[test]
    async fn creates_user() {
        let ctx = setup_context().await;

        let usecase = CreateUserUseCase {
            email: "alice@petpals.test".into(),
            name: "Alice".into(),
        };
        let res = execute(usecase, &ctx).await;
        assert!(res.is_ok());

        let user = res.unwrap().user;
        assert_eq!(user.email, "alice@petpals.test");
        assert!(ctx.repos.users.find(&user.id).await.is_some());
    }

    #[actix_web::main]
    #[test]
    async fn rejects_duplicate_email() {
        let ctx = setup_context().await;

        let usecase = CreateUserUseCase {
            email: "bob@petpals.test".into(),
            name: "Bob".into(),
        };
        assert!(execute(usecase, &ctx).await.is_ok());

        let usecase = CreateUserUseCase {
            email: "bob@petpals.test".into(),
            name: "Bobby".into(),
        };
        assert!(matches!(
            execute(usecase, &ctx).await,
            Err(UseCaseErrors::UserAlreadyExists(_))
        ));
    }
}
