use crate::error::PetpalsError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use petpals_api_structs::update_pet::*;
use petpals_domain::{Pet, PetSpecies, Sex, ID};
use petpals_infra::PetpalsContext;

fn handle_error(e: UseCaseErrors) -> PetpalsError {
    match e {
        UseCaseErrors::NotFound(pet_id) => {
            PetpalsError::NotFound(format!("The pet with id: {}, was not found.", pet_id))
        }
        UseCaseErrors::StorageError => PetpalsError::InternalError,
    }
}

pub async fn update_pet_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<PetpalsContext>,
) -> Result<HttpResponse, PetpalsError> {
    let body = body.0;
    let usecase = UpdatePetUseCase {
        pet_id: path_params.pet_id.clone(),
        name: body.name,
        sex: body.sex,
        species: body.species,
        date_of_birth: body.date_of_birth,
    };

    execute(usecase, &ctx)
        .await
        .map(|pet| HttpResponse::Ok().json(APIResponse::new(pet)))
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct UpdatePetUseCase {
    pub pet_id: ID,
    pub name: Option<String>,
    pub sex: Option<Sex>,
    pub species: Option<PetSpecies>,
    pub date_of_birth: Option<i64>,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    NotFound(ID),
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for UpdatePetUseCase {
    type Response = Pet;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &PetpalsContext) -> Result<Self::Response, Self::Errors> {
        let mut pet = match ctx.repos.pets.find(&self.pet_id).await {
            Some(pet) => pet,
            None => return Err(UseCaseErrors::NotFound(self.pet_id.clone())),
        };

        if let Some(name) = &self.name {
            pet.name = name.clone();
        }
        if let Some(sex) = self.sex {
            pet.sex = sex;
        }
        if let Some(species) = self.species {
            pet.species = species;
        }
        if let Some(date_of_birth) = self.date_of_birth {
            pet.date_of_birth = date_of_birth;
        }

        ctx.repos
            .pets
            .save(&pet)
            .await
            .map(|_| pet)
            .map_err(|_| UseCaseErrors::StorageError)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use petpals_domain::User;
    use petpals_infra::setup_context;

    #[actix_web::main]
    #[test]
    async fn updates_only_provided_fields() {
        let ctx = setup_context().await;
        let user = User::new("kari@petpals.io", "Kari");
        ctx.repos.users.insert(&user).await.unwrap();
        let pet = Pet::new(
            user.id.clone(),
            "Luna",
            Sex::Female,
            PetSpecies::Cat,
            1546300800000,
        );
        ctx.repos.pets.insert(&pet).await.unwrap();

        let mut usecase = UpdatePetUseCase {
            pet_id: pet.id.clone(),
            name: Some("Nova".into()),
            sex: None,
            species: None,
            date_of_birth: None,
        };
        let res = usecase.execute(&ctx).await;
        assert!(res.is_ok());
        let updated = res.unwrap();
        assert_eq!(updated.name, "Nova");
        assert_eq!(updated.species, PetSpecies::Cat);

        let stored = ctx.repos.pets.find(&pet.id).await.unwrap();
        assert_eq!(stored.name, "Nova");
    }

    #[actix_web::main]
    #[test]
    async fn rejects_unknown_pet() {
        let ctx = setup_context().await;
        let mut usecase = UpdatePetUseCase {
            pet_id: Default::default(),
            name: Some("Nova".into()),
            sex: None,
            species: None,
            date_of_birth: None,
        };
        assert!(usecase.execute(&ctx).await.is_err());
    }
}
