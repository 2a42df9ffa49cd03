use crate::error::PetpalsError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use petpals_api_structs::get_activity_count::*;
use petpals_domain::ID;
use petpals_infra::{PetpalsContext, TimeRange};

fn handle_error(e: UseCaseErrors) -> PetpalsError {
    match e {
        UseCaseErrors::PetNotFound(pet_id) => {
            PetpalsError::NotFound(format!("The pet with id: {}, was not found.", pet_id))
        }
    }
}

pub async fn get_activity_count_controller(
    path_params: web::Path<PathParams>,
    query_params: web::Query<QueryParams>,
    ctx: web::Data<PetpalsContext>,
) -> Result<HttpResponse, PetpalsError> {
    let query_params = query_params.0;
    // The range only applies when both bounds are given
    let range = match (query_params.start_date, query_params.end_date) {
        (Some(start), Some(end)) => Some(TimeRange { start, end }),
        _ => None,
    };
    let usecase = GetActivityCountUseCase {
        pet_id: path_params.pet_id.clone(),
        activity: query_params.activity,
        range,
    };

    execute(usecase, &ctx)
        .await
        .map(|res| {
            HttpResponse::Ok().json(APIResponse {
                activity: res.activity,
                count: res.count,
            })
        })
        .map_err(handle_error)
}

#[derive(Debug)]
pub struct GetActivityCountUseCase {
    pub pet_id: ID,
    pub activity: String,
    pub range: Option<TimeRange>,
}

#[derive(Debug)]
pub struct UseCaseRes {
    pub activity: String,
    pub count: i64,
}

#[derive(Debug)]
pub enum UseCaseErrors {
    PetNotFound(ID),
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetActivityCountUseCase {
    type Response = UseCaseRes;

    type Errors = UseCaseErrors;

    async fn execute(&mut self, ctx: &PetpalsContext) -> Result<Self::Response, Self::Errors> {
        if ctx.repos.pets.find(&self.pet_id).await.is_none() {
            return Err(UseCaseErrors::PetNotFound(self.pet_id.clone()));
        }

        let count = ctx
            .repos
            .activities
            .sum_frequency(&self.pet_id, &self.activity, self.range)
            .await;

        Ok(UseCaseRes {
            activity: self.activity.clone(),
            count,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use petpals_domain::{Activity, Pet, PetSpecies, Sex, User};
    use petpals_infra::setup_context;

    async fn insert_pet(ctx: &PetpalsContext) -> Pet {
        let user = User::new("counter@petpals.test", "Counter");
        ctx.repos.users.insert(&user).await.unwrap();
        let pet = Pet::new(user.id.clone(), "Biscuit", Sex::Female, PetSpecies::Dog, 0);
        ctx.repos.pets.insert(&pet).await.unwrap();
        pet
    }

    #[actix_web::main]
    #[test]
    async fn sums_frequency_for_matching_activity() {
        let ctx = setup_context().await;
        let pet = insert_pet(&ctx).await;

        for (frequency, date) in [(2, 100), (3, 200), (5, 300)] {
            let activity = Activity::new(pet.id.clone(), "walk", frequency, date);
            ctx.repos.activities.insert(&activity).await.unwrap();
        }
        let other = Activity::new(pet.id.clone(), "brush", 7, 150);
        ctx.repos.activities.insert(&other).await.unwrap();

        let usecase = GetActivityCountUseCase {
            pet_id: pet.id.clone(),
            activity: "walk".into(),
            range: None,
        };
        let res = execute(usecase, &ctx).await.unwrap();
        assert_eq!(res.count, 10);
    }

    #[actix_web::main]
    #[test]
    async fn bounds_sum_to_time_range() {
        let ctx = setup_context().await;
        let pet = insert_pet(&ctx).await;

        for (frequency, date) in [(2, 100), (3, 200), (5, 300)] {
            let activity = Activity::new(pet.id.clone(), "walk", frequency, date);
            ctx.repos.activities.insert(&activity).await.unwrap();
        }

        let usecase = GetActivityCountUseCase {
            pet_id: pet.id.clone(),
            activity: "walk".into(),
            range: Some(TimeRange {
                start: 150,
                end: 250,
            }),
        };
        let res = execute(usecase, &ctx).await.unwrap();
        assert_eq!(res.count, 3);
    }

    #[actix_web::main]
    #[test]
    async fn count_is_zero_without_matches() {
        let ctx = setup_context().await;
        let pet = insert_pet(&ctx).await;

        let usecase = GetActivityCountUseCase {
            pet_id: pet.id.clone(),
            activity: "swim".into(),
            range: None,
        };
        let res = execute(usecase, &ctx).await.unwrap();
        assert_eq!(res.count, 0);
    }
}
