use crate::dtos::ActivityDTO;
use petpals_domain::{Activity, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityResponse {
    pub activity: ActivityDTO,
}

impl ActivityResponse {
    pub fn new(activity: Activity) -> Self {
        Self {
            activity: ActivityDTO::new(activity),
        }
    }
}

pub mod add_activity {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub pet_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub activity: String,
        pub frequency: i64,
        pub date: i64,
    }

    pub type APIResponse = ActivityResponse;
}

pub mod get_pet_activities {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub pet_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub activities: Vec<ActivityDTO>,
    }

    impl APIResponse {
        pub fn new(activities: Vec<Activity>) -> Self {
            Self {
                activities: activities.into_iter().map(ActivityDTO::new).collect(),
            }
        }
    }
}

pub mod update_activity {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub activity_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub activity: Option<String>,
        pub frequency: Option<i64>,
        pub date: Option<i64>,
    }

    pub type APIResponse = ActivityResponse;
}

pub mod delete_activity {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub activity_id: ID,
    }

    pub type APIResponse = ActivityResponse;
}

pub mod get_activity_count {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub pet_id: ID,
    }

    #[derive(Serialize, Deserialize, Debug)]
    #[serde(rename_all = "camelCase")]
    pub struct QueryParams {
        pub activity: String,
        pub start_date: Option<i64>,
        pub end_date: Option<i64>,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub activity: String,
        pub count: i64,
    }
}
