use crate::dtos::HealthRecordDTO;
use petpals_domain::{HealthRecord, ID};
use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecordResponse {
    pub health_record: HealthRecordDTO,
}

impl HealthRecordResponse {
    pub fn new(record: HealthRecord) -> Self {
        Self {
            health_record: HealthRecordDTO::new(record),
        }
    }
}

pub mod create_health_record {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub pet_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub size: f64,
        pub weight: f64,
        pub date: i64,
    }

    pub type APIResponse = HealthRecordResponse;
}

pub mod get_pet_health {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub pet_id: ID,
    }

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub health_records: Vec<HealthRecordDTO>,
    }

    impl APIResponse {
        pub fn new(records: Vec<HealthRecord>) -> Self {
            Self {
                health_records: records.into_iter().map(HealthRecordDTO::new).collect(),
            }
        }
    }
}

pub mod update_health_record {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub record_id: ID,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub size: Option<f64>,
        pub weight: Option<f64>,
        pub date: Option<i64>,
    }

    pub type APIResponse = HealthRecordResponse;
}

pub mod delete_health_record {
    use super::*;

    #[derive(Deserialize)]
    pub struct PathParams {
        pub record_id: ID,
    }

    pub type APIResponse = HealthRecordResponse;
}
