use petpals_domain::{HealthRecord, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct HealthRecordDTO {
    pub id: ID,
    pub pet_id: ID,
    pub size: f64,
    pub weight: f64,
    pub date: i64,
}

impl HealthRecordDTO {
    pub fn new(record: HealthRecord) -> Self {
        Self {
            id: record.id,
            pet_id: record.pet_id,
            size: record.size,
            weight: record.weight,
            date: record.date,
        }
    }
}
