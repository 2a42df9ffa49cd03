use petpals_domain::{Activity, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDTO {
    pub id: ID,
    pub pet_id: ID,
    pub activity: String,
    pub frequency: i64,
    pub date: i64,
}

impl ActivityDTO {
    pub fn new(activity: Activity) -> Self {
        Self {
            id: activity.id,
            pet_id: activity.pet_id,
            activity: activity.activity,
            frequency: activity.frequency,
            date: activity.date,
        }
    }
}
