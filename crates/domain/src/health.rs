use crate::shared::entity::{Entity, ID};

/// A single size / weight measurement for a `Pet`.
#[derive(Debug, Clone)]
pub struct HealthRecord {
    pub id: ID,
    pub pet_id: ID,
    /// Size in centimeters
    pub size: f64,
    /// Weight in kilograms
    pub weight: f64,
    /// UTC timestamp in millis of the measurement
    pub date: i64,
}

impl HealthRecord {
    pub fn new(pet_id: ID, size: f64, weight: f64, date: i64) -> Self {
        Self {
            id: Default::default(),
            pet_id,
            size,
            weight,
            date,
        }
    }
}

impl Entity<ID> for HealthRecord {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
