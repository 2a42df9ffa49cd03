use crate::shared::entity::{Entity, ID};

/// A logged activity for a `Pet`, e.g. "walk" performed twice
/// on a given day.
#[derive(Debug, Clone)]
pub struct Activity {
    pub id: ID,
    pub pet_id: ID,
    /// Free-form activity name, e.g. "walk" or "brush"
    pub activity: String,
    /// How many times the activity was performed
    pub frequency: i64,
    /// UTC timestamp in millis
    pub date: i64,
}

impl Activity {
    pub fn new(pet_id: ID, activity: &str, frequency: i64, date: i64) -> Self {
        Self {
            id: Default::default(),
            pet_id,
            activity: activity.into(),
            frequency,
            date,
        }
    }
}

impl Entity<ID> for Activity {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
