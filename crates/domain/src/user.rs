use crate::shared::entity::{Entity, ID};

/// A pet owner. The `email` address is where reminder
/// notifications for the owner's pets are delivered.
#[derive(Debug, Clone)]
pub struct User {
    pub id: ID,
    pub email: String,
    pub name: String,
}

impl User {
    pub fn new(email: &str, name: &str) -> Self {
        Self {
            id: Default::default(),
            email: email.into(),
            name: name.into(),
        }
    }
}

impl Entity<ID> for User {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
