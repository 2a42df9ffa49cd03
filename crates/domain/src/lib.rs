mod activity;
mod event;
mod health;
mod pet;
mod shared;
mod user;

pub use activity::Activity;
pub use event::{Event, EventType, EventWithOwner};
pub use health::HealthRecord;
pub use pet::{Pet, PetSpecies, Sex};
pub use shared::entity::{Entity, ID};
pub use user::User;
