mod activity;
mod event;
mod health;
mod pet;
mod status;
mod user;

pub mod dtos {
    pub use crate::activity::dtos::*;
    pub use crate::event::dtos::*;
    pub use crate::health::dtos::*;
    pub use crate::pet::dtos::*;
    pub use crate::user::dtos::*;
}

pub use crate::activity::api::*;
pub use crate::event::api::*;
pub use crate::health::api::*;
pub use crate::pet::api::*;
pub use crate::status::api::*;
pub use crate::user::api::*;
