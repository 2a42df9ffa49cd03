mod create_pet;
mod delete_pet;
mod get_pet;
mod get_pets;
mod update_pet;

use actix_web::web;
use create_pet::create_pet_controller;
use delete_pet::delete_pet_controller;
use get_pet::get_pet_controller;
use get_pets::get_pets_controller;
use update_pet::update_pet_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/users/{user_id}/pets", web::post().to(create_pet_controller));
    cfg.route("/users/{user_id}/pets", web::get().to(get_pets_controller));
    cfg.route("/pets/{pet_id}", web::get().to(get_pet_controller));
    cfg.route("/pets/{pet_id}", web::put().to(update_pet_controller));
    cfg.route("/pets/{pet_id}", web::delete().to(delete_pet_controller));
}
