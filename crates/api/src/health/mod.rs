mod create_health_record;
mod delete_health_record;
mod get_pet_health;
mod update_health_record;

use actix_web::web;
use create_health_record::create_health_record_controller;
use delete_health_record::delete_health_record_controller;
use get_pet_health::get_pet_health_controller;
use update_health_record::update_health_record_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/pets/{pet_id}/health",
        web::post().to(create_health_record_controller),
    );
    cfg.route(
        "/pets/{pet_id}/health",
        web::get().to(get_pet_health_controller),
    );
    cfg.route(
        "/health/{record_id}",
        web::put().to(update_health_record_controller),
    );
    cfg.route(
        "/health/{record_id}",
        web::delete().to(delete_health_record_controller),
    );
}
