mod add_activity;
mod delete_activity;
mod get_activity_count;
mod get_pet_activities;
mod update_activity;

use actix_web::web;
use add_activity::add_activity_controller;
use delete_activity::delete_activity_controller;
use get_activity_count::get_activity_count_controller;
use get_pet_activities::get_pet_activities_controller;
use update_activity::update_activity_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/pets/{pet_id}/activities",
        web::post().to(add_activity_controller),
    );
    cfg.route(
        "/pets/{pet_id}/activities",
        web::get().to(get_pet_activities_controller),
    );
    cfg.route(
        "/pets/{pet_id}/activities/count",
        web::get().to(get_activity_count_controller),
    );
    cfg.route(
        "/activities/{activity_id}",
        web::put().to(update_activity_controller),
    );
    cfg.route(
        "/activities/{activity_id}",
        web::delete().to(delete_activity_controller),
    );
}
