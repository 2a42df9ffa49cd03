mod create_event;
mod delete_event;
mod get_event;
mod get_pet_events;
mod get_user_events;
mod update_event;

use actix_web::web;
use create_event::create_event_controller;
use delete_event::delete_event_controller;
use get_event::get_event_controller;
use get_pet_events::get_pet_events_controller;
use get_user_events::get_user_events_controller;
use update_event::update_event_controller;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route(
        "/pets/{pet_id}/events",
        web::post().to(create_event_controller),
    );
    cfg.route(
        "/pets/{pet_id}/events",
        web::get().to(get_pet_events_controller),
    );
    cfg.route(
        "/users/{user_id}/events",
        web::get().to(get_user_events_controller),
    );
    cfg.route("/events/{event_id}", web::get().to(get_event_controller));
    cfg.route("/events/{event_id}", web::put().to(update_event_controller));
    cfg.route(
        "/events/{event_id}",
        web::delete().to(delete_event_controller),
    );
}
