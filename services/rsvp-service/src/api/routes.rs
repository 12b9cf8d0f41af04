use actix_web::web;
use super::handlers;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(handlers::health_check))
        .route("/", web::get().to(handlers::index))
        .service(
            web::scope("/rsvp")
                .route("", web::get().to(handlers::rsvp))
                .route("/findById", web::post().to(handlers::find_by_id))
                .route("/findByLastName", web::post().to(handlers::find_by_last_name))
                .route("/submit", web::post().to(handlers::submit))
        );
}
