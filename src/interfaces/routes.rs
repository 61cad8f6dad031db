use actix_web::web;

use crate::handlers::home::home;

mod admin;
mod public;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(home);

    cfg.service(
        web::scope("/api/v1")
            .configure(public::config_routes)
            .configure(admin::config_routes)
    );
}
