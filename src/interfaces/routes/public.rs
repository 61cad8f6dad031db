use actix_web::web;

use crate::handlers::{blog_posts, contact, projects, site_config, skills};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/projects")
            .service(
                web::resource("")
                    .route(web::get().to(projects::list_projects))
            )
            .service(
                web::resource("/featured")
                    .route(web::get().to(projects::featured_projects))
            )
            .service(
                web::resource("/{project_id}")
                    .route(web::get().to(projects::get_project))
            )
    );

    cfg.service(
        web::scope("/skills")
            .service(
                web::resource("")
                    .route(web::get().to(skills::list_skills))
            )
            .service(
                web::resource("/grouped")
                    .route(web::get().to(skills::grouped_skills))
            )
    );

    cfg.service(
        web::scope("/posts")
            .service(
                web::resource("")
                    .route(web::get().to(blog_posts::list_published_posts))
            )
            .service(
                web::resource("/{slug}")
                    .route(web::get().to(blog_posts::get_post_by_slug))
            )
    );

    cfg.service(
        web::resource("/site-configuration")
            .route(web::get().to(site_config::get_site_configuration))
    );

    cfg.service(
        web::resource("/contact")
            .route(web::post().to(contact::submit_contact))
    );
}
