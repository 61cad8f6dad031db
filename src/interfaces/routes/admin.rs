use actix_web::web;

use crate::{
    handlers::{blog_posts, contact, projects, site_config, skills, system::admin_health_check},
    middlewares::admin::AdminAuth,
};

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/admin")
            .wrap(AdminAuth)
            .service(admin_health_check)
            .service(
                web::scope("/projects")
                    .service(
                        web::resource("")
                            .route(web::post().to(projects::create_project))
                    )
                    .service(
                        web::resource("/{project_id}")
                            .route(web::patch().to(projects::update_project))
                            .route(web::delete().to(projects::delete_project))
                    )
            )
            .service(
                web::scope("/skills")
                    .service(
                        web::resource("")
                            .route(web::post().to(skills::create_skill))
                    )
                    .service(
                        web::resource("/{skill_id}")
                            .route(web::put().to(skills::update_skill))
                            .route(web::delete().to(skills::delete_skill))
                    )
            )
            .service(
                web::scope("/posts")
                    .service(
                        web::resource("")
                            .route(web::get().to(blog_posts::admin_list_posts))
                            .route(web::post().to(blog_posts::create_post))
                    )
                    .service(
                        web::resource("/{post_id}")
                            .route(web::get().to(blog_posts::get_post))
                            .route(web::patch().to(blog_posts::update_post))
                            .route(web::delete().to(blog_posts::delete_post))
                    )
                    .service(
                        web::resource("/{post_id}/publish")
                            .route(web::post().to(blog_posts::publish_post))
                    )
            )
            .service(
                web::scope("/contact-messages")
                    .service(
                        web::resource("")
                            .route(web::get().to(contact::list_contact_messages))
                    )
                    .service(
                        web::resource("/{message_id}")
                            .route(web::get().to(contact::get_contact_message))
                    )
                    .service(
                        web::resource("/{message_id}/read")
                            .route(web::put().to(contact::set_contact_read))
                    )
            )
            .service(
                web::resource("/site-configuration")
                    .route(web::get().to(site_config::get_site_configuration))
                    .route(web::post().to(site_config::create_site_configuration))
                    .route(web::put().to(site_config::update_site_configuration))
                    .route(web::delete().to(site_config::delete_site_configuration))
            )
    );
}
