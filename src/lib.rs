use std::sync::Arc;

use sqlx::PgPool;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, use_cases};
pub use interfaces::{handlers, middlewares, repositories, routes};
pub use infrastructure::{db, notify, utils};

use notify::WebhookNotifier;
use repositories::sqlx_repo::{
    SqlxBlogPostRepo, SqlxContactRepo, SqlxProjectRepo, SqlxSiteConfigRepo, SqlxSkillRepo,
};
use use_cases::{
    blog::BlogHandler, contact::ContactHandler, projects::ProjectsHandler,
    site_config::SiteConfigHandler, skills::SkillsHandler,
};

pub type AppProjectHandler = ProjectsHandler<SqlxProjectRepo>;
pub type AppSkillHandler = SkillsHandler<SqlxSkillRepo>;
pub type AppBlogHandler = BlogHandler<SqlxBlogPostRepo>;
pub type AppContactHandler = ContactHandler<SqlxContactRepo, SqlxSiteConfigRepo, WebhookNotifier>;
pub type AppSiteConfigHandler = SiteConfigHandler<SqlxSiteConfigRepo>;

pub struct AppState {
    pub project_handler: AppProjectHandler,
    pub skill_handler: AppSkillHandler,
    pub blog_handler: AppBlogHandler,
    pub contact_handler: AppContactHandler,
    pub site_config_handler: AppSiteConfigHandler,
    pub admin_token: String,
    pub pool: PgPool,
}

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: PgPool) -> Self {
        let notifier = Arc::new(WebhookNotifier::new(config));

        let project_handler = ProjectsHandler::new(SqlxProjectRepo::new(pool.clone()));
        let skill_handler = SkillsHandler::new(SqlxSkillRepo::new(pool.clone()));
        let blog_handler = BlogHandler::new(SqlxBlogPostRepo::new(pool.clone()));
        let contact_handler = ContactHandler::new(
            SqlxContactRepo::new(pool.clone()),
            SqlxSiteConfigRepo::new(pool.clone()),
            notifier,
        );
        let site_config_handler = SiteConfigHandler::new(SqlxSiteConfigRepo::new(pool.clone()));

        AppState {
            project_handler,
            skill_handler,
            blog_handler,
            contact_handler,
            site_config_handler,
            admin_token: config.admin_token.clone(),
            pool,
        }
    }
}
