//! One-shot catalog seeding. Records are keyed by their natural key
//! (project title, skill name, post slug, the singleton configuration
//! row): existing rows get a full field replacement, missing rows are
//! inserted, and blog posts are only ever created.

use anyhow::Result;

use portfolio_api::{
    db::postgres::create_pool,
    entities::{
        blog_post::NewBlogPostRequest,
        option_fields::OptionField,
        project::{NewProjectRequest, ProjectCategory, UpdateProjectRequest},
        site_config::SiteConfigurationRequest,
        skill::{NewSkillRequest, SkillCategory},
    },
    repositories::{
        blog_post::BlogPostRepository,
        project::ProjectRepository,
        skill::SkillRepository,
        sqlx_repo::{SqlxBlogPostRepo, SqlxProjectRepo, SqlxSiteConfigRepo, SqlxSkillRepo},
    },
    settings::AppConfig,
    use_cases::{
        blog::BlogHandler, projects::ProjectsHandler, site_config::SiteConfigHandler,
        skills::SkillsHandler,
    },
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = AppConfig::new().map_err(|e| anyhow::anyhow!("Configuration error: {e}"))?;
    let pool = create_pool(&config.database_url).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    tracing::info!("Populating portfolio catalog...");

    seed_site_configuration(&SiteConfigHandler::new(SqlxSiteConfigRepo::new(pool.clone()))).await?;
    seed_projects(&ProjectsHandler::new(SqlxProjectRepo::new(pool.clone()))).await?;
    seed_skills(&SkillsHandler::new(SqlxSkillRepo::new(pool.clone()))).await?;
    seed_blog_posts(&BlogHandler::new(SqlxBlogPostRepo::new(pool.clone()))).await?;

    tracing::info!("Successfully populated portfolio catalog");
    Ok(())
}

async fn seed_site_configuration(
    handler: &SiteConfigHandler<SqlxSiteConfigRepo>,
) -> Result<()> {
    let request = SiteConfigurationRequest {
        site_title: "Jordan Reyes".into(),
        site_subtitle: "Backend Engineer".into(),
        about_text: "Backend engineer focused on reliable web services, \
                     relational data modeling, and pragmatic API design. \
                     Most at home with Rust, PostgreSQL, and the plumbing \
                     between them."
            .into(),
        hero_text: "Welcome to my digital realm".into(),
        email: "jordan@jordanreyes.dev".into(),
        github_url: Some("https://github.com/jordanreyes".into()),
        linkedin_url: Some("https://linkedin.com/in/jordanreyes".into()),
        twitter_url: None,
        resume_url: None,
    };

    if handler.site_configuration().await?.is_some() {
        handler.update_site_configuration(request).await?;
        tracing::info!("Site configuration updated");
    } else {
        handler.create_site_configuration(request).await?;
        tracing::info!("Site configuration created");
    }

    Ok(())
}

async fn seed_projects(handler: &ProjectsHandler<SqlxProjectRepo>) -> Result<()> {
    for request in project_catalog() {
        match handler.project_repo.get_project_by_title(&request.title).await? {
            Some(existing) => {
                let update = full_project_update(&request);
                handler
                    .update_project(&existing.id.to_string(), &update)
                    .await?;
                tracing::info!("Updated project: {}", request.title);
            }
            None => {
                let title = request.title.clone();
                handler.create_project(request).await?;
                tracing::info!("Created project: {}", title);
            }
        }
    }

    Ok(())
}

/// A full-replacement update built from the same data as a create request.
fn full_project_update(request: &NewProjectRequest) -> UpdateProjectRequest {
    UpdateProjectRequest {
        title: OptionField::SetToValue(request.title.clone()),
        description: OptionField::SetToValue(request.description.clone()),
        short_description: OptionField::SetToValue(request.short_description.clone()),
        category: OptionField::SetToValue(request.category),
        technologies: OptionField::SetToValue(request.technologies.clone()),
        image_url: request.image_url.clone().map(OptionField::SetToValue).unwrap_or_default(),
        demo_url: request.demo_url.clone().map(OptionField::SetToValue).unwrap_or_default(),
        github_url: request.github_url.clone().map(OptionField::SetToValue).unwrap_or_default(),
        featured: OptionField::SetToValue(request.featured),
    }
}

fn project_catalog() -> Vec<NewProjectRequest> {
    vec![
        NewProjectRequest {
            title: "Ledgerline".into(),
            short_description: "Double-entry bookkeeping service with a REST API and \
                                idempotent transaction ingestion."
                .into(),
            description: "A small accounting backend that models accounts and journal \
                          entries as immutable double-entry records. Supports idempotent \
                          ingestion keys, per-currency balances, and nightly CSV exports \
                          for reconciliation."
                .into(),
            category: ProjectCategory::Web,
            technologies: "Rust, actix-web, PostgreSQL, sqlx, Docker".into(),
            image_url: None,
            demo_url: None,
            github_url: Some("https://github.com/jordanreyes/ledgerline".into()),
            featured: true,
        },
        NewProjectRequest {
            title: "Shelfmark".into(),
            short_description: "Self-hosted reading tracker with shelves, tags, and \
                                import from Goodreads exports."
                .into(),
            description: "A reading tracker built around a plain relational model: books, \
                          shelves, tags, and reading sessions. Includes a CSV importer, \
                          fuzzy title matching, and a JSON API consumed by a small \
                          single-page frontend."
                .into(),
            category: ProjectCategory::Web,
            technologies: "Rust, actix-web, PostgreSQL, serde".into(),
            image_url: None,
            demo_url: Some("https://shelfmark.jordanreyes.dev".into()),
            github_url: Some("https://github.com/jordanreyes/shelfmark".into()),
            featured: true,
        },
        NewProjectRequest {
            title: "Tidewatch".into(),
            short_description: "CLI that aggregates tide and swell forecasts for a list \
                                of saved surf spots."
                .into(),
            description: "A command-line tool that pulls tide tables and swell forecasts \
                          from public APIs, caches them locally, and renders a week view \
                          per spot. Ships as a single static binary."
                .into(),
            category: ProjectCategory::Other,
            technologies: "Rust, clap, reqwest, SQLite".into(),
            image_url: None,
            demo_url: None,
            github_url: Some("https://github.com/jordanreyes/tidewatch".into()),
            featured: true,
        },
        NewProjectRequest {
            title: "Caption Sketch".into(),
            short_description: "Experiment in on-device image captioning with a quantized \
                                vision-language model."
                .into(),
            description: "A weekend experiment wiring a quantized captioning model into a \
                          drag-and-drop desktop window. Captions run fully offline; the \
                          interesting part was the preprocessing pipeline and keeping \
                          latency under a second on laptop hardware."
                .into(),
            category: ProjectCategory::Ai,
            technologies: "Rust, ONNX Runtime, egui".into(),
            image_url: None,
            demo_url: None,
            github_url: None,
            featured: false,
        },
    ]
}

async fn seed_skills(handler: &SkillsHandler<SqlxSkillRepo>) -> Result<()> {
    for request in skill_catalog() {
        match handler.skill_repo.get_skill_by_name(&request.name).await? {
            Some(existing) => {
                handler.update_skill(&existing.id.to_string(), request).await?;
            }
            None => {
                handler.create_skill(request).await?;
            }
        }
    }

    tracing::info!("Skill catalog upserted");
    Ok(())
}

fn skill_catalog() -> Vec<NewSkillRequest> {
    let skills = [
        ("Rust", SkillCategory::Backend, 95, "fas fa-gear"),
        ("PostgreSQL", SkillCategory::Database, 90, "fas fa-database"),
        ("SQL", SkillCategory::Database, 90, "fas fa-database"),
        ("actix-web", SkillCategory::Backend, 85, "fas fa-server"),
        ("Python", SkillCategory::Backend, 75, "fab fa-python"),
        ("TypeScript", SkillCategory::Frontend, 70, "fab fa-js"),
        ("HTML5", SkillCategory::Frontend, 80, "fab fa-html5"),
        ("CSS3", SkillCategory::Frontend, 70, "fab fa-css3-alt"),
        ("Docker", SkillCategory::Devops, 80, "fab fa-docker"),
        ("GitHub Actions", SkillCategory::Devops, 75, "fab fa-github"),
        ("Linux", SkillCategory::Devops, 85, "fab fa-linux"),
        ("ONNX Runtime", SkillCategory::Ai, 55, "fas fa-brain"),
    ];

    skills
        .into_iter()
        .map(|(name, category, proficiency, icon_class)| NewSkillRequest {
            name: name.into(),
            category,
            proficiency,
            icon_class: Some(icon_class.into()),
        })
        .collect()
}

async fn seed_blog_posts(handler: &BlogHandler<SqlxBlogPostRepo>) -> Result<()> {
    for request in blog_catalog() {
        let slug = request
            .slug
            .clone()
            .expect("seeded posts carry explicit slugs");

        if handler.blog_post_repo.get_blog_post_by_slug(&slug).await?.is_some() {
            tracing::info!("Blog post already exists: {}", slug);
            continue;
        }

        handler.create_post(request).await?;
        tracing::info!("Created blog post: {}", slug);
    }

    Ok(())
}

fn blog_catalog() -> Vec<NewBlogPostRequest> {
    vec![
        NewBlogPostRequest {
            title: "Pagination Without Surprises".into(),
            slug: Some("pagination-without-surprises".into()),
            excerpt: "Offset pagination is fine for a portfolio-sized dataset until \
                      the ordering is unstable. Notes on picking sort keys that keep \
                      page boundaries honest."
                .into(),
            content_markdown: "# Pagination Without Surprises\n\n\
                Offset pagination gets a bad reputation, but for small datasets the \
                real hazard is not performance. It is an unstable sort: if two rows \
                compare equal under your `ORDER BY`, consecutive pages can repeat or \
                drop records.\n\n\
                ## The fix\n\n\
                Always end the ordering with a unique tiebreaker:\n\n\
                ```sql\nSELECT * FROM projects\nORDER BY featured DESC, created_at DESC, id\nLIMIT 9 OFFSET 18;\n```\n\n\
                With a unique trailing key the ordering is total, and OFFSET behaves \
                exactly as the page number suggests."
                .into(),
            image_url: None,
            published: true,
        },
        NewBlogPostRequest {
            title: "Enums at the Database Boundary".into(),
            slug: Some("enums-at-the-database-boundary".into()),
            excerpt: "Postgres enum types, Rust enums, and the one ordering detail that \
                      bites you when a query sorts by the enum column."
                .into(),
            content_markdown: "# Enums at the Database Boundary\n\n\
                Mapping a Rust enum onto a Postgres enum type keeps bad values out of \
                the table, but the two worlds disagree about ordering: Postgres sorts \
                enum columns by declaration order, not alphabetically.\n\n\
                If any query does `ORDER BY category`, declare the database type in \
                the order you want to read back, and leave a comment in the \
                migration, because nobody will guess why the list is alphabetized."
                .into(),
            image_url: None,
            published: true,
        },
        NewBlogPostRequest {
            title: "Draft: Measuring Cold-Start Time".into(),
            slug: Some("measuring-cold-start-time".into()),
            excerpt: "Work-in-progress notes on profiling service start-up, from pool \
                      establishment to first served request."
                .into(),
            content_markdown: "# Measuring Cold-Start Time\n\n\
                Collecting numbers before writing conclusions. Current checkpoints: \
                config load, pool establishment, migration check, bind, first request."
                .into(),
            image_url: None,
            published: false,
        },
    ]
}
