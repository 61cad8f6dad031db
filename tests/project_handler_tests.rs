use chrono::Utc;
use mockall::mock;
use mockall::predicate::*;
use uuid::Uuid;

use portfolio_api::entities::project::{
    Project, ProjectCategory, ProjectInsert, UpdateProjectRequest,
};
use portfolio_api::errors::AppError;
use portfolio_api::use_cases::projects::ProjectsHandler;

mock! {
    pub ProjectRepo {}

    #[async_trait::async_trait]
    impl portfolio_api::repositories::project::ProjectRepository for ProjectRepo {
        async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError>;
        async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, AppError>;
        async fn get_project_by_title(&self, title: &str) -> Result<Option<Project>, AppError>;
        async fn list_projects(&self, category: Option<ProjectCategory>, page: u32, per_page: u32) -> Result<Vec<Project>, AppError>;
        async fn count_projects(&self, category: Option<ProjectCategory>) -> Result<i64, AppError>;
        async fn featured_projects(&self, limit: u32) -> Result<Vec<Project>, AppError>;
        async fn update_project(&self, id: &Uuid, project: &UpdateProjectRequest) -> Result<Project, AppError>;
        async fn delete_project(&self, id: &Uuid) -> Result<(), AppError>;
    }
}

fn project(title: &str, category: ProjectCategory) -> Project {
    Project {
        id: Uuid::new_v4(),
        title: title.into(),
        description: "Long description".into(),
        short_description: "Short description".into(),
        category,
        technologies: "Rust, PostgreSQL".into(),
        image_url: None,
        demo_url: None,
        github_url: None,
        featured: false,
        created_at: Utc::now(),
        updated_at: Utc::now(),
    }
}

#[tokio::test]
async fn category_all_lists_every_project() {
    let mut repo = MockProjectRepo::new();
    repo.expect_list_projects()
        .withf(|category, page, per_page| category.is_none() && *page == 1 && *per_page == 9)
        .times(1)
        .returning(|_, _, _| Ok(vec![project("One", ProjectCategory::Web)]));
    repo.expect_count_projects()
        .withf(|category| category.is_none())
        .returning(|_| Ok(1));

    let handler = ProjectsHandler::new(repo);

    let listing = handler.list_projects(Some("all"), 1).await.unwrap();
    assert_eq!(listing.total, 1);
    assert_eq!(listing.per_page, 9);
}

#[tokio::test]
async fn absent_category_also_lists_every_project() {
    let mut repo = MockProjectRepo::new();
    repo.expect_list_projects()
        .withf(|category, _, _| category.is_none())
        .times(1)
        .returning(|_, _, _| Ok(Vec::new()));
    repo.expect_count_projects()
        .withf(|category| category.is_none())
        .returning(|_| Ok(0));

    let handler = ProjectsHandler::new(repo);

    assert!(handler.list_projects(None, 1).await.is_ok());
}

#[tokio::test]
async fn named_category_becomes_an_exact_filter() {
    let mut repo = MockProjectRepo::new();
    repo.expect_list_projects()
        .withf(|category, _, _| *category == Some(ProjectCategory::Ai))
        .times(1)
        .returning(|_, _, _| Ok(vec![project("Classifier", ProjectCategory::Ai)]));
    repo.expect_count_projects()
        .withf(|category| *category == Some(ProjectCategory::Ai))
        .returning(|_| Ok(1));

    let handler = ProjectsHandler::new(repo);

    let listing = handler.list_projects(Some("ai"), 1).await.unwrap();
    assert!(listing.projects.iter().all(|p| p.category == ProjectCategory::Ai));
}

#[tokio::test]
async fn unknown_category_is_rejected_without_querying() {
    let mut repo = MockProjectRepo::new();
    repo.expect_list_projects().times(0);
    repo.expect_count_projects().times(0);

    let handler = ProjectsHandler::new(repo);

    let err = handler.list_projects(Some("gardening"), 1).await.unwrap_err();
    assert!(matches!(err, AppError::ValidationError(_)));
}

#[tokio::test]
async fn featured_limit_is_passed_through() {
    let mut repo = MockProjectRepo::new();
    repo.expect_featured_projects()
        .with(eq(3u32))
        .times(1)
        .returning(|_| Ok(vec![project("One", ProjectCategory::Web)]));

    let handler = ProjectsHandler::new(repo);

    let featured = handler.featured_projects(3).await.unwrap();
    assert_eq!(featured.len(), 1);
}

#[tokio::test]
async fn malformed_project_id_is_rejected_as_invalid_input() {
    let mut repo = MockProjectRepo::new();
    repo.expect_get_project_by_id().times(0);

    let handler = ProjectsHandler::new(repo);

    let err = handler.get_project("42").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}
