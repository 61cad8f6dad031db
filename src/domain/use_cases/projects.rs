use std::str::FromStr;

use validator::Validate;

use crate::{
    constants::PROJECTS_PER_PAGE,
    entities::project::{
        NewProjectRequest, Project, ProjectCategory, ProjectInsert, ProjectListResponse,
        UpdateProjectRequest,
    },
    errors::AppError,
    repositories::project::ProjectRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct ProjectsHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectsHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectsHandler { project_repo }
    }

    /// Creates a new project with the provided data
    pub async fn create_project(&self, request: NewProjectRequest) -> Result<Project, AppError> {
        let insert = ProjectInsert::try_from(request)?;
        self.project_repo.create_project(&insert).await
    }

    /// Retrieves a project by its ID
    pub async fn get_project(&self, id: &str) -> Result<Project, AppError> {
        let valid_id = valid_uuid(id)?;
        self.project_repo.get_project_by_id(&valid_id).await
    }

    /// Lists projects, optionally filtered to one category. The raw filter
    /// is the query-string value: absent or the literal "all" means no
    /// filter; anything else must name a known category.
    pub async fn list_projects(
        &self,
        raw_category: Option<&str>,
        page: u32,
    ) -> Result<ProjectListResponse, AppError> {
        let category = parse_category_filter(raw_category)?;

        let projects = self
            .project_repo
            .list_projects(category, page, PROJECTS_PER_PAGE)
            .await?;
        let total = self.project_repo.count_projects(category).await?;

        Ok(ProjectListResponse {
            projects,
            total,
            page,
            per_page: PROJECTS_PER_PAGE,
        })
    }

    /// Retrieves featured projects for the landing page
    pub async fn featured_projects(&self, limit: u32) -> Result<Vec<Project>, AppError> {
        self.project_repo.featured_projects(limit).await
    }

    /// Applies a partial update to an existing project
    pub async fn update_project(
        &self,
        id: &str,
        request: &UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        request.validate()?;

        let valid_id = valid_uuid(id)?;
        self.project_repo.update_project(&valid_id, request).await
    }

    /// Deletes a project by its ID
    pub async fn delete_project(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.project_repo.delete_project(&valid_id).await
    }
}

/// Maps the `category` query value to an exact-match filter. `None` and
/// the literal "all" both select every project.
pub fn parse_category_filter(raw: Option<&str>) -> Result<Option<ProjectCategory>, AppError> {
    match raw {
        None => Ok(None),
        Some("all") => Ok(None),
        Some(value) => ProjectCategory::from_str(value)
            .map(Some)
            .map_err(|_| AppError::validation("category", "Unknown project category")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_all_select_every_project() {
        assert_eq!(parse_category_filter(None).unwrap(), None);
        assert_eq!(parse_category_filter(Some("all")).unwrap(), None);
    }

    #[test]
    fn known_categories_become_exact_filters() {
        assert_eq!(
            parse_category_filter(Some("ai")).unwrap(),
            Some(ProjectCategory::Ai)
        );
        assert_eq!(
            parse_category_filter(Some("web")).unwrap(),
            Some(ProjectCategory::Web)
        );
    }

    #[test]
    fn unknown_category_is_a_field_error() {
        let err = parse_category_filter(Some("gardening")).unwrap_err();
        match err {
            AppError::ValidationError(fields) => {
                assert_eq!(fields[0].field, "category");
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
