use async_trait::async_trait;
use sqlx::{PgPool, QueryBuilder};
use uuid::Uuid;

use crate::{
    entities::project::{Project, ProjectCategory, ProjectInsert, UpdateProjectRequest},
    errors::AppError,
    repositories::sqlx_repo::{page_offset, SqlxProjectRepo},
};

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError>;
    async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, AppError>;
    async fn get_project_by_title(&self, title: &str) -> Result<Option<Project>, AppError>;
    async fn list_projects(
        &self,
        category: Option<ProjectCategory>,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Project>, AppError>;
    async fn count_projects(&self, category: Option<ProjectCategory>) -> Result<i64, AppError>;
    async fn featured_projects(&self, limit: u32) -> Result<Vec<Project>, AppError>;
    async fn update_project(
        &self,
        id: &Uuid,
        project: &UpdateProjectRequest,
    ) -> Result<Project, AppError>;
    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn create_project(&self, project: &ProjectInsert) -> Result<Project, AppError> {
        let created = sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (
                title, description, short_description, category, technologies,
                image_url, demo_url, github_url, featured, created_at, updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            RETURNING *
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.short_description)
        .bind(project.category)
        .bind(&project.technologies)
        .bind(&project.image_url)
        .bind(&project.demo_url)
        .bind(&project.github_url)
        .bind(project.featured)
        .bind(project.created_at)
        .bind(project.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(created)
    }

    async fn get_project_by_id(&self, id: &Uuid) -> Result<Project, AppError> {
        let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Project not found".to_string()))?;

        Ok(project)
    }

    async fn get_project_by_title(&self, title: &str) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE title = $1")
            .bind(title)
            .fetch_optional(&self.pool)
            .await?;

        Ok(project)
    }

    async fn list_projects(
        &self,
        category: Option<ProjectCategory>,
        page: u32,
        per_page: u32,
    ) -> Result<Vec<Project>, AppError> {
        let mut builder = QueryBuilder::new("SELECT * FROM projects");

        if let Some(category) = category {
            builder.push(" WHERE category = ").push_bind(category);
        }

        builder.push(" ORDER BY featured DESC, created_at DESC");
        builder.push(" LIMIT ").push_bind(per_page as i64);
        builder.push(" OFFSET ").push_bind(page_offset(page, per_page));

        let projects = builder
            .build_query_as::<Project>()
            .fetch_all(&self.pool)
            .await?;

        Ok(projects)
    }

    async fn count_projects(&self, category: Option<ProjectCategory>) -> Result<i64, AppError> {
        let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM projects");

        if let Some(category) = category {
            builder.push(" WHERE category = ").push_bind(category);
        }

        let count: i64 = builder
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    async fn featured_projects(&self, limit: u32) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT * FROM projects
            WHERE featured = TRUE
            ORDER BY created_at DESC
            LIMIT $1
            "#,
        )
        .bind(limit as i64)
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn update_project(
        &self,
        id: &Uuid,
        project: &UpdateProjectRequest,
    ) -> Result<Project, AppError> {
        // COALESCE used to preserve existing fields when no new value is provided
        let updated = sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects SET
                title = COALESCE($1, title),
                description = COALESCE($2, description),
                short_description = COALESCE($3, short_description),
                category = COALESCE($4, category),
                technologies = COALESCE($5, technologies),
                image_url = COALESCE($6, image_url),
                demo_url = COALESCE($7, demo_url),
                github_url = COALESCE($8, github_url),
                featured = COALESCE($9, featured),
                updated_at = NOW()
            WHERE id = $10
            RETURNING *
            "#,
        )
        .bind(project.title.flatten_str())
        .bind(project.description.flatten_str())
        .bind(project.short_description.flatten_str())
        .bind(project.category.flatten_copied())
        .bind(project.technologies.flatten_str())
        .bind(project.image_url.flatten_str())
        .bind(project.demo_url.flatten_str())
        .bind(project.github_url.flatten_str())
        .bind(project.featured.flatten_copied())
        .bind(id)
        .fetch_one(&self.pool)
        .await?;

        Ok(updated)
    }

    async fn delete_project(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Project not found".to_string()));
        }

        Ok(())
    }
}
