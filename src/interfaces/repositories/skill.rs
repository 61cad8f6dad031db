use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    entities::skill::{NewSkillRequest, Skill},
    errors::AppError,
    repositories::sqlx_repo::SqlxSkillRepo,
};

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn create_skill(&self, skill: &NewSkillRequest) -> Result<Skill, AppError>;
    async fn get_skill_by_name(&self, name: &str) -> Result<Option<Skill>, AppError>;
    async fn list_skills(&self) -> Result<Vec<Skill>, AppError>;
    async fn update_skill(&self, id: &Uuid, skill: &NewSkillRequest) -> Result<Skill, AppError>;
    async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError>;
}

impl SqlxSkillRepo {
    pub fn new(pool: PgPool) -> Self {
        SqlxSkillRepo { pool }
    }
}

#[async_trait]
impl SkillRepository for SqlxSkillRepo {
    async fn create_skill(&self, skill: &NewSkillRequest) -> Result<Skill, AppError> {
        let created = sqlx::query_as::<_, Skill>(
            r#"
            INSERT INTO skills (name, category, proficiency, icon_class)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&skill.name)
        .bind(skill.category)
        .bind(skill.proficiency)
        .bind(&skill.icon_class)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("skills_name_key") {
                    return AppError::Conflict("Skill name already exists".into());
                }
            }
            AppError::from(e)
        })?;

        Ok(created)
    }

    async fn get_skill_by_name(&self, name: &str) -> Result<Option<Skill>, AppError> {
        let skill = sqlx::query_as::<_, Skill>("SELECT * FROM skills WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(skill)
    }

    async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        let skills = sqlx::query_as::<_, Skill>(
            "SELECT * FROM skills ORDER BY category, proficiency DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    async fn update_skill(&self, id: &Uuid, skill: &NewSkillRequest) -> Result<Skill, AppError> {
        let updated = sqlx::query_as::<_, Skill>(
            r#"
            UPDATE skills SET
                name = $1,
                category = $2,
                proficiency = $3,
                icon_class = $4,
                updated_at = NOW()
            WHERE id = $5
            RETURNING *
            "#,
        )
        .bind(&skill.name)
        .bind(skill.category)
        .bind(skill.proficiency)
        .bind(&skill.icon_class)
        .bind(id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint() == Some("skills_name_key") {
                    return AppError::Conflict("Skill name already exists".into());
                }
            }
            AppError::from(e)
        })?;

        Ok(updated)
    }

    async fn delete_skill(&self, id: &Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Skill not found".to_string()));
        }

        Ok(())
    }
}
