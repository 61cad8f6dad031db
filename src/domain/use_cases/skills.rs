use validator::Validate;

use crate::{
    entities::skill::{NewSkillRequest, Skill, SkillGroup},
    errors::AppError,
    repositories::skill::SkillRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct SkillsHandler<R>
where
    R: SkillRepository,
{
    pub skill_repo: R,
}

impl<R> SkillsHandler<R>
where
    R: SkillRepository,
{
    pub fn new(skill_repo: R) -> Self {
        SkillsHandler { skill_repo }
    }

    /// Creates a new skill with the provided data
    pub async fn create_skill(&self, request: NewSkillRequest) -> Result<Skill, AppError> {
        request.validate()?;
        self.skill_repo.create_skill(&request).await
    }

    /// Lists all skills in (category, proficiency DESC) order
    pub async fn list_skills(&self) -> Result<Vec<Skill>, AppError> {
        self.skill_repo.list_skills().await
    }

    /// Lists all skills partitioned into category groups, preserving the
    /// per-category proficiency-descending order.
    pub async fn grouped_skills(&self) -> Result<Vec<SkillGroup>, AppError> {
        let skills = self.skill_repo.list_skills().await?;
        Ok(SkillGroup::group_by_category(skills))
    }

    /// Replaces every field of an existing skill
    pub async fn update_skill(&self, id: &str, request: NewSkillRequest) -> Result<Skill, AppError> {
        request.validate()?;

        let valid_id = valid_uuid(id)?;
        self.skill_repo.update_skill(&valid_id, &request).await
    }

    /// Deletes a skill by its ID
    pub async fn delete_skill(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;
        self.skill_repo.delete_skill(&valid_id).await
    }
}
