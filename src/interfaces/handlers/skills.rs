use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::skill::NewSkillRequest, errors::AppError, AppState};

#[instrument(skip(state))]
pub async fn list_skills(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let skills = state.skill_handler.list_skills().await?;
    Ok(HttpResponse::Ok().json(skills))
}

#[instrument(skip(state))]
pub async fn grouped_skills(state: web::Data<AppState>) -> Result<impl Responder, AppError> {
    let groups = state.skill_handler.grouped_skills().await?;
    Ok(HttpResponse::Ok().json(groups))
}

#[instrument(skip(state, data))]
pub async fn create_skill(
    state: web::Data<AppState>,
    data: web::Json<NewSkillRequest>,
) -> Result<impl Responder, AppError> {
    let skill = state.skill_handler.create_skill(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(skill))
}

#[instrument(skip(skill_id, state, data))]
pub async fn update_skill(
    skill_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<NewSkillRequest>,
) -> Result<impl Responder, AppError> {
    let skill = state.skill_handler
        .update_skill(&skill_id, data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(skill))
}

#[instrument(skip(skill_id, state))]
pub async fn delete_skill(
    skill_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.skill_handler.delete_skill(&skill_id).await?;
    Ok(HttpResponse::NoContent().finish())
}
