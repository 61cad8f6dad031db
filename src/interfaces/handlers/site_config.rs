use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{entities::site_config::SiteConfigurationRequest, errors::AppError, AppState};

/// Returns the singleton configuration, or JSON null before first creation.
#[instrument(skip(state))]
pub async fn get_site_configuration(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let config = state.site_config_handler.site_configuration().await?;
    Ok(HttpResponse::Ok().json(config))
}

#[instrument(skip(state, data))]
pub async fn create_site_configuration(
    state: web::Data<AppState>,
    data: web::Json<SiteConfigurationRequest>,
) -> Result<impl Responder, AppError> {
    let config = state.site_config_handler
        .create_site_configuration(data.into_inner())
        .await?;
    Ok(HttpResponse::Created().json(config))
}

#[instrument(skip(state, data))]
pub async fn update_site_configuration(
    state: web::Data<AppState>,
    data: web::Json<SiteConfigurationRequest>,
) -> Result<impl Responder, AppError> {
    let config = state.site_config_handler
        .update_site_configuration(data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(config))
}

/// Always rejected: the singleton may not be removed.
#[instrument(skip(state))]
pub async fn delete_site_configuration(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.site_config_handler.delete_site_configuration()?;
    Ok(HttpResponse::NoContent().finish())
}
