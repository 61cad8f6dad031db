use std::collections::HashMap;

use actix_web::{web, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    constants::{MAX_PER_PAGE, POSTS_PER_PAGE},
    entities::blog_post::{NewBlogPostRequest, UpdateBlogPostRequest},
    errors::AppError,
    AppState,
};

#[instrument(skip(state, query))]
pub async fn list_published_posts(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let page = query.get("page").and_then(|v| v.parse::<u32>().ok()).unwrap_or(1);

    let posts = state.blog_handler.published_posts(page).await?;

    Ok(HttpResponse::Ok().json(posts))
}

#[instrument(skip(slug, state))]
pub async fn get_post_by_slug(
    slug: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let post = state.blog_handler.post_by_slug(&slug).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[instrument(skip(state, data))]
pub async fn create_post(
    state: web::Data<AppState>,
    data: web::Json<NewBlogPostRequest>,
) -> Result<impl Responder, AppError> {
    let response = state.blog_handler.create_post(data.into_inner()).await?;
    Ok(HttpResponse::Created().json(response))
}

#[instrument(skip(post_id, state))]
pub async fn get_post(
    post_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let post = state.blog_handler.get_post(&post_id).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[instrument(skip(post_id, state, data))]
pub async fn update_post(
    post_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<UpdateBlogPostRequest>,
) -> Result<impl Responder, AppError> {
    let post = state.blog_handler
        .update_post(&post_id, &data.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(post))
}

#[instrument(skip(post_id, state))]
pub async fn publish_post(
    post_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let post = state.blog_handler.publish_post(&post_id).await?;
    Ok(HttpResponse::Ok().json(post))
}

#[instrument(skip(post_id, state))]
pub async fn delete_post(
    post_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    state.blog_handler.delete_post(&post_id).await?;
    Ok(HttpResponse::NoContent().finish())
}

// Admin listing includes unpublished posts.
#[instrument(skip(state, query))]
pub async fn admin_list_posts(
    state: web::Data<AppState>,
    query: web::Query<HashMap<String, String>>,
) -> Result<impl Responder, AppError> {
    let page = query.get("page").and_then(|v| v.parse::<u32>().ok()).unwrap_or(1);
    let per_page = query.get("per_page")
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(POSTS_PER_PAGE)
        .min(MAX_PER_PAGE);

    let posts = state.blog_handler.all_posts(page, per_page).await?;

    Ok(HttpResponse::Ok().json(posts))
}
