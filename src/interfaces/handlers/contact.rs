use std::collections::BTreeMap;

use actix_web::{web, Either, HttpResponse, Responder};
use tracing::instrument;

use crate::{
    entities::contact::{NewContactForm, SetReadRequest},
    errors::{AppError, FieldError},
    AppState,
};

/// Accepts both programmatic JSON bodies and classic form encodings.
/// The response contract is fixed: `{"success": true, ...}` on success,
/// `{"success": false, "errors": {...}}` with field-level detail on
/// validation failure.
#[instrument(skip(state, form))]
pub async fn submit_contact(
    state: web::Data<AppState>,
    form: Either<web::Json<NewContactForm>, web::Form<NewContactForm>>,
) -> Result<HttpResponse, AppError> {
    let form = match form {
        Either::Left(json) => json.into_inner(),
        Either::Right(form) => form.into_inner(),
    };

    match state.contact_handler.submit_contact(form).await {
        Ok(response) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "success": true,
            "message": response.message,
        }))),
        Err(AppError::ValidationError(errors)) => {
            Ok(HttpResponse::BadRequest().json(serde_json::json!({
                "success": false,
                "errors": group_field_errors(&errors),
            })))
        }
        Err(e) => Err(e),
    }
}

fn group_field_errors(errors: &[FieldError]) -> BTreeMap<String, Vec<String>> {
    let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for error in errors {
        grouped
            .entry(error.field.clone())
            .or_default()
            .push(error.message.clone());
    }
    grouped
}

#[instrument(skip(state))]
pub async fn list_contact_messages(
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let messages = state.contact_handler.list_messages().await?;
    Ok(HttpResponse::Ok().json(messages))
}

#[instrument(skip(message_id, state))]
pub async fn get_contact_message(
    message_id: web::Path<String>,
    state: web::Data<AppState>,
) -> Result<impl Responder, AppError> {
    let message = state.contact_handler.get_message(&message_id).await?;
    Ok(HttpResponse::Ok().json(message))
}

#[instrument(skip(message_id, state, data))]
pub async fn set_contact_read(
    message_id: web::Path<String>,
    state: web::Data<AppState>,
    data: web::Json<SetReadRequest>,
) -> Result<impl Responder, AppError> {
    let message = state.contact_handler.set_read(&message_id, data.read).await?;
    Ok(HttpResponse::Ok().json(message))
}
