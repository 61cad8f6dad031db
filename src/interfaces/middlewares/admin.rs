use actix_web::{
    body::BoxBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    web, Error, HttpResponse,
};
use futures_util::future::{ok, LocalBoxFuture, Ready};
use std::{rc::Rc, task::{Context, Poll}};

use crate::AppState;

/// Guards the admin scope with the static bearer token from the
/// configuration. Token comparison only; there is no user model.
pub struct AdminAuth;

impl<S> Transform<S, ServiceRequest> for AdminAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type InitError = ();
    type Transform = AdminAuthService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ok(AdminAuthService {
            service: Rc::new(service),
        })
    }
}

pub struct AdminAuthService<S> {
    service: Rc<S>,
}

impl<S> Service<ServiceRequest> for AdminAuthService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<BoxBody>, Error = Error> + 'static,
{
    type Response = ServiceResponse<BoxBody>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            let admin_token = req
                .app_data::<web::Data<AppState>>()
                .map(|state| state.admin_token.clone());

            let Some(expected) = admin_token else {
                tracing::error!("AppState missing in admin middleware");
                return Ok(custom_error_response(
                    req,
                    HttpResponse::InternalServerError().json(serde_json::json!({
                        "error": "Internal server error"
                    })),
                ));
            };

            match extract_token(&req) {
                Some(token) if token == expected => service.call(req).await,
                Some(_) => {
                    tracing::warn!("Rejected admin request with invalid token");
                    Ok(custom_error_response(
                        req,
                        HttpResponse::Forbidden().json(serde_json::json!({
                            "error": "Invalid admin token"
                        })),
                    ))
                }
                None => Ok(custom_error_response(
                    req,
                    HttpResponse::Unauthorized().json(serde_json::json!({
                        "error": "Missing or malformed Authorization header"
                    })),
                )),
            }
        })
    }
}

fn extract_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get("Authorization")
        .and_then(|header| header.to_str().ok())
        .and_then(|header| {
            let parts: Vec<&str> = header.split_whitespace().collect();
            if parts.len() == 2 && parts[0].eq_ignore_ascii_case("bearer") {
                Some(parts[1].to_string())
            } else {
                None
            }
        })
}

fn custom_error_response(req: ServiceRequest, res: HttpResponse) -> ServiceResponse<BoxBody> {
    req.into_response(res)
}
