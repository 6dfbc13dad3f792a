use serde::Serialize;
use crate::types::error::AppError;
use actix_web::{HttpResponse, Responder};

/// The `{status, message, data}` wrapper every successful response uses.
#[derive(Serialize, Debug)]
pub struct Envelope<T> {
    pub status: &'static str,
    pub message: String,
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self { status: "success", message: message.into(), data }
    }
}

pub enum ApiResponse<T> {
    Ok(T),
    EmptyOk,
    Created(T),
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
            ApiResponse::EmptyOk => HttpResponse::Ok().finish(),
            ApiResponse::Created(v) => HttpResponse::Created()
                .json(v),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;
