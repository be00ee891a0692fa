use serde::Serialize;
use crate::types::error::AppError;
use actix_web::{http::header, HttpResponse, Responder};

pub enum ApiResponse<T> {
    Ok(T),
    EmptyOk,
    Created { location: String, body: T },
}

impl<T: Serialize> Responder for ApiResponse<T> {
    type Body = actix_web::body::BoxBody;
    fn respond_to(self, _: &actix_web::HttpRequest) -> HttpResponse {
        match self {
            ApiResponse::Ok(v) => HttpResponse::Ok().json(v),
            ApiResponse::EmptyOk => HttpResponse::Ok().finish(),
            ApiResponse::Created { location, body } => HttpResponse::Created()
                .insert_header((header::LOCATION, location))
                .json(body),
        }
    }
}

pub type ApiResult<T> = Result<ApiResponse<T>, AppError>;

#[derive(Serialize, Debug)]
pub struct MessageRes {
    pub message: String,
}

impl MessageRes {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }
}
