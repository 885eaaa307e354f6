use actix_web::{HttpResponse, ResponseError};
use actix_web::http::StatusCode;
use thiserror::Error;

use crate::common::GatewayResponse;

pub const MSG_SOMETHING_WRONG: &str = "Oops";

pub const MSG_INTERNAL_ERROR: &str = "Internal Server Error";

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("entropy source failed: {0}")]
    Entropy(rsa::rand_core::Error),
    #[error("key generation failed: {0}")]
    KeyGeneration(#[from] rsa::Error),
    #[error("key serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HandlerError {

    /// Every failure is fatal to the invocation. Nothing partial is handed back.
    pub fn to_gateway_response(&self) -> GatewayResponse {
        log::error!("Invocation failed due to {}", self);
        GatewayResponse::new(StatusCode::INTERNAL_SERVER_ERROR.as_u16())
            .with_body(MSG_INTERNAL_ERROR)
    }
}

impl ResponseError for HandlerError {

    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        log::error!("Request failed due to {}", self);
        HttpResponse::build(self.status_code())
            .content_type("text/plain")
            .body(MSG_SOMETHING_WRONG)
    }
}
