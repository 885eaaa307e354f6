use actix_web::http::StatusCode;

use crate::common::{GatewayRequest, GatewayResponse, HEALTHY};

/// Liveness only. No dependency is checked.
pub fn get_health(request: &GatewayRequest) -> GatewayResponse {
    let request_id = super::invocation_id("get_health", request);
    log::debug!("[req:{}] Reporting {}", request_id, HEALTHY);
    GatewayResponse::new(StatusCode::OK.as_u16()).with_body(HEALTHY)
}
