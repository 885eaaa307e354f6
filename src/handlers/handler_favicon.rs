use actix_web::http::StatusCode;

use crate::common::{FAVICON_URL, GatewayRequest, GatewayResponse, HEADER_LOCATION};

/// 302, not 301: the asset location is expected to change.
pub fn get_favicon_ico(request: &GatewayRequest) -> GatewayResponse {
    let request_id = super::invocation_id("get_favicon_ico", request);
    log::debug!("[req:{}] Redirecting to {}", request_id, FAVICON_URL);
    GatewayResponse::new(StatusCode::FOUND.as_u16())
        .with_header(HEADER_LOCATION, FAVICON_URL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redirects_an_empty_event() {
        let request: GatewayRequest = serde_json::from_str("{}").unwrap();
        let response = get_favicon_ico(&request);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({
                "statusCode": 302,
                "headers": {"Location": "https://utility.readyperfectly.com/images/favicon.ico"}
            })
        );
    }

    #[test]
    fn ignores_the_event() {
        let request = GatewayRequest {
            http_method: Some("POST".to_string()),
            path: Some("/somewhere/else".to_string()),
            body: Some("not json at all".to_string()),
            is_base64_encoded: true,
            ..Default::default()
        };
        let response = get_favicon_ico(&request);
        assert_eq!(response.status_code, 302);
        assert_eq!(response.headers.len(), 1);
        assert_eq!(response.header("location"), Some(FAVICON_URL));
        assert!(response.body.is_none());
    }
}
