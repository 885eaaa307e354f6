use std::collections::HashMap;

use actix_web::{HttpRequest, HttpResponse, web};
use actix_web::http::StatusCode;

use crate::common::{GatewayRequest, GatewayResponse};

pub mod options;
pub mod handler_favicon;
pub mod handler_health;
pub mod handler_key_pair;

pub const MSG_NOT_FOUND: &str = "Not Found";

pub const PATH_FAVICON: &str = "/favicon.ico";

pub const PATH_HEALTH: &str = "/health";

pub const PATH_KEY_PAIR: &str = "/rsa/key-pair";

pub fn routes(cfg: &mut web::ServiceConfig) {
    cfg
        .service(web::resource(PATH_FAVICON).route(web::get().to(handler_favicon::handle)))
        .service(web::resource(PATH_HEALTH).route(web::get().to(handler_health::handle)))
        .service(web::resource(PATH_KEY_PAIR)
            .route(web::get().to(handler_key_pair::handle))
            .route(web::post().to(handler_key_pair::handle)))
        .default_service(web::to(|| async {
            HttpResponse::NotFound().content_type("text/plain").body(MSG_NOT_FOUND)
        }));
}

/// Describes an HTTP request the way the API gateway would.
pub fn gateway_request(request: &HttpRequest, body: Option<String>) -> GatewayRequest {
    // Remove `Connection` as per
    // https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Connection#Directives
    let mut headers: HashMap<String, String> = HashMap::new();
    for (header_name, header_value) in request.headers().iter().filter(|(h, _)| *h != "connection") {
        if let Ok(value) = header_value.to_str() {
            headers.insert(header_name.as_str().to_string(), value.to_string());
        }
    }
    let query: HashMap<String, String> = web::Query::<HashMap<String, String>>::from_query(request.query_string())
        .map(|q| q.into_inner())
        .unwrap_or_default();

    GatewayRequest {
        http_method: Some(request.method().to_string()),
        path: Some(request.path().to_string()),
        headers: Some(headers),
        query_string_parameters: if query.is_empty() { None } else { Some(query) },
        body,
        is_base64_encoded: false,
    }
}

pub fn http_response(response: GatewayResponse) -> HttpResponse {
    let status = StatusCode::from_u16(response.status_code).unwrap_or_else(|_| {
        log::error!("Handler returned an invalid status code: {}", response.status_code);
        StatusCode::INTERNAL_SERVER_ERROR
    });
    let mut client_resp = HttpResponse::build(status);
    for (key, value) in response.headers {
        client_resp.insert_header((key, value));
    }
    match response.body {
        Some(body) => client_resp.body(body),
        None => client_resp.finish()
    }
}

#[cfg(test)]
mod tests {
    use actix_web::{App, test};
    use actix_web::http::header;
    use serde_json::Value;
    use super::*;
    use crate::common::FAVICON_URL;

    #[actix_web::test]
    async fn favicon_redirects() {
        let app = test::init_service(App::new().configure(routes)).await;
        let req = test::TestRequest::get().uri(PATH_FAVICON).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::FOUND);
        assert_eq!(resp.headers().get(header::LOCATION).unwrap(), FAVICON_URL);
        let body = test::read_body(resp).await;
        assert!(body.is_empty());
    }

    #[actix_web::test]
    async fn health_is_healthy() {
        let app = test::init_service(App::new().configure(routes)).await;
        let req = test::TestRequest::get().uri("/health?verbose=1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(test::read_body(resp).await, web::Bytes::from_static(b"healthy"));
    }

    #[actix_web::test]
    async fn key_pair_over_get_and_post() {
        let app = test::init_service(App::new().configure(routes)).await;

        let req = test::TestRequest::get().uri(PATH_KEY_PAIR).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        assert_eq!(resp.headers().get(header::CONTENT_TYPE).unwrap(), "application/json");
        let first: Value = test::read_body_json(resp).await;
        assert_eq!(first["kty"], "RSA");
        assert_eq!(first["alg"], "RS256");
        assert_eq!(first["use"], "sig");
        assert!(first["d"].is_string());

        let req = test::TestRequest::post().uri(PATH_KEY_PAIR).set_payload("ignored").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let second: Value = test::read_body_json(resp).await;
        assert_ne!(first["n"], second["n"]);
    }

    #[actix_web::test]
    async fn unknown_path_is_not_found() {
        let app = test::init_service(App::new().configure(routes)).await;
        let req = test::TestRequest::get().uri("/favicon.png").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn gateway_request_mirrors_the_http_request() {
        let req = test::TestRequest::post()
            .uri("/rsa/key-pair?size=4096")
            .insert_header(("X-Trace", "abc"))
            .insert_header((header::CONNECTION, "keep-alive"))
            .to_http_request();
        let event = gateway_request(&req, Some("{}".to_string()));
        assert_eq!(event.http_method.as_deref(), Some("POST"));
        assert_eq!(event.path.as_deref(), Some("/rsa/key-pair"));
        let headers = event.headers.unwrap();
        assert_eq!(headers.get("x-trace").map(String::as_str), Some("abc"));
        assert!(!headers.contains_key("connection"));
        assert_eq!(event.query_string_parameters.unwrap().get("size").map(String::as_str), Some("4096"));
        assert_eq!(event.body.as_deref(), Some("{}"));
    }

    #[actix_web::test]
    async fn http_response_copies_status_headers_and_body() {
        let response = GatewayResponse::new(418).with_header("X-Kind", "teapot").with_body("short and stout");
        let resp = http_response(response);
        assert_eq!(resp.status(), StatusCode::IM_A_TEAPOT);
        assert_eq!(resp.headers().get("x-kind").unwrap(), "teapot");
    }
}
