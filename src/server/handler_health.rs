use actix_web::{HttpRequest, HttpResponse};

use crate::handlers::handler_health;
use crate::server;

pub async fn handle(request: HttpRequest) -> HttpResponse {
    let event = server::gateway_request(&request, None);
    server::http_response(handler_health::get_health(&event))
}
