use actix_web::{Error, HttpRequest, HttpResponse, web};

use crate::handlers::handler_key_pair;
use crate::server;

pub async fn handle(request: HttpRequest, body: web::Bytes) -> Result<HttpResponse, Error> {
    let body = String::from_utf8(body.to_vec()).ok().filter(|b| !b.is_empty());
    let event = server::gateway_request(&request, body);
    // Prime search is CPU bound, keep it off the worker.
    let response = web::block(move || handler_key_pair::get_rsa_key_pair(&event)).await??;
    Ok(server::http_response(response))
}
