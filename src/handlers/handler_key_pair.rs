use actix_web::http::StatusCode;
use rand::rngs::OsRng;
use rsa::rand_core::CryptoRngCore;

use crate::common::{CONTENT_TYPE_JSON, GatewayRequest, GatewayResponse, HEADER_CONTENT_TYPE};
use crate::common::error::HandlerError;
use crate::common::jwk::RsaKeyPair;

/// Generates a fresh RS256 signing key and returns it, private parts included, as a JWK.
pub fn get_rsa_key_pair(request: &GatewayRequest) -> Result<GatewayResponse, HandlerError> {
    get_rsa_key_pair_with(request, &mut OsRng)
}

pub fn get_rsa_key_pair_with<R: CryptoRngCore + ?Sized>(
    request: &GatewayRequest,
    rng: &mut R,
) -> Result<GatewayResponse, HandlerError> {
    let request_id = super::invocation_id("get_rsa_key_pair", request);
    let key_pair = RsaKeyPair::generate(rng)?;
    let body = key_pair.to_jwk()?.to_json()?;
    log::debug!("[req:{}] Generated a {} byte JWK", request_id, body.len());

    Ok(GatewayResponse::new(StatusCode::OK.as_u16())
        .with_header(HEADER_CONTENT_TYPE, CONTENT_TYPE_JSON)
        .with_body(body))
}
