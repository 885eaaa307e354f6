use clap::ArgEnum;
use rand::rngs::OsRng;
use rsa::rand_core::CryptoRngCore;
use uuid::Uuid;

use crate::common::GatewayRequest;
use crate::common::GatewayResponse;

pub mod handler_favicon;
pub mod handler_health;
pub mod handler_key_pair;

/// The entry points the gateway can invoke.
#[derive(ArgEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Handler {
    Favicon,
    Health,
    KeyPair,
}

impl Handler {

    /// Always produces a response. A failed invocation becomes a 500.
    pub fn invoke(&self, request: &GatewayRequest) -> GatewayResponse {
        self.invoke_with(request, &mut OsRng)
    }

    pub fn invoke_with<R: CryptoRngCore + ?Sized>(&self, request: &GatewayRequest, rng: &mut R) -> GatewayResponse {
        match self {
            Handler::Favicon => handler_favicon::get_favicon_ico(request),
            Handler::Health => handler_health::get_health(request),
            Handler::KeyPair => handler_key_pair::get_rsa_key_pair_with(request, rng)
                .unwrap_or_else(|e| e.to_gateway_response()),
        }
    }
}

/// Tags the log lines of one invocation.
fn invocation_id(name: &str, request: &GatewayRequest) -> String {
    let request_id = Uuid::new_v4().to_string();
    log::info!("[req:{}] Invoking {}", request_id, name);
    log::debug!("[req:{}] Event:\n{}", request_id, request);
    request_id
}

#[cfg(test)]
mod tests {
    use clap::ArgEnum;
    use super::*;
    use crate::common::jwk::DeadRng;

    #[test]
    fn invoke_dispatches_to_each_handler() {
        let request = GatewayRequest::default();
        assert_eq!(Handler::Favicon.invoke(&request).status_code, 302);
        assert_eq!(Handler::Health.invoke(&request).status_code, 200);

        let response = Handler::KeyPair.invoke(&request);
        assert_eq!(response.status_code, 200);
        assert_eq!(response.header("Content-Type"), Some("application/json"));
    }

    #[test]
    fn key_pair_without_entropy_is_a_500() {
        let response = Handler::KeyPair.invoke_with(&GatewayRequest::default(), &mut DeadRng);
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            serde_json::json!({"statusCode": 500, "body": "Internal Server Error"})
        );
    }

    #[test]
    fn handler_names_parse_from_the_command_line() {
        assert_eq!(Handler::from_str("favicon", false), Ok(Handler::Favicon));
        assert_eq!(Handler::from_str("health", false), Ok(Handler::Health));
        assert_eq!(Handler::from_str("key-pair", false), Ok(Handler::KeyPair));
        assert!(Handler::from_str("key_pair", false).is_err());
    }
}
