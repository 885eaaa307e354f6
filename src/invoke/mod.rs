use std::io::{self, Read};

use crate::common::{GatewayRequest, GatewayResponse};
use crate::handlers::Handler;

pub mod options;

/// Handlers ignore their input, so an event that cannot be parsed is replaced rather than rejected.
pub fn parse_event(raw: &str) -> GatewayRequest {
    if raw.trim().is_empty() {
        log::warn!("Received an empty event. Using the default event.");
        return GatewayRequest::default();
    }
    serde_json::from_str(raw).unwrap_or_else(|e| {
        log::warn!("Failed to parse the event due to {}. Using the default event.", e);
        GatewayRequest::default()
    })
}

pub fn read_event(options: &options::InvokeOptions) -> io::Result<String> {
    match &options.event {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut raw = String::new();
            io::stdin().read_to_string(&mut raw)?;
            Ok(raw)
        }
    }
}

pub fn invoke(handler: Handler, raw_event: &str) -> GatewayResponse {
    let event = parse_event(raw_event);
    let response = handler.invoke(&event);
    log::debug!("{}", response);
    response
}

pub fn render(response: &GatewayResponse, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(response)
    } else {
        serde_json::to_string(response)
    }
}
