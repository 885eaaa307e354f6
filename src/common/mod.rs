use std::collections::{BTreeMap, HashMap};
use std::fmt;
use chrono;
use serde::{Deserialize, Serialize};

pub mod error;
pub mod jwk;

/// Hosted in S3 behind CloudFront.
pub const FAVICON_URL: &str = "https://utility.readyperfectly.com/images/favicon.ico";

pub const HEALTHY: &str = "healthy";

pub const HEADER_LOCATION: &str = "Location";

pub const HEADER_CONTENT_TYPE: &str = "Content-Type";

pub const CONTENT_TYPE_JSON: &str = "application/json";

pub fn print_banner(mode: &str) {
    // We don't need this as a constant because it will be shown only once.
    let banner: &str = "\n\n\
\x20   _   _ _   _ _ _ _\n\
\x20  | | | | |_(_) (_) |_ _  _\n\
\x20  | |_| |  _| | | |  _| || |\n\
\x20   \\___/ \\__|_|_|_|\\__|\\_, |\n\
\x20                       |__/\n\
\x20  ==========================\n";
    println!("{}\x20  Mode: {}\n\n", banner, mode);
}

/// A proxy event as handed over by the API gateway.
///
/// None of the handlers look at it beyond logging, so everything is optional
/// and an empty object `{}` is a valid event.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GatewayRequest {
    pub http_method: Option<String>,
    pub path: Option<String>,
    pub headers: Option<HashMap<String, String>>,
    pub query_string_parameters: Option<HashMap<String, String>>,
    pub body: Option<String>,
    pub is_base64_encoded: bool,
}

impl fmt::Display for GatewayRequest {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "==================== REQUEST ====================")?;
        writeln!(f, "Received at {}", chrono::offset::Local::now())?;
        writeln!(f, "Method: {}", self.http_method.as_deref().unwrap_or("-"))?;
        writeln!(f, "Path: {}", self.path.as_deref().unwrap_or("-"))?;
        if let Some(params) = &self.query_string_parameters {
            writeln!(f, "Query:")?;
            for (k, v) in params.iter() {
                writeln!(f, " - {} = {}", k, v)?;
            }
        }
        writeln!(f, "Headers:")?;
        for (k, v) in self.headers.iter().flatten() {
            writeln!(f, " - {} = {}", k, v)?;
        }
        if self.body.is_some() {
            writeln!(f, "Body: \n{:?}", self.body)?
        }
        write!(f, "")
    }
}

/// The response shape the API gateway expects back from a handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayResponse {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub headers: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl GatewayResponse {

    pub fn new(status_code: u16) -> Self {
        Self { status_code, headers: BTreeMap::new(), body: None }
    }

    /// Header names are case-insensitive, so a name differing only in case replaces the old entry.
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.headers.retain(|k, _| !k.eq_ignore_ascii_case(name));
        self.headers.insert(name.to_string(), value.to_string());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl fmt::Display for GatewayResponse {

    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "==================== RESPONSE ====================")?;
        writeln!(f, "Responded at {}", chrono::offset::Local::now())?;
        writeln!(f, "Status: {}", self.status_code)?;
        writeln!(f, "Headers:")?;
        for (k, v) in self.headers.iter() {
            writeln!(f, " - {} = {}", k, v)?;
        }
        // Key pair bodies carry private key material.
        if let Some(body) = &self.body {
            writeln!(f, "Body: {} bytes", body.len())?
        }
        write!(f, "")
    }
}
