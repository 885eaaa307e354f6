use std::panic::{self, AssertUnwindSafe};

use base64::{encode_config, URL_SAFE_NO_PAD};
use rsa::{BigUint, RsaPrivateKey};
use rsa::rand_core::{self, CryptoRng, CryptoRngCore, RngCore};
use rsa::traits::{PrivateKeyParts, PublicKeyParts};
use serde::{Deserialize, Serialize};

use crate::common::error::HandlerError;

pub const KEY_BITS: usize = 2048;

pub const KTY_RSA: &str = "RSA";

pub const ALG_RS256: &str = "RS256";

pub const USE_SIGNATURE: &str = "sig";

/// An RSA private key in JSON Web Key form (RFC 7517, RFC 7518 section 6.3).
///
/// The private members are always present. Handing them to the caller is the whole point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Jwk {
    pub kty: String,
    pub alg: String,
    #[serde(rename = "use")]
    pub use_: String,
    pub n: String,
    pub e: String,
    pub d: String,
    pub p: String,
    pub q: String,
    pub dp: String,
    pub dq: String,
    pub qi: String,
}

impl Jwk {

    pub fn to_json(&self) -> Result<String, HandlerError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// A freshly generated key. It lives exactly as long as the invocation that made it.
pub struct RsaKeyPair {
    private_key: RsaPrivateKey,
}

impl RsaKeyPair {

    /// A failing entropy source is reported as `HandlerError::Entropy`, never as a key.
    pub fn generate<R: CryptoRngCore + ?Sized>(rng: &mut R) -> Result<Self, HandlerError> {
        let mut checked = CheckedRng { inner: rng, failure: None };
        // Prime generation draws through the infallible `fill_bytes`, which unwinds on failure.
        let generated = panic::catch_unwind(AssertUnwindSafe(|| {
            RsaPrivateKey::new(&mut checked, KEY_BITS)
        }));
        if let Some(e) = checked.failure.take() {
            return Err(HandlerError::Entropy(e));
        }
        match generated {
            Ok(private_key) => Ok(Self { private_key: private_key? }),
            Err(cause) => panic::resume_unwind(cause),
        }
    }

    pub fn to_jwk(&self) -> Result<Jwk, HandlerError> {
        let key = &self.private_key;
        let (p, q) = match key.primes() {
            [p, q] => (p, q),
            _ => return Err(rsa::Error::NprimesTooSmall.into()),
        };
        let dp = key.dp().ok_or(rsa::Error::Internal)?;
        let dq = key.dq().ok_or(rsa::Error::Internal)?;
        let qi = key.crt_coefficient().ok_or(rsa::Error::InvalidCoefficient)?;

        Ok(Jwk {
            kty: KTY_RSA.to_string(),
            alg: ALG_RS256.to_string(),
            use_: USE_SIGNATURE.to_string(),
            n: encode_uint(key.n()),
            e: encode_uint(key.e()),
            d: encode_uint(key.d()),
            p: encode_uint(p),
            q: encode_uint(q),
            dp: encode_uint(dp),
            dq: encode_uint(dq),
            qi: encode_uint(&qi),
        })
    }
}

/// Remembers the first error of the wrapped source.
struct CheckedRng<'a, R: CryptoRngCore + ?Sized> {
    inner: &'a mut R,
    failure: Option<rand_core::Error>,
}

impl<R: CryptoRngCore + ?Sized> RngCore for CheckedRng<'_, R> {

    fn next_u32(&mut self) -> u32 {
        rand_core::impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(e) = self.try_fill_bytes(dest) {
            panic!("entropy source failed: {}", e);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        if self.failure.is_some() {
            return Err(rand_core::Error::new("entropy source already failed"));
        }
        self.inner.try_fill_bytes(dest).map_err(|e| {
            let message = e.to_string();
            log::error!("Entropy source failed due to {}", message);
            self.failure = Some(e);
            rand_core::Error::new(message)
        })
    }
}

impl<R: CryptoRngCore + ?Sized> CryptoRng for CheckedRng<'_, R> {}

/// A source that never yields a byte.
#[cfg(test)]
pub(crate) struct DeadRng;

#[cfg(test)]
impl RngCore for DeadRng {

    fn next_u32(&mut self) -> u32 {
        rand_core::impls::next_u32_via_fill(self)
    }

    fn next_u64(&mut self) -> u64 {
        rand_core::impls::next_u64_via_fill(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.try_fill_bytes(dest).unwrap()
    }

    fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), rand_core::Error> {
        Err(rand_core::Error::new("entropy pool exhausted"))
    }
}

#[cfg(test)]
impl CryptoRng for DeadRng {}

/// Base64urlUInt: big-endian magnitude, no padding.
fn encode_uint(value: &BigUint) -> String {
    encode_config(value.to_bytes_be(), URL_SAFE_NO_PAD)
}
