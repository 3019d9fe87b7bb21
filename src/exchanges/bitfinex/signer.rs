use crate::core::errors::ExchangeError;
use crate::core::kernel::{hmac_sha384_hex, NonceGenerator, NonceScale, SignedRequest, Signer};
use base64::{engine::general_purpose, Engine as _};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// v2 authentication: HMAC-SHA384 over `/api/<path><nonce><body>`
pub struct BitfinexV2Signer {
    api_key: String,
    secret: SecretString,
    nonce: NonceGenerator,
}

impl BitfinexV2Signer {
    pub fn new(api_key: String, secret: String) -> Self {
        Self {
            api_key,
            secret: SecretString::new(secret),
            nonce: NonceGenerator::new(NonceScale::TenThousandths),
        }
    }

    /// Hex signature of one request
    ///
    /// `path` is relative (`v2/auth/r/orders`); `body` is the raw JSON sent.
    pub fn signature(&self, path: &str, nonce: &str, body: &str) -> Result<String, ExchangeError> {
        let payload = format!("/api/{}{}{}", path.trim_start_matches('/'), nonce, body);
        hmac_sha384_hex(self.secret.expose_secret().as_bytes(), payload.as_bytes())
    }

    /// Sign with an explicit nonce
    pub fn sign_with_nonce(
        &self,
        endpoint: &str,
        params: &Map<String, Value>,
        nonce: &str,
    ) -> Result<SignedRequest, ExchangeError> {
        let body = serde_json::to_string(params)?;
        let signature = self.signature(endpoint, nonce, &body)?;

        let mut headers = HashMap::new();
        headers.insert("bfx-nonce".to_string(), nonce.to_string());
        headers.insert("bfx-apikey".to_string(), self.api_key.clone());
        headers.insert("bfx-signature".to_string(), signature);
        headers.insert("content-type".to_string(), "application/json".to_string());

        Ok(SignedRequest {
            headers,
            body: body.into_bytes(),
        })
    }
}

impl std::fmt::Debug for BitfinexV2Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitfinexV2Signer")
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

impl Signer for BitfinexV2Signer {
    fn sign_request(
        &self,
        endpoint: &str,
        params: &Map<String, Value>,
    ) -> Result<SignedRequest, ExchangeError> {
        let nonce = self.nonce.next_nonce()?;
        self.sign_with_nonce(endpoint, params, &nonce)
    }
}

/// v1 authentication: HMAC-SHA384 over base64(JSON payload).
///
/// The payload carries `request` and `nonce` ahead of the endpoint
/// parameters and travels both in `X-BFX-PAYLOAD` and as the body.
pub struct BitfinexV1Signer {
    api_key: String,
    secret: SecretString,
    nonce: NonceGenerator,
}

#[derive(Serialize)]
struct V1Payload<'a> {
    request: &'a str,
    nonce: &'a str,
    #[serde(flatten)]
    params: &'a Map<String, Value>,
}

/// JSON bytes and their base64 form for a v1 payload
pub fn encode_v1_payload(
    request: &str,
    nonce: &str,
    params: &Map<String, Value>,
) -> Result<(Vec<u8>, String), ExchangeError> {
    if params.contains_key("request") || params.contains_key("nonce") {
        return Err(ExchangeError::InvalidParameters(
            "`request` and `nonce` are reserved payload fields".to_string(),
        ));
    }

    let json = serde_json::to_vec(&V1Payload {
        request,
        nonce,
        params,
    })?;
    let encoded = general_purpose::STANDARD.encode(&json);
    Ok((json, encoded))
}

impl BitfinexV1Signer {
    pub fn new(api_key: String, secret: String) -> Self {
        Self {
            api_key,
            secret: SecretString::new(secret),
            nonce: NonceGenerator::new(NonceScale::Nanos),
        }
    }

    /// Hex signature of a base64-encoded payload
    pub fn signature(&self, encoded_payload: &str) -> Result<String, ExchangeError> {
        hmac_sha384_hex(
            self.secret.expose_secret().as_bytes(),
            encoded_payload.as_bytes(),
        )
    }

    /// Sign with an explicit nonce
    pub fn sign_with_nonce(
        &self,
        endpoint: &str,
        params: &Map<String, Value>,
        nonce: &str,
    ) -> Result<SignedRequest, ExchangeError> {
        let (body, encoded) = encode_v1_payload(endpoint, nonce, params)?;
        let signature = self.signature(&encoded)?;

        let mut headers = HashMap::new();
        headers.insert("X-BFX-APIKEY".to_string(), self.api_key.clone());
        headers.insert("X-BFX-SIGNATURE".to_string(), signature);
        headers.insert("X-BFX-PAYLOAD".to_string(), encoded);
        headers.insert("Content-Type".to_string(), "application/json".to_string());

        Ok(SignedRequest { headers, body })
    }
}

impl std::fmt::Debug for BitfinexV1Signer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BitfinexV1Signer")
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

impl Signer for BitfinexV1Signer {
    fn sign_request(
        &self,
        endpoint: &str,
        params: &Map<String, Value>,
    ) -> Result<SignedRequest, ExchangeError> {
        let nonce = self.nonce.next_nonce()?;
        self.sign_with_nonce(endpoint, params, &nonce)
    }
}
