//! OAuth 1.0a request signing (HMAC-SHA1, user context).

use crate::config::TwitterCredentials;
use crate::error::PublishError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::Utc;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::distributions::Alphanumeric;
use rand::Rng;
use sha1::Sha1;

/// Everything except RFC 3986 unreserved characters
const RESERVED: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

type HmacSha1 = Hmac<Sha1>;

/// Signs requests on behalf of one account
pub struct OAuthSigner<'a> {
    credentials: &'a TwitterCredentials,
}

impl<'a> OAuthSigner<'a> {
    pub fn new(credentials: &'a TwitterCredentials) -> Self {
        Self { credentials }
    }

    /// Build the `Authorization` header value for a request.
    ///
    /// `params` holds the query or form parameters that take part in the
    /// signature; JSON bodies are not signed.
    pub fn authorization(
        &self,
        method: &str,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<String, PublishError> {
        let timestamp = Utc::now().timestamp().to_string();
        self.authorization_with(method, url, params, &nonce(), &timestamp)
    }

    fn authorization_with(
        &self,
        method: &str,
        url: &str,
        params: &[(&str, &str)],
        nonce: &str,
        timestamp: &str,
    ) -> Result<String, PublishError> {
        let oauth = self.oauth_params(nonce, timestamp);
        let base = signature_base(method, url, &oauth, params);
        let signature = self.sign(&base)?;

        let header = oauth
            .iter()
            .copied()
            .chain(std::iter::once(("oauth_signature", signature.as_str())))
            .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(format!("OAuth {}", header))
    }

    fn oauth_params<'p>(
        &'p self,
        nonce: &'p str,
        timestamp: &'p str,
    ) -> [(&'static str, &'p str); 6] {
        [
            ("oauth_consumer_key", self.credentials.consumer_key.as_str()),
            ("oauth_nonce", nonce),
            ("oauth_signature_method", "HMAC-SHA1"),
            ("oauth_timestamp", timestamp),
            ("oauth_token", self.credentials.access_token_key.as_str()),
            ("oauth_version", "1.0"),
        ]
    }

    fn sign(&self, base: &str) -> Result<String, PublishError> {
        let key = format!(
            "{}&{}",
            encode(&self.credentials.consumer_secret),
            encode(&self.credentials.access_token_secret)
        );

        let mut mac = HmacSha1::new_from_slice(key.as_bytes())
            .map_err(|e| PublishError::Signing(e.to_string()))?;
        mac.update(base.as_bytes());

        Ok(STANDARD.encode(mac.finalize().into_bytes()))
    }
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, RESERVED).to_string()
}

fn nonce() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(32)
        .map(char::from)
        .collect()
}

fn signature_base(
    method: &str,
    url: &str,
    oauth: &[(&str, &str)],
    params: &[(&str, &str)],
) -> String {
    let mut pairs: Vec<(String, String)> = oauth
        .iter()
        .chain(params)
        .map(|(k, v)| (encode(k), encode(v)))
        .collect();
    pairs.sort();

    let joined = pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, v))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}&{}&{}", method.to_uppercase(), encode(url), encode(&joined))
}
