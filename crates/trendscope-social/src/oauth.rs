//! OAuth 1.0a request signing (`HMAC-SHA1`, user context).
//!
//! Builds the `Authorization: OAuth ...` header for a single request from the
//! configured [`TwitterCredentials`], the request method, the URL without its
//! query string, and the query parameters.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use hmac::{Hmac, Mac};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use rand::Rng;
use sha1::Sha1;
use trendscope_core::TwitterCredentials;

type HmacSha1 = Hmac<Sha1>;

/// RFC 3986 unreserved characters stay as-is; everything else is encoded.
const OAUTH_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

const SIGNATURE_METHOD: &str = "HMAC-SHA1";
const OAUTH_VERSION: &str = "1.0";
const NONCE_LEN: usize = 32;

/// Builds a signed `Authorization` header value with a fresh nonce and the
/// current timestamp.
#[must_use]
pub fn authorization_header(
    credentials: &TwitterCredentials,
    method: &str,
    base_url: &str,
    query: &[(&str, &str)],
) -> String {
    let nonce: String = rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(NONCE_LEN)
        .map(char::from)
        .collect();
    let timestamp = chrono::Utc::now().timestamp().to_string();
    signed_header(credentials, method, base_url, query, &nonce, &timestamp)
}

/// Deterministic core of [`authorization_header`].
pub(crate) fn signed_header(
    credentials: &TwitterCredentials,
    method: &str,
    base_url: &str,
    query: &[(&str, &str)],
    nonce: &str,
    timestamp: &str,
) -> String {
    let mut oauth_params = vec![
        ("oauth_consumer_key", credentials.api_key.as_str()),
        ("oauth_nonce", nonce),
        ("oauth_signature_method", SIGNATURE_METHOD),
        ("oauth_timestamp", timestamp),
        ("oauth_token", credentials.access_token.as_str()),
        ("oauth_version", OAUTH_VERSION),
    ];

    let mut all_params = oauth_params.clone();
    all_params.extend_from_slice(query);
    let base = signature_base_string(method, base_url, &all_params);
    let signature = sign(
        &base,
        &credentials.api_key_secret,
        &credentials.access_token_secret,
    );

    oauth_params.push(("oauth_signature", &signature));
    oauth_params.sort_unstable();
    let fields = oauth_params
        .iter()
        .map(|(k, v)| format!("{}=\"{}\"", encode(k), encode(v)))
        .collect::<Vec<_>>()
        .join(", ");
    format!("OAuth {fields}")
}

/// `METHOD&encoded-url&encoded-sorted-params`, per RFC 5849 section 3.4.1.
pub(crate) fn signature_base_string(method: &str, base_url: &str, params: &[(&str, &str)]) -> String {
    let mut encoded: Vec<(String, String)> = params
        .iter()
        .map(|(k, v)| (encode(k), encode(v)))
        .collect();
    encoded.sort();
    let param_string = encoded
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    format!(
        "{}&{}&{}",
        method.to_ascii_uppercase(),
        encode(base_url),
        encode(&param_string)
    )
}

/// Base64 HMAC-SHA1 of `base` keyed with the two encoded secrets.
pub(crate) fn sign(base: &str, consumer_secret: &str, token_secret: &str) -> String {
    let key = format!("{}&{}", encode(consumer_secret), encode(token_secret));
    let mut mac =
        HmacSha1::new_from_slice(key.as_bytes()).expect("HMAC accepts keys of any length");
    mac.update(base.as_bytes());
    STANDARD.encode(mac.finalize().into_bytes())
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}
