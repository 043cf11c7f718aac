//! Base64 helpers for JWK fields and JWS output.
//!
//! JWK values on a [`KeyPair`](crate::KeyPair) are standard, padded Base64.
//! Only thumbprint and JWS output switch to the URL-safe, unpadded form.

use base64::{
    alphabet,
    engine::{general_purpose, DecodePaddingMode, GeneralPurpose},
    Engine as _,
};

use crate::error::Error;

/// Standard alphabet that accepts input with or without `=` padding.
const STANDARD_INDIFFERENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    general_purpose::PAD.with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Convert standard Base64 text to Base64URL: `+` becomes `-`, `/` becomes `_`
/// and `=` padding is dropped.
pub fn to_websafe_base64(b64: &str) -> String {
    b64.chars()
        .filter_map(|c| match c {
            '+' => Some('-'),
            '/' => Some('_'),
            '=' => None,
            other => Some(other),
        })
        .collect()
}

/// Standard, padded Base64 of `bytes`.
pub fn encode(bytes: &[u8]) -> String {
    general_purpose::STANDARD.encode(bytes)
}

/// Base64URL (unpadded) of `bytes`.
pub fn encode_websafe(bytes: &[u8]) -> String {
    to_websafe_base64(&encode(bytes))
}

/// Decode a JWK field.
///
/// Either alphabet is accepted, padding is optional and embedded whitespace
/// is ignored, so fields copied out of RFC examples decode as-is.
pub fn decode(value: &str) -> Result<Vec<u8>, Error> {
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    Ok(STANDARD_INDIFFERENT.decode(normalized)?)
}
