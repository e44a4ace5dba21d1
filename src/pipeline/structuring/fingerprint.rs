//! Display fingerprint of the extracted document text.
//!
//! Standard base64 over the UTF-8 bytes, truncated. Reversible and
//! collision-prone past the prefix; not an integrity check.

use base64::Engine;

/// Characters kept from the encoded text.
pub const DATA_HASH_LEN: usize = 32;

/// Full, untruncated encoding of the text.
pub fn encode_text(text: &str) -> String {
    base64::engine::general_purpose::STANDARD.encode(text.as_bytes())
}

/// First `DATA_HASH_LEN` characters of `encode_text`.
pub fn data_hash(text: &str) -> String {
    let mut encoded = encode_text(text);
    // base64 output is ASCII, byte index == char index
    encoded.truncate(DATA_HASH_LEN);
    encoded
}
