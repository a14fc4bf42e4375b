pub mod base64url;
pub(crate) mod bounds;

pub use base64url::{decode_bytes, decoded_len, encode, encode_bytes};
