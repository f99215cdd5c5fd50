/// Cryptography primitives for the digest tool
/// All implemented from scratch using only Rust std library
pub mod encoding;
pub mod sha1;

// Re-exports
pub use encoding::{hex_decode, hex_encode};
pub use sha1::{sha1, sha1_hex};
