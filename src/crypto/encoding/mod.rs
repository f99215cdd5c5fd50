//! Encoding formats for cryptographic data
//!
//! Hexadecimal is the only format the digest tool needs; like the rest of
//! the crypto stack it is implemented from scratch.

pub mod hex;

pub use hex::{hex_decode, hex_encode, HexError};
