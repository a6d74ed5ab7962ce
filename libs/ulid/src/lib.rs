//! # toybox-ulid
//!
//! ULID/UUID codec for the toybox converter.
//!
//! ## Formats
//!
//! - ULID: 26 Crockford base32 characters, a 48-bit millisecond timestamp
//!   (10 characters) followed by 80 random bits (16 characters). Input is
//!   case-insensitive; output is uppercase.
//! - UUID: the same 16 bytes as lowercase hex in `8-4-4-4-12` groups.
//!
//! Example: `01HNZX8JGFACFA36RBXDHEQN6E` is
//! `018d7fd4-4a0f-531e-a19b-0beb62ebd4ce`, created at
//! `2024-02-06T19:10:35.535Z`.
//!
//! ## Validation
//!
//! There are two ULID predicates. [`looks_like_ulid`] normalizes first and
//! requires a leading character in `0..=7`; it gates conversion. [`is_valid`]
//! only checks length and alphabet. They disagree on edge cases and are kept
//! apart deliberately.
//!
//! Every operation is a pure function of its input, except [`generate`],
//! which reads the system clock and a secure random source.

pub mod base32;
mod convert;
mod error;
mod info;
mod text;

pub use convert::{smells_like_ulid, smells_like_uuid, ulid_to_uuid, uuid_to_ulid};
pub use error::CodecError;
pub use info::{format_iso8601, generate_info, inspect, UlidInfo};
pub use text::{
    decode_time, encode_time, generate, generate_with, is_valid, looks_like_ulid, normalize,
    RANDOM_LEN, TIME_LEN, TIME_MAX, ULID_LEN,
};
