// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # randstring
//!
//! Cryptographically random strings drawn uniformly from fixed encoding
//! alphabets, for identifiers, tokens and keys.
//!
//! Random bytes come from the OS CSPRNG (see [`randstring_rand`]). Each byte is
//! mapped through a 256-entry table built by repeating the alphabet; every
//! alphabet length divides 256, so there is no modulo bias.
//!
//! ## Alphabets
//!
//! | Function | Alphabet | Characters |
//! |---|---|---|
//! | [`text16`] | Base16 | `0-9A-F` |
//! | [`text32`] | RFC 4648 Base32 | `A-Z2-7` |
//! | [`text32_crockford`] | Crockford Base32 | `0-9A-Z` minus `ILOU` |
//! | [`text64`] | RFC 4648 Base64 | `A-Za-z0-9+/` |
//! | [`text64_url`] | RFC 4648 Base64 URL-safe | `A-Za-z0-9-_` |
//!
//! Output is never padded: the returned string always has exactly the
//! requested length.
//!
//! ## Example
//!
//! ```rust
//! use randstring::{TextError, text16, text64_url, try_text32};
//!
//! let id = text16(8);
//! assert_eq!(id.len(), 8);
//! assert!(id.bytes().all(|b| b.is_ascii_digit() || (b'A'..=b'F').contains(&b)));
//!
//! assert_eq!(text64_url(0), "");
//! assert_eq!(try_text32(-1), Err(TextError::InvalidLength(-1)));
//! ```
//!
//! ## Custom entropy
//!
//! [`TextGenerator`] runs the same pipeline against any
//! [`EntropySource`](randstring_rand::EntropySource):
//!
//! ```rust
//! use randstring::{Alphabet, TextGenerator};
//! use randstring_rand::SystemEntropySource;
//!
//! let generator = TextGenerator::new(SystemEntropySource {});
//! let token = generator
//!     .generate(Alphabet::Base64Url, 43)
//!     .expect("Failed to generate token");
//! assert_eq!(token.len(), 43);
//! ```
//!
//! ## Failure model
//!
//! A failing entropy source is fatal for the infallible functions (they panic)
//! and is returned as [`TextError::Entropy`] by the `try_*` functions.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod alphabet;
mod buffer;
mod error;
mod generator;

use alloc::string::String;

pub use alphabet::{
    Alphabet, AlphabetTable, BASE16, BASE32, BASE32_CROCKFORD, BASE64, BASE64_URL,
};
pub use buffer::INLINE_CAPACITY;
pub use error::TextError;
pub use generator::TextGenerator;

/// Random string of `length` Base16 characters (`0-9A-F`).
///
/// # Panics
///
/// Panics if the system entropy source fails.
pub fn text16(length: usize) -> String {
    Alphabet::Base16.text(length)
}

/// Random string of `length` RFC 4648 Base32 characters, unpadded.
///
/// # Panics
///
/// Panics if the system entropy source fails.
pub fn text32(length: usize) -> String {
    Alphabet::Base32.text(length)
}

/// Random string of `length` Crockford Base32 characters.
///
/// # Panics
///
/// Panics if the system entropy source fails.
pub fn text32_crockford(length: usize) -> String {
    Alphabet::Base32Crockford.text(length)
}

/// Random string of `length` RFC 4648 Base64 characters, unpadded.
///
/// # Panics
///
/// Panics if the system entropy source fails.
pub fn text64(length: usize) -> String {
    Alphabet::Base64.text(length)
}

/// Random string of `length` URL-safe Base64 characters, unpadded.
///
/// # Panics
///
/// Panics if the system entropy source fails.
pub fn text64_url(length: usize) -> String {
    Alphabet::Base64Url.text(length)
}

/// Fallible [`text16`] taking a signed length.
///
/// # Errors
///
/// [`TextError::InvalidLength`] for negative lengths, [`TextError::Entropy`]
/// if the entropy source fails.
pub fn try_text16(length: i64) -> Result<String, TextError> {
    Alphabet::Base16.try_text(length)
}

/// Fallible [`text32`] taking a signed length.
///
/// # Errors
///
/// [`TextError::InvalidLength`] for negative lengths, [`TextError::Entropy`]
/// if the entropy source fails.
pub fn try_text32(length: i64) -> Result<String, TextError> {
    Alphabet::Base32.try_text(length)
}

/// Fallible [`text32_crockford`] taking a signed length.
///
/// # Errors
///
/// [`TextError::InvalidLength`] for negative lengths, [`TextError::Entropy`]
/// if the entropy source fails.
pub fn try_text32_crockford(length: i64) -> Result<String, TextError> {
    Alphabet::Base32Crockford.try_text(length)
}

/// Fallible [`text64`] taking a signed length.
///
/// # Errors
///
/// [`TextError::InvalidLength`] for negative lengths, [`TextError::Entropy`]
/// if the entropy source fails.
pub fn try_text64(length: i64) -> Result<String, TextError> {
    Alphabet::Base64.try_text(length)
}

/// Fallible [`text64_url`] taking a signed length.
///
/// # Errors
///
/// [`TextError::InvalidLength`] for negative lengths, [`TextError::Entropy`]
/// if the entropy source fails.
pub fn try_text64_url(length: i64) -> Result<String, TextError> {
    Alphabet::Base64Url.try_text(length)
}
