// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # randstring_rand
//!
//! Entropy sources for the randstring generators.
//!
//! ## Core Types
//!
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//!
//! ## Traits
//!
//! - [`EntropySource`]: Interface for CSPRNGs
//!
//! ## Example
//!
//! ```rust
//! use randstring_rand::{EntropySource, SystemEntropySource};
//!
//! let entropy = SystemEntropySource {};
//!
//! let mut bytes = [0u8; 32];
//! entropy.fill_bytes(&mut bytes).expect("Failed to generate entropy");
//! ```
//!
//! ## Platform Support
//!
//! Supports all platforms via `getrandom`:
//! - Linux/Android: `getrandom()` syscall
//! - macOS/iOS: `getentropy()`
//! - Windows: `BCryptGenRandom`
//! - WASI: `random_get`
//! - wasm32 in browsers: `crypto.getRandomValues`

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
mod tests;

mod error;
mod support;
mod system;
mod traits;

pub use error::EntropyError;
pub use system::SystemEntropySource;
pub use traits::EntropySource;

#[cfg(any(test, feature = "test_utils"))]
pub use support::test_utils;
