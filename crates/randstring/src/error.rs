// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use randstring_rand::EntropyError;
use thiserror::Error;

/// Errors returned by the fallible generation paths.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TextError {
    /// Requested length is negative (or not addressable on this platform).
    #[error("InvalidLength: {0}")]
    InvalidLength(i64),

    /// The entropy source could not supply random bytes.
    #[error("Entropy: {0}")]
    Entropy(#[from] EntropyError),
}
