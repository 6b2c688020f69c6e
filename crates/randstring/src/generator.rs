// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::string::String;

use randstring_rand::{EntropySource, SystemEntropySource};
use tracing::{error, trace};

use crate::alphabet::Alphabet;
use crate::buffer::WorkBuffer;
use crate::error::TextError;

/// Generates random text against a given [`EntropySource`].
///
/// Holds no state besides the entropy source, so calls are independent and
/// may run concurrently when `E` allows it.
#[derive(Debug, Default, Clone)]
pub struct TextGenerator<E> {
    entropy: E,
}

impl TextGenerator<SystemEntropySource> {
    /// A generator backed by the OS CSPRNG.
    pub const fn system() -> Self {
        Self {
            entropy: SystemEntropySource {},
        }
    }
}

impl<E: EntropySource> TextGenerator<E> {
    /// Creates a generator drawing bytes from `entropy`.
    pub fn new(entropy: E) -> Self {
        Self { entropy }
    }

    /// The underlying entropy source.
    pub fn entropy(&self) -> &E {
        &self.entropy
    }

    /// Generates exactly `length` characters from `alphabet`.
    ///
    /// A zero length returns an empty string without touching the entropy
    /// source.
    ///
    /// # Errors
    ///
    /// Returns [`TextError::Entropy`] if the entropy source fails. No partial
    /// output is ever returned.
    pub fn generate(&self, alphabet: Alphabet, length: usize) -> Result<String, TextError> {
        if length == 0 {
            trace!(%alphabet, "empty text requested");
            return Ok(String::new());
        }

        let mut buffer = WorkBuffer::new(length);
        trace!(%alphabet, length, inline = buffer.is_inline(), "generating text");

        if let Err(err) = self.entropy.fill_bytes(buffer.as_mut_slice()) {
            error!(%alphabet, length, %err, "entropy source failed");
            return Err(err.into());
        }

        Ok(buffer.map_into_string(alphabet.table()))
    }

    /// Infallible form of [`TextGenerator::generate`].
    ///
    /// # Panics
    ///
    /// Panics if the entropy source fails.
    pub fn text(&self, alphabet: Alphabet, length: usize) -> String {
        match self.generate(alphabet, length) {
            Ok(text) => text,
            Err(err) => panic!("randstring: cannot generate {alphabet} text: {err}"),
        }
    }

    /// Like [`TextGenerator::generate`], for a signed length.
    ///
    /// # Errors
    ///
    /// - [`TextError::InvalidLength`] if `length` is negative. The entropy
    ///   source is not called.
    /// - [`TextError::Entropy`] if the entropy source fails.
    pub fn try_generate(&self, alphabet: Alphabet, length: i64) -> Result<String, TextError> {
        let length = checked_length(length)?;
        self.generate(alphabet, length)
    }
}

/// Converts a signed length into a buffer length, rejecting negatives.
pub(crate) fn checked_length(length: i64) -> Result<usize, TextError> {
    usize::try_from(length).map_err(|_| TextError::InvalidLength(length))
}
