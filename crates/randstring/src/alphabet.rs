// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Encoding alphabets and their 256-entry lookup tables.
//!
//! Each base alphabet is repeated until it covers every byte value, so a
//! uniformly random byte maps to a uniformly random character. This only holds
//! when the alphabet length divides 256, which [`AlphabetTable::new`] enforces
//! at compile time.

use alloc::string::String;
use core::fmt;

use crate::error::TextError;
use crate::generator::TextGenerator;

/// Hexadecimal digits, uppercase (RFC 4648 Base16).
pub const BASE16: &str = "0123456789ABCDEF";
/// RFC 4648 Base32 alphabet.
pub const BASE32: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ234567";
/// Crockford's Base32 alphabet (no I, L, O or U).
pub const BASE32_CROCKFORD: &str = "0123456789ABCDEFGHJKMNPQRSTVWXYZ";
/// RFC 4648 Base64 alphabet.
pub const BASE64: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
/// RFC 4648 URL and filename safe Base64 alphabet.
pub const BASE64_URL: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

static BASE16_TABLE: AlphabetTable = AlphabetTable::new(BASE16);
static BASE32_TABLE: AlphabetTable = AlphabetTable::new(BASE32);
static BASE32_CROCKFORD_TABLE: AlphabetTable = AlphabetTable::new(BASE32_CROCKFORD);
static BASE64_TABLE: AlphabetTable = AlphabetTable::new(BASE64);
static BASE64_URL_TABLE: AlphabetTable = AlphabetTable::new(BASE64_URL);

/// A base alphabet expanded to one entry per byte value.
///
/// `expanded[v] == base[v % base.len()]` for every `v` in `0..=255`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphabetTable {
    base: &'static str,
    expanded: [u8; 256],
}

impl AlphabetTable {
    /// Expands `base` into a 256-entry table.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a const context) if `base` is not
    /// made of distinct ASCII characters, or if its length does not divide 256.
    pub const fn new(base: &'static str) -> Self {
        let bytes = base.as_bytes();
        let len = bytes.len();

        assert!(len >= 2, "alphabet must contain at least two characters");
        assert!(256 % len == 0, "alphabet length must divide 256");

        let mut i = 0;
        while i < len {
            assert!(bytes[i].is_ascii(), "alphabet must be ASCII");
            let mut j = i + 1;
            while j < len {
                assert!(bytes[i] != bytes[j], "alphabet characters must be distinct");
                j += 1;
            }
            i += 1;
        }

        let mut expanded = [0u8; 256];
        let mut v = 0;
        while v < 256 {
            expanded[v] = bytes[v % len];
            v += 1;
        }

        Self { base, expanded }
    }

    /// The base alphabet this table was built from.
    pub const fn base(&self) -> &'static str {
        self.base
    }

    /// The full 256-entry table.
    pub const fn as_bytes(&self) -> &[u8; 256] {
        &self.expanded
    }

    /// Maps a byte value to its alphabet character.
    #[inline(always)]
    pub fn lookup(&self, byte: u8) -> u8 {
        self.expanded[byte as usize]
    }
}

/// The alphabets random text can be drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alphabet {
    /// `0-9A-F`
    Base16,
    /// `A-Z2-7`
    Base32,
    /// `0-9A-Z` without `I`, `L`, `O`, `U`
    Base32Crockford,
    /// `A-Za-z0-9+/`
    Base64,
    /// `A-Za-z0-9-_`
    Base64Url,
}

impl Alphabet {
    /// Every supported alphabet.
    pub const ALL: [Alphabet; 5] = [
        Alphabet::Base16,
        Alphabet::Base32,
        Alphabet::Base32Crockford,
        Alphabet::Base64,
        Alphabet::Base64Url,
    ];

    /// The precomputed lookup table for this alphabet.
    pub fn table(self) -> &'static AlphabetTable {
        match self {
            Alphabet::Base16 => &BASE16_TABLE,
            Alphabet::Base32 => &BASE32_TABLE,
            Alphabet::Base32Crockford => &BASE32_CROCKFORD_TABLE,
            Alphabet::Base64 => &BASE64_TABLE,
            Alphabet::Base64Url => &BASE64_URL_TABLE,
        }
    }

    /// The characters of this alphabet, in table order.
    pub fn chars(self) -> &'static str {
        self.table().base()
    }

    /// Number of distinct characters.
    pub fn radix(self) -> usize {
        self.chars().len()
    }

    /// Returns `true` if `c` belongs to this alphabet.
    pub fn contains(self, c: char) -> bool {
        self.chars().contains(c)
    }

    /// Generates `length` random characters from this alphabet.
    ///
    /// # Panics
    ///
    /// Panics if the system entropy source fails. Falling back to weaker
    /// randomness is never an option.
    pub fn text(self, length: usize) -> String {
        TextGenerator::system().text(self, length)
    }

    /// Like [`Alphabet::text`], for signed lengths and without panicking.
    ///
    /// # Errors
    ///
    /// - [`TextError::InvalidLength`] if `length` is negative.
    /// - [`TextError::Entropy`] if the system entropy source fails.
    pub fn try_text(self, length: i64) -> Result<String, TextError> {
        TextGenerator::system().try_generate(self, length)
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Alphabet::Base16 => "base16",
            Alphabet::Base32 => "base32",
            Alphabet::Base32Crockford => "base32-crockford",
            Alphabet::Base64 => "base64",
            Alphabet::Base64Url => "base64url",
        };
        f.write_str(name)
    }
}
