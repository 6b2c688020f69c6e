// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.


use crate::{Alphabet, TextError};

type TextFn = fn(usize) -> String;
type TryTextFn = fn(i64) -> Result<String, TextError>;

/// Every public infallible entry point with its alphabet.
pub(crate) const TEXT_FNS: [(&str, TextFn, Alphabet); 5] = [
    ("text16", crate::text16, Alphabet::Base16),
    ("text32", crate::text32, Alphabet::Base32),
    ("text32_crockford", crate::text32_crockford, Alphabet::Base32Crockford),
    ("text64", crate::text64, Alphabet::Base64),
    ("text64_url", crate::text64_url, Alphabet::Base64Url),
];

/// Every public fallible entry point with its alphabet.
pub(crate) const TRY_TEXT_FNS: [(&str, TryTextFn, Alphabet); 5] = [
    ("try_text16", crate::try_text16, Alphabet::Base16),
    ("try_text32", crate::try_text32, Alphabet::Base32),
    ("try_text32_crockford", crate::try_text32_crockford, Alphabet::Base32Crockford),
    ("try_text64", crate::try_text64, Alphabet::Base64),
    ("try_text64_url", crate::try_text64_url, Alphabet::Base64Url),
];

pub(crate) fn assert_in_alphabet(name: &str, alphabet: Alphabet, text: &str) {
    for c in text.chars() {
        assert!(alphabet.contains(c), "{name}: invalid character {c:?} in {text:?}");
    }
}
