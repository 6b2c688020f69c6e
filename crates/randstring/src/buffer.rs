// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Work buffer for a single generation call.

use alloc::string::String;

use smallvec::SmallVec;

use crate::alphabet::AlphabetTable;

/// Lengths up to this many bytes are generated in a stack buffer.
pub const INLINE_CAPACITY: usize = 128;

/// Exclusively owned byte buffer, filled with entropy and then mapped in place.
pub(crate) struct WorkBuffer {
    bytes: SmallVec<[u8; INLINE_CAPACITY]>,
}

impl WorkBuffer {
    pub(crate) fn new(length: usize) -> Self {
        Self {
            bytes: SmallVec::from_elem(0, length),
        }
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [u8] {
        self.bytes.as_mut_slice()
    }

    /// `true` while the bytes live on the stack.
    pub(crate) fn is_inline(&self) -> bool {
        !self.bytes.spilled()
    }

    /// Rewrites every byte through `table` and hands the bytes over as a `String`.
    ///
    /// A heap buffer is moved into the string as is; a stack buffer is copied
    /// once into the string's allocation.
    pub(crate) fn map_into_string(mut self, table: &AlphabetTable) -> String {
        for byte in self.bytes.iter_mut() {
            *byte = table.lookup(*byte);
        }

        let bytes = self.bytes.into_vec();
        debug_assert!(bytes.is_ascii());

        // SAFETY: AlphabetTable::new only accepts ASCII alphabets and every byte
        // was just replaced by a table entry, so the buffer is valid UTF-8.
        unsafe { String::from_utf8_unchecked(bytes) }
    }
}
