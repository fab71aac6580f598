// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when an insertion index lies outside the arranged children.
///
/// `len` is the number of children once the inserted child is taken out of the list:
/// the current count for a new child, one less for a child that is being moved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IndexOutOfBounds {
    /// The rejected index.
    pub index: usize,
    /// The largest index that would have been accepted.
    pub len: usize,
}

impl fmt::Display for IndexOutOfBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "insertion index (is {}) should be <= len (is {})",
            self.index, self.len
        )
    }
}

impl core::error::Error for IndexOutOfBounds {}
