// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_stack --heading-base-level=0

//! Understory Stack: ordered stack children with per-gap spacing.
//!
//! This crate handles the _bookkeeping_ behind a stack container: which children are
//! arranged, in what order, and how far apart each adjacent pair is. It does not
//! measure or position anything; a layout engine (for example Taffy, via
//! `understory_stack_taffy`) turns this state into geometry.
//!
//! The pieces are:
//!
//! - [`ArrangedChildren`]: the primitive being edited. An ordered list of child
//!   handles plus a spacing table keyed by child, where the value stored for `c` is the
//!   gap right after `c`. Gaps without an override use the collection-wide default
//!   spacing.
//! - [`ArrangedList`]: the in-memory implementation of that primitive.
//! - [`SpacedStack`]: the editing layer. It appends, inserts at an index, before or
//!   after an anchor, replaces, and removes children, and writes the spacing on both
//!   sides of whatever it places (see [`Gaps`]).
//!
//! ## Editing rules
//!
//! - Identity is handle equality. A child is never arranged twice: inserting a child
//!   that is already arranged moves it, and its old spacing override is dropped.
//! - Inserting before/after an anchor that is not arranged, or that is the inserted
//!   child itself, is a silent no-op. This keeps rebuild code simple when anchors come
//!   and go.
//! - An out-of-range index passed to [`SpacedStack::insert_at`] panics before anything
//!   is modified; [`SpacedStack::try_insert_at`] returns [`IndexOutOfBounds`] instead.
//! - [`SpacedStack::replace`] keeps the slot and the trailing spacing of the child it
//!   replaces. The gap in front of the slot belongs to the predecessor.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_stack::{Gaps, Stack, StackConfig};
//!
//! let mut stack = Stack::<&str>::new(StackConfig::default().with_spacing(4.0));
//! stack.extend(["title", "body"]);
//!
//! // A footer separated from the body by a larger gap.
//! stack.append("footer", Gaps::prev(16.0));
//! assert_eq!(stack.spacing_after("body"), 16.0);
//!
//! // Swap the body for a placeholder; the 16pt gap stays with the slot.
//! stack.replace("body", "loading");
//! assert_eq!(stack.arranged(), &["title", "loading", "footer"]);
//! assert_eq!(stack.spacing_after("loading"), 16.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arranged;
mod error;
mod stack;
mod types;

pub use arranged::{ArrangedChildren, ArrangedList};
pub use error::IndexOutOfBounds;
pub use stack::{SpacedStack, Stack};
pub use types::{Alignment, Axis, Distribution, Gaps, StackConfig};
