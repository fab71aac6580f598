// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_scroll_stack --heading-base-level=0

//! Understory Scroll Stack: a vertically scrolling container around a spaced stack.
//!
//! [`ScrollStack`] owns one [`understory_stack::SpacedStack`] and forwards every edit
//! (append, insert at/before/after, replace, remove) to it. What it adds is the
//! relationship between the stack and the viewport it scrolls in:
//!
//! - [`Sizing`]: either [`Sizing::Fill`], where the stack is exactly as wide as the
//!   viewport minus the horizontal insets, or [`Sizing::Natural`], where the stack keeps
//!   its intrinsic width and is aligned left, centered, or right.
//! - Content insets ([`kurbo::Insets`]) between the viewport edges and the stack.
//! - [`ScrollState`]: the vertical offset, clamped against the measured content.
//!
//! Sizing and insets are turned into a [`ConstraintSet`] by the pure function
//! [`derive_constraints`]. Changing either one deactivates the previous set on the
//! [`ConstraintHost`] and activates the new set. The host is whatever layout system
//! owns constraint solving; `()` ignores constraints entirely, which is what you want
//! when layout is driven through `understory_stack_taffy` instead.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Insets, Size};
//! use understory_scroll_stack::{ConstraintHost, ConstraintSet, ScrollList, Sizing};
//! use understory_stack::{Gaps, StackConfig};
//!
//! #[derive(Default)]
//! struct CountingHost {
//!     active: usize,
//! }
//!
//! impl ConstraintHost for CountingHost {
//!     fn activate(&mut self, set: &ConstraintSet) {
//!         self.active += set.len();
//!     }
//!     fn deactivate(&mut self, set: &ConstraintSet) {
//!         self.active -= set.len();
//!     }
//! }
//!
//! let mut list = ScrollList::<u32, _>::with_config(StackConfig::default(), CountingHost::default());
//! assert_eq!(list.host().active, 5);
//!
//! list.append(1, Gaps::DEFAULT);
//! list.set_content_insets(Insets::uniform(4.0));
//! assert_eq!(list.host().active, list.constraints().len());
//!
//! list.set_viewport_size(Size::new(320.0, 100.0));
//! list.set_content_size(Size::new(320.0, 400.0));
//! list.scroll_to_end();
//! assert_eq!(list.scroll().offset(), 308.0);
//! assert_eq!(list.sizing(), Sizing::Fill);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod constraints;
mod scroll;
mod scroll_stack;
mod sizing;

pub use constraints::{
    Attribute, Constraint, ConstraintHost, ConstraintSet, Item, Relation, derive_constraints,
};
pub use scroll::ScrollState;
pub use scroll_stack::{ScrollList, ScrollStack};
pub use sizing::{HorizontalAlign, Sizing};
