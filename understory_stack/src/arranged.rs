// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The ordered-children primitive and its in-memory implementation.

use alloc::vec::Vec;
use core::fmt;
use core::hash::Hash;

use hashbrown::HashMap;

use crate::types::{Alignment, Axis, Distribution, StackConfig};

/// An ordered list of child handles with a per-gap spacing table.
///
/// This is the primitive that [`SpacedStack`](crate::SpacedStack) edits. It is
/// deliberately dumb: it does not enforce uniqueness, handle moves, or touch spacing
/// when children are inserted. Hosts that already own a stack-like container (a
/// retained widget, a scene node) can implement it directly; everyone else can use
/// [`ArrangedList`].
///
/// Child identity is handle equality. The spacing table is keyed by child: the value
/// stored for `c` is the gap immediately after `c`.
pub trait ArrangedChildren {
    /// Handle type of an arranged child.
    type Child: Copy + Eq + fmt::Debug;

    /// Children in layout order.
    fn arranged(&self) -> &[Self::Child];

    /// Appends `child` after the last child.
    fn push(&mut self, child: Self::Child);

    /// Inserts `child` at `index`.
    ///
    /// Implementations must panic when `index > self.arranged().len()`.
    fn insert(&mut self, index: usize, child: Self::Child);

    /// Removes `child` and discards its spacing override.
    ///
    /// Returns `false` if `child` was not arranged.
    fn remove(&mut self, child: Self::Child) -> bool;

    /// Removes every child and every spacing override, including overrides recorded
    /// for children that are not arranged.
    fn clear(&mut self);

    /// Returns the spacing override for the gap after `child`, if any.
    fn custom_spacing(&self, child: Self::Child) -> Option<f64>;

    /// Overrides the gap after `child`.
    fn set_custom_spacing(&mut self, child: Self::Child, spacing: f64);

    /// Drops the override for the gap after `child`, so it uses the default spacing.
    fn clear_custom_spacing(&mut self, child: Self::Child);

    /// Default spacing used for gaps without an override.
    fn spacing(&self) -> f64;

    /// Sets the default spacing.
    fn set_spacing(&mut self, spacing: f64);

    /// Main axis.
    fn axis(&self) -> Axis;

    /// Sets the main axis.
    fn set_axis(&mut self, axis: Axis);

    /// Main-axis distribution.
    fn distribution(&self) -> Distribution;

    /// Sets the main-axis distribution.
    fn set_distribution(&mut self, distribution: Distribution);

    /// Cross-axis alignment.
    fn alignment(&self) -> Alignment;

    /// Sets the cross-axis alignment.
    fn set_alignment(&mut self, alignment: Alignment);

    /// Effective gap after `child`: its override, or the default spacing.
    fn spacing_after(&self, child: Self::Child) -> f64 {
        self.custom_spacing(child).unwrap_or_else(|| self.spacing())
    }
}

/// In-memory [`ArrangedChildren`] backed by a `Vec` and an identity-keyed spacing map.
///
/// Overrides are keyed by handle rather than by position, so they follow their child
/// when other children are inserted or removed around it.
#[derive(Clone, Debug)]
pub struct ArrangedList<K> {
    children: Vec<K>,
    custom: HashMap<K, f64>,
    config: StackConfig,
}

impl<K> Default for ArrangedList<K> {
    fn default() -> Self {
        Self::new(StackConfig::default())
    }
}

impl<K: Eq + Hash> PartialEq for ArrangedList<K> {
    fn eq(&self, other: &Self) -> bool {
        self.children == other.children
            && self.custom == other.custom
            && self.config == other.config
    }
}

impl<K> ArrangedList<K> {
    /// Creates an empty list with the given configuration.
    #[must_use]
    pub fn new(config: StackConfig) -> Self {
        Self {
            children: Vec::new(),
            custom: HashMap::new(),
            config,
        }
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &StackConfig {
        &self.config
    }

    /// Number of spacing overrides currently recorded.
    #[must_use]
    pub fn custom_spacing_count(&self) -> usize {
        self.custom.len()
    }
}

impl<K> ArrangedChildren for ArrangedList<K>
where
    K: Copy + Eq + Hash + fmt::Debug,
{
    type Child = K;

    fn arranged(&self) -> &[K] {
        &self.children
    }

    fn push(&mut self, child: K) {
        debug_assert!(
            !self.children.contains(&child),
            "{child:?} is already arranged"
        );
        self.children.push(child);
    }

    fn insert(&mut self, index: usize, child: K) {
        debug_assert!(
            !self.children.contains(&child),
            "{child:?} is already arranged"
        );
        self.children.insert(index, child);
    }

    fn remove(&mut self, child: K) -> bool {
        let Some(index) = self.children.iter().position(|&c| c == child) else {
            return false;
        };
        self.children.remove(index);
        self.custom.remove(&child);
        true
    }

    fn clear(&mut self) {
        self.children.clear();
        self.custom.clear();
    }

    fn custom_spacing(&self, child: K) -> Option<f64> {
        self.custom.get(&child).copied()
    }

    fn set_custom_spacing(&mut self, child: K, spacing: f64) {
        self.custom.insert(child, spacing);
    }

    fn clear_custom_spacing(&mut self, child: K) {
        self.custom.remove(&child);
    }

    fn spacing(&self) -> f64 {
        self.config.spacing
    }

    fn set_spacing(&mut self, spacing: f64) {
        self.config.spacing = spacing;
    }

    fn axis(&self) -> Axis {
        self.config.axis
    }

    fn set_axis(&mut self, axis: Axis) {
        self.config.axis = axis;
    }

    fn distribution(&self) -> Distribution {
        self.config.distribution
    }

    fn set_distribution(&mut self, distribution: Distribution) {
        self.config.distribution = distribution;
    }

    fn alignment(&self) -> Alignment {
        self.config.alignment
    }

    fn set_alignment(&mut self, alignment: Alignment) {
        self.config.alignment = alignment;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_discards_override() {
        let mut list = ArrangedList::new(StackConfig::default().with_spacing(4.0));
        list.push(1_u32);
        list.push(2);
        list.set_custom_spacing(1, 9.0);
        assert_eq!(list.spacing_after(1), 9.0);
        assert_eq!(list.spacing_after(2), 4.0);

        assert!(list.remove(1));
        assert!(!list.remove(1));
        assert_eq!(list.arranged(), &[2]);
        assert_eq!(list.custom_spacing(1), None);
        assert_eq!(list.custom_spacing_count(), 0);
    }

    #[test]
    fn overrides_follow_their_child() {
        let mut list = ArrangedList::<u32>::default();
        list.push(1);
        list.push(2);
        list.set_custom_spacing(2, 3.0);
        list.insert(0, 0);
        assert_eq!(list.arranged(), &[0, 1, 2]);
        assert_eq!(list.spacing_after(2), 3.0);
        assert_eq!(list.spacing_after(1), 0.0);
    }

    #[test]
    fn clear_drops_stray_overrides() {
        let mut list = ArrangedList::<u32>::default();
        list.push(1);
        list.set_custom_spacing(1, 2.0);
        list.set_custom_spacing(42, 5.0);
        list.clear();
        assert!(list.arranged().is_empty());
        assert_eq!(list.custom_spacing_count(), 0);
        assert_eq!(list.config(), &StackConfig::default());
    }

    #[test]
    #[should_panic(expected = "insertion index")]
    fn insert_past_end_panics() {
        let mut list = ArrangedList::<u32>::default();
        list.insert(1, 7);
    }
}
