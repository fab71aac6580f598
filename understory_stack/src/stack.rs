// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Spacing-aware editing on top of an [`ArrangedChildren`] primitive.

use crate::arranged::{ArrangedChildren, ArrangedList};
use crate::error::IndexOutOfBounds;
use crate::types::{Alignment, Axis, Distribution, Gaps, StackConfig};

/// Ordered stack children with per-gap spacing and move-aware insertion.
///
/// `SpacedStack` wraps an [`ArrangedChildren`] primitive and layers the editing
/// operations UIs actually want on top of it:
///
/// - Every insert-style call can set the gap before and after the child it places
///   (see [`Gaps`]).
/// - Inserting a child that is already arranged moves it; a child never appears twice.
/// - Inserting relative to an anchor that is missing, or relative to the child itself,
///   does nothing.
///
/// Identity is handle equality on [`ArrangedChildren::Child`]. Lookups are linear in
/// the number of children, which is fine for the sizes stacks usually have.
///
/// ```rust
/// use understory_stack::{Gaps, Stack, StackConfig};
///
/// let mut stack = Stack::<u32>::new(StackConfig::default().with_spacing(8.0));
/// stack.extend([1, 2, 3]);
///
/// // Move 3 to the front with a wide gap after it.
/// stack.insert_before(3, 1, Gaps::next(24.0));
/// assert_eq!(stack.arranged(), &[3, 1, 2]);
/// assert_eq!(stack.spacing_after(3), 24.0);
/// assert_eq!(stack.spacing_after(1), 8.0);
///
/// // Anchors that are not arranged are ignored.
/// stack.insert_after(4, 99, Gaps::DEFAULT);
/// assert_eq!(stack.len(), 3);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpacedStack<C> {
    children: C,
}

/// A [`SpacedStack`] over the in-memory [`ArrangedList`].
pub type Stack<K> = SpacedStack<ArrangedList<K>>;

impl<K> Stack<K> {
    /// Creates an empty stack with the given configuration.
    #[must_use]
    pub fn new(config: StackConfig) -> Self {
        Self::from_children(ArrangedList::new(config))
    }
}

impl<C> SpacedStack<C> {
    /// Wraps an existing primitive.
    ///
    /// The primitive must not already contain duplicate children.
    #[must_use]
    pub const fn from_children(children: C) -> Self {
        Self { children }
    }

    /// The underlying primitive.
    #[must_use]
    pub fn children(&self) -> &C {
        &self.children
    }

    /// Unwraps the underlying primitive.
    #[must_use]
    pub fn into_inner(self) -> C {
        self.children
    }
}

impl<C: ArrangedChildren> SpacedStack<C> {
    /// Children in layout order.
    #[must_use]
    pub fn arranged(&self) -> &[C::Child] {
        self.children.arranged()
    }

    /// Number of arranged children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.arranged().len()
    }

    /// Returns `true` if no children are arranged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.arranged().is_empty()
    }

    /// Returns `true` if `child` is arranged.
    #[must_use]
    pub fn contains(&self, child: C::Child) -> bool {
        self.arranged().contains(&child)
    }

    /// Position of `child`, if arranged.
    #[must_use]
    pub fn index_of(&self, child: C::Child) -> Option<usize> {
        self.arranged().iter().position(|&c| c == child)
    }

    /// Effective gap after `child`: its override, or the default spacing.
    ///
    /// Children that are not arranged report the default spacing.
    #[must_use]
    pub fn spacing_after(&self, child: C::Child) -> f64 {
        self.children.spacing_after(child)
    }

    /// Spacing override recorded for the gap after `child`, if any.
    #[must_use]
    pub fn custom_spacing(&self, child: C::Child) -> Option<f64> {
        self.children.custom_spacing(child)
    }

    /// Appends `child` at the end.
    ///
    /// If `child` is already arranged it is moved to the end and its old override is
    /// dropped. `gaps.prev` is written after the child that precedes it (when there is
    /// one) and `gaps.next` after `child` itself.
    pub fn append(&mut self, child: C::Child, gaps: Gaps) {
        self.children.remove(child);
        if let Some(&last) = self.arranged().last() {
            self.write_gap(last, gaps.prev);
        }
        self.children.push(child);
        self.write_gap(child, gaps.next);
    }

    /// Appends every child in order without writing any spacing.
    ///
    /// New children use the default spacing; existing overrides are left alone.
    /// Children that are already arranged are moved to the end.
    pub fn extend<I>(&mut self, children: I)
    where
        I: IntoIterator<Item = C::Child>,
    {
        for child in children {
            self.children.remove(child);
            self.children.push(child);
        }
    }

    /// Inserts `child` so that it ends up at `index`.
    ///
    /// See [`try_insert_at`](Self::try_insert_at) for the accepted range.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range. Nothing is modified in that case.
    pub fn insert_at(&mut self, child: C::Child, index: usize, gaps: Gaps) {
        if let Err(err) = self.try_insert_at(child, index, gaps) {
            panic!("{err}");
        }
    }

    /// Inserts `child` so that it ends up at `index`, or reports an out-of-range index.
    ///
    /// `index` is the final position of `child`: `0..=len` for a child that is not yet
    /// arranged, `0..len` for one that is being moved. When `index > 0`, `gaps.prev` is
    /// written after the new predecessor; `gaps.next` is written after `child`.
    ///
    /// The index is validated before anything is touched.
    pub fn try_insert_at(
        &mut self,
        child: C::Child,
        index: usize,
        gaps: Gaps,
    ) -> Result<(), IndexOutOfBounds> {
        let len = self.len() - usize::from(self.contains(child));
        if index > len {
            return Err(IndexOutOfBounds { index, len });
        }
        self.children.remove(child);
        self.place(child, index, gaps);
        Ok(())
    }

    /// Inserts `child` immediately before `anchor`.
    ///
    /// Does nothing if `anchor` is not arranged or is `child` itself. Otherwise `child`
    /// is moved if it was already arranged. `gaps.next` is written after `child`, and
    /// `gaps.prev` after the new predecessor unless `child` ends up first.
    pub fn insert_before(&mut self, child: C::Child, anchor: C::Child, gaps: Gaps) {
        if !self.take_for_insert(child, anchor) {
            return;
        }
        let Some(index) = self.index_of(anchor) else {
            return;
        };
        self.place(child, index, gaps);
    }

    /// Inserts `child` immediately after `anchor`.
    ///
    /// Does nothing if `anchor` is not arranged or is `child` itself. Otherwise `child`
    /// is moved if it was already arranged. `gaps.prev` is written after `anchor` and
    /// `gaps.next` after `child`.
    pub fn insert_after(&mut self, child: C::Child, anchor: C::Child, gaps: Gaps) {
        if !self.take_for_insert(child, anchor) {
            return;
        }
        let Some(index) = self.index_of(anchor) else {
            return;
        };
        self.place(child, index + 1, gaps);
    }

    /// Puts `new` in the slot of `old`, keeping the spacing after that slot.
    ///
    /// The gap before the slot belongs to the predecessor and is not touched. If `new`
    /// was arranged elsewhere it is moved. Does nothing if `old` is not arranged or
    /// `old == new`.
    pub fn replace(&mut self, old: C::Child, new: C::Child) {
        if old == new || !self.contains(old) {
            tracing::trace!(?old, ?new, "replace skipped");
            return;
        }
        self.children.remove(new);
        let Some(index) = self.index_of(old) else {
            return;
        };
        let spacing = self.children.custom_spacing(old);
        self.children.remove(old);
        self.children.insert(index, new);
        self.write_gap(new, spacing);
    }

    /// Removes `child` and its spacing override. Does nothing if it is not arranged.
    pub fn remove(&mut self, child: C::Child) {
        if !self.children.remove(child) {
            tracing::trace!(?child, "remove skipped: not arranged");
        }
    }

    /// Removes every child and every spacing override.
    ///
    /// Collection-wide settings (default spacing, axis, distribution, alignment) are kept.
    pub fn remove_all(&mut self) {
        self.children.clear();
    }

    /// Default spacing used for gaps without an override.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.children.spacing()
    }

    /// Sets the default spacing.
    pub fn set_spacing(&mut self, spacing: f64) {
        self.children.set_spacing(spacing);
    }

    /// Main axis.
    #[must_use]
    pub fn axis(&self) -> Axis {
        self.children.axis()
    }

    /// Sets the main axis.
    pub fn set_axis(&mut self, axis: Axis) {
        self.children.set_axis(axis);
    }

    /// Main-axis distribution.
    #[must_use]
    pub fn distribution(&self) -> Distribution {
        self.children.distribution()
    }

    /// Sets the main-axis distribution.
    pub fn set_distribution(&mut self, distribution: Distribution) {
        self.children.set_distribution(distribution);
    }

    /// Cross-axis alignment.
    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.children.alignment()
    }

    /// Sets the cross-axis alignment.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.children.set_alignment(alignment);
    }

    /// Prepares `child` for insertion relative to `anchor`.
    ///
    /// Returns `false` without touching anything when `child == anchor` or `anchor` is
    /// not arranged. Otherwise takes `child` out of the list if it is there, so that
    /// the following insert is a move, and returns `true`.
    fn take_for_insert(&mut self, child: C::Child, anchor: C::Child) -> bool {
        if child == anchor {
            tracing::trace!(?child, "insert skipped: child is its own anchor");
            return false;
        }
        if !self.contains(anchor) {
            tracing::trace!(?child, ?anchor, "insert skipped: anchor not arranged");
            return false;
        }
        self.children.remove(child);
        true
    }

    /// Inserts a child that is known to be absent and writes both adjacent gaps.
    fn place(&mut self, child: C::Child, index: usize, gaps: Gaps) {
        self.children.insert(index, child);
        if let Some(prev_index) = index.checked_sub(1) {
            let prev = self.arranged()[prev_index];
            self.write_gap(prev, gaps.prev);
        }
        self.write_gap(child, gaps.next);
    }

    fn write_gap(&mut self, child: C::Child, spacing: Option<f64>) {
        match spacing {
            Some(spacing) => self.children.set_custom_spacing(child, spacing),
            None => self.children.clear_custom_spacing(child),
        }
    }
}
