// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Insets, Size};
use understory_stack::{
    Alignment, ArrangedChildren, ArrangedList, Distribution, Gaps, IndexOutOfBounds, SpacedStack,
    StackConfig,
};

use crate::constraints::{ConstraintHost, ConstraintSet, derive_constraints};
use crate::scroll::ScrollState;
use crate::sizing::Sizing;

/// A vertically scrolling container around one [`SpacedStack`].
///
/// Edits are forwarded to the stack unchanged. The container itself owns how the
/// stack sits in the viewport: a [`Sizing`] mode and four-sided content insets. Both
/// feed [`derive_constraints`]; whenever either changes, the previous
/// [`ConstraintSet`] is deactivated on the host and the new one activated.
///
/// ```rust
/// use kurbo::Insets;
/// use understory_scroll_stack::{HorizontalAlign, ScrollList, Sizing};
/// use understory_stack::{Gaps, StackConfig};
///
/// let mut list = ScrollList::<u32>::with_config(StackConfig::default().with_spacing(8.0), ());
/// list.extend([1, 2, 3]);
/// list.insert_after(4, 3, Gaps::prev(24.0));
/// assert_eq!(list.arranged(), &[1, 2, 3, 4]);
///
/// list.set_sizing(Sizing::Natural(HorizontalAlign::Center));
/// list.set_content_insets(Insets::uniform(16.0));
/// assert_eq!(list.constraints().len(), 6);
/// ```
#[derive(Clone, Debug)]
pub struct ScrollStack<C, H = ()> {
    stack: SpacedStack<C>,
    host: H,
    sizing: Sizing,
    content_insets: Insets,
    constraints: ConstraintSet,
    scroll: ScrollState,
}

/// A [`ScrollStack`] over the in-memory [`ArrangedList`].
pub type ScrollList<K, H = ()> = ScrollStack<ArrangedList<K>, H>;

impl<K, H: ConstraintHost> ScrollList<K, H> {
    /// Creates an empty scroll list with the given stack configuration.
    #[must_use]
    pub fn with_config(config: StackConfig, host: H) -> Self {
        Self::new(SpacedStack::from_children(ArrangedList::new(config)), host)
    }
}

impl<C, H: ConstraintHost> ScrollStack<C, H> {
    /// Wraps `stack` with [`Sizing::Fill`] and no insets, activating the initial constraints.
    #[must_use]
    pub fn new(stack: SpacedStack<C>, host: H) -> Self {
        Self::with_layout(stack, host, Sizing::default(), Insets::ZERO)
    }

    /// Wraps `stack` with an explicit sizing mode and insets, activating the initial constraints.
    #[must_use]
    pub fn with_layout(
        stack: SpacedStack<C>,
        mut host: H,
        sizing: Sizing,
        content_insets: Insets,
    ) -> Self {
        let constraints = derive_constraints(sizing, content_insets);
        host.activate(&constraints);
        let mut scroll = ScrollState::default();
        scroll.set_insets(content_insets);
        Self {
            stack,
            host,
            sizing,
            content_insets,
            constraints,
            scroll,
        }
    }

    /// Current sizing mode.
    #[must_use]
    pub fn sizing(&self) -> Sizing {
        self.sizing
    }

    /// Changes the sizing mode, rebuilding the constraints if it differs.
    pub fn set_sizing(&mut self, sizing: Sizing) {
        if self.sizing == sizing {
            return;
        }
        self.sizing = sizing;
        self.rebuild_constraints();
    }

    /// Insets between the viewport edges and the stack.
    #[must_use]
    pub fn content_insets(&self) -> Insets {
        self.content_insets
    }

    /// Changes the content insets, rebuilding the constraints if they differ.
    pub fn set_content_insets(&mut self, insets: Insets) {
        if self.content_insets == insets {
            return;
        }
        self.content_insets = insets;
        self.scroll.set_insets(insets);
        self.rebuild_constraints();
    }

    /// The currently active constraints.
    #[must_use]
    pub fn constraints(&self) -> &ConstraintSet {
        &self.constraints
    }

    /// The constraint host.
    #[must_use]
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Mutable access to the constraint host.
    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Deactivates the current constraints and activates a freshly derived set.
    fn rebuild_constraints(&mut self) {
        let next = derive_constraints(self.sizing, self.content_insets);
        self.host.deactivate(&self.constraints);
        self.host.activate(&next);
        tracing::debug!(
            sizing = ?self.sizing,
            insets = ?self.content_insets,
            constraints = next.len(),
            "scroll stack constraints rebuilt"
        );
        self.constraints = next;
    }
}

impl<C, H> ScrollStack<C, H> {
    /// The wrapped stack.
    #[must_use]
    pub fn stack(&self) -> &SpacedStack<C> {
        &self.stack
    }

    /// Mutable access to the wrapped stack.
    pub fn stack_mut(&mut self) -> &mut SpacedStack<C> {
        &mut self.stack
    }

    /// Scroll position and extents.
    #[must_use]
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Records the viewport size.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.scroll.set_viewport_size(size);
    }

    /// Records the measured stack size (for example from a layout pass).
    pub fn set_content_size(&mut self, size: Size) {
        self.scroll.set_content_size(size);
    }

    /// Scrolls to a vertical offset, clamped to the scrollable extent.
    pub fn scroll_to(&mut self, offset: f64) {
        self.scroll.scroll_to(offset);
    }

    /// Scrolls by a vertical delta, clamped to the scrollable extent.
    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll.scroll_by(delta);
    }

    /// Scrolls so that the end of the content is visible.
    pub fn scroll_to_end(&mut self) {
        let end = self.scroll.max_offset();
        self.scroll.scroll_to(end);
    }
}

impl<C: ArrangedChildren, H> ScrollStack<C, H> {
    /// Children in layout order.
    #[must_use]
    pub fn arranged(&self) -> &[C::Child] {
        self.stack.arranged()
    }

    /// Number of arranged children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` if no children are arranged.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// See [`SpacedStack::append`].
    pub fn append(&mut self, child: C::Child, gaps: Gaps) {
        self.stack.append(child, gaps);
    }

    /// See [`SpacedStack::extend`].
    pub fn extend<I>(&mut self, children: I)
    where
        I: IntoIterator<Item = C::Child>,
    {
        self.stack.extend(children);
    }

    /// See [`SpacedStack::insert_at`].
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn insert_at(&mut self, child: C::Child, index: usize, gaps: Gaps) {
        self.stack.insert_at(child, index, gaps);
    }

    /// See [`SpacedStack::try_insert_at`].
    pub fn try_insert_at(
        &mut self,
        child: C::Child,
        index: usize,
        gaps: Gaps,
    ) -> Result<(), IndexOutOfBounds> {
        self.stack.try_insert_at(child, index, gaps)
    }

    /// See [`SpacedStack::insert_before`].
    pub fn insert_before(&mut self, child: C::Child, anchor: C::Child, gaps: Gaps) {
        self.stack.insert_before(child, anchor, gaps);
    }

    /// See [`SpacedStack::insert_after`].
    pub fn insert_after(&mut self, child: C::Child, anchor: C::Child, gaps: Gaps) {
        self.stack.insert_after(child, anchor, gaps);
    }

    /// See [`SpacedStack::replace`].
    pub fn replace(&mut self, old: C::Child, new: C::Child) {
        self.stack.replace(old, new);
    }

    /// See [`SpacedStack::remove`].
    pub fn remove(&mut self, child: C::Child) {
        self.stack.remove(child);
    }

    /// See [`SpacedStack::remove_all`].
    pub fn remove_all(&mut self) {
        self.stack.remove_all();
    }

    /// See [`SpacedStack::spacing_after`].
    #[must_use]
    pub fn spacing_after(&self, child: C::Child) -> f64 {
        self.stack.spacing_after(child)
    }

    /// Default spacing of the stack.
    #[must_use]
    pub fn spacing(&self) -> f64 {
        self.stack.spacing()
    }

    /// Sets the default spacing of the stack.
    pub fn set_spacing(&mut self, spacing: f64) {
        self.stack.set_spacing(spacing);
    }

    /// Main-axis distribution of the stack.
    #[must_use]
    pub fn distribution(&self) -> Distribution {
        self.stack.distribution()
    }

    /// Sets the main-axis distribution of the stack.
    pub fn set_distribution(&mut self, distribution: Distribution) {
        self.stack.set_distribution(distribution);
    }

    /// Cross-axis alignment of the stack.
    #[must_use]
    pub fn alignment(&self) -> Alignment {
        self.stack.alignment()
    }

    /// Sets the cross-axis alignment of the stack.
    pub fn set_alignment(&mut self, alignment: Alignment) {
        self.stack.set_alignment(alignment);
    }
}
