// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stack → Taffy adapter.
//!
//! This crate mirrors the state of an [`understory_stack::SpacedStack`] and an
//! [`understory_scroll_stack::ScrollStack`] into a [`taffy`] tree, so that Taffy acts as
//! the layout solver for them. Children are identified by their [`taffy::NodeId`]: the
//! stack is built over `NodeId` handles, and the adapter copies order, spacing, and
//! stack settings onto the corresponding Taffy nodes.
//!
//! Like the rest of Understory, the adapter is deliberately thin. It does not own the
//! Taffy tree, create child nodes, or run layout; callers are expected to:
//!
//! - Create Taffy leaves for their children and edit the stack with their ids.
//! - Call [`sync_stack`] (or [`ScrollStackNodes::sync`]) after edits.
//! - Call `compute_layout` on their root.
//! - Optionally feed measured sizes back with [`ScrollStackNodes::measure`].
//!
//! ## Mapping
//!
//! - The stack node becomes a flex container: row or column from the axis,
//!   `justify_content` from the distribution, `align_items` from the alignment, and a
//!   zero `gap`.
//! - The gap after each child becomes that child's trailing main-axis margin; the last
//!   child's trailing margin is zero, and the trailing cross-axis margin is zero.
//! - [`Distribution::FillEqually`] sets `flex_grow: 1` and `flex_basis: 0` on every child.
//!   Other distributions reset them to `flex_grow: 0` and `flex_basis: auto`.
//! - The adapter owns those four properties (right and bottom margin, flex grow, flex
//!   basis) on arranged children. When a child leaves the stack they are reset, so a
//!   reused node carries no leftover gap or growth.
//! - The viewport of a scroll stack is a column with vertical scroll overflow and
//!   padding equal to the content insets. The content node's `align_self` comes from
//!   the [`Sizing`] mode, and it never shrinks, so tall content overflows and scrolls.
//!
//! ```rust
//! use taffy::prelude::{AvailableSpace, Dimension, Size, Style, TaffyTree};
//! use understory_stack::{Gaps, Stack, StackConfig};
//! use understory_stack_taffy::sync_stack;
//!
//! let mut taffy: TaffyTree<()> = TaffyTree::new();
//! let leaf = |taffy: &mut TaffyTree<()>| {
//!     let mut style = Style::DEFAULT;
//!     style.size.height = Dimension::length(20.0);
//!     taffy.new_leaf(style).unwrap()
//! };
//! let (a, b) = (leaf(&mut taffy), leaf(&mut taffy));
//! let root = taffy.new_leaf(Style::DEFAULT).unwrap();
//!
//! let mut stack = Stack::new(StackConfig::default());
//! stack.append(a, Gaps::DEFAULT);
//! stack.append(b, Gaps::prev(12.0));
//! sync_stack(&mut taffy, root, &stack).unwrap();
//!
//! taffy
//!     .compute_layout(
//!         root,
//!         Size {
//!             width: AvailableSpace::Definite(100.0),
//!             height: AvailableSpace::Definite(100.0),
//!         },
//!     )
//!     .unwrap();
//! assert_eq!(taffy.layout(b).unwrap().location.y, 32.0);
//! ```

#![deny(unsafe_code)]

use kurbo::{Insets, Size};
use taffy::{
    AlignItems, AlignSelf, Dimension, Display, FlexDirection, JustifyContent, Layout,
    LengthPercentage, LengthPercentageAuto, NodeId, Overflow, Style, TaffyError, TaffyTree,
};
use understory_scroll_stack::{ConstraintHost, HorizontalAlign, ScrollStack, Sizing};
use understory_stack::{Alignment, ArrangedChildren, Axis, Distribution, SpacedStack};

/// Returns `base` turned into a flex container that lays out `stack`.
///
/// Only the container properties listed in the crate docs are written; size, padding,
/// and the node's own placement in its parent are kept from `base`.
#[must_use]
pub fn stack_style<C>(stack: &SpacedStack<C>, base: &Style) -> Style
where
    C: ArrangedChildren,
{
    let mut style = base.clone();
    style.display = Display::Flex;
    style.flex_direction = match stack.axis() {
        Axis::Horizontal => FlexDirection::Row,
        Axis::Vertical => FlexDirection::Column,
    };
    // Flexbox has no exact "equal centering"; space-around is the closest fit.
    style.justify_content = Some(match stack.distribution() {
        Distribution::Fill | Distribution::FillEqually => JustifyContent::FlexStart,
        Distribution::EqualSpacing => JustifyContent::SpaceBetween,
        Distribution::EqualCentering => JustifyContent::SpaceAround,
    });
    style.align_items = Some(match stack.alignment() {
        Alignment::Fill => AlignItems::Stretch,
        Alignment::Leading => AlignItems::FlexStart,
        Alignment::Center => AlignItems::Center,
        Alignment::Trailing => AlignItems::FlexEnd,
        Alignment::FirstBaseline => AlignItems::Baseline,
    });
    style.gap = taffy::Size {
        width: LengthPercentage::length(0.0),
        height: LengthPercentage::length(0.0),
    };
    style
}

/// Mirrors `stack` onto `node` and its children.
///
/// Replaces the children of `node` with the arranged children (in order), writes each
/// child's trailing margin and flex factors from the stack, and updates the container
/// style with [`stack_style`]. Children of `node` that are no longer arranged get
/// those properties reset. Does not run layout.
pub fn sync_stack<NodeContext, C>(
    taffy: &mut TaffyTree<NodeContext>,
    node: NodeId,
    stack: &SpacedStack<C>,
) -> Result<(), TaffyError>
where
    C: ArrangedChildren<Child = NodeId>,
{
    let container = stack_style(stack, taffy.style(node)?);
    taffy.set_style(node, container)?;

    // Nodes already adopted by another parent belong to that parent's sync.
    for departed in taffy.children(node)? {
        if stack.contains(departed) || taffy.parent(departed) != Some(node) {
            continue;
        }
        let mut style = taffy.style(departed)?.clone();
        release_child(&mut style);
        taffy.set_style(departed, style)?;
    }
    taffy.set_children(node, stack.arranged())?;

    let axis = stack.axis();
    let fill_equally = stack.distribution() == Distribution::FillEqually;
    let last = stack.arranged().last().copied();
    for &child in stack.arranged() {
        let spacing = if Some(child) == last {
            0.0
        } else {
            stack.spacing_after(child)
        };
        let mut style = taffy.style(child)?.clone();
        release_child(&mut style);
        let trailing = LengthPercentageAuto::length(to_f32(spacing));
        match axis {
            Axis::Horizontal => style.margin.right = trailing,
            Axis::Vertical => style.margin.bottom = trailing,
        }
        if fill_equally {
            style.flex_grow = 1.0;
            style.flex_basis = Dimension::length(0.0);
        }
        taffy.set_style(child, style)?;
    }
    tracing::trace!(?node, children = stack.len(), "stack synced into taffy");
    Ok(())
}

/// Resets the child properties written by [`sync_stack`].
fn release_child(style: &mut Style) {
    style.margin.right = LengthPercentageAuto::length(0.0);
    style.margin.bottom = LengthPercentageAuto::length(0.0);
    style.flex_grow = 0.0;
    style.flex_basis = Dimension::auto();
}

/// Returns `base` turned into a scroll viewport with `insets` as padding.
#[must_use]
pub fn viewport_style(insets: Insets, base: &Style) -> Style {
    let mut style = base.clone();
    style.display = Display::Flex;
    style.flex_direction = FlexDirection::Column;
    style.overflow = taffy::Point {
        x: Overflow::Hidden,
        y: Overflow::Scroll,
    };
    style.padding = taffy::Rect {
        left: LengthPercentage::length(to_f32(insets.x0)),
        right: LengthPercentage::length(to_f32(insets.x1)),
        top: LengthPercentage::length(to_f32(insets.y0)),
        bottom: LengthPercentage::length(to_f32(insets.y1)),
    };
    style
}

/// Returns `base` placed inside a scroll viewport according to `sizing`.
#[must_use]
pub fn content_style(sizing: Sizing, base: &Style) -> Style {
    let mut style = base.clone();
    style.align_self = Some(match sizing {
        Sizing::Fill => AlignSelf::Stretch,
        Sizing::Natural(HorizontalAlign::Left) => AlignSelf::FlexStart,
        Sizing::Natural(HorizontalAlign::Center) => AlignSelf::Center,
        Sizing::Natural(HorizontalAlign::Right) => AlignSelf::FlexEnd,
    });
    style.flex_shrink = 0.0;
    style
}

/// Size of a Taffy layout as a Kurbo size.
///
/// ```rust
/// use taffy::prelude::Layout;
/// use understory_stack_taffy::layout_size;
/// use kurbo::Size;
///
/// let mut layout = Layout::new();
/// layout.size.width = 20.0;
/// layout.size.height = 30.0;
/// assert_eq!(layout_size(&layout), Size::new(20.0, 30.0));
/// ```
#[must_use]
pub fn layout_size(layout: &Layout) -> Size {
    Size::new(f64::from(layout.size.width), f64::from(layout.size.height))
}

/// The pair of Taffy nodes that stands in for a scroll stack.
///
/// `viewport` is the scrolling frame; `content` is the stack node, its only child.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollStackNodes {
    /// The scrolling frame.
    pub viewport: NodeId,
    /// The stack node inside the frame.
    pub content: NodeId,
}

impl ScrollStackNodes {
    /// Creates the viewport and content nodes.
    ///
    /// `viewport_base` supplies everything the adapter does not manage, typically the
    /// viewport's size or its placement in a parent.
    pub fn new<NodeContext>(
        taffy: &mut TaffyTree<NodeContext>,
        viewport_base: Style,
    ) -> Result<Self, TaffyError> {
        let content = taffy.new_leaf(Style::default())?;
        let viewport = taffy.new_with_children(viewport_base, &[content])?;
        Ok(Self { viewport, content })
    }

    /// Mirrors `list` onto the viewport, content, and child nodes.
    pub fn sync<NodeContext, C, H>(
        &self,
        taffy: &mut TaffyTree<NodeContext>,
        list: &ScrollStack<C, H>,
    ) -> Result<(), TaffyError>
    where
        C: ArrangedChildren<Child = NodeId>,
        H: ConstraintHost,
    {
        let viewport = viewport_style(list.content_insets(), taffy.style(self.viewport)?);
        taffy.set_style(self.viewport, viewport)?;
        taffy.set_children(self.viewport, &[self.content])?;

        let content = content_style(list.sizing(), taffy.style(self.content)?);
        taffy.set_style(self.content, content)?;
        sync_stack(taffy, self.content, list.stack())
    }

    /// Feeds the computed viewport and content sizes back into `list`.
    ///
    /// Call after `compute_layout`, so that scroll clamping sees the real extents.
    pub fn measure<NodeContext, C, H>(
        &self,
        taffy: &TaffyTree<NodeContext>,
        list: &mut ScrollStack<C, H>,
    ) -> Result<(), TaffyError> {
        list.set_viewport_size(layout_size(taffy.layout(self.viewport)?));
        list.set_content_size(layout_size(taffy.layout(self.content)?));
        Ok(())
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Taffy lays out in f32; UI spacing and insets fit comfortably"
)]
fn to_f32(value: f64) -> f32 {
    value as f32
}
