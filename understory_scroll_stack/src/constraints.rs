// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative viewport ↔ content constraints.
//!
//! A [`ScrollStack`](crate::ScrollStack) does not solve layout. It describes how its
//! stack relates to the viewport as a small set of linear constraints, in the style of
//! anchor-based constraint systems, and hands that set to a [`ConstraintHost`] which
//! owns the actual solver.

use alloc::vec::Vec;

use kurbo::Insets;

use crate::sizing::{HorizontalAlign, Sizing};

/// A participant in the scroll stack's constraints.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Item {
    /// The visible frame of the scroll viewport.
    Viewport,
    /// The scrollable content area of the viewport (its size is the scrollable extent).
    ContentArea,
    /// The stack itself.
    Content,
}

/// An edge, extent, or center line of an [`Item`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// Left edge.
    Left,
    /// Right edge.
    Right,
    /// Top edge.
    Top,
    /// Bottom edge.
    Bottom,
    /// Horizontal extent.
    Width,
    /// Vertical center line.
    CenterX,
}

/// Relation between the two sides of a [`Constraint`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `lhs == rhs`
    Equal,
    /// `lhs <= rhs`
    LessOrEqual,
    /// `lhs >= rhs`
    GreaterOrEqual,
}

/// `item.attribute <relation> target.target_attribute + constant`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraint {
    /// Constrained item.
    pub item: Item,
    /// Constrained attribute of `item`.
    pub attribute: Attribute,
    /// Relation between both sides.
    pub relation: Relation,
    /// Reference item.
    pub target: Item,
    /// Reference attribute of `target`.
    pub target_attribute: Attribute,
    /// Offset added to the reference side.
    pub constant: f64,
}

impl Constraint {
    const fn new(
        (item, attribute): (Item, Attribute),
        relation: Relation,
        (target, target_attribute): (Item, Attribute),
        constant: f64,
    ) -> Self {
        Self {
            item,
            attribute,
            relation,
            target,
            target_attribute,
            constant,
        }
    }
}

/// An ordered set of constraints that is activated and deactivated as a unit.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConstraintSet {
    constraints: Vec<Constraint>,
}

impl ConstraintSet {
    /// Number of constraints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Constraints in derivation order.
    #[must_use]
    pub fn as_slice(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Iterates over the constraints.
    pub fn iter(&self) -> core::slice::Iter<'_, Constraint> {
        self.constraints.iter()
    }

    /// Returns `true` if an equal constraint is part of the set.
    #[must_use]
    pub fn contains(&self, constraint: &Constraint) -> bool {
        self.constraints.contains(constraint)
    }
}

impl<'a> IntoIterator for &'a ConstraintSet {
    type Item = &'a Constraint;
    type IntoIter = core::slice::Iter<'a, Constraint>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// The layout system that owns constraint solving.
///
/// The scroll stack calls [`deactivate`](Self::deactivate) with the previous set before
/// calling [`activate`](Self::activate) with its replacement.
pub trait ConstraintHost {
    /// Installs `set` into the solver.
    fn activate(&mut self, set: &ConstraintSet);

    /// Removes a previously activated `set` from the solver.
    fn deactivate(&mut self, set: &ConstraintSet);
}

/// Hosts that do not consume constraints (for example when layout is driven some other way).
impl ConstraintHost for () {
    fn activate(&mut self, _set: &ConstraintSet) {}

    fn deactivate(&mut self, _set: &ConstraintSet) {}
}

/// Derives the constraints tying the stack to a vertically scrolling viewport.
///
/// The result depends only on `sizing` and `insets`:
///
/// - The content area is as wide as the viewport, so there is no horizontal scrolling.
/// - The stack's top and bottom are pinned to the content area, inset by `insets.y0`
///   and `insets.y1`; the stack's height therefore drives the scrollable extent.
/// - [`Sizing::Fill`] pins both horizontal edges inside the insets.
/// - [`Sizing::Natural`] keeps both edges inside the insets and adds one alignment
///   constraint (left edge, center line, or right edge).
///
/// ```rust
/// use kurbo::Insets;
/// use understory_scroll_stack::{
///     Attribute, HorizontalAlign, Item, Sizing, derive_constraints,
/// };
///
/// let set = derive_constraints(Sizing::Natural(HorizontalAlign::Center), Insets::uniform(8.0));
/// let center = set
///     .iter()
///     .find(|c| c.item == Item::Content && c.attribute == Attribute::CenterX)
///     .unwrap();
/// assert_eq!(center.constant, 0.0);
/// ```
#[must_use]
pub fn derive_constraints(sizing: Sizing, insets: Insets) -> ConstraintSet {
    use Attribute::{Bottom, CenterX, Left, Right, Top, Width};
    use Item::{Content, ContentArea, Viewport};
    use Relation::{Equal, GreaterOrEqual, LessOrEqual};

    let mut constraints = Vec::with_capacity(6);
    constraints.push(Constraint::new(
        (ContentArea, Width),
        Equal,
        (Viewport, Width),
        0.0,
    ));
    constraints.push(Constraint::new(
        (Content, Top),
        Equal,
        (ContentArea, Top),
        insets.y0,
    ));
    constraints.push(Constraint::new(
        (Content, Bottom),
        Equal,
        (ContentArea, Bottom),
        -insets.y1,
    ));

    match sizing {
        Sizing::Fill => {
            constraints.push(Constraint::new(
                (Content, Left),
                Equal,
                (ContentArea, Left),
                insets.x0,
            ));
            constraints.push(Constraint::new(
                (Content, Right),
                Equal,
                (ContentArea, Right),
                -insets.x1,
            ));
        }
        Sizing::Natural(align) => {
            constraints.push(Constraint::new(
                (Content, Left),
                GreaterOrEqual,
                (ContentArea, Left),
                insets.x0,
            ));
            constraints.push(Constraint::new(
                (Content, Right),
                LessOrEqual,
                (ContentArea, Right),
                -insets.x1,
            ));
            constraints.push(match align {
                HorizontalAlign::Left => {
                    Constraint::new((Content, Left), Equal, (ContentArea, Left), insets.x0)
                }
                HorizontalAlign::Center => Constraint::new(
                    (Content, CenterX),
                    Equal,
                    (ContentArea, CenterX),
                    (insets.x0 - insets.x1) / 2.0,
                ),
                HorizontalAlign::Right => {
                    Constraint::new((Content, Right), Equal, (ContentArea, Right), -insets.x1)
                }
            });
        }
    }

    ConstraintSet { constraints }
}
