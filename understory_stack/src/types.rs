// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public configuration types: axis, distribution, alignment, and gap requests.

/// Main axis along which children are arranged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Children are laid out left to right.
    Horizontal,
    /// Children are laid out top to bottom.
    #[default]
    Vertical,
}

/// How children share the extent of the stack along its main axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Distribution {
    /// Children keep their own sizes and are packed from the start.
    #[default]
    Fill,
    /// Every child gets the same main-axis extent.
    FillEqually,
    /// Leftover space is spread evenly between children.
    EqualSpacing,
    /// Leftover space is spread so that child centers are evenly spaced.
    EqualCentering,
}

/// How children are placed along the cross axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Alignment {
    /// Children stretch to the cross-axis extent of the stack.
    #[default]
    Fill,
    /// Children hug the leading edge (left or top).
    Leading,
    /// Children are centered on the cross axis.
    Center,
    /// Children hug the trailing edge (right or bottom).
    Trailing,
    /// Children are aligned on their first text baseline.
    FirstBaseline,
}

/// Collection-wide settings of a stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackConfig {
    /// Main axis.
    pub axis: Axis,
    /// Default spacing, used for every gap without a custom override.
    pub spacing: f64,
    /// Main-axis distribution.
    pub distribution: Distribution,
    /// Cross-axis alignment.
    pub alignment: Alignment,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Vertical,
            spacing: 0.0,
            distribution: Distribution::Fill,
            alignment: Alignment::Fill,
        }
    }
}

impl StackConfig {
    /// Returns a copy of this config with a different default spacing.
    #[must_use]
    pub const fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Returns a copy of this config with a different axis.
    #[must_use]
    pub const fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }
}

/// Spacing requested around a child that is being inserted or moved.
///
/// `prev` is the gap between the child and whatever ends up immediately before it;
/// `next` is the gap after the child. `None` means "use the default spacing": any
/// custom override on that gap is cleared, so the gap tracks later changes to the
/// stack's default spacing.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Gaps {
    /// Gap between the preceding child and the inserted child.
    pub prev: Option<f64>,
    /// Gap after the inserted child.
    pub next: Option<f64>,
}

impl Gaps {
    /// Default spacing on both sides.
    pub const DEFAULT: Self = Self {
        prev: None,
        next: None,
    };

    /// Explicit spacing on both sides.
    #[must_use]
    pub const fn new(prev: f64, next: f64) -> Self {
        Self {
            prev: Some(prev),
            next: Some(next),
        }
    }

    /// Explicit spacing before the child only.
    #[must_use]
    pub const fn prev(prev: f64) -> Self {
        Self {
            prev: Some(prev),
            next: None,
        }
    }

    /// Explicit spacing after the child only.
    #[must_use]
    pub const fn next(next: f64) -> Self {
        Self {
            prev: None,
            next: Some(next),
        }
    }
}
