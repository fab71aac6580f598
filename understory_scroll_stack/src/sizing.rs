// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Horizontal placement of naturally sized content inside the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlign {
    /// Content hugs the left inset.
    #[default]
    Left,
    /// Content is centered between the insets.
    Center,
    /// Content hugs the right inset.
    Right,
}

/// How the stack is sized against the width of the viewport.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Sizing {
    /// The stack spans the viewport width minus the horizontal insets.
    #[default]
    Fill,
    /// The stack takes its intrinsic width, never wider than the inset viewport,
    /// and is placed according to the alignment.
    Natural(HorizontalAlign),
}
