// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Insets, Size};

/// Vertical scroll position of the stack inside its viewport.
///
/// The scrollable extent is the content height plus the vertical insets. The offset is
/// kept in `[0, max_offset]` whenever any input changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollState {
    viewport: Size,
    content: Size,
    insets: Insets,
    offset: f64,
}

impl Default for ScrollState {
    fn default() -> Self {
        Self {
            viewport: Size::ZERO,
            content: Size::ZERO,
            insets: Insets::ZERO,
            offset: 0.0,
        }
    }
}

impl ScrollState {
    /// Size of the visible viewport.
    #[must_use]
    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Measured size of the stack.
    #[must_use]
    pub fn content_size(&self) -> Size {
        self.content
    }

    /// Current vertical offset.
    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    /// Largest reachable offset; zero when everything fits.
    #[must_use]
    pub fn max_offset(&self) -> f64 {
        let extent = self.content.height + self.insets.y0 + self.insets.y1;
        (extent - self.viewport.height).max(0.0)
    }

    /// Sets the viewport size and re-clamps the offset.
    pub fn set_viewport_size(&mut self, size: Size) {
        self.viewport = size;
        self.clamp();
    }

    /// Sets the measured stack size and re-clamps the offset.
    pub fn set_content_size(&mut self, size: Size) {
        self.content = size;
        self.clamp();
    }

    pub(crate) fn set_insets(&mut self, insets: Insets) {
        self.insets = insets;
        self.clamp();
    }

    /// Scrolls to `offset`, clamped into `[0, max_offset]`.
    pub fn scroll_to(&mut self, offset: f64) {
        self.offset = offset;
        self.clamp();
    }

    /// Scrolls by `delta`, clamped.
    pub fn scroll_by(&mut self, delta: f64) {
        self.scroll_to(self.offset + delta);
    }

    /// Returns `true` if the offset is at the end of the content.
    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.max_offset() - self.offset <= f64::EPSILON
    }

    fn clamp(&mut self) {
        self.offset = self.offset.clamp(0.0, self.max_offset());
    }
}
