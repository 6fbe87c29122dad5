//! In-memory scroll container
//!
//! Behaves like a browser element for the parts the animator uses: offsets
//! are clamped to `[0, scroll_extent - client_extent]` and every write is
//! recorded for inspection.

use std::cell::{Cell, RefCell};

use serde::Serialize;

use super::{ElementGeometry, ScrollSurface};
use crate::scroll::Axis;

/// One recorded offset write
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScrollWrite {
    pub axis: Axis,
    /// Offset requested by the caller
    pub requested: f64,
    /// Offset after clamping to the scrollable range
    pub applied: f64,
}

#[derive(Debug)]
pub struct VirtualSurface {
    client: (f64, f64),
    content: (f64, f64),
    offset_x: Cell<f64>,
    offset_y: Cell<f64>,
    smooth: Cell<bool>,
    writes: RefCell<Vec<ScrollWrite>>,
}

impl VirtualSurface {
    /// Create a surface with a `(width, height)` viewport over
    /// `(width, height)` of content
    pub fn new(client: (f64, f64), content: (f64, f64)) -> Self {
        Self {
            client,
            content,
            offset_x: Cell::new(0.0),
            offset_y: Cell::new(0.0),
            smooth: Cell::new(false),
            writes: RefCell::new(Vec::new()),
        }
    }

    /// Start scrolled to `(x, y)` without recording a write
    pub fn with_offset(self, x: f64, y: f64) -> Self {
        self.offset_x.set(self.clamp(Axis::X, x));
        self.offset_y.set(self.clamp(Axis::Y, y));
        self
    }

    /// Emulate `scroll-behavior: smooth` on the container
    pub fn set_native_smooth(&self, enabled: bool) {
        self.smooth.set(enabled);
    }

    /// Largest reachable offset along `axis`
    pub fn max_offset(&self, axis: Axis) -> f64 {
        (self.scroll_extent(axis) - self.client_extent(axis)).max(0.0)
    }

    /// All writes recorded so far
    pub fn writes(&self) -> Vec<ScrollWrite> {
        self.writes.borrow().clone()
    }

    /// Recorded writes along one axis
    pub fn writes_on(&self, axis: Axis) -> Vec<ScrollWrite> {
        self.writes
            .borrow()
            .iter()
            .filter(|w| w.axis == axis)
            .copied()
            .collect()
    }

    pub fn clear_writes(&self) {
        self.writes.borrow_mut().clear();
    }

    fn clamp(&self, axis: Axis, offset: f64) -> f64 {
        if offset.is_nan() {
            return 0.0;
        }
        offset.clamp(0.0, self.max_offset(axis))
    }

    fn cell(&self, axis: Axis) -> &Cell<f64> {
        match axis {
            Axis::X => &self.offset_x,
            Axis::Y => &self.offset_y,
        }
    }
}

impl ScrollSurface for VirtualSurface {
    fn scroll_offset(&self, axis: Axis) -> f64 {
        self.cell(axis).get()
    }

    fn set_scroll_offset(&self, axis: Axis, offset: f64) {
        let applied = self.clamp(axis, offset);
        self.cell(axis).set(applied);
        self.writes.borrow_mut().push(ScrollWrite {
            axis,
            requested: offset,
            applied,
        });
    }

    fn client_extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.client.0,
            Axis::Y => self.client.1,
        }
    }

    fn scroll_extent(&self, axis: Axis) -> f64 {
        // Content smaller than the viewport still fills it
        match axis {
            Axis::X => self.content.0.max(self.client.0),
            Axis::Y => self.content.1.max(self.client.1),
        }
    }

    fn native_smooth_scroll(&self) -> bool {
        self.smooth.get()
    }
}

/// Element box positioned relative to its container's content origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct VirtualElement {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl VirtualElement {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

impl ElementGeometry for VirtualElement {
    fn offset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.left,
            Axis::Y => self.top,
        }
    }

    fn size(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.width,
            Axis::Y => self.height,
        }
    }
}
