//! Scrollable surfaces and element geometry
//!
//! The animator never touches a concrete document. It reads and writes scroll
//! offsets through [`ScrollSurface`] and measures targets through
//! [`ElementGeometry`].
//!
//! - `virtual_doc` - In-memory document used by the CLI and tests
//! - `web` - `web-sys` backed element and page-viewport surfaces (feature `web`)

use std::rc::Rc;

use crate::scroll::Axis;

pub mod virtual_doc;
#[cfg(feature = "web")]
pub mod web;

pub use virtual_doc::{ScrollWrite, VirtualElement, VirtualSurface};

/// A scroll container whose offset the animator drives
///
/// Surfaces are shared and externally owned, so every method takes `&self`.
pub trait ScrollSurface {
    /// Current scroll offset along `axis`
    fn scroll_offset(&self, axis: Axis) -> f64;

    /// Move the scroll offset along `axis`, leaving the other axis alone
    fn set_scroll_offset(&self, axis: Axis, offset: f64);

    /// Visible extent of the container (client width / height)
    fn client_extent(&self, axis: Axis) -> f64;

    /// Total scrollable extent of the content (scroll width / height)
    fn scroll_extent(&self, axis: Axis) -> f64;

    /// Whether the platform animates offset changes itself
    /// (`scroll-behavior: smooth`)
    fn native_smooth_scroll(&self) -> bool {
        false
    }
}

/// Position and size of an element inside a scroll container
pub trait ElementGeometry {
    /// Offset of the element's near edge from the container origin
    fn offset(&self, axis: Axis) -> f64;

    /// Rendered size of the element (bounding box width / height)
    fn size(&self, axis: Axis) -> f64;
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for &S {
    fn scroll_offset(&self, axis: Axis) -> f64 {
        (**self).scroll_offset(axis)
    }

    fn set_scroll_offset(&self, axis: Axis, offset: f64) {
        (**self).set_scroll_offset(axis, offset)
    }

    fn client_extent(&self, axis: Axis) -> f64 {
        (**self).client_extent(axis)
    }

    fn scroll_extent(&self, axis: Axis) -> f64 {
        (**self).scroll_extent(axis)
    }

    fn native_smooth_scroll(&self) -> bool {
        (**self).native_smooth_scroll()
    }
}

impl<S: ScrollSurface + ?Sized> ScrollSurface for Rc<S> {
    fn scroll_offset(&self, axis: Axis) -> f64 {
        (**self).scroll_offset(axis)
    }

    fn set_scroll_offset(&self, axis: Axis, offset: f64) {
        (**self).set_scroll_offset(axis, offset)
    }

    fn client_extent(&self, axis: Axis) -> f64 {
        (**self).client_extent(axis)
    }

    fn scroll_extent(&self, axis: Axis) -> f64 {
        (**self).scroll_extent(axis)
    }

    fn native_smooth_scroll(&self) -> bool {
        (**self).native_smooth_scroll()
    }
}
