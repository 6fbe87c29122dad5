//! Browser surfaces over `web-sys`
//!
//! Two containers exist in a page: an arbitrary scrollable element, and the
//! document body, whose scroll position lives on the window viewport.

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Element, HtmlElement, Window};

use super::{ElementGeometry, ScrollSurface};
use crate::scroll::{Axis, Timer};
use crate::{Error, Result};

fn window() -> Result<Window> {
    web_sys::window().ok_or_else(|| Error::Web("no global window".to_string()))
}

/// `getComputedStyle(el)['scroll-behavior'] === 'smooth'`, when supported
fn prefers_smooth(window: &Window, element: &Element) -> bool {
    let supported = js_sys::Reflect::has(window, &JsValue::from_str("getComputedStyle")).unwrap_or(false);
    if !supported {
        return false;
    }
    match window.get_computed_style(element) {
        Ok(Some(style)) => style
            .get_property_value("scroll-behavior")
            .map(|value| value == "smooth")
            .unwrap_or(false),
        Ok(None) => false,
        Err(e) => {
            warn!("getComputedStyle failed: {:?}", e);
            false
        }
    }
}

/// A scrollable element (`overflow: auto` container)
#[derive(Debug, Clone)]
pub struct ElementSurface {
    window: Window,
    element: Element,
}

impl ElementSurface {
    pub fn new(element: Element) -> Result<Self> {
        Ok(Self {
            window: window()?,
            element,
        })
    }
}

impl ScrollSurface for ElementSurface {
    fn scroll_offset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.element.scroll_left() as f64,
            Axis::Y => self.element.scroll_top() as f64,
        }
    }

    fn set_scroll_offset(&self, axis: Axis, offset: f64) {
        let offset = offset as i32;
        match axis {
            Axis::X => self.element.set_scroll_left(offset),
            Axis::Y => self.element.set_scroll_top(offset),
        }
    }

    fn client_extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.element.client_width() as f64,
            Axis::Y => self.element.client_height() as f64,
        }
    }

    fn scroll_extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.element.scroll_width() as f64,
            Axis::Y => self.element.scroll_height() as f64,
        }
    }

    fn native_smooth_scroll(&self) -> bool {
        prefers_smooth(&self.window, &self.element)
    }
}

/// The document body, scrolled through the window viewport
#[derive(Debug, Clone)]
pub struct PageSurface {
    window: Window,
    body: HtmlElement,
}

impl PageSurface {
    pub fn new() -> Result<Self> {
        let window = window()?;
        let body = window
            .document()
            .and_then(|document| document.body())
            .ok_or_else(|| Error::Web("document has no body".to_string()))?;
        Ok(Self { window, body })
    }

    fn viewport(&self, axis: Axis) -> std::result::Result<f64, JsValue> {
        match axis {
            Axis::X => self.window.scroll_x(),
            Axis::Y => self.window.scroll_y(),
        }
    }
}

impl ScrollSurface for PageSurface {
    fn scroll_offset(&self, axis: Axis) -> f64 {
        self.viewport(axis).unwrap_or_else(|e| {
            warn!(%axis, "Failed to read window scroll offset: {:?}", e);
            0.0
        })
    }

    fn set_scroll_offset(&self, axis: Axis, offset: f64) {
        // window.scrollTo sets both axes, so carry the untouched one over
        let (x, y) = match axis {
            Axis::X => (offset, self.scroll_offset(Axis::Y)),
            Axis::Y => (self.scroll_offset(Axis::X), offset),
        };
        self.window.scroll_to_with_x_and_y(x, y);
    }

    fn client_extent(&self, axis: Axis) -> f64 {
        let extent = match axis {
            Axis::X => self.window.inner_width(),
            Axis::Y => self.window.inner_height(),
        };
        match extent {
            Ok(value) => value.as_f64().unwrap_or(0.0),
            Err(e) => {
                warn!(%axis, "Failed to read window extent: {:?}", e);
                0.0
            }
        }
    }

    fn scroll_extent(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.body.scroll_width() as f64,
            Axis::Y => self.body.scroll_height() as f64,
        }
    }

    fn native_smooth_scroll(&self) -> bool {
        prefers_smooth(&self.window, &self.body)
    }
}

/// Geometry of a rendered HTML element
#[derive(Debug, Clone)]
pub struct HtmlElementGeometry(pub HtmlElement);

impl ElementGeometry for HtmlElementGeometry {
    fn offset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.0.offset_left() as f64,
            Axis::Y => self.0.offset_top() as f64,
        }
    }

    fn size(&self, axis: Axis) -> f64 {
        let rect = self.0.get_bounding_client_rect();
        match axis {
            Axis::X => rect.width(),
            Axis::Y => rect.height(),
        }
    }
}

/// Longest delay `setTimeout` honors; browsers fire longer delays immediately
const MAX_TIMEOUT_MS: i32 = i32::MAX;

/// Timer over `setTimeout` and `performance.now()`
#[derive(Debug, Clone)]
pub struct WebTimer {
    window: Window,
}

impl WebTimer {
    pub fn new() -> Result<Self> {
        Ok(Self { window: window()? })
    }
}

#[async_trait(?Send)]
impl Timer for WebTimer {
    fn now_ms(&self) -> f64 {
        match self.window.performance() {
            Some(performance) => performance.now(),
            None => js_sys::Date::now(),
        }
    }

    async fn sleep(&self, duration: Duration) {
        let ms = match i32::try_from(duration.as_millis()) {
            Ok(ms) => ms,
            Err(_) => {
                warn!(
                    requested_ms = duration.as_millis() as u64,
                    max_ms = MAX_TIMEOUT_MS,
                    "Sleep exceeds setTimeout range, clamping"
                );
                MAX_TIMEOUT_MS
            }
        };
        let window = self.window.clone();
        let promise = js_sys::Promise::new(&mut |resolve, _reject| {
            if let Err(e) = window.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms) {
                warn!("setTimeout failed: {:?}", e);
                // Resolve now rather than leave the run hanging
                let _ = resolve.call0(&JsValue::NULL);
            }
        });
        if let Err(e) = JsFuture::from(promise).await {
            warn!("Timer promise rejected: {:?}", e);
        }
    }
}
