pub mod config;
pub mod error;
pub mod scroll;
pub mod surface;

pub use config::{AppConfig, ScrollConfig};
pub use error::{Error, Result};
pub use scroll::{Axis, ScrollAnimator, Timer, TokioTimer};
pub use surface::{ElementGeometry, ScrollSurface, VirtualElement, VirtualSurface};
