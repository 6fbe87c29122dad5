//! Smooth scrolling system
//!
//! Animates a scroll surface toward a target offset, one independent run per
//! axis, using an ease-in-out quadratic curve.
//!
//! # Architecture
//!
//! ## L4 Atomic Layer
//! - `axis` - Horizontal/vertical axis selector
//! - `easing` - Pure ease-in-out quadratic curve
//! - `timing` - Progress, duration and offset arithmetic
//! - `config` - Duration helpers over [`ScrollConfig`](crate::ScrollConfig)
//! - `timer` - Deferred-delay primitive the tick loop suspends on
//!
//! ## L3 Molecular Layer
//! - `animation` - Animator combining atoms with a scroll surface
//!
//! # Usage
//!
//! ```ignore
//! use smoothscroll_core::{Axis, ScrollAnimator, ScrollConfig, VirtualSurface};
//!
//! let surface = VirtualSurface::new((800.0, 600.0), (800.0, 5000.0));
//! let animator = ScrollAnimator::new(&surface, ScrollConfig::default());
//!
//! // Animate vertically with the derived duration
//! animator.animate_y(1200.0, None).await;
//!
//! // Jump instantly
//! animator.animate_to(0.0, 0.0, Some(0)).await;
//! ```

// L4 Atomic Layer
pub mod axis;
pub mod config;
pub mod easing;
pub mod timer;
pub mod timing;

// L3 Molecular Layer
pub mod animation;

// Re-exports for convenient access
pub use animation::ScrollAnimator;
pub use axis::Axis;
pub use config::ScrollConfigExt;
pub use easing::ease_in_out_quad;
pub use timer::{Timer, TokioTimer};
