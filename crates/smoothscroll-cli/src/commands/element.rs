use std::time::Instant;

use anyhow::Result;

use smoothscroll_core::{AppConfig, Axis, ScrollAnimator, ScrollSurface, Timer, VirtualElement};

use super::{AxisArg, ElementMode, Scene};

pub async fn run(
    config: &AppConfig,
    scene: &Scene,
    element: &VirtualElement,
    mode: ElementMode,
    axis: AxisArg,
    duration: Option<i64>,
    offset: Option<f64>,
) -> Result<()> {
    let surface = scene.surface();
    let animator = ScrollAnimator::new(&surface, config.scroll.clone());

    println!(
        "Element at ({}, {}) sized {}x{}, mode {:?}\n",
        element.left, element.top, element.width, element.height, mode
    );

    let started = Instant::now();
    match axis {
        AxisArg::Both => {
            tokio::join!(
                apply(&animator, Axis::X, element, mode, duration, offset),
                apply(&animator, Axis::Y, element, mode, duration, offset),
            );
        }
        single => {
            for &axis in single.axes() {
                apply(&animator, axis, element, mode, duration, offset).await;
            }
        }
    }

    scene.report(&surface, started)
}

async fn apply<S, T>(
    animator: &ScrollAnimator<S, T>,
    axis: Axis,
    element: &VirtualElement,
    mode: ElementMode,
    duration: Option<i64>,
    offset: Option<f64>,
) where
    S: ScrollSurface,
    T: Timer,
{
    match mode {
        ElementMode::Align => animator.animate_to_element(axis, element, duration).await,
        ElementMode::IntoView => animator.bring_into_view(axis, element, duration).await,
        ElementMode::Center => {
            animator
                .animate_to_center_of_axis(axis, element, duration, offset)
                .await
        }
    }
}
