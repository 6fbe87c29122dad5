use std::time::Instant;

use anyhow::Result;

use smoothscroll_core::{AppConfig, ScrollAnimator};

use super::Scene;

pub async fn run(config: &AppConfig, scene: &Scene, x: f64, y: f64, duration: Option<i64>) -> Result<()> {
    let surface = scene.surface();
    let animator = ScrollAnimator::new(&surface, config.scroll.clone());

    println!("Scrolling to ({}, {})...\n", x, y);

    let started = Instant::now();
    animator.animate_to(x, y, duration).await;

    scene.report(&surface, started)
}
