//! L3 Molecular Layer: Scroll animation controller
//!
//! Combines easing, timing and a timer to drive a [`ScrollSurface`]. Each
//! axis owns one run slot; starting a run cancels whatever the slot held.

use std::cell::{Cell, RefCell};

use tokio::sync::watch;
use tracing::{debug, trace};

use super::axis::Axis;
use super::config::{ScrollConfig, ScrollConfigExt};
use super::easing::ease_in_out_quad;
use super::timer::{Timer, TokioTimer};
use super::timing::{eased_offset, is_instant, progress, resolve_duration};
use crate::surface::{ElementGeometry, ScrollSurface};
use crate::{Error, Result};

/// In-flight (or cooling down) run on one axis
#[derive(Debug)]
struct RunSlot {
    /// Identifies the run that owns the slot
    id: u64,
    /// Flipped to `true` (or dropped) to cancel the run
    cancel: watch::Sender<bool>,
    /// Set when the run finished on its own; the slot expires after the cooldown
    settled_at: Option<f64>,
}

/// Releases the slot of a run whose future was dropped before settling
struct RunGuard<'a, S: ScrollSurface, T: Timer> {
    animator: &'a ScrollAnimator<S, T>,
    axis: Axis,
    id: u64,
    settled: bool,
}

impl<S: ScrollSurface, T: Timer> RunGuard<'_, S, T> {
    fn settle(mut self) {
        self.settled = true;
        self.animator.settle(self.axis, self.id);
    }
}

impl<S: ScrollSurface, T: Timer> Drop for RunGuard<'_, S, T> {
    fn drop(&mut self) {
        if !self.settled {
            self.animator.release(self.axis, self.id);
        }
    }
}

/// Smooth-scroll animator for one scroll container
///
/// All methods take `&self`: the animator is meant to be shared by the
/// callers of a single event loop, and runs on both axes may be in flight at
/// the same time. Every animation returns a future that completes once the
/// run settles or is cancelled; it never fails.
pub struct ScrollAnimator<S, T = TokioTimer> {
    surface: S,
    timer: T,
    config: RefCell<ScrollConfig>,
    frozen: Cell<bool>,
    next_run: Cell<u64>,
    run_x: RefCell<Option<RunSlot>>,
    run_y: RefCell<Option<RunSlot>>,
}

impl<S: ScrollSurface> ScrollAnimator<S, TokioTimer> {
    /// Create an animator driven by `tokio::time`
    pub fn new(surface: S, config: ScrollConfig) -> Self {
        Self::with_timer(surface, TokioTimer::new(), config)
    }

    /// Create with default configuration (999 ms, 9 px)
    pub fn with_defaults(surface: S) -> Self {
        Self::new(surface, ScrollConfig::default())
    }
}

impl<S: ScrollSurface, T: Timer> ScrollAnimator<S, T> {
    /// Create an animator driven by a custom timer
    pub fn with_timer(surface: S, timer: T, config: ScrollConfig) -> Self {
        Self {
            surface,
            timer,
            config: RefCell::new(config),
            frozen: Cell::new(false),
            next_run: Cell::new(0),
            run_x: RefCell::new(None),
            run_y: RefCell::new(None),
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Snapshot of the current configuration
    pub fn config(&self) -> ScrollConfig {
        self.config.borrow().clone()
    }

    /// Default duration in milliseconds
    pub fn duration_ms(&self) -> i64 {
        self.config.borrow().duration_ms
    }

    /// Edge offset in pixels
    pub fn edge_offset(&self) -> f64 {
        self.config.borrow().edge_offset_px()
    }

    /// Current scroll offset of the container
    pub fn scroll_offset(&self, axis: Axis) -> f64 {
        self.surface.scroll_offset(axis)
    }

    /// Visible extent of the container
    pub fn client_extent(&self, axis: Axis) -> f64 {
        self.surface.client_extent(axis)
    }

    /// Make the animator immutable; later setter calls fail with [`Error::Frozen`]
    pub fn freeze(&self) -> &Self {
        if !self.frozen.replace(true) {
            debug!("Scroll animator frozen");
        }
        self
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen.get()
    }

    /// Change the default duration
    pub fn set_duration(&self, duration_ms: i64) -> Result<&Self> {
        self.ensure_mutable("duration")?;
        self.config.borrow_mut().duration_ms = duration_ms;
        Ok(self)
    }

    /// Change the edge offset
    pub fn set_edge_offset(&self, edge_offset: i64) -> Result<&Self> {
        self.ensure_mutable("edge offset")?;
        self.config.borrow_mut().edge_offset = edge_offset;
        Ok(self)
    }

    fn ensure_mutable(&self, field: &'static str) -> Result<()> {
        if self.frozen.get() {
            return Err(Error::Frozen(field));
        }
        Ok(())
    }

    /// Whether `axis` has a run in flight or still cooling down
    pub fn is_animating(&self, axis: Axis) -> bool {
        let cooldown_ms = self.config.borrow().cooldown().as_secs_f64() * 1000.0;
        let mut slot = self.slot(axis).borrow_mut();
        let busy = match slot.as_ref() {
            None => false,
            Some(run) => match run.settled_at {
                None => true,
                Some(at) => self.timer.now_ms() - at < cooldown_ms,
            },
        };
        if !busy {
            *slot = None;
        }
        busy
    }

    /// Cancel the run on `axis`, if any
    pub fn stop(&self, axis: Axis) -> &Self {
        let run = self.slot(axis).borrow_mut().take();
        if let Some(run) = run {
            if run.settled_at.is_none() {
                debug!(%axis, run = run.id, "Stopping scroll animation");
            }
            // The receiver is gone once the run has returned
            let _ = run.cancel.send(true);
        }
        self
    }

    /// Cancel the runs on both axes
    pub fn stop_all(&self) -> &Self {
        self.stop(Axis::X).stop(Axis::Y)
    }

    /// Animate both axes concurrently; completes when both have settled
    pub async fn animate_to(&self, x: f64, y: f64, duration_ms: Option<i64>) {
        tokio::join!(
            self.animate_axis(Axis::X, x, duration_ms),
            self.animate_axis(Axis::Y, y, duration_ms),
        );
    }

    /// Animate the horizontal offset
    pub async fn animate_x(&self, target: f64, duration_ms: Option<i64>) {
        self.animate_axis(Axis::X, target, duration_ms).await
    }

    /// Animate the vertical offset
    pub async fn animate_y(&self, target: f64, duration_ms: Option<i64>) {
        self.animate_axis(Axis::Y, target, duration_ms).await
    }

    /// Animate one axis toward `target`
    ///
    /// `duration_ms` of `Some(0)` or less jumps instantly, as does a container
    /// with native smooth scrolling. `None` lasts one millisecond per pixel of
    /// travel, capped at the configured duration.
    pub async fn animate_axis(&self, axis: Axis, target: f64, duration_ms: Option<i64>) {
        self.stop(axis);
        let target = target.max(0.0);

        if is_instant(duration_ms) || self.surface.native_smooth_scroll() {
            debug!(%axis, to = target, "Jumping to scroll target");
            self.surface.set_scroll_offset(axis, target);
            return;
        }

        let config = self.config();
        let start = self.surface.scroll_offset(axis);
        let distance = target - start;
        let started_at = self.timer.now_ms();
        let duration = resolve_duration(duration_ms, distance, config.duration_ms);
        let tick = config.tick_interval();

        let (id, mut cancelled) = self.begin_run(axis);
        let guard = RunGuard {
            animator: self,
            axis,
            id,
            settled: false,
        };
        debug!(%axis, run = id, from = start, to = target, duration_ms = duration, "Starting scroll animation");

        loop {
            tokio::select! {
                biased;
                _ = cancelled.changed() => {
                    trace!(%axis, run = id, "Scroll animation cancelled");
                    return;
                }
                _ = self.timer.sleep(tick) => {}
            }
            if !self.is_current(axis, id) {
                return;
            }

            let p = progress(self.timer.now_ms() - started_at, duration);
            let offset = eased_offset(start, distance, ease_in_out_quad(p));
            self.surface.set_scroll_offset(axis, offset);
            trace!(%axis, run = id, offset, progress = p, "Scroll tick");

            let has_room = self.surface.client_extent(axis) + offset < self.surface.scroll_extent(axis);
            if p >= 1.0 || !has_room {
                break;
            }
        }

        guard.settle();
        debug!(%axis, run = id, offset = self.surface.scroll_offset(axis), "Scroll animation settled");
    }

    /// Animate so the element's near edge sits `edge_offset` inside the container
    pub async fn animate_to_element<E>(&self, axis: Axis, element: &E, duration_ms: Option<i64>)
    where
        E: ElementGeometry + ?Sized,
    {
        let target = self.near_edge_target(axis, element);
        self.animate_axis(axis, target, duration_ms).await
    }

    /// Animate only as far as needed to make the element fully visible
    ///
    /// An element taller (or wider) than the container is aligned on its
    /// near edge.
    pub async fn bring_into_view<E>(&self, axis: Axis, element: &E, duration_ms: Option<i64>)
    where
        E: ElementGeometry + ?Sized,
    {
        let size = element.size(axis);
        let far_edge = element.offset(axis) + size;
        let extent = self.surface.client_extent(axis);
        let current = self.surface.scroll_offset(axis);
        let edge = self.edge_offset();

        if self.near_edge_target(axis, element) < current || size + edge > extent {
            // Clipped at the near edge, or larger than the container
            self.animate_to_element(axis, element, duration_ms).await
        } else if far_edge + edge > current + extent {
            // Clipped at the far edge
            self.animate_axis(axis, far_edge - extent + edge, duration_ms).await
        } else {
            trace!(%axis, "Element already visible");
        }
    }

    /// Center the element on both axes
    ///
    /// `offset` shifts the point that gets centered; by default it is half
    /// the element's size, i.e. its midpoint.
    pub async fn animate_to_center_of<E>(&self, element: &E, duration_ms: Option<i64>, offset: Option<f64>)
    where
        E: ElementGeometry + ?Sized,
    {
        tokio::join!(
            self.animate_to_center_of_axis(Axis::X, element, duration_ms, offset),
            self.animate_to_center_of_axis(Axis::Y, element, duration_ms, offset),
        );
    }

    /// Center the element along one axis
    pub async fn animate_to_center_of_axis<E>(
        &self,
        axis: Axis,
        element: &E,
        duration_ms: Option<i64>,
        offset: Option<f64>,
    ) where
        E: ElementGeometry + ?Sized,
    {
        let offset = offset.unwrap_or_else(|| element.size(axis) / 2.0);
        let target = (element.offset(axis) - self.surface.client_extent(axis) / 2.0 + offset).max(0.0);
        self.animate_axis(axis, target, duration_ms).await
    }

    fn near_edge_target<E>(&self, axis: Axis, element: &E) -> f64
    where
        E: ElementGeometry + ?Sized,
    {
        (element.offset(axis) - self.edge_offset()).max(0.0)
    }

    fn slot(&self, axis: Axis) -> &RefCell<Option<RunSlot>> {
        match axis {
            Axis::X => &self.run_x,
            Axis::Y => &self.run_y,
        }
    }

    fn begin_run(&self, axis: Axis) -> (u64, watch::Receiver<bool>) {
        let id = self.next_run.get();
        self.next_run.set(id.wrapping_add(1));
        let (cancel, cancelled) = watch::channel(false);
        *self.slot(axis).borrow_mut() = Some(RunSlot {
            id,
            cancel,
            settled_at: None,
        });
        (id, cancelled)
    }

    fn is_current(&self, axis: Axis, id: u64) -> bool {
        matches!(
            self.slot(axis).borrow().as_ref(),
            Some(run) if run.id == id && run.settled_at.is_none()
        )
    }

    /// Clear the slot if it still belongs to the unsettled run `id`
    fn release(&self, axis: Axis, id: u64) {
        let mut slot = self.slot(axis).borrow_mut();
        if matches!(slot.as_ref(), Some(run) if run.id == id && run.settled_at.is_none()) {
            trace!(%axis, run = id, "Scroll animation dropped");
            *slot = None;
        }
    }

    fn settle(&self, axis: Axis, id: u64) {
        if let Some(run) = self.slot(axis).borrow_mut().as_mut() {
            if run.id == id {
                run.settled_at = Some(self.timer.now_ms());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;
    use std::time::Duration;

    use tokio::time::{sleep, timeout, Instant};

    use super::*;
    use crate::surface::{VirtualElement, VirtualSurface};

    fn page(content_height: f64) -> VirtualSurface {
        VirtualSurface::new((800.0, 600.0), (800.0, content_height))
    }

    fn offsets(surface: &VirtualSurface, axis: Axis) -> Vec<f64> {
        surface.writes_on(axis).iter().map(|w| w.applied).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_without_animation_is_noop() {
        let surface = page(5000.0);
        let animator = ScrollAnimator::with_defaults(&surface);

        animator.stop(Axis::X).stop(Axis::Y).stop_all();
        assert!(!animator.is_animating(Axis::X));
        assert!(!animator.is_animating(Axis::Y));
        assert!(surface.writes().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_duration_jumps_instantly() {
        let surface = page(5000.0);
        let animator = ScrollAnimator::with_defaults(&surface);

        let before = Instant::now();
        animator.animate_y(500.0, Some(0)).await;
        assert_eq!(Instant::now(), before);
        assert_eq!(offsets(&surface, Axis::Y), vec![500.0]);
        assert!(!animator.is_animating(Axis::Y));
    }

    #[tokio::test(start_paused = true)]
    async fn test_negative_duration_jumps_instantly() {
        let surface = page(5000.0);
        let animator = ScrollAnimator::with_defaults(&surface);

        let before = Instant::now();
        animator.animate_y(250.0, Some(-5)).await;
        assert_eq!(Instant::now(), before);
        assert_eq!(surface.scroll_offset(Axis::Y), 250.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_negative_target_is_clamped() {
        let surface = page(5000.0).with_offset(0.0, 300.0);
        let animator = ScrollAnimator::with_defaults(&surface);

        animator.animate_y(-50.0, Some(0)).await;
        let writes = surface.writes_on(Axis::Y);
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].requested, 0.0);

        animator.animate_y(-50.0, None).await;
        assert!(surface.writes_on(Axis::Y).iter().all(|w| w.requested >= 0.0));
    }

    #[tokio::test(start_paused = true)]
    async fn test_native_smooth_scroll_jumps() {
        let surface = page(5000.0);
        surface.set_native_smooth(true);
        let animator = ScrollAnimator::with_defaults(&surface);

        let before = Instant::now();
        animator.animate_y(1200.0, None).await;
        assert_eq!(Instant::now(), before);
        assert_eq!(offsets(&surface, Axis::Y), vec![1200.0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_forward_animation_is_monotonic() {
        let surface = page(5000.0);
        let animator = ScrollAnimator::with_defaults(&surface);

        animator.animate_y(1000.0, Some(1000)).await;

        let ys = offsets(&surface, Axis::Y);
        assert!(ys.len() > 50, "expected many ticks, got {}", ys.len());
        assert!(ys.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*ys.last().unwrap(), 1000.0);
        assert_eq!(surface.scroll_offset(Axis::Y), 1000.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backward_animation() {
        let surface = page(5000.0).with_offset(0.0, 800.0);
        let animator = ScrollAnimator::with_defaults(&surface);

        animator.animate_y(200.0, Some(300)).await;

        let ys = offsets(&surface, Axis::Y);
        assert!(ys.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(*ys.last().unwrap(), 200.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_derived_duration_follows_distance() {
        let surface = page(5000.0);
        let animator = ScrollAnimator::with_defaults(&surface);

        let before = Instant::now();
        animator.animate_y(100.0, None).await;
        let elapsed = before.elapsed();

        assert!(elapsed >= Duration::from_millis(100));
        assert!(elapsed < Duration::from_millis(130), "took {:?}", elapsed);
        assert_eq!(surface.scroll_offset(Axis::Y), 100.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_derived_duration_is_capped() {
        let surface = page(10_000.0);
        let animator = ScrollAnimator::new(
            &surface,
            ScrollConfig {
                duration_ms: 200,
                ..Default::default()
            },
        );

        let before = Instant::now();
        animator.animate_y(4000.0, None).await;

        assert!(before.elapsed() < Duration::from_millis(230));
        assert_eq!(surface.scroll_offset(Axis::Y), 4000.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_out_of_room() {
        // Only 400px of vertical travel available
        let surface = page(1000.0);
        let animator = ScrollAnimator::with_defaults(&surface);

        let before = Instant::now();
        animator.animate_y(1000.0, Some(1000)).await;

        assert!(before.elapsed() < Duration::from_millis(600), "took {:?}", before.elapsed());
        assert_eq!(surface.scroll_offset(Axis::Y), 400.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_horizontal_room_uses_width() {
        // 200px of horizontal travel, plenty vertically
        let surface = VirtualSurface::new((800.0, 600.0), (1000.0, 5000.0));
        let animator = ScrollAnimator::with_defaults(&surface);

        let before = Instant::now();
        animator.animate_x(1000.0, Some(1000)).await;

        assert!(before.elapsed() < Duration::from_millis(500), "took {:?}", before.elapsed());
        assert_eq!(surface.scroll_offset(Axis::X), 200.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_run_releases_axis() {
        let surface = page(5000.0);
        let animator = ScrollAnimator::with_defaults(&surface);

        let result = timeout(Duration::from_millis(50), animator.animate_y(3000.0, Some(1000))).await;
        assert!(result.is_err());
        assert!(!animator.is_animating(Axis::Y));

        sleep(Duration::from_millis(200)).await;
        assert!(!animator.is_animating(Axis::Y));

        // The axis is usable again
        animator.animate_y(100.0, Some(0)).await;
        assert_eq!(surface.scroll_offset(Axis::Y), 100.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shared_surface_through_rc() {
        let surface = Rc::new(page(5000.0));
        let animator = ScrollAnimator::with_defaults(Rc::clone(&surface));

        animator.animate_y(400.0, Some(200)).await;
        assert_eq!(surface.scroll_offset(Axis::Y), 400.0);
        assert!(!surface.writes_on(Axis::Y).is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_run_cancels_previous() {
        let surface = page(5000.0);
        let animator = ScrollAnimator::with_defaults(&surface);

        let ((), writes_at_jump) = tokio::join!(animator.animate_y(2000.0, Some(1000)), async {
            sleep(Duration::from_millis(100)).await;
            animator.animate_y(0.0, Some(0)).await;
            surface.writes_on(Axis::Y).len()
        });

        // The superseded run wrote nothing after the jump
        let writes = surface.writes_on(Axis::Y);
        assert_eq!(writes.len(), writes_at_jump);
        assert_eq!(writes.last().unwrap().requested, 0.0);
        assert!(writes[..writes.len() - 1].iter().any(|w| w.applied > 0.0));
        assert_eq!(surface.scroll_offset(Axis::Y), 0.0);
        assert!(!animator.is_animating(Axis::Y));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_run_completes_promptly() {
        let surface = page(5000.0);
        let animator = ScrollAnimator::with_defaults(&surface);

        let before = Instant::now();
        tokio::join!(animator.animate_y(3000.0, Some(2000)), async {
            sleep(Duration::from_millis(50)).await;
            animator.stop(Axis::Y);
        });

        assert!(before.elapsed() < Duration::from_millis(70));
        assert!(surface.scroll_offset(Axis::Y) < 3000.0);
        assert!(!animator.is_animating(Axis::Y));
    }

    #[tokio::test(start_paused = true)]
    async fn test_axes_are_independent() {
        let surface = VirtualSurface::new((800.0, 600.0), (4000.0, 4000.0));
        let animator = ScrollAnimator::with_defaults(&surface);

        tokio::join!(animator.animate_x(500.0, Some(300)), async {
            sleep(Duration::from_millis(100)).await;
            animator.animate_y(700.0, Some(0)).await;
        });

        assert_eq!(surface.scroll_offset(Axis::X), 500.0);
        assert_eq!(surface.scroll_offset(Axis::Y), 700.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_animate_to_waits_for_both_axes() {
        let surface = VirtualSurface::new((800.0, 600.0), (4000.0, 4000.0));
        let animator = ScrollAnimator::with_defaults(&surface);

        let before = Instant::now();
        // 50ms horizontally, 500ms vertically
        animator.animate_to(50.0, 500.0, None).await;

        assert!(before.elapsed() >= Duration::from_millis(500));
        assert_eq!(surface.scroll_offset(Axis::X), 50.0);
        assert_eq!(surface.scroll_offset(Axis::Y), 500.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cooldown_after_settle() {
        let surface = page(5000.0);
        let animator = ScrollAnimator::with_defaults(&surface);

        let probe = async {
            sleep(Duration::from_millis(20)).await;
            animator.is_animating(Axis::Y)
        };
        let ((), busy_midway) = tokio::join!(animator.animate_y(300.0, None), probe);
        assert!(busy_midway);

        assert!(animator.is_animating(Axis::Y));
        sleep(Duration::from_millis(100)).await;
        assert!(!animator.is_animating(Axis::Y));
    }

    #[tokio::test(start_paused = true)]
    async fn test_bring_into_view_visible_is_noop() {
        let surface = page(5000.0);
        let animator = ScrollAnimator::with_defaults(&surface);
        let element = VirtualElement::new(0.0, 100.0, 200.0, 50.0);

        animator.bring_into_view(Axis::Y, &element, None).await;
        assert!(surface.writes().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_bring_into_view_far_edge() {
        let surface = page(5000.0);
        let animator = ScrollAnimator::with_defaults(&surface);
        let element = VirtualElement::new(0.0, 800.0, 200.0, 100.0);

        animator.bring_into_view(Axis::Y, &element, Some(0)).await;
        // 900 - 600 + 9
        assert_eq!(offsets(&surface, Axis::Y), vec![309.0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bring_into_view_near_edge() {
        let surface = page(5000.0).with_offset(0.0, 1000.0);
        let animator = ScrollAnimator::with_defaults(&surface);
        let element = VirtualElement::new(0.0, 500.0, 200.0, 100.0);

        animator.bring_into_view(Axis::Y, &element, Some(0)).await;
        assert_eq!(offsets(&surface, Axis::Y), vec![491.0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_bring_into_view_oversized_element() {
        let surface = page(5000.0);
        let animator = ScrollAnimator::with_defaults(&surface);
        let element = VirtualElement::new(0.0, 100.0, 200.0, 700.0);

        animator.bring_into_view(Axis::Y, &element, Some(0)).await;
        assert_eq!(offsets(&surface, Axis::Y), vec![91.0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_animate_to_element_clamps() {
        let surface = page(5000.0).with_offset(0.0, 200.0);
        let animator = ScrollAnimator::with_defaults(&surface);
        let element = VirtualElement::new(0.0, 5.0, 100.0, 100.0);

        animator.animate_to_element(Axis::Y, &element, Some(0)).await;
        assert_eq!(offsets(&surface, Axis::Y), vec![0.0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_center_of_element() {
        let surface = VirtualSurface::new((800.0, 600.0), (4000.0, 4000.0));
        let animator = ScrollAnimator::with_defaults(&surface);
        let element = VirtualElement::new(1000.0, 1000.0, 200.0, 100.0);

        animator.animate_to_center_of_axis(Axis::Y, &element, Some(0), None).await;
        assert_eq!(surface.scroll_offset(Axis::Y), 750.0);

        animator.animate_to_center_of_axis(Axis::Y, &element, Some(0), Some(0.0)).await;
        assert_eq!(surface.scroll_offset(Axis::Y), 700.0);

        animator.animate_to_center_of(&element, Some(0), None).await;
        assert_eq!(surface.scroll_offset(Axis::X), 700.0);
        assert_eq!(surface.scroll_offset(Axis::Y), 750.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_freeze_rejects_setters() {
        let surface = page(5000.0);
        let animator = ScrollAnimator::with_defaults(&surface);

        animator.set_duration(400).unwrap().set_edge_offset(20).unwrap();
        assert_eq!(animator.duration_ms(), 400);
        assert_eq!(animator.edge_offset(), 20.0);

        assert!(animator.freeze().is_frozen());
        assert!(matches!(animator.set_duration(10), Err(Error::Frozen(_))));
        assert!(matches!(animator.set_edge_offset(0), Err(Error::Frozen(_))));
        assert_eq!(animator.config().duration_ms, 400);
        assert_eq!(animator.config().edge_offset, 20);

        // Animations keep working on a frozen animator
        animator.animate_y(300.0, Some(0)).await;
        assert_eq!(surface.scroll_offset(Axis::Y), 300.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_malformed_construction_uses_defaults() {
        let surface = page(5000.0);
        let animator = ScrollAnimator::new(&surface, ScrollConfig::from_raw(Some("soon"), Some("wide")));
        assert_eq!(animator.duration_ms(), 999);
        assert_eq!(animator.edge_offset(), 9.0);
    }
}
