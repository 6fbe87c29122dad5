//! L4 Atomic Layer: Duration helpers for scroll configuration

use std::time::Duration;

pub use crate::config::ScrollConfig;

/// Extension trait for ScrollConfig with utility methods
pub trait ScrollConfigExt {
    /// Delay between two animation ticks
    fn tick_interval(&self) -> Duration;

    /// How long an axis stays busy after settling
    fn cooldown(&self) -> Duration;

    /// Edge offset as a pixel distance
    fn edge_offset_px(&self) -> f64;
}

impl ScrollConfigExt for ScrollConfig {
    #[inline]
    fn tick_interval(&self) -> Duration {
        // A zero tick would spin without yielding to the event loop
        Duration::from_millis(self.tick_interval_ms.max(1))
    }

    #[inline]
    fn cooldown(&self) -> Duration {
        Duration::from_millis(self.cooldown_ms)
    }

    #[inline]
    fn edge_offset_px(&self) -> f64 {
        self.edge_offset as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_interval() {
        let config = ScrollConfig::default();
        assert_eq!(config.tick_interval(), Duration::from_millis(9));

        let config = ScrollConfig {
            tick_interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.tick_interval(), Duration::from_millis(1));
    }

    #[test]
    fn test_cooldown() {
        assert_eq!(ScrollConfig::default().cooldown(), Duration::from_millis(99));
    }
}
