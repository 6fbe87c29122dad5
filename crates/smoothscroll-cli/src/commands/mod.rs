pub mod config;
pub mod element;
pub mod to;

use std::time::Instant;

use anyhow::{anyhow, Result};
use clap::ValueEnum;
use serde::Serialize;

use smoothscroll_core::surface::ScrollWrite;
use smoothscroll_core::{Axis, ScrollSurface, VirtualSurface};

/// Width and height in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

/// Parse `WIDTHxHEIGHT`, e.g. `800x600`
pub fn parse_size(input: &str) -> Result<Size> {
    let (w, h) = input
        .split_once(|c| c == 'x' || c == 'X')
        .ok_or_else(|| anyhow!("expected WIDTHxHEIGHT, got '{}'", input))?;
    let width: f64 = w.trim().parse().map_err(|_| anyhow!("invalid width '{}'", w))?;
    let height: f64 = h.trim().parse().map_err(|_| anyhow!("invalid height '{}'", h))?;
    if width < 0.0 || height < 0.0 {
        return Err(anyhow!("size must not be negative"));
    }
    Ok(Size { width, height })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ElementMode {
    /// Put the element's near edge at the container edge
    Align,
    /// Scroll only if the element is not fully visible
    IntoView,
    /// Center the element in the container
    Center,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AxisArg {
    X,
    Y,
    Both,
}

impl AxisArg {
    pub fn axes(self) -> &'static [Axis] {
        match self {
            AxisArg::X => &[Axis::X],
            AxisArg::Y => &[Axis::Y],
            AxisArg::Both => &Axis::BOTH,
        }
    }
}

/// Virtual document shared by all commands
pub struct Scene {
    pub viewport: Size,
    pub content: Size,
    pub start: (f64, f64),
    pub native_smooth: bool,
    pub json: bool,
}

impl Scene {
    pub fn surface(&self) -> VirtualSurface {
        let surface = VirtualSurface::new(
            (self.viewport.width, self.viewport.height),
            (self.content.width, self.content.height),
        )
        .with_offset(self.start.0, self.start.1);
        surface.set_native_smooth(self.native_smooth);
        surface
    }

    /// Print what happened to the surface since `started`
    pub fn report(&self, surface: &VirtualSurface, started: Instant) -> Result<()> {
        let report = Report {
            elapsed_ms: started.elapsed().as_millis() as u64,
            final_x: surface.scroll_offset(Axis::X),
            final_y: surface.scroll_offset(Axis::Y),
            writes: surface.writes(),
        };

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
            return Ok(());
        }

        if report.writes.is_empty() {
            println!("No scrolling needed.");
        } else {
            for (i, write) in report.writes.iter().enumerate() {
                println!("  #{:<4} {} = {}", i, write.axis, write.applied);
            }
            println!();
        }
        println!(
            "Settled at x = {}, y = {} after {} ms ({} writes)",
            report.final_x,
            report.final_y,
            report.elapsed_ms,
            report.writes.len()
        );
        Ok(())
    }
}

#[derive(Serialize)]
struct Report {
    elapsed_ms: u64,
    final_x: f64,
    final_y: f64,
    writes: Vec<ScrollWrite>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(
            parse_size("800x600").unwrap(),
            Size {
                width: 800.0,
                height: 600.0
            }
        );
        assert_eq!(parse_size("10X20").unwrap().height, 20.0);
        assert!(parse_size("800").is_err());
        assert!(parse_size("ax600").is_err());
        assert!(parse_size("-1x5").is_err());
    }

    #[test]
    fn test_axis_arg() {
        assert_eq!(AxisArg::Both.axes(), &[Axis::X, Axis::Y]);
        assert_eq!(AxisArg::X.axes(), &[Axis::X]);
    }

    #[test]
    fn test_scene_surface() {
        let scene = Scene {
            viewport: Size {
                width: 100.0,
                height: 100.0,
            },
            content: Size {
                width: 100.0,
                height: 1000.0,
            },
            start: (0.0, 250.0),
            native_smooth: true,
            json: false,
        };
        let surface = scene.surface();
        assert_eq!(surface.scroll_offset(Axis::Y), 250.0);
        assert!(surface.native_smooth_scroll());
    }
}
