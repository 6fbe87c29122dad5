use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use smoothscroll_core::AppConfig;

mod commands;

use commands::{AxisArg, ElementMode, Scene, Size};

#[derive(Parser)]
#[command(name = "smoothscroll")]
#[command(author, version, about = "Smooth-scroll animations over a virtual document")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Visible area of the container as WIDTHxHEIGHT
    #[arg(long, global = true, default_value = "800x600", value_parser = commands::parse_size)]
    viewport: Size,

    /// Scrollable content of the container as WIDTHxHEIGHT
    #[arg(long, global = true, default_value = "800x5000", value_parser = commands::parse_size)]
    content: Size,

    /// Initial horizontal scroll offset
    #[arg(long, global = true, default_value_t = 0.0)]
    start_x: f64,

    /// Initial vertical scroll offset
    #[arg(long, global = true, default_value_t = 0.0)]
    start_y: f64,

    /// Emulate `scroll-behavior: smooth` on the container
    #[arg(long, global = true)]
    native_smooth: bool,

    /// Print recorded scroll writes as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Animate to a coordinate
    To {
        /// Horizontal target
        #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
        x: f64,
        /// Vertical target
        #[arg(short, long, default_value_t = 0.0, allow_hyphen_values = true)]
        y: f64,
        /// Duration in milliseconds (0 or less jumps instantly)
        #[arg(short, long, allow_hyphen_values = true)]
        duration: Option<i64>,
    },
    /// Scroll to an element box
    Element {
        #[arg(long, default_value_t = 0.0)]
        left: f64,
        #[arg(long, default_value_t = 0.0)]
        top: f64,
        #[arg(long, default_value_t = 100.0)]
        width: f64,
        #[arg(long, default_value_t = 100.0)]
        height: f64,
        /// What to do with the element
        #[arg(short, long, value_enum, default_value_t = ElementMode::IntoView)]
        mode: ElementMode,
        /// Which axes to move
        #[arg(short, long, value_enum, default_value_t = AxisArg::Y)]
        axis: AxisArg,
        /// Duration in milliseconds (0 or less jumps instantly)
        #[arg(short, long, allow_hyphen_values = true)]
        duration: Option<i64>,
        /// Point of the element to center, relative to its near edge (center mode)
        #[arg(long)]
        offset: Option<f64>,
    },
    /// Show the effective configuration
    Config {
        /// Write the configuration file
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| config.general.log_level.clone()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    tracing::debug!(path = %AppConfig::config_path().display(), "Configuration loaded");

    let scene = Scene {
        viewport: cli.viewport,
        content: cli.content,
        start: (cli.start_x, cli.start_y),
        native_smooth: cli.native_smooth,
        json: cli.json,
    };

    match cli.command {
        Commands::To { x, y, duration } => {
            commands::to::run(&config, &scene, x, y, duration).await
        }
        Commands::Element {
            left,
            top,
            width,
            height,
            mode,
            axis,
            duration,
            offset,
        } => {
            let element = smoothscroll_core::VirtualElement::new(left, top, width, height);
            commands::element::run(&config, &scene, &element, mode, axis, duration, offset).await
        }
        Commands::Config { init } => commands::config::run(&config, init),
    }
}
