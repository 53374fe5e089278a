//! Checkring CLI
//!
//! Plays the success animation headlessly against a recording context and
//! logs what each frame would draw.

use anyhow::Result;
use checkring::{Dimensions, Frame, Padding, SuccessView};
use checkring_animation::TimerScheduler;
use checkring_core::RecordingContext;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod config;

/// Upper bound for `--fps`; the frame step must stay resolvable against elapsed time
const MAX_FPS: i64 = 1000;

#[derive(Parser)]
#[command(name = "checkring")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Checkring success animation player", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the animation and log every redrawn frame
    Play {
        #[command(flatten)]
        layout: LayoutArgs,

        /// Frames per second of the simulated host
        #[arg(
            long,
            default_value = "60",
            value_parser = clap::value_parser!(u32).range(1..=MAX_FPS)
        )]
        fps: u32,

        /// Cancel the animation once this much time has elapsed
        #[arg(long)]
        cancel_at_ms: Option<f32>,
    },

    /// Print the ring and checkmark geometry for a layout
    Geometry {
        #[command(flatten)]
        layout: LayoutArgs,
    },
}

#[derive(Args)]
struct LayoutArgs {
    /// Widget width in pixels
    #[arg(long, default_value = "100")]
    width: f32,

    /// Widget height in pixels
    #[arg(long, default_value = "100")]
    height: f32,

    /// Padding on every side in pixels
    #[arg(long, default_value = "0")]
    padding: f32,

    /// Display density used to convert the stroke width to pixels
    #[arg(long, default_value = "1")]
    density: f32,

    /// Style file (TOML)
    #[arg(long)]
    style: Option<PathBuf>,
}

impl LayoutArgs {
    fn dimensions(&self, stroke_width: f32) -> Dimensions {
        Dimensions::new(self.width, self.height, stroke_width)
            .with_padding(Padding::uniform(self.padding))
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Play {
            layout,
            fps,
            cancel_at_ms,
        } => cmd_play(&layout, fps, cancel_at_ms),

        Commands::Geometry { layout } => cmd_geometry(&layout),
    }
}

fn build_view(layout: &LayoutArgs) -> Result<SuccessView> {
    let style = config::load_style(layout.style.as_deref(), layout.density)?;
    let mut view = SuccessView::new(style);
    view.set_dimensions(layout.dimensions(style.stroke_width));
    Ok(view)
}

fn cmd_play(layout: &LayoutArgs, fps: u32, cancel_at_ms: Option<f32>) -> Result<()> {
    if cancel_at_ms.is_some_and(|at| !at.is_finite() || at < 0.0) {
        anyhow::bail!("--cancel-at-ms must be a non-negative number");
    }

    let mut view = build_view(layout)?;
    let mut scheduler = TimerScheduler::new();
    let mut ctx = RecordingContext::new();
    let frame_ms = 1000.0 / fps as f32;

    info!(
        "Playing {}x{} at {} fps ({}ms per stage)",
        layout.width,
        layout.height,
        fps,
        view.style().duration_ms
    );

    view.start(&mut scheduler);

    let mut elapsed_ms = 0.0;
    let mut frame_index = 0u32;
    loop {
        if view.take_needs_redraw() {
            ctx.clear();
            view.paint(&mut ctx);
            log_frame(frame_index, elapsed_ms, &view.frame(), ctx.commands().len());
            frame_index += 1;
        }

        if !view.is_running(&scheduler) {
            break;
        }

        if cancel_at_ms.is_some_and(|at| elapsed_ms >= at) {
            view.cancel(&mut scheduler);
            info!("Cancelled at {:.1}ms", elapsed_ms);
            continue;
        }

        let events = scheduler.advance(frame_ms);
        elapsed_ms += frame_ms;
        view.handle_events(&mut scheduler, events);
    }

    view.teardown(&mut scheduler);

    let controller = view.controller();
    match controller.interrupted_sweep() {
        Some(sweep) => info!(
            "Finished in {:?} after {:.1}ms (arc interrupted at {:.1} degrees)",
            controller.stage(),
            elapsed_ms,
            sweep
        ),
        None => info!("Finished in {:?} after {:.1}ms", controller.stage(), elapsed_ms),
    }

    Ok(())
}

fn log_frame(index: u32, elapsed_ms: f32, frame: &Frame, commands: usize) {
    let sweep = frame
        .arc_sweep
        .map(|s| format!("{:.1}", s))
        .unwrap_or_else(|| "-".to_string());
    let vertices = frame.line.as_ref().map_or(0, |line| line.len());

    info!(
        "frame {:>3} {:>7.1}ms {:<11} sweep={:>6} circle={} line={} commands={}",
        index,
        elapsed_ms,
        format!("{:?}", frame.stage),
        sweep,
        frame.circle_visible,
        vertices,
        commands
    );
}

fn cmd_geometry(layout: &LayoutArgs) -> Result<()> {
    let view = build_view(layout)?;
    let circle = view.circle();
    let checkmark = view.checkmark();

    println!("Checkring geometry");
    println!("==================");
    println!();
    println!("Size:     {} x {}", layout.width, layout.height);
    println!("Padding:  {}", layout.padding);
    println!("Stroke:   {}px", view.style().stroke_width);
    println!();
    println!("Ring:");
    println!("  center  ({}, {})", circle.center.x, circle.center.y);
    println!("  radius  {}", circle.radius);
    println!(
        "  bounds  ({}, {}) {} x {}",
        circle.bounds.x(),
        circle.bounds.y(),
        circle.bounds.width(),
        circle.bounds.height()
    );
    println!();
    println!("Checkmark:");
    for (label, point) in ["start", "bend", "end"].iter().zip(checkmark.points()) {
        println!("  {:<6}  ({}, {})", label, point.x, point.y);
    }
    println!("  length  {:.2}", checkmark.total_length());

    Ok(())
}
