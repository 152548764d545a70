//! Command-line argument parsing
//!
//! Inputs are document paths, each optionally followed by a page range:
//!
//! ```text
//! pageview report.pdf 2-5 slides.pdf
//! ```

use std::path::PathBuf;

use clap::Parser;

use crate::batch::DocumentJob;
use crate::config::ViewerConfig;
use crate::model::ViewportGeometry;
use crate::page_range::{self, is_range};
use crate::transform::{FitMode, ViewParams};

/// Range used for a document given without one
pub const DEFAULT_RANGE: &str = "1-";

/// A minimal document page viewer
#[derive(Parser, Debug, Default)]
#[command(name = "pageview", version, about = "A minimal document page viewer")]
pub struct CliArgs {
    /// Documents to show, each optionally followed by a page range (e.g. `1-3,7`)
    #[arg(value_name = "INPUTS")]
    pub inputs: Vec<String>,

    /// Stretch pages to the window instead of keeping the aspect ratio
    #[arg(short = 'f', long)]
    pub fit: bool,

    /// Render resolution in DPI; pages then only shrink to fit
    #[arg(short = 'r', long, value_name = "DPI")]
    pub resolution: Option<f32>,

    /// Rotation in degrees
    #[arg(short = 'R', long, value_name = "DEGREES", allow_hyphen_values = true)]
    pub rotation: Option<f32>,

    /// Keep going when a document fails in headless mode
    #[arg(short = 'i', long)]
    pub ignore_errors: bool,

    /// Viewport width in pixels
    #[arg(long, env = "WIDTH", value_name = "PIXELS")]
    pub width: Option<u32>,

    /// Viewport height in pixels
    #[arg(long, env = "HEIGHT", value_name = "PIXELS")]
    pub height: Option<u32>,

    /// Render the requested pages without opening a window, then exit
    #[arg(long)]
    pub headless: bool,

    /// Start with the window chrome hidden
    #[arg(long)]
    pub no_chrome: bool,

    /// Print the headless report as JSON
    #[arg(long, requires = "headless")]
    pub json: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Interactive,
    Headless { json: bool },
}

/// Everything `main` needs, with config and CLI merged
#[derive(Debug, Clone)]
pub struct StartupConfig {
    pub mode: RunMode,
    pub jobs: Vec<DocumentJob>,
    pub params: ViewParams,
    pub viewport: ViewportGeometry,
    pub show_chrome: bool,
    pub ignore_errors: bool,
}

impl StartupConfig {
    /// Document and 1-based start page for the interactive window
    pub fn initial_document(&self) -> Option<(PathBuf, usize)> {
        let job = self.jobs.first()?;
        let page = page_range::first_page(&job.ranges).unwrap_or(1);
        Some((job.path.clone(), page))
    }
}

/// Pair each path with the range that follows it, if any
pub fn parse_inputs(inputs: &[String]) -> Result<Vec<DocumentJob>, String> {
    let mut jobs = Vec::new();
    let mut iter = inputs.iter().peekable();

    while let Some(input) = iter.next() {
        if is_range(input) {
            return Err(format!("page range '{}' must follow a document", input));
        }
        let ranges = match iter.peek() {
            Some(next) if is_range(next) => iter.next().cloned().unwrap_or_default(),
            _ => DEFAULT_RANGE.to_string(),
        };
        jobs.push(DocumentJob::new(input, ranges));
    }

    Ok(jobs)
}

impl CliArgs {
    /// Merge parsed CLI args over the loaded config
    pub fn into_config(self, config: &ViewerConfig) -> Result<StartupConfig, String> {
        let jobs = parse_inputs(&self.inputs)?;

        let width = self.width.unwrap_or(config.width);
        let height = self.height.unwrap_or(config.height);
        if width == 0 || height == 0 {
            return Err(format!("viewport size must be positive, got {}x{}", width, height));
        }

        let resolution = self.resolution.or(config.resolution);
        if let Some(dpi) = resolution {
            if !dpi.is_finite() || dpi <= 0.0 {
                return Err(format!("resolution must be positive, got {}", dpi));
            }
        }

        let fit_mode = if self.fit || config.fit {
            FitMode::Stretch
        } else {
            FitMode::Preserve
        };
        let rotation = self.rotation.unwrap_or(config.rotation);

        let mode = if self.headless {
            if jobs.is_empty() {
                return Err("headless mode needs at least one document".to_string());
            }
            RunMode::Headless { json: self.json }
        } else {
            RunMode::Interactive
        };

        Ok(StartupConfig {
            mode,
            jobs,
            params: ViewParams::from_resolution(resolution, rotation, fit_mode),
            viewport: ViewportGeometry::new(width, height),
            show_chrome: config.show_chrome && !self.no_chrome,
            ignore_errors: self.ignore_errors,
        })
    }
}
