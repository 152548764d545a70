//! pageview - a minimal document page viewer
//!
//! Pages come from an external rendering engine; this crate computes where
//! and how large they appear, blits them into a CPU frame buffer, and runs
//! the Elm-style model/update loop that drives navigation, resizing and
//! window chrome.

pub mod batch;
pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod engine;
pub mod geometry;
pub mod input;
pub mod messages;
pub mod model;
pub mod page_range;
pub mod picker;
pub mod raster;
pub mod theme;
pub mod tracing;
pub mod transform;
pub mod update;
pub mod view;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ViewerConfig;
pub use messages::Msg;
pub use model::AppModel;
pub use theme::ChromeTheme;
