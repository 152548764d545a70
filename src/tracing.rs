//! Tracing setup and debug diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=navigation=debug` - page/layout transitions only
//! - `RUST_LOG=pageview::raster=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/pageview/logs/pageview.log` with daily
//! rotation, always at debug level.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{AppModel, NavState, ViewportGeometry};

/// Initialize tracing subscriber with console and file logging
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "pageview.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of the viewer state for diffing around an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavSnapshot {
    pub nav: NavState,
    pub viewport: ViewportGeometry,
    pub chrome_visible: bool,
    pub document: Option<String>,
}

impl NavSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        Self {
            nav: model.nav.state(),
            viewport: model.layout.viewport(),
            chrome_visible: model.layout.chrome_visible,
            document: model.session.display_name().map(str::to_string),
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &NavSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.document != other.document {
            changes.push(format!(
                "document: {} → {}",
                self.document.as_deref().unwrap_or("-"),
                other.document.as_deref().unwrap_or("-")
            ));
        }
        if self.nav != other.nav {
            changes.push(format!("nav: {:?} → {:?}", self.nav, other.nav));
        }
        if self.viewport != other.viewport {
            changes.push(format!(
                "viewport: {}x{} → {}x{}",
                self.viewport.width, self.viewport.height, other.viewport.width, other.viewport.height
            ));
        }
        if self.chrome_visible != other.chrome_visible {
            changes.push(format!("chrome: {}", if other.chrome_visible { "shown" } else { "hidden" }));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(page: usize) -> NavSnapshot {
        NavSnapshot {
            nav: NavState::Viewing {
                page,
                page_count: 3,
            },
            viewport: ViewportGeometry::new(100, 100),
            chrome_visible: true,
            document: Some("a.pdf".into()),
        }
    }

    #[test]
    fn test_diff_none_when_equal() {
        assert_eq!(snapshot(1).diff(&snapshot(1)), None);
    }

    #[test]
    fn test_diff_reports_page_change() {
        let diff = snapshot(1).diff(&snapshot(2)).unwrap();
        assert!(diff.contains("nav"), "{}", diff);
    }
}
