//! pageview - a minimal PDF page viewer
//!
//! Opens a window on the first document given, or renders every requested
//! page offscreen with `--headless`.

use std::process::ExitCode;

use anyhow::{anyhow, Context as _, Result};
use clap::Parser;
use winit::event_loop::EventLoop;

use pageview::batch::{run_batch, BatchOptions};
use pageview::cli::{CliArgs, RunMode, StartupConfig};
use pageview::config::ViewerConfig;
use pageview::engine::PdfiumEngine;
use pageview::model::{AppModel, DocumentSession, WindowLayout};

mod runtime;

use runtime::App;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    pageview::tracing::init();

    match run(args) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{:#}", e);
            eprintln!("pageview: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<ExitCode> {
    let config = match &args.config {
        Some(path) => ViewerConfig::load_from(path),
        None => ViewerConfig::load(),
    };
    let startup = args.into_config(&config).map_err(|e| anyhow!(e))?;

    let engine = PdfiumEngine::new(config.pdfium_library_path.as_deref())
        .context("Failed to initialize the PDF engine")?;

    match startup.mode {
        RunMode::Headless { json } => run_headless(engine, &startup, json),
        RunMode::Interactive => run_interactive(engine, config, &startup),
    }
}

fn run_headless(engine: PdfiumEngine, startup: &StartupConfig, json: bool) -> Result<ExitCode> {
    let mut session = DocumentSession::new(Box::new(engine));
    let options = BatchOptions {
        params: startup.params,
        viewport: startup.viewport,
        ignore_errors: startup.ignore_errors,
    };

    let report = run_batch(&mut session, &startup.jobs, &options);
    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{}", out);
    } else {
        print!("{}", report.summary());
    }

    Ok(exit_code(report.had_errors))
}

fn run_interactive(
    engine: PdfiumEngine,
    config: ViewerConfig,
    startup: &StartupConfig,
) -> Result<ExitCode> {
    if startup.jobs.len() > 1 {
        tracing::warn!(
            "Interactive mode shows one document; ignoring {} more",
            startup.jobs.len() - 1
        );
    }

    let layout = WindowLayout::new(startup.viewport, startup.show_chrome, config.chrome.clone());
    let model = AppModel::new(
        Box::new(engine),
        startup.params,
        layout,
        config.colors.clone(),
    );

    let event_loop = EventLoop::new().context("Failed to create event loop")?;
    let mut app = App::new(model, config, startup.initial_document());
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.take_init_error() {
        return Err(e);
    }
    Ok(ExitCode::SUCCESS)
}

fn exit_code(had_errors: bool) -> ExitCode {
    if had_errors {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
