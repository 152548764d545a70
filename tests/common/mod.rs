//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::cell::Cell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use pageview::engine::{DocumentEngine, EngineError, PageSource, Pixmap, RasterOutput};
use pageview::geometry::{IRect, Matrix, Rect};
use pageview::model::{AppModel, ChromeMetrics, ViewportGeometry, WindowLayout};
use pageview::theme::ChromeTheme;
use pageview::transform::ViewParams;

pub const LETTER: (f32, f32) = (612.0, 792.0);

/// Fill colour of fake pages, R,G,B,A
pub const PAGE_RGBA: [u8; 4] = [0x20, 0x40, 0x80, 0xFF];

/// The same colour as the frame sees it
pub const PAGE_ARGB: u32 = 0xFF204080;

/// Description of a document the fake engine can open
#[derive(Debug, Clone)]
pub struct FakeDoc {
    pub pages: Vec<(f32, f32)>,
    /// 0-based indices that fail to load
    pub failing: Vec<usize>,
    pub warnings: u32,
}

impl FakeDoc {
    pub fn letter(pages: usize) -> Self {
        Self {
            pages: vec![LETTER; pages],
            failing: Vec::new(),
            warnings: 0,
        }
    }

    pub fn with_failing(mut self, index: usize) -> Self {
        self.failing.push(index);
        self
    }

    pub fn with_warnings(mut self, warnings: u32) -> Self {
        self.warnings = warnings;
        self
    }
}

/// In-memory engine keyed by path
#[derive(Debug, Clone, Default)]
pub struct FakeEngine {
    docs: HashMap<PathBuf, FakeDoc>,
    opens: Rc<Cell<usize>>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_doc(mut self, path: impl Into<PathBuf>, doc: FakeDoc) -> Self {
        self.docs.insert(path.into(), doc);
        self
    }

    /// Shared counter of successful opens
    pub fn open_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.opens)
    }
}

impl DocumentEngine for FakeEngine {
    fn open(&self, path: &Path) -> Result<Box<dyn PageSource>, EngineError> {
        let doc = self.docs.get(path).cloned().ok_or_else(|| EngineError::Open {
            path: path.display().to_string(),
            reason: "no such file".to_string(),
        })?;
        self.opens.set(self.opens.get() + 1);
        Ok(Box::new(FakeDocument { doc }))
    }
}

pub struct FakeDocument {
    doc: FakeDoc,
}

impl FakeDocument {
    fn check(&self, index: usize) -> Result<(), EngineError> {
        if index >= self.doc.pages.len() {
            return Err(EngineError::PageOutOfRange {
                index,
                count: self.doc.pages.len(),
            });
        }
        if self.doc.failing.contains(&index) {
            return Err(EngineError::PageLoad {
                index,
                reason: "corrupt page".to_string(),
            });
        }
        Ok(())
    }
}

impl PageSource for FakeDocument {
    fn page_count(&self) -> usize {
        self.doc.pages.len()
    }

    fn page_bounds(&self, index: usize) -> Result<Rect, EngineError> {
        self.check(index)?;
        let (w, h) = self.doc.pages[index];
        Ok(Rect::from_size(w, h))
    }

    fn rasterize(
        &self,
        index: usize,
        _matrix: &Matrix,
        bbox: IRect,
    ) -> Result<RasterOutput, EngineError> {
        self.check(index)?;
        let mut pixmap = Pixmap::white(bbox.width().max(0) as u32, bbox.height().max(0) as u32);
        for px in pixmap.samples.chunks_exact_mut(4) {
            px.copy_from_slice(&PAGE_RGBA);
        }
        Ok(RasterOutput {
            pixmap,
            warnings: self.doc.warnings,
        })
    }
}

pub fn layout(width: u32, height: u32, chrome: bool) -> WindowLayout {
    WindowLayout::new(ViewportGeometry::new(width, height), chrome, ChromeMetrics::default())
}

/// Model with a 512x512 viewport and chrome shown
pub fn test_model(engine: FakeEngine) -> AppModel {
    test_model_with(engine, ViewParams::default(), layout(512, 512, true))
}

pub fn test_model_with(engine: FakeEngine, params: ViewParams, layout: WindowLayout) -> AppModel {
    AppModel::new(Box::new(engine), params, layout, ChromeTheme::default())
}

/// Offscreen buffer the size of the model's outer window
pub fn window_buffer(model: &AppModel) -> Vec<u32> {
    let (w, h) = model.layout.outer;
    vec![0; w as usize * h as usize]
}
