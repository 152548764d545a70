//! Chrome font loading

use std::path::{Path, PathBuf};

use fontdue::{Font, FontSettings};

/// Well-known sans-serif fonts tried when no font is configured
const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "/Library/Fonts/Arial.ttf",
    "C:\\Windows\\Fonts\\segoeui.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

pub fn load_font_file(path: &Path) -> Result<Font, String> {
    let bytes = std::fs::read(path).map_err(|e| format!("{}: {}", path.display(), e))?;
    Font::from_bytes(bytes, FontSettings::default())
        .map_err(|e| format!("{}: {}", path.display(), e))
}

/// Load the chrome font: the configured file first, then the system candidates.
///
/// Returns `None` when nothing loads; the chrome is then drawn without text.
pub fn load_chrome_font(configured: Option<&Path>) -> Option<Font> {
    let candidates = configured
        .map(Path::to_path_buf)
        .into_iter()
        .chain(SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from));

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match load_font_file(&path) {
            Ok(font) => {
                tracing::debug!("Loaded chrome font {}", path.display());
                return Some(font);
            }
            Err(e) => tracing::warn!("Failed to load font {}", e),
        }
    }

    tracing::warn!("No usable font found; chrome text will not be drawn");
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_font_file_is_an_error() {
        let err = load_font_file(Path::new("/nonexistent/font.ttf")).unwrap_err();
        assert!(err.contains("font.ttf"));
    }

    #[test]
    fn test_garbage_font_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.ttf");
        std::fs::write(&path, b"not a font").unwrap();
        assert!(load_font_file(&path).is_err());
    }
}
