//! Font loading with an ordered fallback chain.
//!
//! The initial glyph is decorative: when no candidate font can be loaded the
//! portraits are still generated, just without the letter. Each attempt is
//! guarded locally; the terminal no-font state is a legitimate outcome, not
//! an error.

use std::fs;
use std::path::Path;

use ab_glyph::FontVec;
use anyhow::{Context, Result};
use tracing::{debug, warn};

/// Candidate font paths, tried in order. The DejaVu bold face is preferred;
/// the rest are common bold sans-serif faces on mainstream Linux distros and
/// macOS.
pub const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/TTF/DejaVuSans-Bold.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Bold.ttf",
    "/usr/share/fonts/liberation-sans/LiberationSans-Bold.ttf",
    "/usr/share/fonts/truetype/freefont/FreeSansBold.ttf",
    "/usr/share/fonts/gnu-free/FreeSansBold.otf",
    "/System/Library/Fonts/Supplemental/Arial Bold.ttf",
    "/Library/Fonts/Arial Bold.ttf",
];

/// Try each candidate path in order; `None` when no font could be loaded.
pub fn load_font(candidates: &[String]) -> Option<FontVec> {
    for path in candidates {
        match try_load(Path::new(path)) {
            Ok(font) => {
                debug!(path = %path, "Loaded portrait font");
                return Some(font);
            }
            Err(e) => {
                debug!(path = %path, error = %e, "Font candidate unavailable");
            }
        }
    }
    warn!("No usable font found; portraits will be generated without initials");
    None
}

fn try_load(path: &Path) -> Result<FontVec> {
    let data =
        fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    FontVec::try_from_vec(data)
        .with_context(|| format!("invalid font data in {}", path.display()))
}
