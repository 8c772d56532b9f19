//! Batch generation driver.
//!
//! Enumerates every persona/expression pair in a fixed order, renders each
//! portrait, and writes it as `{persona}_{expression}.png` under the output
//! directory. Progress goes to stdout one line per file, followed by a
//! summary block.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::persona::{Expression, Persona};
use crate::render::{load_font, render_portrait};

/// Outcome of a completed batch run.
#[derive(Debug)]
pub struct BatchSummary {
    /// Number of files written.
    pub count: usize,
    /// File names in generation order.
    pub files: Vec<String>,
    /// Directory the files were written to.
    pub output_dir: PathBuf,
}

/// Generate every portrait into the configured output directory.
///
/// Enumeration order is fixed: personas in declaration order, expressions in
/// declaration order within each persona. Existing files of the same names
/// are overwritten. Already-written files are left in place if a later write
/// fails.
pub fn run(config: &GeneratorConfig) -> Result<BatchSummary> {
    let output_dir = config.output_dir();
    ensure_output_dir(&output_dir)?;

    let font = load_font(&config.font.candidates);
    let size = config.canvas.size;

    let mut files = Vec::with_capacity(Persona::all().len() * Expression::all().len());
    for persona in Persona::all() {
        for expression in Expression::all() {
            let filename = format!("{}_{}.png", persona.slug(), expression.slug());
            let path = output_dir.join(&filename);

            println!("Generating {}...", filename);
            debug!(
                persona = %persona.slug(),
                expression = %expression.slug(),
                size,
                "Rendering portrait"
            );

            let portrait = render_portrait(*persona, *expression, size, font.as_ref());
            portrait.save(&path).map_err(|e| Error::ImageWrite {
                path: path.clone(),
                source: e,
            })?;

            files.push(filename);
        }
    }

    info!(count = files.len(), dir = %output_dir.display(), "Batch complete");

    Ok(BatchSummary {
        count: files.len(),
        files,
        output_dir,
    })
}

/// Create the output directory if absent. A pre-existing directory is fine.
fn ensure_output_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir).map_err(|e| Error::OutputDirCreate {
            path: dir.to_path_buf(),
            source: e,
        })?;
        debug!(path = %dir.display(), "Created output directory");
    }
    Ok(())
}

/// Print the human-readable summary block for a completed batch.
pub fn print_summary(summary: &BatchSummary) {
    println!();
    println!(
        "Generated {} placeholder images in {}/",
        summary.count,
        summary.output_dir.display()
    );
    println!();
    println!("Images created:");
    for file in &summary.files {
        println!("  - {}", file);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(dir: &Path) -> GeneratorConfig {
        let mut config = GeneratorConfig::default();
        config.output.dir = dir.join("assets/images").to_string_lossy().into_owned();
        // Skip font probing in tests; rendering works without one.
        config.font.candidates = Vec::new();
        config
    }

    #[test]
    fn test_batch_writes_sixteen_files() {
        let tmp = tempfile::tempdir().unwrap();
        let config = test_config(tmp.path());

        let summary = run(&config).unwrap();
        assert_eq!(summary.count, 16);
        assert_eq!(summary.files.len(), 16);

        for persona in Persona::all() {
            for expression in Expression::all() {
                let name = format!("{}_{}.png", persona.slug(), expression.slug());
                assert!(summary.files.contains(&name), "missing {}", name);
                assert!(summary.output_dir.join(&name).exists());
            }
        }
    }

    #[test]
    fn test_batch_order_is_deterministic() {
        let tmp = tempfile::tempdir().unwrap();
        let summary = run(&test_config(tmp.path())).unwrap();

        assert_eq!(summary.files[0], "sterling_default.png");
        assert_eq!(summary.files[1], "sterling_happy.png");
        assert_eq!(summary.files[4], "willow_default.png");
        assert_eq!(summary.files[15], "sparky_surprised.png");
    }

    #[test]
    fn test_batch_is_idempotent_over_existing_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let config = test_config(tmp.path());

        run(&config).unwrap();
        // Second run over the same directory overwrites without error.
        let summary = run(&config).unwrap();
        assert_eq!(summary.count, 16);
    }

    #[test]
    fn test_outputs_are_byte_identical_across_runs() {
        let tmp = tempfile::tempdir().unwrap();
        let config = test_config(tmp.path());

        run(&config).unwrap();
        let path = config.output_dir().join("kai_disappointed.png");
        let first = fs::read(&path).unwrap();

        run(&config).unwrap();
        let second = fs::read(&path).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_written_files_decode_as_rgba_png() {
        let tmp = tempfile::tempdir().unwrap();
        let config = test_config(tmp.path());
        run(&config).unwrap();

        let path = config.output_dir().join("sparky_surprised.png");
        let img = image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.dimensions(), (200, 200));
        assert_eq!(*img.get_pixel(100, 100), image::Rgba([255, 185, 40, 255]));
        assert_eq!(*img.get_pixel(0, 0), image::Rgba([0, 0, 0, 0]));
    }
}
