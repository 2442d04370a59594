//! Saving rendered sketches to disk.

use crate::backend::SketchSurface;
use crate::config::ExportConfig;
use crate::draw::Shape;
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur while exporting a sketch.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Failed to write sketch: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to encode PNG: {0}")]
    Encode(String),

    #[error("Failed to serialize shapes: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Generate a filename based on the template and current time.
///
/// # Arguments
/// * `template` - Template string with chrono format specifiers
/// * `format` - File extension (e.g., "png")
pub fn generate_filename(template: &str, format: &str) -> String {
    let now = Local::now();
    let filename = now.format(template).to_string();
    format!("{}.{}", filename, format)
}

/// Ensure the export directory exists, creating it if necessary.
pub fn ensure_directory_exists(directory: &Path) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating export directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let canonical = directory
        .canonicalize()
        .unwrap_or_else(|_| directory.to_path_buf());

    Ok(canonical)
}

/// Writes the surface as a PNG at `path`, creating parent directories.
pub fn save_png(surface: &SketchSurface, path: &Path) -> Result<PathBuf, ExportError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        ensure_directory_exists(parent)?;
    }

    let mut bytes = Vec::new();
    surface
        .write_png(&mut bytes)
        .map_err(|err| ExportError::Encode(format!("{err:#}")))?;

    log::info!(
        "Saving sketch to: {} ({} bytes)",
        path.display(),
        bytes.len()
    );
    fs::write(path, &bytes)?;

    Ok(path.to_path_buf())
}

/// Writes the surface as a PNG into the configured export directory.
///
/// The filename comes from the configured chrono template.
pub fn save_png_to_directory(
    surface: &SketchSurface,
    config: &ExportConfig,
) -> Result<PathBuf, ExportError> {
    let directory = ensure_directory_exists(&expand_tilde(&config.directory))?;
    let filename = generate_filename(&config.filename_template, "png");
    save_png(surface, &directory.join(filename))
}

/// Serializes shapes (creation order) as pretty JSON.
pub fn shapes_to_json(shapes: &[Shape]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(shapes)?)
}

/// Expand tilde (~) in path strings.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{BLACK, ShapeKind, ShapeStore, StrokeStyle, WHITE};

    fn surface() -> SketchSurface {
        SketchSurface::new(
            32,
            32,
            WHITE,
            StrokeStyle {
                color: BLACK,
                thickness: 1.0,
            },
        )
        .unwrap()
    }

    #[test]
    fn test_generate_filename() {
        let filename = generate_filename("sketch_%Y%m%d", "png");
        assert!(filename.starts_with("sketch_20"));
        assert!(filename.ends_with(".png"));
    }

    #[test]
    fn test_expand_tilde() {
        let expanded = expand_tilde("~/Pictures");
        assert!(!expanded.to_string_lossy().starts_with("~"));

        let no_tilde = expand_tilde("/absolute/path");
        assert_eq!(no_tilde, PathBuf::from("/absolute/path"));
    }

    #[test]
    fn save_png_writes_png_signature() {
        let dir = tempfile::tempdir().unwrap();
        let mut surface = surface();
        surface.render(&[]).unwrap();

        let path = save_png(&surface, &dir.path().join("nested/out.png")).unwrap();
        let bytes = fs::read(path).unwrap();
        assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn save_png_to_directory_uses_template() {
        let dir = tempfile::tempdir().unwrap();
        let config = ExportConfig {
            directory: dir.path().to_string_lossy().into_owned(),
            filename_template: "fixed_name".to_string(),
        };

        let path = save_png_to_directory(&surface(), &config).unwrap();
        assert_eq!(path.file_name().unwrap(), "fixed_name.png");
        assert!(path.exists());
    }

    #[test]
    fn shapes_serialize_with_kind_and_coordinates() {
        let mut store = ShapeStore::new();
        store
            .push(store.create(0, 1.0, 2.0, 3.0, 4.0, ShapeKind::Rectangle))
            .unwrap();

        let json = shapes_to_json(store.all()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["id"], 0);
        assert_eq!(value[0]["kind"], "rectangle");
        assert_eq!(value[0]["x2"], 3.0);
        assert_eq!(value[0]["drawable"]["ops"][0]["op"], "move_to");
    }
}
