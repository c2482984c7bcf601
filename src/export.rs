//! Writing the ten bone tables to disk as SVG.

use crate::model::{generate, to_svg, Digit, ExportError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// File name for a digit's bone, e.g. `bone-7.svg`.
pub fn bone_file_name(digit: Digit) -> String {
    format!("bone-{}.svg", digit)
}

/// Generate every bone at `scale` and write it into `dir`.
///
/// Creates `dir` if needed and overwrites existing files. Returns the paths
/// written, in digit order.
///
/// # Errors
///
/// Fails on a non-positive or non-finite scale, or when the directory or a
/// file cannot be written.
pub fn export_bones(dir: &Path, scale: f64) -> Result<Vec<PathBuf>, ExportError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ExportError::InvalidScale(scale));
    }

    fs::create_dir_all(dir).map_err(|source| ExportError::Directory {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::with_capacity(Digit::ALL.len());
    for digit in Digit::ALL {
        let path = dir.join(bone_file_name(digit));
        let svg = to_svg(&generate(digit, scale));
        fs::write(&path, svg).map_err(|source| ExportError::Write {
            path: path.clone(),
            source,
        })?;
        written.push(path);
    }

    info!(dir = ?dir, scale, count = written.len(), "Exported bones");
    Ok(written)
}
