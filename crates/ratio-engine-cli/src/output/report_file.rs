use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use ratio_engine_core::RatioEngineError;
use tracing::{error, info};

/// `ratio_report_YYYYMMDD_HHMMSS.<extension>` in the working directory.
pub fn default_report_path(now: NaiveDateTime, extension: &str) -> PathBuf {
    PathBuf::from(format!(
        "ratio_report_{}.{}",
        now.format("%Y%m%d_%H%M%S"),
        extension
    ))
}

/// Write a rendered report, creating missing parent directories.
pub fn write_report(path: &Path, contents: &str) -> Result<usize, RatioEngineError> {
    let failed = |e: std::io::Error| RatioEngineError::ExportFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(failed)?;
    }
    fs::write(path, contents).map_err(failed)?;
    info!(path = %path.display(), bytes = contents.len(), "report written");
    Ok(contents.len())
}

/// Write the report, or echo it to `fallback` when the file cannot be
/// written so the analysis is not lost. The write error is still returned.
pub fn export_report<W: Write>(
    path: &Path,
    contents: &str,
    fallback: &mut W,
) -> Result<usize, RatioEngineError> {
    write_report(path, contents).map_err(|e| {
        error!(path = %path.display(), "report export failed");
        let _ = writeln!(fallback, "{contents}");
        e
    })
}
