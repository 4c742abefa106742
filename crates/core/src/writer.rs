//! Payload output.
//!
//! File targets are written through a temporary file in the destination
//! directory and renamed into place, so a failed run never leaves a partial
//! payload behind and a successful one fully replaces the previous content.

use std::fmt;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tempfile::NamedTempFile;

use crate::error::SeedError;
use crate::record::BatchWritePayload;

/// Path that selects standard output instead of a file.
pub const STDOUT_PATH: &str = "-";

/// Where a payload goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    File(PathBuf),
    Stdout,
}

impl OutputTarget {
    pub fn from_path(path: &Path) -> Self {
        if path.as_os_str() == STDOUT_PATH {
            OutputTarget::Stdout
        } else {
            OutputTarget::File(path.to_path_buf())
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputTarget::File(path) => write!(f, "{}", path.display()),
            OutputTarget::Stdout => f.write_str("<stdout>"),
        }
    }
}

/// Serialize with two-space indentation and no trailing newline.
///
/// Encoding failures are `Serialize` errors; failures of `writer` itself are
/// `Io` errors naming `path`.
pub fn write_pretty<W: Write, T: Serialize + ?Sized>(
    mut writer: W,
    value: &T,
    path: &Path,
) -> Result<(), SeedError> {
    let bytes = serde_json::to_vec_pretty(value)?;
    writer
        .write_all(&bytes)
        .map_err(|e| SeedError::io(path, e))
}

/// The exact text [`write_payload`] produces for a file target.
pub fn to_pretty_string(payload: &BatchWritePayload) -> Result<String, SeedError> {
    Ok(serde_json::to_string_pretty(payload)?)
}

/// Write `payload` to `target`.
pub fn write_payload(payload: &BatchWritePayload, target: &OutputTarget) -> Result<(), SeedError> {
    match target {
        OutputTarget::File(path) => write_file_atomic(path, payload),
        OutputTarget::Stdout => {
            let stdout = io::stdout();
            let mut out = stdout.lock();
            let path = Path::new(STDOUT_PATH);
            write_pretty(&mut out, payload, path)?;
            writeln!(out)
                .and_then(|_| out.flush())
                .map_err(|e| SeedError::io(path, e))
        }
    }
}

/// The file actually replaced: symlinks are followed so the link survives
/// and its target receives the payload.
fn resolve_destination(path: &Path) -> Result<PathBuf, SeedError> {
    match fs::symlink_metadata(path) {
        Ok(meta) if meta.file_type().is_symlink() => {
            fs::canonicalize(path).map_err(|e| SeedError::io(path, e))
        }
        _ => Ok(path.to_path_buf()),
    }
}

fn write_file_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<(), SeedError> {
    let dest = resolve_destination(path)?;

    // The rename below only needs a writable directory; refuse a target the
    // caller could not open for writing.
    if dest.exists() {
        fs::OpenOptions::new()
            .write(true)
            .open(&dest)
            .map_err(|e| SeedError::io(path, e))?;
    }

    let dir = match dest.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    // Dropping `tmp` on any early return deletes the temporary file.
    let tmp = NamedTempFile::new_in(dir).map_err(|e| SeedError::io(path, e))?;
    {
        let mut out = BufWriter::new(tmp.as_file());
        write_pretty(&mut out, value, path)?;
        out.flush().map_err(|e| SeedError::io(path, e))?;
    }
    // NamedTempFile is created owner-only; keep the target's mode, or the
    // usual 0644 for a new file.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(&dest)
            .map(|m| m.permissions().mode() & 0o7777)
            .unwrap_or(0o644);
        tmp.as_file()
            .set_permissions(fs::Permissions::from_mode(mode))
            .map_err(|e| SeedError::io(path, e))?;
    }
    tmp.as_file()
        .sync_all()
        .map_err(|e| SeedError::io(path, e))?;
    tmp.persist(&dest).map_err(|e| SeedError::io(path, e.error))?;
    Ok(())
}
