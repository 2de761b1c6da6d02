// src/filesystem.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use crate::error::{AppError, Result};

/// Read the whole file as UTF-8 text.
pub fn read_contents(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| AppError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Replace the file at `path` with `contents` via a temp file and rename.
pub fn write_contents(path: &Path, contents: &str) -> Result<()> {
    atomic_write(path, contents.as_bytes()).map_err(|source| AppError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}

fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    // Same directory as the target so the rename stays on one filesystem.
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

    let written = (|| -> std::io::Result<()> {
        let mut w = BufWriter::new(File::create(&tmp)?);
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();
        Ok(())
    })();
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    #[cfg(unix)]
    {
        if let Ok(dir) = File::open(parent) {
            let _ = dir.sync_all();
        }
    }

    Ok(())
}
