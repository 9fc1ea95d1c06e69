use std::fs;
use std::path::Path;

/// Write a file atomically: write to `<name>.tmp`, then rename to the final path.
/// Readers never observe a half-written file.
pub fn atomic_write(path: &Path, content: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file_name = path
        .file_name()
        .ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Invalid file path: {}", path.display()),
            )
        })?
        .to_string_lossy();
    let tmp_path = path.with_file_name(format!("{file_name}.tmp"));

    fs::write(&tmp_path, content)?;

    match fs::rename(&tmp_path, path) {
        Ok(()) => Ok(()),
        Err(e) => {
            // Windows refuses to rename over an existing file.
            if path.exists() {
                let retried = fs::remove_file(path).and_then(|()| fs::rename(&tmp_path, path));
                if retried.is_err() {
                    let _ = fs::remove_file(&tmp_path);
                }
                return retried;
            }
            let _ = fs::remove_file(&tmp_path);
            Err(e)
        }
    }
}

/// Recursively delete `path` if it exists.
///
/// Returns `Ok(true)` when something was removed, `Ok(false)` when there was
/// nothing to remove.
pub fn remove_dir_if_exists(path: &Path) -> std::io::Result<bool> {
    if !path.exists() {
        return Ok(false);
    }

    log::debug!("Deleting {}", path.display());
    if path.is_dir() {
        fs::remove_dir_all(path)?;
    } else {
        fs::remove_file(path)?;
    }
    Ok(true)
}
