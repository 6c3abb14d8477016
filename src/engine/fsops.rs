use std::fs;
use std::io;
use std::path::Path;

use crate::common::errors::FileOpError;

/// Byte-for-byte copy of `src` to `dst`.
///
/// `src` must exist and `dst` must not. A failed transfer removes the
/// partial destination so an interrupted run cannot leave a truncated file
/// that looks complete.
pub fn copy_file(src: &Path, dst: &Path) -> Result<(), FileOpError> {
    if !src.exists() {
        return Err(FileOpError::SourceMissing {
            path: src.to_path_buf(),
        });
    }
    if dst.exists() {
        return Err(FileOpError::DestinationExists {
            path: dst.to_path_buf(),
        });
    }

    if let Err(err) = fs::copy(src, dst) {
        let _ = fs::remove_file(dst);
        return Err(FileOpError::Io {
            action: "copy",
            path: src.to_path_buf(),
            source: err,
        });
    }
    Ok(())
}

/// Move `src` to `dst`, renaming where possible and falling back to
/// copy-then-delete for cross-filesystem moves. Directories move whole.
///
/// Same preconditions as [`copy_file`]: the source must exist and the
/// destination name must be free.
pub fn move_file(src: &Path, dst: &Path) -> Result<(), FileOpError> {
    if !src.exists() {
        return Err(FileOpError::SourceMissing {
            path: src.to_path_buf(),
        });
    }
    if dst.exists() {
        return Err(FileOpError::DestinationExists {
            path: dst.to_path_buf(),
        });
    }

    if fs::rename(src, dst).is_ok() {
        return Ok(());
    }

    // Rename failed, likely a device boundary. Copy across, then delete.
    if src.is_dir() {
        if let Err(err) = copy_dir_recursive(src, dst) {
            let _ = fs::remove_dir_all(dst);
            return Err(FileOpError::Io {
                action: "copy",
                path: src.to_path_buf(),
                source: err,
            });
        }
        fs::remove_dir_all(src).map_err(|source| FileOpError::Io {
            action: "remove",
            path: src.to_path_buf(),
            source,
        })?;
    } else {
        if let Err(err) = fs::copy(src, dst) {
            let _ = fs::remove_file(dst);
            return Err(FileOpError::Io {
                action: "copy",
                path: src.to_path_buf(),
                source: err,
            });
        }
        fs::remove_file(src).map_err(|source| FileOpError::Io {
            action: "remove",
            path: src.to_path_buf(),
            source,
        })?;
    }

    Ok(())
}

/// Delete `src`. Files are unlinked; directories go with their contents.
/// An already-absent path is a satisfied no-op, which lets a rule match a
/// directory and the files inside it without tripping over itself.
pub fn remove_path(src: &Path) -> Result<(), FileOpError> {
    if !src.exists() {
        return Ok(());
    }

    let result = if src.is_dir() {
        fs::remove_dir_all(src)
    } else {
        fs::remove_file(src)
    };

    result.map_err(|source| FileOpError::Io {
        action: "remove",
        path: src.to_path_buf(),
        source,
    })
}

/// Recursively copy a directory tree.
fn copy_dir_recursive(src: &Path, dst: &Path) -> io::Result<()> {
    fs::create_dir_all(dst)?;

    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let src_path = entry.path();
        let dst_path = dst.join(entry.file_name());

        if src_path.is_dir() {
            copy_dir_recursive(&src_path, &dst_path)?;
        } else {
            fs::copy(&src_path, &dst_path)?;
        }
    }

    Ok(())
}
