use crate::error::CollectError;
use chrono::{DateTime, Local};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions (lowercase, without the dot) that count as images.
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    pub path: PathBuf,
    pub modified: DateTime<Local>,
}

/// Case-insensitive extension check against [`IMAGE_EXTENSIONS`].
pub fn is_image(path: &Path) -> bool {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match ext.as_deref() {
        Some(ext) => IMAGE_EXTENSIONS.contains(&ext),
        None => false,
    }
}

/// Recursively collect image files under `root` in raw walk order.
///
/// Any traversal error, including a missing root, aborts the scan.
/// Directory links are not descended into. A link to a regular file is
/// collected with its target's modification time; dangling links are ignored.
pub fn scan_images(root: &Path) -> Result<Vec<ImageFile>, CollectError> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = entry.map_err(|cause| CollectError::Walk {
            root: root.to_path_buf(),
            cause,
        })?;
        if entry.file_type().is_dir() || !is_image(entry.path()) {
            continue;
        }

        let metadata = if entry.path_is_symlink() {
            match fs::metadata(entry.path()) {
                Ok(metadata) if metadata.is_file() => metadata,
                _ => {
                    log::debug!("ignoring link {}", entry.path().display());
                    continue;
                }
            }
        } else if entry.file_type().is_file() {
            entry.metadata().map_err(|cause| CollectError::Walk {
                root: root.to_path_buf(),
                cause,
            })?
        } else {
            continue;
        };

        let modified = metadata
            .modified()
            .map_err(|cause| CollectError::Metadata {
                path: entry.path().to_path_buf(),
                cause,
            })?;

        files.push(ImageFile {
            path: entry.into_path(),
            modified: modified.into(),
        });
    }

    log::info!("found {} image(s) under {}", files.len(), root.display());
    Ok(files)
}
