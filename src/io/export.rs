//! PNG export into a size-limited save directory

use image::RgbImage;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::io::configuration::{CACHE_DIR_NAME, OUTPUT_EXTENSION};
use crate::io::error::{PfpError, Result};
use crate::io::progress::ProgressManager;
use crate::seed::Seed;

/// Directory receiving saved images together with its size limit
#[derive(Debug, Clone, PartialEq)]
pub struct SaveTarget {
    /// Root directory; each batch gets a subdirectory
    pub root: PathBuf,
    /// Size of `root` in megabytes beyond which saving stops
    pub limit_mb: f64,
}

impl SaveTarget {
    /// Create a save target
    pub const fn new(root: PathBuf, limit_mb: f64) -> Self {
        Self { root, limit_mb }
    }

    /// Whether the root already holds at least `limit_mb` of data
    ///
    /// # Errors
    ///
    /// Returns an error if the directory tree cannot be read
    pub fn limit_reached(&self) -> Result<bool> {
        Ok(directory_size_mb(&self.root)? >= self.limit_mb)
    }

    fn limit_error(&self) -> PfpError {
        PfpError::CacheLimit {
            path: self.root.clone(),
            limit_mb: self.limit_mb,
        }
    }
}

/// Default save root, `~/.cache/pfp-generator`
///
/// # Errors
///
/// Returns `PfpError::MissingHomeDirectory` if no home directory is known
pub fn default_cache_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".cache").join(CACHE_DIR_NAME))
        .ok_or(PfpError::MissingHomeDirectory)
}

/// File-system safe name for a batch, unique per seed
///
/// Text keeps ASCII letters, digits, `-` and `_`, everything else becomes `_`,
/// followed by the seed's short hex form. Without text the short hex form is
/// the whole name.
pub fn batch_name(text: Option<&str>, seed: &Seed) -> String {
    match text {
        Some(text) if !text.is_empty() => {
            let sanitized: String = text
                .chars()
                .map(|c| {
                    if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                        c
                    } else {
                        '_'
                    }
                })
                .collect();
            format!("{sanitized}_{}", seed.short_hex())
        }
        _ => seed.short_hex(),
    }
}

/// Write one image as PNG, creating parent directories
///
/// The image is only read, so a failed write leaves it untouched.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to `path`
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| PfpError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image.save(path).map_err(|e| PfpError::ImageExport {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save a batch as `<root>/<name>/<name>_<i>.png`, numbered from 1
///
/// Existing files are never overwritten and are not reported as written.
/// The size limit is checked before every file; once reached, saving stops.
/// Returns the paths that were written.
///
/// # Errors
///
/// Returns `PfpError::CacheLimit` if the limit is reached before any file
/// could be written, or an I/O error from reading or writing the directory
pub fn save_images(
    images: &[RgbImage],
    name: &str,
    target: &SaveTarget,
    mut progress: Option<&mut ProgressManager>,
) -> Result<Vec<PathBuf>> {
    let directory = target.root.join(name);
    let mut written = Vec::new();

    if let Some(pm) = progress.as_deref_mut() {
        pm.initialize(images.len());
    }

    for (index, image) in images.iter().enumerate() {
        if target.limit_reached()? {
            warn!(
                "Cache limit reached, clear '{}' to save more images",
                target.root.display()
            );
            if written.is_empty() {
                return Err(target.limit_error());
            }
            break;
        }

        let path = directory.join(format!("{name}_{}.{OUTPUT_EXTENSION}", index + 1));
        if path.exists() {
            info!("Keeping existing {}", path.display());
        } else {
            save_png(image, &path)?;
            written.push(path);
        }

        if let Some(pm) = progress.as_deref_mut() {
            pm.advance();
        }
    }

    if let Some(pm) = progress {
        pm.finish();
    }

    info!(
        "Saved {} profile picture(s) to {}",
        written.len(),
        directory.display()
    );
    Ok(written)
}

/// Total size of regular files below `directory`, in megabytes
///
/// A missing directory counts as empty.
///
/// # Errors
///
/// Returns `PfpError::FileSystem` if an existing directory cannot be read
pub fn directory_size_mb(directory: &Path) -> Result<f64> {
    if !directory.exists() {
        return Ok(0.0);
    }
    Ok(directory_size_bytes(directory)? as f64 / 1024.0 / 1024.0)
}

fn directory_size_bytes(directory: &Path) -> Result<u64> {
    let read_error = |e: std::io::Error| PfpError::FileSystem {
        path: directory.to_path_buf(),
        operation: "read directory",
        source: e,
    };

    let mut total = 0;
    for entry in fs::read_dir(directory).map_err(read_error)? {
        let path = entry.map_err(read_error)?.path();
        if path.is_dir() {
            total += directory_size_bytes(&path)?;
        } else if let Ok(metadata) = path.metadata() {
            total += metadata.len();
        }
    }
    Ok(total)
}
