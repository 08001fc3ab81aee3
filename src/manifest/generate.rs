//! Manifest generation
//!
//! Lists the images in a photo directory and writes `manifest.json`
//! next to them. Run it whenever photos are added or removed.

use chrono::{SecondsFormat, Utc};
use std::path::Path;
use tracing::{debug, info};
use walkdir::WalkDir;

use super::Manifest;
use crate::catalog::is_image_file;
use crate::error::ManifestError;

pub const MANIFEST_FILE_NAME: &str = "manifest.json";

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ManifestError + '_ {
    move |source| ManifestError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Image filenames directly inside `photos_dir`, sorted by name
pub fn list_photos(photos_dir: &Path) -> Result<Vec<String>, ManifestError> {
    let mut photos = Vec::new();

    // Only the directory itself; subfolders aren't served as photos
    for entry in WalkDir::new(photos_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|err| {
            let path = err.path().unwrap_or(photos_dir).to_path_buf();
            ManifestError::Io {
                path,
                source: err.into(),
            }
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let filename = entry.file_name().to_string_lossy().to_string();
        if is_image_file(&filename) && filename != MANIFEST_FILE_NAME {
            photos.push(filename);
        } else {
            debug!(%filename, "not a photo, leaving out of manifest");
        }
    }

    // Timestamped names sort chronologically
    photos.sort();
    Ok(photos)
}

/// Write `manifest.json` for every image in `photos_dir`.
///
/// The directory is created if it doesn't exist yet, producing an
/// empty manifest.
pub fn generate_manifest(photos_dir: &Path) -> Result<Manifest, ManifestError> {
    if !photos_dir.exists() {
        std::fs::create_dir_all(photos_dir).map_err(io_error(photos_dir))?;
        info!(dir = %photos_dir.display(), "created photos directory");
    }

    let photos = list_photos(photos_dir)?;
    let manifest = Manifest {
        count: Some(photos.len()),
        generated: Some(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)),
        photos,
    };

    let manifest_path = photos_dir.join(MANIFEST_FILE_NAME);
    std::fs::write(&manifest_path, manifest.to_json_pretty()?)
        .map_err(io_error(&manifest_path))?;

    info!(
        photos = manifest.photos.len(),
        path = %manifest_path.display(),
        "generated manifest"
    );
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_lists_images_sorted() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "20240615-10-00-00-hills.jpg");
        touch(dir.path(), "20240101-12-00-00-beach.JPG");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), MANIFEST_FILE_NAME);
        fs::create_dir(dir.path().join("drafts.jpg")).unwrap();
        touch(&dir.path().join("drafts.jpg"), "20230101-IMG.jpg");

        let photos = list_photos(dir.path()).unwrap();
        assert_eq!(
            photos,
            vec!["20240101-12-00-00-beach.JPG", "20240615-10-00-00-hills.jpg"]
        );
    }

    #[test]
    fn test_writes_manifest_file() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "20240615-IMG_0001.png");

        let manifest = generate_manifest(dir.path()).unwrap();
        assert_eq!(manifest.count, Some(1));
        assert!(manifest.generated.as_deref().unwrap().ends_with('Z'));

        let written = fs::read(dir.path().join(MANIFEST_FILE_NAME)).unwrap();
        assert_eq!(Manifest::from_json(&written).unwrap(), manifest);

        // Regenerating doesn't list the manifest itself
        let again = generate_manifest(dir.path()).unwrap();
        assert_eq!(again.photos, vec!["20240615-IMG_0001.png"]);
    }

    #[test]
    fn test_creates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let photos_dir = dir.path().join("public").join("photos");

        let manifest = generate_manifest(&photos_dir).unwrap();
        assert!(manifest.photos.is_empty());
        assert_eq!(manifest.count, Some(0));
        assert!(photos_dir.join(MANIFEST_FILE_NAME).exists());
    }
}
