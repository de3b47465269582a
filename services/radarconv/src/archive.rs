//! Tar.gz bundling of generated rasters.

use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use flate2::write::GzEncoder;
use flate2::Compression;

/// Bundle `files` into a gzip-compressed tar at `archive_path`, storing
/// each entry relative to `base_dir`.
pub fn bundle(files: &[PathBuf], base_dir: &Path, archive_path: &Path) -> Result<()> {
    let tar_gz = File::create(archive_path)
        .with_context(|| format!("failed to create {}", archive_path.display()))?;
    let encoder = GzEncoder::new(tar_gz, Compression::default());
    let mut builder = tar::Builder::new(encoder);

    for file in files {
        let name = file.strip_prefix(base_dir).unwrap_or(file);
        builder
            .append_path_with_name(file, name)
            .with_context(|| format!("failed to add {} to archive", file.display()))?;
    }

    builder
        .into_inner()
        .context("failed to finish archive")?
        .finish()
        .context("failed to flush gzip stream")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;
    use tempfile::TempDir;

    #[test]
    fn bundle_roundtrip() {
        let dir = TempDir::new().unwrap();
        let out = dir.path().join("out");
        std::fs::create_dir_all(&out).unwrap();
        let a = out.join("x_sweep_0.png");
        let b = out.join("x_sweep_1.png");
        std::fs::write(&a, b"first").unwrap();
        std::fs::write(&b, b"second").unwrap();

        let archive_path = dir.path().join("bundle.tar.gz");
        bundle(&[a, b], &out, &archive_path).unwrap();

        let mut archive = tar::Archive::new(GzDecoder::new(File::open(&archive_path).unwrap()));
        let mut names = Vec::new();
        let mut contents = Vec::new();
        for entry in archive.entries().unwrap() {
            let mut entry = entry.unwrap();
            names.push(entry.path().unwrap().to_string_lossy().into_owned());
            let mut buf = String::new();
            entry.read_to_string(&mut buf).unwrap();
            contents.push(buf);
        }
        assert_eq!(names, vec!["x_sweep_0.png", "x_sweep_1.png"]);
        assert_eq!(contents, vec!["first", "second"]);
    }
}
