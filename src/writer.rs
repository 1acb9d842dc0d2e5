#![doc = r#"
Persisting encoded files

This is the only part of the crate that touches the filesystem. Bytes are
written verbatim to a sibling temporary file which is then renamed over the
destination, so a reader never observes a half-written fixture.
"#]
use std::{
    ffi::OsString,
    fs, io,
    path::{Path, PathBuf},
    vec::Vec,
};

use thiserror::Error;

use crate::{EncodeError, EncodeResult, fixtures::Fixture, prelude::Validation};

/// A failure while generating or writing fixtures.
#[derive(Debug, Error)]
pub enum WriteError {
    /// The filesystem refused the write.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    /// A fixture could not be encoded; nothing was written.
    #[error("Could not encode fixture: {0}")]
    Encode(#[from] EncodeError),
}

/// Writes `bytes` to `path`, creating the parent directory first.
pub fn write_fixture(path: impl AsRef<Path>, bytes: &[u8]) -> Result<(), WriteError> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let tmp = temp_path(path);
    log::debug!("writing {} bytes to {}", bytes.len(), tmp.display());
    if let Err(e) = fs::write(&tmp, bytes).and_then(|_| fs::rename(&tmp, path)) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    log::info!("wrote {}", path.display());
    Ok(())
}

/// Encodes every fixture, then writes each one into `dir`.
///
/// Returns the written paths in input order.
pub fn write_fixtures(
    dir: impl AsRef<Path>,
    fixtures: &[Fixture],
    validation: Validation,
) -> Result<Vec<PathBuf>, WriteError> {
    write_all(
        dir,
        fixtures
            .iter()
            .map(|f| (f.file_name(), f.builder().validation(validation).build())),
    )
}

/// Writes named encoding results into `dir`.
///
/// Every result is checked before any file is touched, so a single encoding
/// failure leaves `dir` as it was.
pub fn write_all<'a, I>(dir: impl AsRef<Path>, files: I) -> Result<Vec<PathBuf>, WriteError>
where
    I: IntoIterator<Item = (&'a str, EncodeResult<Vec<u8>>)>,
{
    let dir = dir.as_ref();
    let encoded = files
        .into_iter()
        .map(|(name, bytes)| bytes.map(|b| (dir.join(name), b)))
        .collect::<Result<Vec<_>, _>>()?;

    let mut written = Vec::with_capacity(encoded.len());
    for (path, bytes) in encoded {
        write_fixture(&path, &bytes)?;
        written.push(path);
    }
    Ok(written)
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("fixture"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[test]
fn temp_path_is_a_sibling() {
    assert_eq!(
        temp_path(Path::new("out/simple_melody.mid")),
        PathBuf::from("out/simple_melody.mid.tmp")
    );
}
