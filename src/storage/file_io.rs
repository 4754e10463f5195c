//! File I/O helpers
//!
//! Every failure is mapped to an `MdError` carrying the operation and the path
//! it happened on.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::error::{FileOp, MdError, MdResult};

/// Permission bits for files we create (owner rw, group/other r)
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Whether a write created a new file or replaced an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteOutcome {
    Created,
    Overwritten,
}

impl WriteOutcome {
    pub fn is_overwrite(self) -> bool {
        self == Self::Overwritten
    }
}

/// Read and parse a YAML file that must exist
pub fn read_yaml_required<T, P>(path: P) -> MdResult<T>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();

    let contents = fs::read_to_string(path).map_err(|e| MdError::file(FileOp::Read, path, e))?;

    serde_yaml::from_str(&contents).map_err(|source| MdError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Write text to a file, replacing any existing content
pub fn write_text<P: AsRef<Path>>(path: P, contents: &str) -> MdResult<WriteOutcome> {
    let path = path.as_ref();
    let outcome = if path.exists() {
        WriteOutcome::Overwritten
    } else {
        WriteOutcome::Created
    };

    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let mut file = options
        .open(path)
        .map_err(|e| MdError::file(FileOp::Write, path, e))?;

    file.write_all(contents.as_bytes())
        .map_err(|e| MdError::file(FileOp::Write, path, e))?;

    file.flush()
        .map_err(|e| MdError::file(FileOp::Write, path, e))?;

    Ok(outcome)
}

/// Create a directory (and parents) if it does not exist
///
/// Returns true when the directory was created by this call.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> MdResult<bool> {
    let path = path.as_ref();
    if path.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(path).map_err(|e| MdError::file(FileOp::Create, path, e))?;
    Ok(true)
}

/// Names of regular files in `dir` with the given extension, extension stripped
///
/// Order follows directory enumeration and is not sorted.
pub fn list_stems<P: AsRef<Path>>(dir: P, extension: &str) -> MdResult<Vec<String>> {
    let dir = dir.as_ref();
    let suffix = format!(".{}", extension);

    let entries = fs::read_dir(dir).map_err(|e| MdError::file(FileOp::List, dir, e))?;

    let mut stems = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| MdError::file(FileOp::List, dir, e))?;
        let file_type = entry
            .file_type()
            .map_err(|e| MdError::file(FileOp::List, entry.path(), e))?;

        if file_type.is_dir() {
            continue;
        }

        let file_name = entry.file_name();
        if let Some(stem) = file_name
            .to_str()
            .and_then(|name| name.strip_suffix(suffix.as_str()))
        {
            stems.push(stem.to_string());
        }
    }

    Ok(stems)
}
