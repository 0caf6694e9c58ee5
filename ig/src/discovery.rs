//! Seed template discovery

use log::debug;
use std::fs;
use std::path::Path;

use crate::GenerateError;

/// List entries of `dir` whose name starts with `prefix`.
///
/// Flat listing only. Names are sorted so every run visits seeds in the same
/// order. Entries whose names are not valid UTF-8 are skipped.
pub fn discover(dir: &Path, prefix: &str) -> Result<Vec<String>, GenerateError> {
    let access = |source: std::io::Error| GenerateError::DirectoryAccess {
        dir: dir.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in fs::read_dir(dir).map_err(access)? {
        let entry = entry.map_err(access)?;
        if let Some(name) = entry.file_name().to_str()
            && name.starts_with(prefix)
        {
            names.push(name.to_string());
        }
    }

    names.sort();
    debug!("discover: {} seed(s) matching '{}' in {}", names.len(), prefix, dir.display());
    Ok(names)
}
