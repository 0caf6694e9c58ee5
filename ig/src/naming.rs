//! Output file naming and writing

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::GenerateError;

/// How seed and generated file names encode their identifier
///
/// A name is `{prefix_word}{identifier}{rest}`, e.g. `issue10.txt` is the seed
/// set (identifier 1) with rest `0.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingScheme {
    /// Word preceding the identifier
    pub prefix_word: String,
    /// Identifier embedded in seed names
    pub seed_identifier: u32,
}

impl Default for NamingScheme {
    fn default() -> Self {
        Self {
            prefix_word: crate::DEFAULT_PREFIX_WORD.to_string(),
            seed_identifier: crate::DEFAULT_SEED_IDENTIFIER,
        }
    }
}

impl NamingScheme {
    /// Prefix written into file names for `identifier`
    pub fn prefix_for(&self, identifier: u32) -> String {
        format!("{}{}", self.prefix_word, identifier)
    }

    /// Discovery prefix selecting seed templates
    pub fn seed_prefix(&self) -> String {
        self.prefix_for(self.seed_identifier)
    }
}

/// Derive the destination name for `seed_name` under `identifier`.
///
/// Only the first occurrence of the seed prefix is rewritten, which for a
/// discovered seed is the leading one.
pub fn compute_name(seed_name: &str, scheme: &NamingScheme, identifier: u32) -> String {
    seed_name.replacen(&scheme.seed_prefix(), &scheme.prefix_for(identifier), 1)
}

/// Create or fully overwrite `dir/name` with `content`.
pub fn write(dir: &Path, name: &str, content: &str) -> Result<PathBuf, GenerateError> {
    let path = dir.join(name);
    fs::write(&path, content).map_err(|source| GenerateError::Write {
        path: path.clone(),
        source,
    })?;
    debug!("write: {} ({} bytes)", path.display(), content.len());
    Ok(path)
}
