//! Generation driver: discovery × replacements → written variants

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::naming::{self, NamingScheme};
use crate::{GenerateError, discover, substitute};

/// What to substitute and how outputs are numbered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Noun the seed templates are written against
    pub canonical: String,

    /// Replacement nouns; position decides the identifier
    pub replacements: Vec<String>,

    /// File naming convention shared by seeds and outputs
    #[serde(flatten)]
    pub naming: NamingScheme,

    /// Identifier given to `replacements[0]`; later nouns count up from here
    pub first_generated_identifier: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            canonical: crate::DEFAULT_CANONICAL.to_string(),
            replacements: crate::DEFAULT_REPLACEMENTS.iter().map(|s| s.to_string()).collect(),
            naming: NamingScheme::default(),
            first_generated_identifier: crate::DEFAULT_FIRST_GENERATED_IDENTIFIER,
        }
    }
}

impl GeneratorConfig {
    /// Identifier for the replacement at `position`
    pub fn identifier_for(&self, position: usize) -> Option<u32> {
        u32::try_from(position)
            .ok()
            .and_then(|p| p.checked_add(self.first_generated_identifier))
    }

    /// Check the config can run repeatedly without touching seeds.
    ///
    /// A generated prefix that overlaps the seed prefix (`issue11` vs
    /// `issue1`) would either be rediscovered as a seed on the next run or
    /// overwrite one. Two generated prefixes that overlap each other (`issue1`
    /// vs `issue10`) can map different seeds onto the same output name.
    pub fn validate(&self) -> Result<(), GenerateError> {
        if self.canonical.is_empty() {
            return Err(GenerateError::InvalidConfig("canonical noun must not be empty".to_string()));
        }

        let seed_prefix = self.naming.seed_prefix();
        let mut generated: Vec<(String, &str)> = Vec::with_capacity(self.replacements.len());
        for (position, replacement) in self.replacements.iter().enumerate() {
            let identifier = self.identifier_for(position).ok_or_else(|| {
                GenerateError::InvalidConfig(format!("identifier overflow at replacement #{}", position))
            })?;
            let prefix = self.naming.prefix_for(identifier);
            if overlaps(&prefix, &seed_prefix) {
                return Err(GenerateError::InvalidConfig(format!(
                    "generated prefix '{}' for '{}' overlaps seed prefix '{}'",
                    prefix, replacement, seed_prefix
                )));
            }
            let clash = generated.iter().find(|(other, _)| overlaps(&prefix, other));
            if let Some((other, other_replacement)) = clash {
                return Err(GenerateError::InvalidConfig(format!(
                    "generated prefix '{}' for '{}' overlaps generated prefix '{}' for '{}'",
                    prefix, replacement, other, other_replacement
                )));
            }
            generated.push((prefix, replacement.as_str()));
        }

        Ok(())
    }
}

/// True when either prefix starts with the other
fn overlaps(a: &str, b: &str) -> bool {
    a.starts_with(b) || b.starts_with(a)
}

/// Options for a single run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    /// Compute every output but write nothing
    pub dry_run: bool,
}

/// One (seed, replacement) output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Seed the output was derived from
    pub seed: String,
    /// Destination file name
    pub name: String,
    /// Full destination path
    pub path: PathBuf,
    /// Replacement noun applied
    pub replacement: String,
    /// Identifier embedded in `name`
    pub identifier: u32,
    /// Substituted content
    pub content: String,
    /// False when produced by a dry run
    pub written: bool,
}

/// Result of a completed run
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Seeds found by discovery, in processing order
    pub seeds: Vec<String>,
    /// Outputs in the order they were produced
    pub files: Vec<GeneratedFile>,
}

impl GenerationReport {
    /// Number of files actually persisted
    pub fn written_count(&self) -> usize {
        self.files.iter().filter(|f| f.written).count()
    }
}

/// Runs the seed × replacement cross product against one directory
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Build a generator from a validated config
    pub fn new(config: GeneratorConfig) -> Result<Self, GenerateError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Seeds in `dir` this generator would expand
    pub fn seeds(&self, dir: &Path) -> Result<Vec<String>, GenerateError> {
        discover(dir, &self.config.naming.seed_prefix())
    }

    /// Generate and write every variant in `dir`
    pub fn run(&self, dir: &Path) -> Result<GenerationReport, GenerateError> {
        self.run_with(dir, &RunOptions::default())
    }

    /// Generate every variant in `dir`, stopping at the first failure.
    ///
    /// Files written before a failure stay on disk.
    pub fn run_with(&self, dir: &Path, options: &RunOptions) -> Result<GenerationReport, GenerateError> {
        let seeds = self.seeds(dir)?;
        let mut files = Vec::with_capacity(seeds.len() * self.config.replacements.len());

        for (position, replacement) in self.config.replacements.iter().enumerate() {
            // validate() guarantees every position has an identifier
            let identifier = self.config.identifier_for(position).ok_or_else(|| {
                GenerateError::InvalidConfig(format!("identifier overflow at replacement #{}", position))
            })?;
            debug!("run_with: '{}' -> '{}' as {}", self.config.canonical, replacement, identifier);

            for seed in &seeds {
                let seed_path = dir.join(seed);
                let original = fs::read_to_string(&seed_path).map_err(|source| GenerateError::Read {
                    path: seed_path.clone(),
                    source,
                })?;

                let content = substitute(&original, &self.config.canonical, replacement);
                let name = naming::compute_name(seed, &self.config.naming, identifier);

                let path = if options.dry_run {
                    dir.join(&name)
                } else {
                    naming::write(dir, &name, &content)?
                };

                files.push(GeneratedFile {
                    seed: seed.clone(),
                    name,
                    path,
                    replacement: replacement.clone(),
                    identifier,
                    content,
                    written: !options.dry_run,
                });
            }
        }

        let report = GenerationReport { seeds, files };
        info!(
            "Generated {} file(s) from {} seed(s) x {} replacement(s) in {}{}",
            report.files.len(),
            report.seeds.len(),
            self.config.replacements.len(),
            dir.display(),
            if options.dry_run { " (dry run)" } else { "" }
        );
        Ok(report)
    }
}
