//! IssueGen - seed template expansion
//!
//! Takes a flat directory of seed templates that all mention one canonical
//! noun and writes one derived copy of every seed per replacement noun. The
//! derived copy has the noun substituted (as given and lowercased) and its file
//! name renumbered to encode the replacement's position in the list.
//!
//! # Layout
//!
//! ```text
//! issues/
//! ├── issue10.txt      # seed (identifier 1)
//! ├── issue11.txt      # seed (identifier 1)
//! ├── issue20.txt      # generated, first replacement
//! ├── issue21.txt
//! ├── issue30.txt      # generated, second replacement
//! └── ...
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! use issuegen::{GenerateError, Generator, GeneratorConfig};
//!
//! fn main() -> Result<(), GenerateError> {
//!     let generator = Generator::new(GeneratorConfig::default())?;
//!     let report = generator.run(Path::new("issues"))?;
//!     println!("{} files written", report.written_count());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
mod discovery;
mod error;
mod generator;
mod naming;
mod substitute;

pub use discovery::discover;
pub use error::GenerateError;
pub use generator::{GeneratedFile, GenerationReport, Generator, GeneratorConfig, RunOptions};
pub use naming::{NamingScheme, compute_name, write};
pub use substitute::substitute;

/// Canonical noun the stock seed templates are written against
pub const DEFAULT_CANONICAL: &str = "Restaurant";

/// Replacement nouns generated by default, in identifier order
pub const DEFAULT_REPLACEMENTS: &[&str] = &["Book", "Car", "Bike", "Hotel", "Movie"];

/// File-name word that precedes the identifier
pub const DEFAULT_PREFIX_WORD: &str = "issue";

/// Identifier carried by the hand-written seed set
pub const DEFAULT_SEED_IDENTIFIER: u32 = 1;

/// Identifier assigned to the first replacement noun
pub const DEFAULT_FIRST_GENERATED_IDENTIFIER: u32 = 2;
