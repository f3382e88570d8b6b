//! Portfolio document model.
//!
//! A portfolio is one markdown file split into named sections by its
//! level-1/level-2 headings. Section ids are heading slugs and serve as
//! the navigation association keys and the addressable fragments.

mod parser;
mod types;

pub use types::{BodyLine, LineType, Portfolio, Section};

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PortfolioError {
    #[error("failed to read portfolio {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("portfolio has no sections (add a level-1 or level-2 heading)")]
    NoSections,
}

impl Portfolio {
    /// Parse portfolio markdown into sections.
    ///
    /// # Errors
    ///
    /// Returns [`PortfolioError::NoSections`] when the source contains
    /// no section headings.
    pub fn parse(source: &str) -> Result<Self, PortfolioError> {
        parser::parse(source)
    }

    /// Read and parse a portfolio file.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read or contains no
    /// sections.
    pub fn load(path: &Path) -> Result<Self, PortfolioError> {
        let source = std::fs::read_to_string(path).map_err(|source| PortfolioError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        parser::parse(&source)
    }
}
