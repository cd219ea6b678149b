//! parser for tabular test case specification documents

use std::path::Path;
use tracing::debug;

use crate::language::{LoadingError, Specification};

pub mod parser;
pub mod section;
pub mod table;

/// Read a file and return an owned String. We pass that ownership back to the
/// main function so that the Specification created by parse() below can
/// borrow from it.
pub fn load(filename: &Path) -> Result<String, LoadingError<'_>> {
    match std::fs::read_to_string(filename) {
        Ok(content) => Ok(content),
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(LoadingError {
                    problem: "File not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(LoadingError {
                    problem: "Failed reading".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}

/// Parse text into a Specification. Anything unrecognizable is skipped, so
/// this cannot fail; a document without function headings yields an empty
/// Specification.
pub fn parse(content: &str) -> Specification<'_> {
    let specification = parser::parse_document(content);

    if specification.is_empty() {
        debug!("No functions found");
    } else {
        debug!(
            "Found {} function{}",
            specification.len(),
            if specification.len() == 1 { "" } else { "s" }
        );
    }

    specification
}
