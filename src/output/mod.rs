//! Writing the generated document to its destination

use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

use crate::language::WritingError;

/// Write the whole document in one go. A filename of "-" means standard
/// output.
pub fn write<'i>(filename: &'i Path, content: &str) -> Result<(), WritingError<'i>> {
    let result = if filename.to_str() == Some("-") {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(content.as_bytes())
            .and_then(|_| stdout.flush())
    } else {
        std::fs::write(filename, content)
    };

    match result {
        Ok(()) => {
            info!("Wrote {} bytes to {}", content.len(), filename.display());
            Ok(())
        }
        Err(error) => {
            debug!(?error);
            match error.kind() {
                std::io::ErrorKind::NotFound => Err(WritingError {
                    problem: "Directory not found".to_string(),
                    details: String::new(),
                    filename,
                }),
                _ => Err(WritingError {
                    problem: "Failed writing".to_string(),
                    details: error
                        .kind()
                        .to_string(),
                    filename,
                }),
            }
        }
    }
}
