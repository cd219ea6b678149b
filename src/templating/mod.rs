//! Templates for rendering generated test units into a source file

mod mstest;
mod template;

pub use mstest::MsTest;
pub use template::Template;

use crate::generating::TestUnit;
use crate::language::RenderingError;

/// Render every test unit as a method, then wrap them all in the document
/// boilerplate of the specified template.
pub fn fill(template: &impl Template, units: &[TestUnit]) -> Result<String, RenderingError> {
    let methods = units
        .iter()
        .map(|unit| template.method(unit))
        .collect::<Result<Vec<String>, RenderingError>>()?;

    template.document(&methods)
}
