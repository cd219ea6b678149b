//! Template trait for rendering generated test units

use crate::generating::TestUnit;
use crate::language::RenderingError;

/// Trait for templates that turn test units into test source code
pub trait Template {
    /// Render a single test unit as one test method
    fn method(&self, unit: &TestUnit) -> Result<String, RenderingError>;

    /// Wrap already rendered methods, in order, in the fixed boilerplate
    fn document(&self, methods: &[String]) -> Result<String, RenderingError>;
}
