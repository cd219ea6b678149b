// Types representing test case specifications and the literals in them

mod error;
mod literal;
mod types;

// Re-export all public symbols
pub use error::*;
pub use literal::*;
pub use types::*;
