//! Turning a Specification into test units ready for templating

mod generator;
mod scenario;

pub use generator::*;
pub use scenario::Scenario;
