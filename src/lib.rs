pub mod generating;
pub mod language;
pub mod output;
pub mod parsing;
pub mod templating;
