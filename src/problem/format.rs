use owo_colors::OwoColorize;
use utcgen::language::{LoadingError, RenderingError, WritingError};

/// Format a LoadingError with concise single-line output
pub fn concise_loading_error<'i>(error: &LoadingError<'i>) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        detailed(&error.problem, &error.details)
            .bold()
    )
}

/// Format a WritingError with concise single-line output
pub fn concise_writing_error<'i>(error: &WritingError<'i>) -> String {
    format!(
        "{}: {}: {}",
        "error".bright_red(),
        error
            .filename
            .display(),
        detailed(&error.problem, &error.details)
            .bold()
    )
}

pub fn concise_rendering_error(error: &RenderingError) -> String {
    format!("{}: {}", "error".bright_red(), error.bold())
}

fn detailed(problem: &str, details: &str) -> String {
    if details.is_empty() {
        problem.to_string()
    } else {
        format!("{} ({})", problem, details)
    }
}
