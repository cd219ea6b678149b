/// Which part of a function block's table the rows currently belong to.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Section {
    None,
    Precondition,
    Input,
    Confirmation, // Return, Exception, and Database changes rows
}

/// Does this label open a new section? Checked in priority order; "Result"
/// closes whatever section was active.
pub fn trigger(label: &str) -> Option<Section> {
    if label.contains("Precondition") {
        Some(Section::Precondition)
    } else if label.contains("Input") {
        Some(Section::Input)
    } else if label.contains("Return")
        || label.contains("Exception")
        || label.contains("Database changes")
    {
        Some(Section::Confirmation)
    } else if label.contains("Result") {
        Some(Section::None)
    } else {
        None
    }
}

/// Labels that don't open a section leave the current one active.
pub fn transition(current: Section, label: &str) -> Section {
    trigger(label).unwrap_or(current)
}
