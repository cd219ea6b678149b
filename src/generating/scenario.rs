use std::fmt;

/// Labels handed out to a function's test cases in turn, cycling back to
/// the start after the fifth.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scenario {
    Success,
    InvalidInput,
    NotFound,
    ValidationError,
    Boundary,
}

impl Scenario {
    const CYCLE: [Scenario; 5] = [
        Scenario::Success,
        Scenario::InvalidInput,
        Scenario::NotFound,
        Scenario::ValidationError,
        Scenario::Boundary,
    ];

    /// The label for the test case at the given 1-origin position.
    pub fn at(position: usize) -> Scenario {
        let index = position
            .saturating_sub(1)
            % Self::CYCLE.len();
        Self::CYCLE[index]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Success => "Success",
            Scenario::InvalidInput => "InvalidInput",
            Scenario::NotFound => "NotFound",
            Scenario::ValidationError => "ValidationError",
            Scenario::Boundary => "Boundary",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
