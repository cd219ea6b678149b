use serde::Serialize;
use tracing::debug;

use super::Scenario;
use crate::language::*;

/// Stands in for the function name when a block didn't declare one.
pub const UNKNOWN_FUNCTION: &str = "UnknownFunction";

/// One generated test routine, still as statement lines without any
/// indentation; templates decide the layout.
#[derive(Eq, Debug, PartialEq, Clone, Serialize)]
pub struct TestUnit {
    pub name: String,
    pub arrange: Vec<String>,
    pub expect: Vec<String>,
}

/// What a generated test should check, taken from the function as a whole
/// rather than from the individual test case.
#[derive(Eq, Debug, PartialEq, Clone, Copy)]
pub enum Expectation<'i> {
    Exception(&'i str),
    Return(&'i str),
    Unspecified,
}

impl Expectation<'_> {
    pub fn lines(&self) -> Vec<String> {
        match self {
            Expectation::Exception(exception) => vec![
                format!("// Expected exception: {}", exception),
                "// await Assert.ThrowsExceptionAsync<ApiException>(() => service.Method(params));"
                    .to_string(),
            ],
            Expectation::Return(value) => vec![
                format!("// Expected return: {}", value),
                "// var result = await service.Method(params);".to_string(),
                "// Assert.IsNotNull(result);".to_string(),
            ],
            Expectation::Unspecified => {
                vec!["// TODO: Add specific assertions based on test requirements".to_string()]
            }
        }
    }
}

/// One unit per test case id of every function, in document order.
pub fn generate(specification: &Specification) -> Vec<TestUnit> {
    let units: Vec<TestUnit> = specification
        .functions
        .iter()
        .flat_map(|record| {
            record
                .test_case_ids
                .iter()
                .enumerate()
                .map(move |(index, id)| generate_unit(record, *id, index + 1))
        })
        .collect();

    debug!(
        "Generated {} test unit{}",
        units.len(),
        if units.len() == 1 { "" } else { "s" }
    );

    units
}

pub fn generate_unit(record: &FunctionRecord, id: TestCaseId, position: usize) -> TestUnit {
    TestUnit {
        name: test_name(record, id, position),
        arrange: arrange(record, position),
        expect: expectation(record).lines(),
    }
}

pub fn test_name(record: &FunctionRecord, id: TestCaseId, position: usize) -> String {
    let name = if record
        .name
        .is_empty()
    {
        UNKNOWN_FUNCTION
    } else {
        record.name
    };

    format!("{}_{}_{}_{}", record.key(), id, name, Scenario::at(position))
}

/// Assignment statements for each input parameter that has a value, or a
/// marker line if there are none.
pub fn arrange(record: &FunctionRecord, position: usize) -> Vec<String> {
    let lines: Vec<String> = record
        .inputs
        .iter()
        .filter_map(|parameter| {
            let value = parameter.value_at(position)?;
            Some(format!(
                "var {} = {};",
                parameter
                    .name
                    .to_lowercase(),
                coerce(value)
            ))
        })
        .collect();

    if lines.is_empty() {
        vec!["// No input parameters defined".to_string()]
    } else {
        lines
    }
}

/// Exceptions take precedence over returns; only the first of either is
/// used.
pub fn expectation<'i>(record: &FunctionRecord<'i>) -> Expectation<'i> {
    if let Some(exception) = record
        .exceptions
        .first()
        .copied()
    {
        Expectation::Exception(exception)
    } else if let Some(value) = record
        .expected_returns
        .first()
        .copied()
    {
        Expectation::Return(value)
    } else {
        Expectation::Unspecified
    }
}
