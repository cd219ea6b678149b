//! Types representing the test case specifications found in a document

use std::cmp::Ordering;

use serde::Serialize;

/// All the function blocks found in a source document, in the order their
/// headings appeared.
#[derive(Eq, Debug, PartialEq, Default, Serialize)]
pub struct Specification<'i> {
    pub functions: Vec<FunctionRecord<'i>>,
}

impl<'i> Specification<'i> {
    pub fn new() -> Specification<'i> {
        Specification {
            functions: Vec::new(),
        }
    }

    /// Add a record. A later block with the same key replaces the earlier one
    /// but keeps its position.
    pub fn insert(&mut self, record: FunctionRecord<'i>) {
        let key = record.key();

        match self
            .functions
            .iter_mut()
            .find(|existing| existing.key() == key)
        {
            Some(existing) => *existing = record,
            None => self
                .functions
                .push(record),
        }
    }

    pub fn get(&self, key: &str) -> Option<&FunctionRecord<'i>> {
        self.functions
            .iter()
            .find(|record| record.key() == key)
    }

    pub fn len(&self) -> usize {
        self.functions
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.functions
            .is_empty()
    }
}

#[derive(Eq, Debug, PartialEq, Default, Serialize)]
pub struct FunctionRecord<'i> {
    /// The digits following `FUNC_` in the heading, as written.
    pub number: &'i str,
    pub name: &'i str,
    pub created_by: &'i str,
    pub test_requirement: &'i str,
    pub test_case_ids: Vec<TestCaseId<'i>>,
    pub preconditions: Vec<&'i str>,
    pub inputs: Inputs<'i>,
    pub expected_returns: Vec<&'i str>,
    pub exceptions: Vec<&'i str>,
    pub database_changes: Vec<&'i str>,
}

impl<'i> FunctionRecord<'i> {
    pub fn new(number: &'i str) -> FunctionRecord<'i> {
        FunctionRecord {
            number,
            ..Default::default()
        }
    }

    pub fn key(&self) -> String {
        format!("FUNC_{}", self.number)
    }

    pub fn total_test_cases(&self) -> usize {
        self.test_case_ids
            .len()
    }
}

/// A test case identifier, for example `UTCID3`. Holds the whole matched
/// text; the numeric suffix is used for ordering.
#[derive(Eq, Debug, PartialEq, Clone, Copy, Serialize)]
#[serde(transparent)]
pub struct TestCaseId<'i>(pub &'i str);

impl<'i> TestCaseId<'i> {
    pub const PREFIX: &'static str = "UTCID";

    pub fn digits(&self) -> &'i str {
        self.0
            .strip_prefix(Self::PREFIX)
            .unwrap_or(self.0)
    }

    /// Compare by numeric suffix without converting, so that arbitrarily
    /// long suffixes and leading zeros order correctly.
    pub fn numeric_cmp(&self, other: &TestCaseId) -> Ordering {
        let a = self
            .digits()
            .trim_start_matches('0');
        let b = other
            .digits()
            .trim_start_matches('0');

        a.len()
            .cmp(&b.len())
            .then_with(|| a.cmp(b))
    }
}

impl std::fmt::Display for TestCaseId<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}

/// Input parameters in declaration order, each with the raw values listed
/// beneath it.
#[derive(Eq, Debug, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Inputs<'i>(pub Vec<Parameter<'i>>);

#[derive(Eq, Debug, PartialEq, Serialize)]
pub struct Parameter<'i> {
    pub name: &'i str,
    pub values: Vec<&'i str>,
}

impl<'i> Inputs<'i> {
    /// Start a parameter with no values. Declaring a name again discards
    /// the values collected so far but keeps the original position.
    pub fn declare(&mut self, name: &'i str) {
        match self
            .0
            .iter_mut()
            .find(|parameter| parameter.name == name)
        {
            Some(parameter) => parameter
                .values
                .clear(),
            None => self
                .0
                .push(Parameter {
                    name,
                    values: Vec::new(),
                }),
        }
    }

    pub fn append(&mut self, name: &str, value: &'i str) {
        if let Some(parameter) = self
            .0
            .iter_mut()
            .find(|parameter| parameter.name == name)
        {
            parameter
                .values
                .push(value);
        }
    }

    pub fn get(&self, name: &str) -> Option<&[&'i str]> {
        self.0
            .iter()
            .find(|parameter| parameter.name == name)
            .map(|parameter| parameter.values.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter<'i>> {
        self.0
            .iter()
    }

    pub fn len(&self) -> usize {
        self.0
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.0
            .is_empty()
    }
}

impl<'i> Parameter<'i> {
    /// The value for the given 1-origin test position. When fewer values
    /// were declared than there are test cases the last one repeats.
    pub fn value_at(&self, position: usize) -> Option<&'i str> {
        let last = self
            .values
            .len()
            .checked_sub(1)?;
        let index = position
            .saturating_sub(1)
            .min(last);
        Some(self.values[index])
    }
}
