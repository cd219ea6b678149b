use tracing::debug;

use crate::language::*;
use crate::parsing::section::{self, Section};
use crate::parsing::table::{is_placeholder, Row};

macro_rules! regex {
    ($pattern:expr) => {{
        use std::sync::OnceLock;
        static REGEX: OnceLock<::regex::Regex> = OnceLock::new();
        REGEX.get_or_init(|| ::regex::Regex::new($pattern).unwrap_or_else(|e| panic!("{}", e)))
    }};
}

const FUNCTION_NAME: &str = "Function Name";
const CREATED_BY: &str = "Created By";
const TEST_REQUIREMENT: &str = "Test requirement";

/// Build the Specification for a whole document, one record per `## FUNC_n`
/// heading. Never fails; content that isn't recognized is skipped.
pub fn parse_document(content: &str) -> Specification<'_> {
    let mut specification = Specification::new();

    for (number, block) in split_blocks(content) {
        let record = parse_block(number, block);

        debug!(
            key = %record.key(),
            name = record.name,
            cases = record.total_test_cases(),
            inputs = record
                .inputs
                .len()
        );

        specification.insert(record);
    }

    specification
}

/// Divide a document into (number, body) pairs. Each body runs from the
/// end of its heading line to the next heading or to the end of input;
/// anything before the first heading is ignored.
pub fn split_blocks(content: &str) -> Vec<(&str, &str)> {
    let re = regex!(r"(?m)^##[ \t]*FUNC_([0-9]+)[ \t]*\r?$");

    let mut blocks = Vec::new();
    let mut previous: Option<(&str, usize)> = None;

    for captures in re.captures_iter(content) {
        let (Some(heading), Some(number)) = (captures.get(0), captures.get(1)) else {
            continue;
        };

        if let Some((number, start)) = previous {
            blocks.push((number, &content[start..heading.start()]));
        }
        previous = Some((number.as_str(), heading.end()));
    }

    if let Some((number, start)) = previous {
        blocks.push((number, &content[start..]));
    }

    blocks
}

pub fn parse_block<'i>(number: &'i str, content: &'i str) -> FunctionRecord<'i> {
    Parser::new(number).read_block(content)
}

/// Parsing state for a single function block: the active section and the
/// input parameter that values are currently being collected for.
#[derive(Debug)]
pub struct Parser<'i> {
    section: Section,
    parameter: Option<&'i str>,
    record: FunctionRecord<'i>,
}

impl<'i> Parser<'i> {
    pub fn new(number: &'i str) -> Parser<'i> {
        Parser {
            section: Section::None,
            parameter: None,
            record: FunctionRecord::new(number),
        }
    }

    pub fn section(&self) -> Section {
        self.section
    }

    pub fn read_block(mut self, content: &'i str) -> FunctionRecord<'i> {
        self.record.name = find_labelled(content, FUNCTION_NAME).unwrap_or("");
        self.record.created_by = find_labelled(content, CREATED_BY).unwrap_or("");
        self.record.test_requirement = find_requirement(content).unwrap_or("");
        self.record.test_case_ids = find_test_case_ids(content);

        for line in content.lines() {
            if let Some(row) = Row::split(line) {
                self.read_row(&row);
            }
        }

        self.record
    }

    /// Feed one row through the section state machine and collect whatever
    /// it contributes to the active section.
    pub fn read_row(&mut self, row: &Row<'i>) {
        if !row.is_complete() || row.is_delimiter() {
            return;
        }

        let label = row.label();
        let value = row.value();

        self.enter(section::transition(self.section, label));

        match self.section {
            Section::None => {}
            Section::Precondition => {
                if !value.is_empty() {
                    self.record
                        .preconditions
                        .push(value);
                }
            }
            Section::Input => self.read_input(label, value),
            Section::Confirmation => self.read_confirmation(label, value),
        }
    }

    fn enter(&mut self, next: Section) {
        if next != self.section {
            self.section = next;
            self.parameter = None;
        }
    }

    fn read_input(&mut self, label: &'i str, value: &'i str) {
        if section::trigger(label).is_none() && !is_placeholder(label) {
            self.record
                .inputs
                .declare(label);
            self.parameter = Some(label);
        }

        if value.is_empty() {
            return;
        }

        // values before any parameter is declared are dropped
        if let Some(name) = self.parameter {
            self.record
                .inputs
                .append(name, value);
        }
    }

    fn read_confirmation(&mut self, label: &'i str, value: &'i str) {
        if value.is_empty() {
            return;
        }

        if label.contains("Exception") {
            self.record
                .exceptions
                .push(value);
        } else if label.contains("Return")
            || label
                .to_lowercase()
                .contains("result")
        {
            self.record
                .expected_returns
                .push(value);
        } else if label.contains("Database changes") {
            self.record
                .database_changes
                .push(value);
        }
    }
}

/// In the first row mentioning `marker`, the first real cell after the
/// marker cell.
pub fn find_labelled<'i>(content: &'i str, marker: &str) -> Option<&'i str> {
    let row = content
        .lines()
        .filter(|line| line.contains(marker))
        .find_map(Row::split)?;

    let cells = row.cells();
    let position = cells
        .iter()
        .position(|cell| cell.contains(marker))?;

    cells[position + 1..]
        .iter()
        .copied()
        .find(|cell| !is_placeholder(cell) && *cell != marker)
}

/// In the first row mentioning the test requirement, the first real cell
/// other than the marker itself.
pub fn find_requirement(content: &str) -> Option<&str> {
    let row = content
        .lines()
        .filter(|line| line.contains(TEST_REQUIREMENT))
        .find_map(Row::split)?;

    row.cells()
        .iter()
        .copied()
        .find(|cell| !is_placeholder(cell) && !cell.contains(TEST_REQUIREMENT))
}

/// Every identifier on the first line mentioning UTCID, ordered by number.
/// Later lines are not consulted.
pub fn find_test_case_ids(content: &str) -> Vec<TestCaseId<'_>> {
    let re = regex!(r"UTCID[0-9]+");

    let line = match content
        .lines()
        .find(|line| line.contains(TestCaseId::PREFIX))
    {
        Some(line) => line,
        None => return Vec::new(),
    };

    let mut ids: Vec<TestCaseId> = re
        .find_iter(line)
        .map(|m| TestCaseId(m.as_str()))
        .collect();

    ids.sort_by(|a, b| a.numeric_cmp(b));
    ids
}
