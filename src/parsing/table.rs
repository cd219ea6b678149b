//! Rows of the pipe-delimited pseudo-tables found in function blocks

/// One line of a table, split on the field separator with each cell
/// trimmed. Index 0 is whatever precedes the leading pipe (usually empty),
/// so the first meaningful cell is at index 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<'i> {
    cells: Vec<&'i str>,
}

impl<'i> Row<'i> {
    pub const SEPARATOR: char = '|';

    /// Split a line into cells, or None if it carries no tabular content.
    pub fn split(line: &'i str) -> Option<Row<'i>> {
        if !line.contains(Self::SEPARATOR) {
            return None;
        }

        let cells = line
            .split(Self::SEPARATOR)
            .map(str::trim)
            .collect();

        Some(Row { cells })
    }

    pub fn cells(&self) -> &[&'i str] {
        &self.cells
    }

    /// Rows with fewer than three cells never carry section content.
    pub fn is_complete(&self) -> bool {
        self.cells
            .len()
            >= 3
    }

    /// Markdown alignment rows like `|---|:---:|`.
    pub fn is_delimiter(&self) -> bool {
        let mut inner = self
            .cells
            .iter()
            .filter(|cell| !cell.is_empty())
            .peekable();

        inner
            .peek()
            .is_some()
            && inner.all(|cell| {
                cell.contains('-')
                    && cell
                        .chars()
                        .all(|c| c == '-' || c == ':')
            })
    }

    /// The first meaningful cell, which labels the row.
    pub fn label(&self) -> &'i str {
        self.cell(1)
    }

    /// The fourth cell, which carries the row's value.
    pub fn value(&self) -> &'i str {
        self.cell(3)
    }

    pub fn cell(&self, index: usize) -> &'i str {
        self.cells
            .get(index)
            .copied()
            .unwrap_or("")
    }
}

/// Cells left over from a spreadsheet conversion, or empty ones, which never
/// name anything.
pub fn is_placeholder(cell: &str) -> bool {
    cell.is_empty() || cell.starts_with("Unnamed")
}
