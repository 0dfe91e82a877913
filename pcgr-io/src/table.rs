use std::io::BufRead;
use std::path::Path;

use pcgr_core::CheckResult;
use pcgr_core::utils::get_dynamic_reader;

///
/// A tab-separated table with a header row. Rows are kept as raw strings;
/// typing them is left to the caller.
///
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TsvTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl TsvTable {
    ///
    /// Read a tab-separated file (optionally gzipped). Empty lines are skipped.
    ///
    /// # Arguments
    /// - path: the path to the table
    ///
    pub fn from_path(path: &Path) -> CheckResult<Self> {
        let reader = get_dynamic_reader(path)?;
        TsvTable::from_reader(reader)
    }

    pub fn from_reader<R: BufRead>(reader: R) -> CheckResult<Self> {
        let mut lines = reader.lines();
        let columns = match lines.next() {
            Some(header) => split_row(&header?),
            None => return Ok(TsvTable::default()),
        };

        let mut rows = Vec::new();
        for line in lines {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            rows.push(split_row(&line));
        }

        Ok(TsvTable { columns, rows })
    }

    /// Index of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn has_columns(&self, names: &[&str]) -> bool {
        names.iter().all(|name| self.column_index(name).is_some())
    }

    ///
    /// Values of one column, in row order. Short rows yield an empty string.
    ///
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(index).map(String::as_str).unwrap_or(""))
    }
}

fn split_row(line: &str) -> Vec<String> {
    line.trim_end_matches('\r')
        .split('\t')
        .map(str::to_string)
        .collect()
}
