use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::Deserialize;
use tracing::{debug, error, warn};

use crate::core::{Dimension, Record, RecordMeasures};
use crate::error::{ChartError, ChartResult};

/// Raw CSV row; numeric columns stay textual until validated.
#[derive(Debug, Deserialize)]
struct RawRow<'a> {
    state: &'a str,
    abbr: &'a str,
    poverty: &'a str,
    healthcare: &'a str,
    age: &'a str,
    income: &'a str,
    smokes: &'a str,
    obesity: &'a str,
}

/// Ordered, non-empty collection of records, immutable after load.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
    by_abbr: IndexMap<String, usize>,
}

impl Dataset {
    pub fn from_records(records: Vec<Record>) -> ChartResult<Self> {
        if records.is_empty() {
            return Err(ChartError::EmptyDataset);
        }

        let mut by_abbr = IndexMap::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            if by_abbr.contains_key(&record.abbr) {
                warn!(abbr = %record.abbr, index, "duplicate abbreviation; keeping first row");
                continue;
            }
            by_abbr.insert(record.abbr.clone(), index);
        }

        Ok(Self { records, by_abbr })
    }

    /// Loads a dataset from a CSV file on disk.
    pub fn from_csv_path(path: impl AsRef<Path>) -> ChartResult<Self> {
        let path = path.as_ref();
        let source_name = path.display().to_string();
        let file = File::open(path).map_err(|err| {
            error!(source = %source_name, error = %err, "failed to open dataset");
            ChartError::DataLoad {
                source_name: source_name.clone(),
                message: err.to_string(),
            }
        })?;
        Self::from_csv_reader(file, &source_name)
    }

    pub fn from_csv_str(input: &str) -> ChartResult<Self> {
        Self::from_csv_reader(input.as_bytes(), "<inline>")
    }

    /// Parses CSV with a header row naming at least
    /// `state, abbr, poverty, healthcare, age, income, smokes, obesity`.
    ///
    /// Rows with a blank `state`/`abbr`, or numeric fields that do not parse
    /// to finite numbers, are rejected with `ChartError::InvalidRecord`.
    pub fn from_csv_reader<R: Read>(reader: R, source_name: &str) -> ChartResult<Self> {
        let load_error = |err: csv::Error| {
            error!(source = %source_name, error = %err, "failed to read dataset");
            ChartError::DataLoad {
                source_name: source_name.to_owned(),
                message: err.to_string(),
            }
        };

        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let headers = csv_reader.headers().map_err(load_error)?.clone();

        let mut records = Vec::new();
        for row in csv_reader.records() {
            let row = row.map_err(load_error)?;
            let line = row.position().map_or(0, csv::Position::line);
            let raw: RawRow<'_> = row.deserialize(Some(&headers)).map_err(load_error)?;
            records.push(parse_row(&raw, line)?);
        }

        debug!(source = %source_name, count = records.len(), "loaded dataset");
        Self::from_records(records)
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always `false` for a constructed dataset.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    #[must_use]
    pub fn find_by_abbr(&self, abbr: &str) -> Option<&Record> {
        self.by_abbr
            .get(abbr)
            .and_then(|index| self.records.get(*index))
    }

    /// Minimum and maximum of the selected measure.
    #[must_use]
    pub fn extent(&self, dimension: Dimension) -> (f64, f64) {
        self.extent_by(|record| record.value(dimension))
            .unwrap_or((0.0, 0.0))
    }

    /// Minimum and maximum of an arbitrary measure; `None` only when empty.
    pub fn extent_by(&self, field: impl Fn(&Record) -> f64) -> Option<(f64, f64)> {
        extent_of(self.records.iter().map(&field))
    }
}

pub(crate) fn extent_of(values: impl Iterator<Item = f64> + Clone) -> Option<(f64, f64)> {
    let min = values.clone().map(OrderedFloat).min()?;
    let max = values.map(OrderedFloat).max()?;
    Some((min.into_inner(), max.into_inner()))
}

fn parse_row(raw: &RawRow<'_>, line: u64) -> ChartResult<Record> {
    let measures = RecordMeasures {
        poverty: parse_measure(raw.poverty, "poverty", line)?,
        healthcare: parse_measure(raw.healthcare, "healthcare", line)?,
        age: parse_measure(raw.age, "age", line)?,
        income: parse_measure(raw.income, "income", line)?,
        smokes: parse_measure(raw.smokes, "smokes", line)?,
        obesity: parse_measure(raw.obesity, "obesity", line)?,
    };
    let state = parse_label(raw.state, "state", line)?;
    let abbr = parse_label(raw.abbr, "abbr", line)?;
    Record::new(state, abbr, measures)
}

fn parse_label<'a>(value: &'a str, field: &'static str, line: u64) -> ChartResult<&'a str> {
    if value.is_empty() {
        warn!(line, field, "rejecting row with blank label");
        return Err(ChartError::InvalidRecord {
            line,
            field,
            value: value.to_owned(),
        });
    }
    Ok(value)
}

fn parse_measure(value: &str, field: &'static str, line: u64) -> ChartResult<f64> {
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => {
            warn!(line, field, value, "rejecting row with malformed measure");
            Err(ChartError::InvalidRecord {
                line,
                field,
                value: value.to_owned(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::extent_of;

    #[test]
    fn extent_of_empty_iterator_is_none() {
        assert_eq!(extent_of(std::iter::empty::<f64>()), None);
    }

    #[test]
    fn extent_of_reports_min_and_max() {
        assert_eq!(extent_of([3.0, -1.0, 7.5].into_iter()), Some((-1.0, 7.5)));
    }
}
