use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One state row with every measure parsed to a finite number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub state: String,
    pub abbr: String,
    pub poverty: f64,
    pub healthcare: f64,
    pub age: f64,
    pub income: f64,
    pub smokes: f64,
    pub obesity: f64,
}

impl Record {
    /// Builds a record, rejecting blank names and non-finite measures.
    pub fn new(
        state: impl Into<String>,
        abbr: impl Into<String>,
        measures: RecordMeasures,
    ) -> ChartResult<Self> {
        let state = state.into();
        let abbr = abbr.into();
        if state.trim().is_empty() || abbr.trim().is_empty() {
            return Err(ChartError::InvalidData(
                "record state and abbreviation must not be blank".to_owned(),
            ));
        }
        for (field, value) in measures.named() {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(format!(
                    "record measure `{field}` must be finite"
                )));
            }
        }

        Ok(Self {
            state,
            abbr,
            poverty: measures.poverty,
            healthcare: measures.healthcare,
            age: measures.age,
            income: measures.income,
            smokes: measures.smokes,
            obesity: measures.obesity,
        })
    }

    #[must_use]
    pub fn value(&self, dimension: Dimension) -> f64 {
        match dimension {
            Dimension::Poverty => self.poverty,
            Dimension::Obesity => self.obesity,
        }
    }
}

/// Numeric measures of a record, grouped so constructors stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RecordMeasures {
    pub poverty: f64,
    pub healthcare: f64,
    pub age: f64,
    pub income: f64,
    pub smokes: f64,
    pub obesity: f64,
}

impl RecordMeasures {
    fn named(self) -> [(&'static str, f64); 6] {
        [
            ("poverty", self.poverty),
            ("healthcare", self.healthcare),
            ("age", self.age),
            ("income", self.income),
            ("smokes", self.smokes),
            ("obesity", self.obesity),
        ]
    }
}

/// Selectable horizontal measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Dimension {
    #[default]
    Poverty,
    Obesity,
}

impl Dimension {
    pub const ALL: [Dimension; 2] = [Dimension::Poverty, Dimension::Obesity];

    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Poverty => "poverty",
            Self::Obesity => "obesity",
        }
    }

    /// Text of the clickable axis label.
    #[must_use]
    pub const fn axis_label(self) -> &'static str {
        match self {
            Self::Poverty => "In Poverty (%)",
            Self::Obesity => "Obesity (%)",
        }
    }

    #[must_use]
    pub const fn tooltip_label(self) -> &'static str {
        match self {
            Self::Poverty => "Poverty",
            Self::Obesity => "Obesity",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Dimension {
    type Err = ChartError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "poverty" => Ok(Self::Poverty),
            "obesity" => Ok(Self::Obesity),
            other => Err(ChartError::InvalidData(format!(
                "unknown dimension `{other}`; expected `poverty` or `obesity`"
            ))),
        }
    }
}
