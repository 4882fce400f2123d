//! Dataset assembly and CSV rendering.
//!
//! Positions are flattened into one CSV row each, under a caller-supplied
//! column ordering. Undefined indicator values render as empty cells.

use std::fmt;
use std::str::FromStr;

use trendlabel_core::domain::{IndicatorField, Position};

use crate::export::{finish_csv, ExportError};

/// One output column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    OpenDay,
    CloseDay,
    PositionDuration,
    Profit,
    ProfitPercent,
    OpenPrice,
    ClosePrice,
    Open(IndicatorField),
    Close(IndicatorField),
    Class,
}

impl Column {
    /// Standard layout: position scalars, then OPEN_/CLOSE_ pairs for every
    /// indicator field, then CLASS.
    pub fn default_layout() -> Vec<Column> {
        let mut columns = vec![
            Column::OpenDay,
            Column::CloseDay,
            Column::PositionDuration,
            Column::Profit,
            Column::ProfitPercent,
            Column::OpenPrice,
            Column::ClosePrice,
        ];
        for field in IndicatorField::ALL {
            columns.push(Column::Open(field));
            columns.push(Column::Close(field));
        }
        columns.push(Column::Class);
        columns
    }

    pub fn header(&self) -> String {
        match self {
            Column::OpenDay => "OPEN_DAY".into(),
            Column::CloseDay => "CLOSE_DAY".into(),
            Column::PositionDuration => "POSITION_DURATION".into(),
            Column::Profit => "PROFIT".into(),
            Column::ProfitPercent => "PROFIT_PERCENT".into(),
            Column::OpenPrice => "OPEN_PRICE".into(),
            Column::ClosePrice => "CLOSE_PRICE".into(),
            Column::Open(field) => format!("OPEN_{}", field.column_name()),
            Column::Close(field) => format!("CLOSE_{}", field.column_name()),
            Column::Class => "CLASS".into(),
        }
    }

    /// Cell text for `position`.
    pub fn cell(&self, position: &Position) -> String {
        match self {
            Column::OpenDay => position.open_day.to_string(),
            Column::CloseDay => position.close_day.to_string(),
            Column::PositionDuration => position.duration.to_string(),
            Column::Profit => position.profit.to_string(),
            Column::ProfitPercent => position.profit_percent.to_string(),
            Column::OpenPrice => position.open_price.to_string(),
            Column::ClosePrice => position.close_price.to_string(),
            Column::Open(field) => format_value(position.open.get(*field)),
            Column::Close(field) => format_value(position.close.get(*field)),
            Column::Class => position.class.to_string(),
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown column '{0}'")]
pub struct UnknownColumn(pub String);

impl FromStr for Column {
    type Err = UnknownColumn;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let column = match s {
            "OPEN_DAY" => Column::OpenDay,
            "CLOSE_DAY" => Column::CloseDay,
            "POSITION_DURATION" => Column::PositionDuration,
            "PROFIT" => Column::Profit,
            "PROFIT_PERCENT" => Column::ProfitPercent,
            "OPEN_PRICE" => Column::OpenPrice,
            "CLOSE_PRICE" => Column::ClosePrice,
            "CLASS" => Column::Class,
            other => {
                let unknown = || UnknownColumn(other.to_string());
                if let Some(name) = other.strip_prefix("OPEN_") {
                    Column::Open(name.parse().map_err(|_| unknown())?)
                } else if let Some(name) = other.strip_prefix("CLOSE_") {
                    Column::Close(name.parse().map_err(|_| unknown())?)
                } else {
                    return Err(unknown());
                }
            }
        };
        Ok(column)
    }
}

/// Undefined values render as an empty cell.
pub fn format_value(value: Option<f64>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// Owns the built positions until they are rendered.
#[derive(Debug, Clone)]
pub struct DatasetAssembler {
    columns: Vec<Column>,
    positions: Vec<Position>,
}

impl DatasetAssembler {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            positions: Vec::new(),
        }
    }

    pub fn with_default_layout() -> Self {
        Self::new(Column::default_layout())
    }

    pub fn extend(&mut self, positions: impl IntoIterator<Item = Position>) {
        self.positions.extend(positions);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Render the whole dataset, header first.
    pub fn to_csv_string(&self) -> Result<String, ExportError> {
        let mut wtr = csv::Writer::from_writer(vec![]);
        wtr.write_record(self.columns.iter().map(Column::header))?;
        for position in &self.positions {
            wtr.write_record(self.columns.iter().map(|c| c.cell(position)))?;
        }
        finish_csv(wtr)
    }
}
