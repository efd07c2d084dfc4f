use std::collections::HashMap;

use crate::error::{DataError, Result};
use crate::misc::epoch_millis;
use crate::utils::stats_utils::Extrema;

/// Column-oriented time series: one raw timestring per row plus one f64
/// sequence per named variable. Column names are carried verbatim from the
/// source header, stray whitespace included, and lookups match exactly.
///
/// Rows stay in source order; nothing here assumes they are sorted.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesFrame {
    pub(crate) time_strings: Vec<String>,
    pub(crate) column_order: Vec<String>,
    pub(crate) columns: HashMap<String, Vec<f64>>,
}

impl SeriesFrame {
    /// Assembles a frame from already-built parts. The transformation stages
    /// use this; fresh data comes in through `ingest::read_series_csv`.
    pub(crate) fn from_parts(
        time_strings: Vec<String>,
        column_order: Vec<String>,
        columns: HashMap<String, Vec<f64>>,
    ) -> SeriesFrame {
        debug_assert_eq!(column_order.len(), columns.len());
        debug_assert!(columns.values().all(|v| v.len() == time_strings.len()));
        SeriesFrame {
            time_strings,
            column_order,
            columns,
        }
    }

    pub fn len(&self) -> usize {
        self.time_strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_strings.is_empty()
    }

    /// Variable names in source header order.
    pub fn column_names(&self) -> &[String] {
        &self.column_order
    }

    pub fn time_strings(&self) -> &[String] {
        &self.time_strings
    }

    pub fn values(&self, name: &str) -> Result<&[f64]> {
        self.columns
            .get(name)
            .map(|v| v.as_slice())
            .ok_or_else(|| DataError::UnknownColumn(name.to_string()))
    }

    /// (min, max) of a column, for chart axis scaling.
    pub fn value_extrema(&self, name: &str) -> Result<(f64, f64)> {
        self.values(name).map(|v| v.extrema())
    }

    /// Pairs every row's epoch-millis instant with the column value, ready
    /// for plotting.
    pub fn data_points(&self, name: &str) -> Result<(Vec<i64>, Vec<f64>)> {
        let values = self.values(name)?.to_vec();
        let times = self
            .time_strings
            .iter()
            .map(|s| epoch_millis(s))
            .collect::<Result<Vec<i64>>>()?;
        Ok((times, values))
    }
}
