use std::collections::HashMap;

use log::debug;

use crate::error::Result;
use crate::frame::SeriesFrame;
use crate::misc::parse_utc_timestring;

impl SeriesFrame {
    /// Keeps the rows whose instant falls inside `[start, end]`, both ends
    /// inclusive. Bounds and row timestrings use the canonical format; any
    /// unparsable timestring fails the whole call, surviving rows keep their
    /// relative order and the input frame is untouched.
    pub fn filter_by_range(&self, start: &str, end: &str) -> Result<SeriesFrame> {
        let start = parse_utc_timestring(start)?;
        let end = parse_utc_timestring(end)?;

        let mut keep: Vec<usize> = vec![];
        for (i, raw) in self.time_strings.iter().enumerate() {
            let t = parse_utc_timestring(raw)?;
            if start <= t && t <= end {
                keep.push(i);
            }
        }

        let time_strings = keep
            .iter()
            .map(|&i| self.time_strings[i].clone())
            .collect();
        let columns: HashMap<String, Vec<f64>> = self
            .column_order
            .iter()
            .map(|c| {
                let source = &self.columns[c.as_str()];
                (c.clone(), keep.iter().map(|&i| source[i]).collect())
            })
            .collect();

        debug!("range filter kept {} of {} rows", keep.len(), self.len());
        Ok(SeriesFrame::from_parts(
            time_strings,
            self.column_order.clone(),
            columns,
        ))
    }
}
