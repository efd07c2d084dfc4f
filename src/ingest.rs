use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::{DataError, Result};
use crate::frame::SeriesFrame;

/// Reads a measurement CSV into a frame.
///
/// Comma separated, no quoting. The first line is the header: field 0 labels
/// the time column and is dropped, the remaining fields name the variables
/// verbatim. Every data row carries the raw timestring in field 0 and one
/// numeric value per variable. Timestrings are stored as-is; nothing is
/// parsed or sorted at this point.
pub fn read_series_csv<P: AsRef<Path>>(path: P) -> Result<SeriesFrame> {
    let file = File::open(path.as_ref())?;
    let mut lines = BufReader::new(file).lines();

    let header = match lines.next() {
        Some(line) => line?,
        None => String::new(),
    };
    let column_order: Vec<String> = header.split(',').skip(1).map(|s| s.to_string()).collect();

    let mut columns: HashMap<String, Vec<f64>> = column_order
        .iter()
        .map(|c| (c.clone(), vec![]))
        .collect();
    let mut time_strings: Vec<String> = vec![];

    for (i, line) in lines.enumerate() {
        let line = line?;
        // line numbers are 1-based and the header is line 1
        let line_number = i + 2;
        let fields: Vec<&str> = line.split(',').collect();
        if fields.len() != column_order.len() + 1 {
            return Err(DataError::FieldCount {
                line: line_number,
                expected: column_order.len() + 1,
                found: fields.len(),
            });
        }
        time_strings.push(fields[0].to_string());
        for (name, raw) in column_order.iter().zip(&fields[1..]) {
            let value = raw.parse::<f64>().map_err(|_| DataError::InvalidNumber {
                line: line_number,
                column: name.clone(),
                value: raw.to_string(),
            })?;
            columns.get_mut(name).expect("column exists").push(value);
        }
    }

    debug!(
        "read {} rows x {} columns from {:?}",
        time_strings.len(),
        column_order.len(),
        path.as_ref()
    );
    Ok(SeriesFrame::from_parts(time_strings, column_order, columns))
}
