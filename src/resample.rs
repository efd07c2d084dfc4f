use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use enum_iterator::{all, Sequence};
use log::debug;

use crate::error::{DataError, Result};
use crate::frame::SeriesFrame;
use crate::misc::parse_utc_timestring;
use crate::utils::stats_utils::Mean;

/// Fixed bucket width for downsampling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Sequence)]
pub enum SamplingInterval {
    Hour,
    Day,
    Month,
}

impl SamplingInterval {
    /// Label used by callers picking an interval, e.g. "1 Hour".
    pub fn label(&self) -> &'static str {
        match self {
            SamplingInterval::Hour => "1 Hour",
            SamplingInterval::Day => "1 Day",
            SamplingInterval::Month => "1 Month",
        }
    }

    /// Canonical-format key of the bucket containing `t`: the instant
    /// truncated to the hour, day or month boundary at or before it.
    fn bucket_key(&self, t: DateTime<Utc>) -> String {
        match self {
            SamplingInterval::Hour => t.format("%Y-%m-%d %H:00:00"),
            SamplingInterval::Day => t.format("%Y-%m-%d 00:00:00"),
            SamplingInterval::Month => t.format("%Y-%m-01 00:00:00"),
        }
        .to_string()
    }
}

impl FromStr for SamplingInterval {
    type Err = DataError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        all::<SamplingInterval>()
            .find(|i| i.label() == s)
            .ok_or_else(|| DataError::InvalidInterval {
                label: s.to_string(),
                valid: all::<SamplingInterval>()
                    .map(|i| i.label())
                    .collect::<Vec<&str>>()
                    .join(", "),
            })
    }
}

impl SeriesFrame {
    /// Downsamples to fixed time buckets, averaging every variable over the
    /// rows of each bucket. Output rows are keyed by the bucket boundary in
    /// canonical format.
    ///
    /// Single forward pass that expects rows in chronological order: a
    /// bucket is closed as soon as a row with a different key shows up, so a
    /// key recurring later in the input opens a second output row instead of
    /// merging into the first.
    pub fn resample(&self, interval: SamplingInterval) -> Result<SeriesFrame> {
        let mut out_times: Vec<String> = vec![];
        let mut out: HashMap<String, Vec<f64>> = self
            .column_order
            .iter()
            .map(|c| (c.clone(), vec![]))
            .collect();
        let mut pending: HashMap<String, Vec<f64>> = self
            .column_order
            .iter()
            .map(|c| (c.clone(), vec![]))
            .collect();
        let mut current: Option<String> = None;

        for (i, raw) in self.time_strings.iter().enumerate() {
            let key = interval.bucket_key(parse_utc_timestring(raw)?);

            match current.take() {
                Some(open) if open != key => {
                    flush(open, &self.column_order, &mut pending, &mut out_times, &mut out);
                }
                _ => {}
            }
            current = Some(key);

            for c in &self.column_order {
                pending
                    .get_mut(c)
                    .expect("accumulator exists")
                    .push(self.columns[c.as_str()][i]);
            }
        }

        if let Some(open) = current {
            flush(open, &self.column_order, &mut pending, &mut out_times, &mut out);
        }

        debug!(
            "resampled {} rows into {} {:?} buckets",
            self.len(),
            out_times.len(),
            interval
        );
        Ok(SeriesFrame::from_parts(
            out_times,
            self.column_order.clone(),
            out,
        ))
    }
}

/// Emits one averaged output row for the open bucket and clears the
/// accumulators.
fn flush(
    key: String,
    column_order: &[String],
    pending: &mut HashMap<String, Vec<f64>>,
    out_times: &mut Vec<String>,
    out: &mut HashMap<String, Vec<f64>>,
) {
    out_times.push(key);
    for c in column_order {
        let acc = pending.get_mut(c).expect("accumulator exists");
        out.get_mut(c).expect("output column exists").push(acc.mean());
        acc.clear();
    }
}
