use serde::{Deserialize, Serialize};

use crate::frame::SeriesFrame;

pub trait ToJS<T> {
    fn to_js(&self) -> T
    where
        T: Serialize;
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ColumnJS {
    pub name: String,
    pub values: Vec<f64>,
}

/// Serializable snapshot of a frame for the chart layer. Columns appear in
/// source header order.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct SeriesFrameJS {
    pub t: Vec<String>,
    pub columns: Vec<ColumnJS>,
}

impl ToJS<SeriesFrameJS> for SeriesFrame {
    fn to_js(&self) -> SeriesFrameJS {
        SeriesFrameJS {
            t: self.time_strings().to_vec(),
            columns: self
                .column_names()
                .iter()
                .map(|name| ColumnJS {
                    name: name.clone(),
                    values: self.values(name).map(|v| v.to_vec()).unwrap_or_default(),
                })
                .collect(),
        }
    }
}

impl SeriesFrameJS {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{SeriesFrameJS, ToJS};
    use crate::frame::SeriesFrame;

    #[test]
    fn export_keeps_column_order() {
        let mut columns = HashMap::new();
        columns.insert("z".to_string(), vec![1.0]);
        columns.insert("a".to_string(), vec![2.0]);
        let frame = SeriesFrame::from_parts(
            vec!["2023-01-01 00:00:00".to_string()],
            vec!["z".to_string(), "a".to_string()],
            columns,
        );

        let js: SeriesFrameJS = frame.to_js();
        let names: Vec<&str> = js.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["z", "a"]);
        assert_eq!(js.t, ["2023-01-01 00:00:00"]);
    }

    #[test]
    fn export_serializes_to_json() {
        let mut columns = HashMap::new();
        columns.insert("a".to_string(), vec![1.5]);
        let frame = SeriesFrame::from_parts(
            vec!["2023-01-01 00:00:00".to_string()],
            vec!["a".to_string()],
            columns,
        );

        let js: SeriesFrameJS = frame.to_js();
        let json = js.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"t":["2023-01-01 00:00:00"],"columns":[{"name":"a","values":[1.5]}]}"#
        );
    }
}
