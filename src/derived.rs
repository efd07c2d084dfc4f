use log::debug;

use crate::frame::SeriesFrame;

/// The electric power variables exported by the room's machines share this
/// header prefix. The leading space is part of the exported names.
pub const ELECTRIC_POWER_PREFIX: &str = " puissance_electrique";

pub const ELECTRIC_POWER_SUM: &str = "puissance_electrique_sum";

impl SeriesFrame {
    /// Appends a column whose value at row i is the sum over all columns
    /// whose name satisfies `predicate` of their value at row i. This is the
    /// only in-place mutation in the pipeline; filter and resample both
    /// return fresh frames.
    ///
    /// `name` must not collide with an existing column.
    pub fn add_sum_column<P>(&mut self, name: &str, predicate: P)
    where
        P: Fn(&str) -> bool,
    {
        assert!(
            !self.columns.contains_key(name),
            "column {:?} already exists",
            name
        );

        let matching: Vec<&Vec<f64>> = self
            .column_order
            .iter()
            .filter(|c| predicate(c))
            .map(|c| &self.columns[c.as_str()])
            .collect();

        let sums: Vec<f64> = (0..self.time_strings.len())
            .map(|i| matching.iter().map(|v| v[i]).sum())
            .collect();

        debug!("derived {:?} from {} matching columns", name, matching.len());
        self.column_order.push(name.to_string());
        self.columns.insert(name.to_string(), sums);
    }

    /// Total electric power draw, summed over the machines.
    pub fn add_electric_power_sum(&mut self) {
        self.add_sum_column(ELECTRIC_POWER_SUM, |c| c.starts_with(ELECTRIC_POWER_PREFIX));
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::{ELECTRIC_POWER_PREFIX, ELECTRIC_POWER_SUM};
    use crate::frame::SeriesFrame;

    fn frame(names: &[&str], rows: &[&[f64]]) -> SeriesFrame {
        let columns: HashMap<String, Vec<f64>> = names
            .iter()
            .enumerate()
            .map(|(c, name)| {
                (
                    name.to_string(),
                    rows.iter().map(|row| row[c]).collect::<Vec<f64>>(),
                )
            })
            .collect();
        SeriesFrame::from_parts(
            (0..rows.len())
                .map(|i| format!("2023-01-01 00:{:02}:00", i))
                .collect(),
            names.iter().map(|n| n.to_string()).collect(),
            columns,
        )
    }

    #[test]
    fn sums_matching_columns_per_row() {
        let mut f = frame(
            &["a", " puissance_electrique_1", " puissance_electrique_2"],
            &[&[1.0, 2.0, 10.0], &[3.0, 4.0, 20.0]],
        );
        f.add_sum_column("sum", |c| c.starts_with(ELECTRIC_POWER_PREFIX));
        assert_eq!(f.values("sum").unwrap(), &[12.0, 24.0]);
    }

    #[test]
    fn single_matching_column_copies_its_values() {
        let mut f = frame(
            &["a", " puissance_electrique_1"],
            &[&[1.0, 2.0], &[3.0, 4.0]],
        );
        f.add_sum_column("sum", |c| c.starts_with(ELECTRIC_POWER_PREFIX));
        assert_eq!(f.values("sum").unwrap(), &[2.0, 4.0]);
    }

    #[test]
    fn no_matching_columns_yields_zeros() {
        let mut f = frame(&["a"], &[&[1.0], &[3.0]]);
        f.add_sum_column("sum", |c| c.starts_with(ELECTRIC_POWER_PREFIX));
        assert_eq!(f.values("sum").unwrap(), &[0.0, 0.0]);
    }

    #[test]
    fn derived_column_lands_at_the_end_of_the_order() {
        let mut f = frame(
            &["a", " puissance_electrique_1"],
            &[&[1.0, 2.0], &[3.0, 4.0]],
        );
        f.add_electric_power_sum();
        assert_eq!(
            f.column_names(),
            ["a", " puissance_electrique_1", ELECTRIC_POWER_SUM]
        );
        assert_eq!(f.len(), 2);
        assert_eq!(f.values(ELECTRIC_POWER_SUM).unwrap(), &[2.0, 4.0]);
    }

    #[test]
    #[should_panic]
    fn duplicate_name_violates_the_precondition() {
        let mut f = frame(&["a"], &[&[1.0]]);
        f.add_sum_column("a", |_| true);
    }
}
