//! Ordering of report rows by change from the 52-week high.

use std::cmp::Ordering;

use crate::row::ReportRow;

/// Sorts rows for presentation.
pub struct Ranker;

impl Ranker {
    /// Order rows by `change_percent`, highest first.
    ///
    /// Rows without a change sort after every row that has one. `sort_by` is stable, so
    /// equal changes and the trailing absent rows keep their assembly order.
    pub fn rank(mut rows: Vec<ReportRow>) -> Vec<ReportRow> {
        rows.sort_by(|a, b| Self::compare(a.change_percent(), b.change_percent()));
        rows
    }

    fn compare(a: Option<f64>, b: Option<f64>) -> Ordering {
        match (a, b) {
            (Some(a), Some(b)) => b.total_cmp(&a),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::Quote;
    use chrono::NaiveDate;

    fn row(symbol: &str, price: Option<f64>) -> ReportRow {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let quote = Quote {
            current_price: price,
            fifty_two_week_high: Some(100.0),
            ..Quote::empty(symbol)
        };
        ReportRow::new(symbol, Some(quote), date)
    }

    fn order(rows: &[ReportRow]) -> Vec<&str> {
        rows.iter().map(|r| r.symbol()).collect()
    }

    #[test]
    fn sorts_descending() {
        let rows = vec![row("A", Some(80.0)), row("B", Some(120.0)), row("C", Some(95.0))];
        let ranked = Ranker::rank(rows);
        assert_eq!(order(&ranked), vec!["B", "C", "A"]);
    }

    #[test]
    fn absent_values_sort_last_in_original_order() {
        let rows = vec![
            row("N1", None),
            row("A", Some(50.0)),
            row("N2", None),
            row("B", Some(150.0)),
            row("N3", None),
        ];
        let ranked = Ranker::rank(rows);
        assert_eq!(order(&ranked), vec!["B", "A", "N1", "N2", "N3"]);
    }

    #[test]
    fn ties_keep_assembly_order() {
        let rows = vec![
            row("X", Some(90.0)),
            row("Y", Some(95.0)),
            row("Z", Some(90.0)),
            row("W", Some(90.0)),
        ];
        let ranked = Ranker::rank(rows);
        assert_eq!(order(&ranked), vec!["Y", "X", "Z", "W"]);
    }

    #[test]
    fn flat_rows_tie_regardless_of_high_sign() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let negative_high = Quote {
            current_price: Some(-5.0),
            fifty_two_week_high: Some(-5.0),
            ..Quote::empty("NEG")
        };
        let rows = vec![
            ReportRow::new("NEG", Some(negative_high), date),
            row("FLAT", Some(100.0)),
        ];
        let ranked = Ranker::rank(rows);
        assert_eq!(order(&ranked), vec!["NEG", "FLAT"]);
    }

    #[test]
    fn empty_input_is_empty() {
        assert!(Ranker::rank(Vec::new()).is_empty());
    }

    #[test]
    fn output_is_sorted_for_mixed_input() {
        let prices = [Some(10.0), None, Some(250.0), Some(99.5), None, Some(100.0), Some(0.5)];
        let rows = prices
            .iter()
            .enumerate()
            .map(|(i, p)| row(&format!("S{i}"), *p))
            .collect();
        let ranked = Ranker::rank(rows);

        let first_absent = ranked
            .iter()
            .position(|r| r.change_percent().is_none())
            .unwrap();
        assert!(ranked[first_absent..].iter().all(|r| r.change_percent().is_none()));
        let present: Vec<f64> = ranked[..first_absent]
            .iter()
            .filter_map(|r| r.change_percent())
            .collect();
        assert!(present.windows(2).all(|w| w[0] >= w[1]));
    }
}
