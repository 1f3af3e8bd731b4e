use codebook_common::Value;
use codebook_core::{AggregateColumn, Distribution, sample_examples, summarize, tabulate};
use codebook_model::{CategoryCode, CategoryMap, ColumnDescriptor, DataType};
use proptest::prelude::*;

fn declared(codes: &[i64]) -> ColumnDescriptor {
    let categories: CategoryMap = codes
        .iter()
        .map(|code| (*code, format!("Label {code}")))
        .collect();
    ColumnDescriptor::new("code", DataType::Int).with_categories(categories)
}

proptest! {
    #[test]
    fn percentiles_are_ordered_and_bounded(
        values in prop::collection::vec(-1.0e6f64..1.0e6, 1..200)
    ) {
        let dist = Distribution::new(values.iter().copied());
        let min = dist.min().unwrap();
        let max = dist.max().unwrap();
        let mut previous = min;
        for q in [0.0, 0.1, 0.25, 0.5, 0.75, 0.9, 1.0] {
            let value = dist.quantile(q).unwrap();
            prop_assert!(value >= previous, "q={q}: {value} < {previous}");
            prop_assert!(value >= min && value <= max);
            previous = value;
        }
    }

    #[test]
    fn every_declared_code_appears_once(
        codes in prop::collection::btree_set(0i64..20, 0..8),
        observed in prop::collection::vec(prop::option::of(0i64..25), 0..60)
    ) {
        let codes: Vec<i64> = codes.into_iter().collect();
        let descriptor = declared(&codes);
        let values: Vec<Value> = observed.iter().copied().map(Value::from).collect();
        let table = tabulate(&values, &descriptor, AggregateColumn::new("rows", &values), None);

        prop_assert!(table.len() >= codes.len());
        for code in &codes {
            let matches = table
                .rows
                .iter()
                .filter(|row| row.code == CategoryCode::Int(*code))
                .count();
            prop_assert_eq!(matches, 1);
        }
        let present = observed.iter().filter(|value| value.is_some()).count();
        prop_assert_eq!(table.total_count(), present);
    }

    #[test]
    fn percents_sum_to_one_hundred(
        observed in prop::collection::vec(0i64..6, 1..80)
    ) {
        let descriptor = declared(&[0, 1, 2]);
        let values: Vec<Value> = observed.iter().copied().map(Value::Int).collect();
        let table = tabulate(&values, &descriptor, AggregateColumn::new("rows", &values), None);

        let total: f64 = table.rows.iter().map(|row| row.percent).sum();
        prop_assert!((total - 1.0).abs() < 1e-9);

        let rendered: f64 = table
            .to_rows()
            .iter()
            .map(|row| row[3].trim_end_matches('%').parse::<f64>().unwrap())
            .sum();
        prop_assert!((rendered - 100.0).abs() <= 0.01 * table.len() as f64);
    }

    #[test]
    fn examples_are_deterministic(seed in any::<u64>(), count in 0usize..12) {
        let distinct: Vec<String> = (0..count).map(|idx| format!("value {idx}")).collect();
        let first = sample_examples(&distinct, seed);
        prop_assert_eq!(&first, &sample_examples(&distinct, seed));
        prop_assert_eq!(first.len(), 4);
    }
}

#[test]
fn ownership_frequencies() {
    let categories: CategoryMap = [(1_i64, "Owned"), (2_i64, "Rented")].into_iter().collect();
    let descriptor = ColumnDescriptor::new("ownershp", DataType::Int).with_categories(categories);
    let values = vec![Value::Int(1), Value::Int(1), Value::Int(2), Value::Missing];

    let table = tabulate(&values, &descriptor, AggregateColumn::new("ownershp", &values), None);
    assert_eq!(
        table.to_rows(),
        vec![
            vec!["1", "Owned", "2", "66.67%"],
            vec!["2", "Rented", "1", "33.33%"],
        ]
    );
}

#[test]
fn numeric_ten_to_fifty() {
    let descriptor = ColumnDescriptor::new("x", DataType::Int);
    let values: Vec<Value> = [10, 20, 30, 40, 50].into_iter().map(Value::Int).collect();
    let table = summarize(&values, &descriptor, 15151).unwrap();

    assert_eq!(table.get("mean"), Some("30.00"));
    assert_eq!(table.get("median"), Some("30.00"));
    assert_eq!(
        table.get("range"),
        Some("minimum value: 10.00 to  maximum value: 50.00")
    );
}

#[test]
fn examples_for_five_letters_are_stable() {
    let distinct: Vec<String> = ["a", "b", "c", "d", "e"].map(String::from).to_vec();
    let descriptor = ColumnDescriptor::new("letters", DataType::String);
    let values: Vec<Value> = distinct.iter().map(|text| Value::from(text.as_str())).collect();

    assert_eq!(sample_examples(&distinct, 15151), vec!["e", "c", "b", "d"]);

    let table = summarize(&values, &descriptor, 15151).unwrap();
    assert_eq!(
        (1..=4)
            .map(|idx| table.get(&format!("example {idx}")).unwrap().to_string())
            .collect::<Vec<_>>(),
        vec!["e", "c", "b", "d"]
    );
    assert_eq!(table, summarize(&values, &descriptor, 15151).unwrap());
}
