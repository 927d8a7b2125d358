// File: crates/tabplot-core/tests/summary.rs
// Purpose: Validate grouped five-number summaries and the interpolated quartiles.

use tabplot_core::{summarize, ChartError, Table, Value};

fn table(rows: &[(&str, f64)]) -> Table {
    let mut t = Table::new(vec!["Platform".to_string(), "Likes".to_string()]);
    for (key, v) in rows {
        t.push_row(vec![Value::Text(key.to_string()), Value::Number(*v)])
            .unwrap();
    }
    t
}

#[test]
fn quartiles_interpolate_between_ranks() {
    let t = table(&[("A", 1.0), ("A", 2.0), ("A", 3.0), ("A", 4.0)]);
    let out = summarize(&t, "Platform", "Likes").unwrap();
    assert_eq!(out.len(), 1);
    let s = out[0].1;
    assert_eq!(s.min, 1.0);
    assert_eq!(s.q1, 1.75);
    assert_eq!(s.median, 2.5);
    assert_eq!(s.q3, 3.25);
    assert_eq!(s.max, 4.0);
}

#[test]
fn single_row_group_collapses() {
    let t = table(&[("A", 7.5)]);
    let s = summarize(&t, "Platform", "Likes").unwrap()[0].1;
    assert_eq!((s.min, s.q1, s.median, s.q3, s.max), (7.5, 7.5, 7.5, 7.5, 7.5));
}

#[test]
fn summary_is_ordered_for_any_group() {
    let t = table(&[
        ("A", 40.0),
        ("A", 3.0),
        ("B", -2.0),
        ("A", 17.0),
        ("B", 0.5),
        ("B", 11.0),
        ("B", 0.5),
        ("A", 3.0),
    ]);
    for (key, s) in summarize(&t, "Platform", "Likes").unwrap() {
        assert!(
            s.min <= s.q1 && s.q1 <= s.median && s.median <= s.q3 && s.q3 <= s.max,
            "unordered summary for {key}: {s:?}"
        );
    }
}

#[test]
fn groups_keep_first_seen_order() {
    let t = table(&[("C", 1.0), ("A", 2.0), ("C", 3.0), ("B", 4.0), ("A", 5.0)]);
    let keys: Vec<String> = summarize(&t, "Platform", "Likes")
        .unwrap()
        .into_iter()
        .map(|(k, _)| k)
        .collect();
    assert_eq!(keys, ["C", "A", "B"]);
}

#[test]
fn input_order_does_not_matter() {
    let asc = table(&[("A", 1.0), ("A", 2.0), ("A", 3.0), ("A", 4.0), ("A", 5.0)]);
    let shuffled = table(&[("A", 3.0), ("A", 5.0), ("A", 1.0), ("A", 4.0), ("A", 2.0)]);
    assert_eq!(
        summarize(&asc, "Platform", "Likes").unwrap(),
        summarize(&shuffled, "Platform", "Likes").unwrap()
    );
}

#[test]
fn uncoerced_text_is_a_coercion_error() {
    let mut t = Table::new(vec!["Platform".to_string(), "Likes".to_string()]);
    t.push_row(vec![
        Value::Text("A".to_string()),
        Value::Text("abc".to_string()),
    ])
    .unwrap();
    let err = summarize(&t, "Platform", "Likes").unwrap_err();
    assert_eq!(
        err,
        ChartError::FieldCoercion { field: "Likes".to_string(), value: "abc".to_string() }
    );
}

#[test]
fn coerce_numeric_parses_or_rejects() {
    let mut t = Table::new(vec!["Platform".to_string(), "Likes".to_string()]);
    t.push_row(vec![
        Value::Text("A".to_string()),
        Value::Text(" 42.5 ".to_string()),
    ])
    .unwrap();
    t.coerce_numeric("Likes").unwrap();
    let s = summarize(&t, "Platform", "Likes").unwrap()[0].1;
    assert_eq!(s.median, 42.5);

    let mut bad = Table::new(vec!["Likes".to_string()]);
    bad.push_row(vec![Value::Text("abc".to_string())]).unwrap();
    assert!(matches!(
        bad.coerce_numeric("Likes"),
        Err(ChartError::FieldCoercion { .. })
    ));
}
