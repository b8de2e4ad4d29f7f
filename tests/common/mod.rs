#![allow(dead_code)]

use domaincloud::{FrequencyTable, count_str};

/// Word/count pairs of a table, in iteration order.
pub fn listing(table: &FrequencyTable) -> Vec<(String, usize)> {
    table
        .iter()
        .map(|w| (w.text.to_owned(), w.count))
        .collect()
}

/// Count `input` and compare against the expected pairs.
pub fn assert_counts(input: &str, expected: &[(&str, usize)]) {
    let got = listing(&count_str(input));
    let expected: Vec<_> = expected
        .iter()
        .map(|&(text, count)| (text.to_owned(), count))
        .collect();
    assert_eq!(
        got, expected,
        "word counts mismatch\n--- input ---\n{input}"
    );
}
