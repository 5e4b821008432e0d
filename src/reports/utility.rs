//! Counting helpers shared by the reporters.

use std::collections::HashMap;
use std::hash::Hash;

/// Counts occurrences of each distinct value, preserving the order in which
/// distinct values were first encountered.
pub fn counts_in_order<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut slots: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for value in values {
        match slots.get(&value) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    counts
}

/// The most frequent value and its count. Ties go to the value encountered
/// first in iteration order.
pub fn mode<T, I>(values: I) -> Option<(T, usize)>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut best: Option<(T, usize)> = None;
    for (value, count) in counts_in_order(values) {
        let replace = match &best {
            None => true,
            Some((_, best_count)) => count > *best_count,
        };
        if replace {
            best = Some((value, count));
        }
    }
    best
}

/// Distinct values with counts, sorted by descending count. The sort is
/// stable, so equal counts keep their first-encountered order.
pub fn descending_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    T: Clone + Eq + Hash,
    I: IntoIterator<Item = T>,
{
    let mut counts = counts_in_order(values);
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Computes the arithmetic mean of a slice of values. Returns 0.0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}
