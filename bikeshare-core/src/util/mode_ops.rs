use std::hash::Hash;

use indexmap::IndexMap;
use itertools::Itertools;

/// counts occurrences of each value, ordered by descending count. values with
/// equal counts are ordered ascending.
pub fn value_counts<T, I>(values: I) -> IndexMap<T, usize>
where
    I: IntoIterator<Item = T>,
    T: Hash + Eq + Ord,
{
    values
        .into_iter()
        .counts()
        .into_iter()
        .sorted_by(|(a_value, a_count), (b_value, b_count)| {
            b_count.cmp(a_count).then_with(|| a_value.cmp(b_value))
        })
        .collect()
}

/// the most frequent value, or None when there are no values. when several values
/// share the highest count, the smallest of them is returned.
pub fn mode<T, I>(values: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
    T: Hash + Eq + Ord,
{
    value_counts(values).into_iter().next().map(|(value, _)| value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_picks_highest_count() {
        assert_eq!(mode(vec![3, 1, 3, 2, 3, 1]), Some(3));
        assert_eq!(mode(vec!["b", "a", "b"]), Some("b"));
    }

    #[test]
    fn test_mode_ties_go_to_smallest() {
        assert_eq!(mode(vec![8, 17, 17, 8, 12]), Some(8));
        assert_eq!(mode(vec!["west", "east"]), Some("east"));
    }

    #[test]
    fn test_mode_of_nothing() {
        assert_eq!(mode(Vec::<u32>::new()), None);
    }

    #[test]
    fn test_mode_frequency_dominates() {
        let values = vec![5, 9, 9, 1, 5, 9, 7, 7, 7, 7];
        let counts = value_counts(values.clone());
        let chosen = mode(values).unwrap();
        let chosen_count = counts[&chosen];
        assert!(counts.values().all(|c| *c <= chosen_count));
        assert_eq!(chosen, 7);
    }

    #[test]
    fn test_value_counts_order() {
        let counts = value_counts(vec!["Subscriber", "Customer", "Subscriber", "Dependent"]);
        let ordered: Vec<(&str, usize)> = counts.into_iter().collect();
        assert_eq!(
            ordered,
            vec![("Subscriber", 2), ("Customer", 1), ("Dependent", 1)]
        );
    }
}
