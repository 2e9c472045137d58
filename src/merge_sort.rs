//! Merge sort over slices of ordered values.
//!
//! Sorting never touches its input: every call returns a freshly allocated,
//! sorted `Vec`. The default configuration splits recursively at `len / 2`
//! and, on equal heads during a merge, emits the element of the right half
//! first. [`TieBreak::LeftFirst`] turns that into a stable sort and
//! [`Strategy::BottomUp`] replaces the recursion with an iterative pass.

use std::cmp::Ordering;

use log::{debug, trace};

pub mod error;
pub mod random_input;

pub use error::{InputError, Result};
pub use random_input::RandomInput;

/// Which element goes first when the heads of both halves compare equal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum TieBreak {
    /// Left head is taken only when strictly smaller.
    #[default]
    RightFirst,
    /// Left head is taken unless strictly greater. Stable.
    LeftFirst,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    #[default]
    TopDown,
    BottomUp,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sorter {
    strategy: Strategy,
    tie_break: TieBreak,
}

impl Sorter {
    pub fn new() -> Sorter {
        Sorter::default()
    }

    pub fn strategy(mut self, strategy: Strategy) -> Sorter {
        self.strategy = strategy;
        self
    }

    pub fn tie_break(mut self, tie_break: TieBreak) -> Sorter {
        self.tie_break = tie_break;
        self
    }

    pub fn sort<T: Ord + Clone>(&self, input: &[T]) -> Vec<T> {
        self.sort_by(input, Ord::cmp)
    }

    pub fn sort_by<T, F>(&self, input: &[T], mut compare: F) -> Vec<T>
    where
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        debug!(
            "sorting {} elements strategy={:?} tie_break={:?}",
            input.len(),
            self.strategy,
            self.tie_break
        );
        match self.strategy {
            Strategy::TopDown => sort_top_down(input, self.tie_break, &mut compare),
            Strategy::BottomUp => sort_bottom_up_with(input, self.tie_break, &mut compare),
        }
    }

    pub fn sort_by_key<T, K, F>(&self, input: &[T], mut key: F) -> Vec<T>
    where
        T: Clone,
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.sort_by(input, |a, b| key(a).cmp(&key(b)))
    }
}

/// Sorts with the default recursive strategy and right-first tie-break.
pub fn sort<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    Sorter::new().sort(input)
}

pub fn sort_bottom_up<T: Ord + Clone>(input: &[T]) -> Vec<T> {
    Sorter::new().strategy(Strategy::BottomUp).sort(input)
}

/// Merges two individually sorted slices. Sortedness of the inputs is assumed,
/// not checked.
pub fn merge<T: Ord + Clone>(left: &[T], right: &[T]) -> Vec<T> {
    merge_by(left, right, TieBreak::RightFirst, Ord::cmp)
}

pub fn merge_by<T, F>(left: &[T], right: &[T], tie_break: TieBreak, mut compare: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    merge_with(left, right, tie_break, &mut compare)
}

pub fn is_sorted<T: Ord>(seq: &[T]) -> bool {
    seq.windows(2).all(|pair| pair[0] <= pair[1])
}

fn sort_top_down<T, F>(input: &[T], tie_break: TieBreak, compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = input.len();
    if n < 2 {
        return input.to_vec();
    }

    // divide
    let (left, right) = input.split_at(n / 2);

    // conquer
    let left = sort_top_down(left, tie_break, compare);
    let right = sort_top_down(right, tie_break, compare);

    // combine
    merge_with(&left, &right, tie_break, compare)
}

// Runs of `width` elements are merged pairwise, doubling the width each pass.
// A trailing run without a partner is carried over unchanged.
fn sort_bottom_up_with<T, F>(input: &[T], tie_break: TieBreak, compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    let n = input.len();
    let mut runs = input.to_vec();
    let mut width = 1;

    while width < n {
        let mut merged = Vec::with_capacity(n);
        for chunk in runs.chunks(2 * width) {
            if chunk.len() <= width {
                merged.extend_from_slice(chunk);
                continue;
            }
            let (left, right) = chunk.split_at(width);
            merged.extend(merge_with(left, right, tie_break, compare));
        }
        runs = merged;
        width *= 2;
    }
    runs
}

fn merge_with<T, F>(left: &[T], right: &[T], tie_break: TieBreak, compare: &mut F) -> Vec<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    trace!("merge left={} right={}", left.len(), right.len());
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let (mut leftidx, mut rightidx) = (0, 0);

    while leftidx < left.len() && rightidx < right.len() {
        let order = compare(&left[leftidx], &right[rightidx]);
        let take_left = match tie_break {
            TieBreak::RightFirst => order == Ordering::Less,
            TieBreak::LeftFirst => order != Ordering::Greater,
        };

        if take_left {
            merged.push(left[leftidx].clone());
            leftidx += 1;
        } else {
            merged.push(right[rightidx].clone());
            rightidx += 1;
        }
    }

    merged.extend_from_slice(&left[leftidx..]);
    merged.extend_from_slice(&right[rightidx..]);
    merged
}

#[cfg(test)]
mod tests {
    use super::{is_sorted, merge, merge_by, sort, sort_bottom_up, Sorter, Strategy, TieBreak};
    use proptest::collection::vec;
    use proptest::prelude::*;

    use std::cmp::Ordering;

    type Record = (i32, char);

    fn by_key(a: &Record, b: &Record) -> Ordering {
        a.0.cmp(&b.0)
    }

    #[test]
    fn single_value() {
        assert_eq!(sort(&[1]), vec![1]);
    }

    #[test]
    fn two_values() {
        assert_eq!(sort(&[2, 1]), vec![1, 2]);
    }

    #[test]
    fn long_array() {
        assert_eq!(
            sort(&[21, 48, 21, 2, 0, 4, -3, 100]),
            vec![-3, 0, 2, 4, 21, 21, 48, 100]
        );
    }

    #[test]
    fn empty_array() {
        let empty: [i32; 0] = [];
        assert!(sort(&empty).is_empty());
        assert!(sort_bottom_up(&empty).is_empty());
    }

    #[test]
    fn all_equal_values() {
        assert_eq!(sort(&[5, 5, 5]), vec![5, 5, 5]);
    }

    #[test]
    fn merge_interleaved() {
        assert_eq!(merge(&[1, 3, 5], &[2, 4, 6]), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn merge_with_empty_side() {
        assert_eq!(merge(&[], &[1, 2]), vec![1, 2]);
        assert_eq!(merge(&[1, 2], &[]), vec![1, 2]);
    }

    #[test]
    fn merge_appends_remainder_in_order() {
        assert_eq!(merge(&[1, 2], &[3, 4, 5]), vec![1, 2, 3, 4, 5]);
        assert_eq!(merge(&[7, 8, 9], &[0]), vec![0, 7, 8, 9]);
    }

    #[test]
    fn input_is_left_untouched() {
        let input = vec![3, 1, 2];
        let output = sort(&input);
        assert_eq!(input, vec![3, 1, 2]);
        assert_eq!(output, vec![1, 2, 3]);
    }

    #[test]
    fn right_first_emits_right_head_on_tie() {
        let merged = merge_by(&[(1, 'a')], &[(1, 'b')], TieBreak::RightFirst, by_key);
        assert_eq!(merged, vec![(1, 'b'), (1, 'a')]);
    }

    #[test]
    fn left_first_emits_left_head_on_tie() {
        let merged = merge_by(&[(1, 'a')], &[(1, 'b')], TieBreak::LeftFirst, by_key);
        assert_eq!(merged, vec![(1, 'a'), (1, 'b')]);
    }

    #[test]
    fn default_sorter_reorders_equal_keys_across_halves() {
        let input = [(2, 'x'), (1, 'a'), (1, 'b')];
        // [(2,x)] | [(1,a),(1,b)] -> right half merges to [(1,b),(1,a)]
        let output = Sorter::new().sort_by(&input, by_key);
        assert_eq!(output, vec![(1, 'b'), (1, 'a'), (2, 'x')]);
    }

    #[test]
    fn left_first_sorter_keeps_equal_keys_in_input_order() {
        let input = [(3, 'c'), (1, 'a'), (2, 'z'), (1, 'b'), (2, 'y')];
        for strategy in [Strategy::TopDown, Strategy::BottomUp] {
            let output = Sorter::new()
                .strategy(strategy)
                .tie_break(TieBreak::LeftFirst)
                .sort_by_key(&input, |r| r.0);
            assert_eq!(
                output,
                vec![(1, 'a'), (1, 'b'), (2, 'z'), (2, 'y'), (3, 'c')],
                "strategy={:?}",
                strategy
            );
        }
    }

    #[test]
    fn bottom_up_odd_length() {
        assert_eq!(sort_bottom_up(&[9, 7, 5, 3, 1]), vec![1, 3, 5, 7, 9]);
    }

    #[test]
    fn sorts_strings() {
        let words = ["pear", "apple", "fig"];
        assert_eq!(sort(&words), vec!["apple", "fig", "pear"]);
    }

    #[test]
    fn is_sorted_checks_adjacent_pairs() {
        assert!(is_sorted::<i32>(&[]));
        assert!(is_sorted(&[1, 1, 2]));
        assert!(!is_sorted(&[2, 1]));
    }

    fn records() -> impl proptest::strategy::Strategy<Value = Vec<Record>> {
        vec((0..5i32, proptest::char::range('a', 'z')), 0..64)
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(500))]

        #[test]
        fn sort_matches_std_sort(v in vec(any::<i32>(), 0..256)) {
            let mut expected = v.clone();
            expected.sort();

            prop_assert_eq!(sort(&v), expected.clone());
            prop_assert_eq!(sort_bottom_up(&v), expected);
        }

        #[test]
        fn sort_is_idempotent(v in vec(-50..50i32, 0..128)) {
            let once = sort(&v);
            prop_assert!(is_sorted(&once));
            prop_assert_eq!(sort(&once), once);
        }

        #[test]
        fn left_first_is_stable(v in records()) {
            let mut expected = v.clone();
            expected.sort_by_key(|r| r.0);

            for strategy in [Strategy::TopDown, Strategy::BottomUp] {
                let output = Sorter::new()
                    .strategy(strategy)
                    .tie_break(TieBreak::LeftFirst)
                    .sort_by(&v, by_key);
                prop_assert_eq!(&output, &expected);
            }
        }

        #[test]
        fn right_first_keeps_multiset(v in records()) {
            let output = Sorter::new().sort_by(&v, by_key);
            let keys: Vec<i32> = output.iter().map(|r| r.0).collect();
            prop_assert!(is_sorted(&keys));

            let mut got = output.clone();
            got.sort();
            let mut want = v.clone();
            want.sort();
            prop_assert_eq!(got, want);
        }
    }
}
