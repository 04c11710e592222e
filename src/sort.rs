//! A suite of eleven sorting algorithms plus a reversal operation.
//!
//! Every function here is pure: it copies the input slice, works on the
//! copy, and returns a fresh sequence in non-decreasing order (a
//! permutation of the input). The caller's slice is never mutated.
//!
//! The generic sorts accept any `T: Ord + Clone`. [`counting_sort`] and
//! [`radix_sort`] are the exceptions: they index by value and therefore
//! require non-negative integers, failing fast with
//! [`Error::InvalidInput`] instead of corrupting the output silently.
//!
//! The implementations keep each algorithm's textbook shape, quirks
//! included: [`bubble_sort`] runs all n passes with no early exit,
//! [`quick_sort`] takes the first element as pivot and allocates on each
//! recursion, and [`comb_sort`] shrinks its gap by a factor of 1.3.

use log::debug;

use crate::error::{Error, Result};

/// Bubble sort: repeated adjacent-swap passes.
///
/// Runs the full n passes with a shrinking inner loop; there is no
/// early-exit check on a swap-free pass.
pub fn bubble_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    let n = out.len();
    for i in 0..n {
        for j in 0..n - i - 1 {
            if out[j] > out[j + 1] {
                out.swap(j, j + 1);
            }
        }
    }
    out
}

/// Quick sort with the first element as pivot.
///
/// Partitions into `<= pivot` and `> pivot` and recurses, allocating new
/// sequences at each step. Not guaranteed stable.
pub fn quick_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }
    let pivot = items[0].clone();
    let less: Vec<T> = items[1..].iter().filter(|x| **x <= pivot).cloned().collect();
    let greater: Vec<T> = items[1..].iter().filter(|x| **x > pivot).cloned().collect();

    let mut out = quick_sort(&less);
    out.push(pivot);
    out.extend(quick_sort(&greater));
    out
}

/// Insertion sort: shift-and-insert. Stable.
pub fn insertion_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    for i in 1..out.len() {
        let key = out[i].clone();
        let mut j = i;
        while j > 0 && out[j - 1] > key {
            out[j] = out[j - 1].clone();
            j -= 1;
        }
        out[j] = key;
    }
    out
}

/// Selection sort: repeated minimum extraction with an in-place swap
/// per pass.
pub fn selection_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    let n = out.len();
    for i in 0..n {
        let mut min_index = i;
        for j in i + 1..n {
            if out[j] < out[min_index] {
                min_index = j;
            }
        }
        out.swap(i, min_index);
    }
    out
}

/// Merge sort: split at the midpoint and merge with a `<=` comparison
/// that favors the left run on ties. Stable.
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }
    let mid = items.len() / 2;
    let left = merge_sort(&items[..mid]);
    let right = merge_sort(&items[mid..]);
    merge(left, right)
}

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    while let (Some(a), Some(b)) = (left.peek(), right.peek()) {
        // `<=` keeps equal elements in left-run order.
        if a <= b {
            out.extend(left.next());
        } else {
            out.extend(right.next());
        }
    }
    out.extend(left);
    out.extend(right);
    out
}

/// Heap sort: build a max-heap, then repeatedly swap the root to the end
/// and sift down. Not stable.
pub fn heap_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    let n = out.len();
    for i in (0..n / 2).rev() {
        sift_down(&mut out, n, i);
    }
    for end in (1..n).rev() {
        out.swap(0, end);
        sift_down(&mut out, end, 0);
    }
    out
}

fn sift_down<T: Ord>(heap: &mut [T], size: usize, root: usize) {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;
    if left < size && heap[left] > heap[largest] {
        largest = left;
    }
    if right < size && heap[right] > heap[largest] {
        largest = right;
    }
    if largest != root {
        heap.swap(root, largest);
        sift_down(heap, size, largest);
    }
}

/// Shell sort with the gap sequence n/2, n/4, ..., 1 and insertion-style
/// shifts within each gap.
pub fn shell_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    let n = out.len();
    let mut gap = n / 2;
    while gap > 0 {
        for i in gap..n {
            let temp = out[i].clone();
            let mut j = i;
            while j >= gap && out[j - gap] > temp {
                out[j] = out[j - gap].clone();
                j -= gap;
            }
            out[j] = temp;
        }
        gap /= 2;
    }
    out
}

/// Counting sort over non-negative integers.
///
/// Allocates a counter per value in `[0, max]`, so it is only sensible
/// for dense, small-valued inputs. Fails with [`Error::InvalidInput`] if
/// any element is negative.
pub fn counting_sort(items: &[i64]) -> Result<Vec<i64>> {
    check_non_negative(items, "counting sort")?;
    if items.is_empty() {
        return Ok(Vec::new());
    }
    let max = items.iter().copied().max().unwrap_or(0) as usize;
    debug!("counting_sort(n = {}, max = {})", items.len(), max);

    let mut count = vec![0usize; max + 1];
    for &x in items {
        count[x as usize] += 1;
    }
    let mut out = Vec::with_capacity(items.len());
    for (value, &c) in count.iter().enumerate() {
        for _ in 0..c {
            out.push(value as i64);
        }
    }
    Ok(out)
}

/// LSD radix sort, base 10, with a stable counting pass per digit.
///
/// Fails with [`Error::InvalidInput`] if any element is negative.
pub fn radix_sort(items: &[i64]) -> Result<Vec<i64>> {
    check_non_negative(items, "radix sort")?;
    if items.is_empty() {
        return Ok(Vec::new());
    }
    let max = items.iter().copied().max().unwrap_or(0);
    debug!("radix_sort(n = {}, max = {})", items.len(), max);

    let mut out = items.to_vec();
    let mut exp: i64 = 1;
    while max / exp > 0 {
        out = counting_pass(&out, exp);
        match exp.checked_mul(10) {
            Some(next) => exp = next,
            None => break, // every digit of i64::MAX has been processed
        }
    }
    Ok(out)
}

fn counting_pass(items: &[i64], exp: i64) -> Vec<i64> {
    let mut count = [0usize; 10];
    for &x in items {
        count[((x / exp) % 10) as usize] += 1;
    }
    for digit in 1..10 {
        count[digit] += count[digit - 1];
    }
    // Walk backwards so equal digits keep their relative order.
    let mut out = vec![0i64; items.len()];
    for &x in items.iter().rev() {
        let digit = ((x / exp) % 10) as usize;
        count[digit] -= 1;
        out[count[digit]] = x;
    }
    out
}

/// Gnome sort: a single pointer walks forward over ordered pairs and
/// backward after each swap. O(n^2) worst case.
pub fn gnome_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    let mut i = 0;
    while i < out.len() {
        if i == 0 || out[i] >= out[i - 1] {
            i += 1;
        } else {
            out.swap(i, i - 1);
            i -= 1;
        }
    }
    out
}

/// Comb sort: the gap shrinks by a factor of 1.3 each round (floored,
/// never below 1) and passes continue until a full gap-1 pass makes no
/// swap.
pub fn comb_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    const SHRINK: f64 = 1.3;

    let mut out = items.to_vec();
    let mut gap = out.len();
    let mut done = false;
    while !done {
        gap = (gap as f64 / SHRINK) as usize;
        if gap <= 1 {
            gap = 1;
            done = true;
        }
        let mut i = 0;
        while i + gap < out.len() {
            if out[i] > out[i + gap] {
                out.swap(i, i + gap);
                done = false;
            }
            i += 1;
        }
    }
    out
}

/// Two-pointer reversal: returns the elements in exactly reverse input
/// order, e.g. `[1, 2, 3] -> [3, 2, 1]`. Applying it twice restores the
/// original sequence.
pub fn reverse<T: Clone>(items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    if out.is_empty() {
        return out;
    }
    let mut left = 0;
    let mut right = out.len() - 1;
    while left < right {
        out.swap(left, right);
        left += 1;
        right -= 1;
    }
    out
}

fn check_non_negative(items: &[i64], algorithm: &str) -> Result<()> {
    if let Some(bad) = items.iter().find(|&&x| x < 0) {
        return Err(Error::InvalidInput(format!(
            "{} requires non-negative integers, got {}",
            algorithm, bad
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use test_log::test;

    use crate::rng::Lcg;

    use super::*;

    const CASES: &[&[i64]] = &[
        &[],
        &[42],
        &[1, 2, 3, 4, 5],
        &[5, 4, 3, 2, 1],
        &[3, 1, 2],
        &[2, 2, 2, 2],
        &[170, 45, 75, 90, 802, 24, 2, 66],
        &[1, 0, 1, 0, 1, 0],
    ];

    fn assert_sorts(sort: fn(&[i64]) -> Vec<i64>, name: &str) {
        for &case in CASES {
            let out = sort(case);
            check_sorted_permutation(case, &out, name);
            // Idempotence: sorting sorted input is the identity.
            assert_eq!(sort(&out), out, "{} not idempotent on {:?}", name, case);
        }

        // Fuzz against the standard sort with a fixed-seed generator.
        let mut rng = Lcg::new(2024);
        for _ in 0..20 {
            let len = rng.next_int(0, 50) as usize;
            let data: Vec<i64> = (0..len).map(|_| rng.next_int(0, 1000)).collect();
            check_sorted_permutation(&data, &sort(&data), name);
        }
    }

    fn check_sorted_permutation(input: &[i64], output: &[i64], name: &str) {
        let mut expected = input.to_vec();
        expected.sort();
        assert_eq!(output, expected, "{} failed on {:?}", name, input);
    }

    #[test]
    fn test_all_generic_sorts() {
        assert_sorts(bubble_sort, "bubble");
        assert_sorts(quick_sort, "quick");
        assert_sorts(insertion_sort, "insertion");
        assert_sorts(selection_sort, "selection");
        assert_sorts(merge_sort, "merge");
        assert_sorts(heap_sort, "heap");
        assert_sorts(shell_sort, "shell");
        assert_sorts(gnome_sort, "gnome");
        assert_sorts(comb_sort, "comb");
    }

    #[test]
    fn test_input_is_never_mutated() {
        let input = vec![5, 3, 1, 4, 2];
        let snapshot = input.clone();
        let _ = bubble_sort(&input);
        let _ = quick_sort(&input);
        let _ = merge_sort(&input);
        let _ = heap_sort(&input);
        let _ = counting_sort(&input).unwrap();
        let _ = radix_sort(&input).unwrap();
        let _ = reverse(&input);
        assert_eq!(input, snapshot);
    }

    #[test]
    fn test_counting_sort() {
        assert_eq!(counting_sort(&[3, 1, 2]).unwrap(), vec![1, 2, 3]);
        assert_eq!(counting_sort(&[]).unwrap(), Vec::<i64>::new());
        assert_eq!(counting_sort(&[0, 0, 7]).unwrap(), vec![0, 0, 7]);
    }

    #[test]
    fn test_radix_sort() {
        assert_eq!(radix_sort(&[3, 1, 2]).unwrap(), vec![1, 2, 3]);
        assert_eq!(radix_sort(&[]).unwrap(), Vec::<i64>::new());
        assert_eq!(
            radix_sort(&[170, 45, 75, 90, 802, 24, 2, 66]).unwrap(),
            vec![2, 24, 45, 66, 75, 90, 170, 802]
        );
    }

    #[test]
    fn test_radix_sort_large_values() {
        let data = [i64::MAX, 0, 1, i64::MAX - 1];
        assert_eq!(
            radix_sort(&data).unwrap(),
            vec![0, 1, i64::MAX - 1, i64::MAX]
        );
    }

    #[test]
    fn test_negative_input_fails_fast() {
        for sort in [counting_sort, radix_sort] {
            match sort(&[3, -1, 2]) {
                Err(Error::InvalidInput(msg)) => assert!(msg.contains("-1")),
                other => panic!("expected InvalidInput, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_reverse() {
        assert_eq!(reverse(&[1, 2, 3, 4, 5, 6, 7]), vec![7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(reverse::<i64>(&[]), Vec::<i64>::new());
        assert_eq!(reverse(&[1]), vec![1]);
    }

    #[test]
    fn test_reverse_is_an_involution() {
        let mut rng = Lcg::new(31);
        for _ in 0..10 {
            let len = rng.next_int(0, 30) as usize;
            let data: Vec<i64> = (0..len).map(|_| rng.next_int(-100, 100)).collect();
            assert_eq!(reverse(&reverse(&data)), data);
        }
    }

    #[test]
    fn test_sorts_accept_non_numeric_elements() {
        let words = ["pear", "apple", "banana", "apple"];
        let expected = vec!["apple", "apple", "banana", "pear"];
        assert_eq!(merge_sort(&words), expected);
        assert_eq!(quick_sort(&words), expected);
        assert_eq!(gnome_sort(&words), expected);
    }

    // Keyed value comparing (and equating) by key only, so stability is
    // observable through the tag.
    #[derive(Debug, Clone, Eq)]
    struct Keyed {
        key: u32,
        tag: u32,
    }

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    #[test]
    fn test_stable_sorts_preserve_tie_order() {
        let items: Vec<Keyed> = [(2, 0), (1, 1), (2, 2), (1, 3), (2, 4)]
            .iter()
            .map(|&(key, tag)| Keyed { key, tag })
            .collect();
        for sort in [insertion_sort::<Keyed>, merge_sort::<Keyed>] {
            let sorted = sort(&items);
            let tags: Vec<u32> = sorted.iter().map(|k| k.tag).collect();
            assert_eq!(tags, vec![1, 3, 0, 2, 4]);
        }
    }
}
