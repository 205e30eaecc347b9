//! Stable counting sort over non-negative integer keys.
//!
//! The key space `0..=max` is indexed directly, so the cost is
//! O(n + max) time and O(n + max) extra memory. Sparse inputs (`max >> n`)
//! pay for the whole range; that is inherent to the algorithm.

use crate::error::SortError;
use log::debug;

/// Sorts non-negative integers into a newly allocated vector.
///
/// The input is left untouched.
///
/// # Errors
///
/// * [`SortError::EmptyInput`] if `input` is empty.
/// * [`SortError::NegativeKey`] if any value is negative.
/// * [`SortError::KeyRangeTooLarge`] if the largest value cannot size a table,
///   either because it overflows the address space or because the
///   allocation fails.
///
/// # Examples
///
/// ```
/// use bcisort::counting_sort;
///
/// let sorted = counting_sort(&[4, 1, 3, 1, 0]).unwrap();
/// assert_eq!(sorted, vec![0, 1, 1, 3, 4]);
/// ```
pub fn counting_sort(input: &[i64]) -> Result<Vec<i64>, SortError> {
    counting_sort_by_key(input, |&v| v)
}

/// Sorts records by an integer key extracted with `key`, preserving the
/// relative order of records with equal keys.
///
/// # Examples
///
/// ```
/// use bcisort::counting_sort_by_key;
///
/// let tagged = [(5, 'a'), (3, 'b'), (5, 'c')];
/// let sorted = counting_sort_by_key(&tagged, |&(k, _)| k).unwrap();
/// assert_eq!(sorted, vec![(3, 'b'), (5, 'a'), (5, 'c')]);
/// ```
pub fn counting_sort_by_key<T, F>(input: &[T], key: F) -> Result<Vec<T>, SortError>
where
    T: Clone,
    F: Fn(&T) -> i64,
{
    let max = max_key(input, &key)?;
    let table_len = usize::try_from(max)
        .ok()
        .and_then(|m| m.checked_add(1))
        .filter(|&len| {
            len.checked_mul(size_of::<usize>())
                .is_some_and(|bytes| bytes <= isize::MAX as usize)
        })
        .ok_or(SortError::KeyRangeTooLarge { max })?;

    debug!(
        "counting sort: {} items, max key {}, table of {} slots",
        input.len(),
        max,
        table_len
    );

    // 1. Count occurrences per key.
    let mut table: Vec<usize> = Vec::new();
    table
        .try_reserve_exact(table_len)
        .map_err(|_| SortError::KeyRangeTooLarge { max })?;
    table.resize(table_len, 0);
    input.iter().for_each(|item| {
        table[key(item) as usize] += 1;
    });

    // 2. Prefix sum: table[v] becomes the count of items with key <= v.
    let mut sum = 0;
    table.iter_mut().for_each(|slot| {
        sum += *slot;
        *slot = sum;
    });

    // 3. Place back-to-front so equal keys keep their input order. The copy
    // only sizes the buffer; every slot is overwritten once since the prefix
    // sums partition 0..len.
    let mut output = input.to_vec();
    input.iter().rev().for_each(|item| {
        let k = key(item) as usize;
        table[k] -= 1;
        output[table[k]] = item.clone();
    });

    Ok(output)
}

/// Validates the keys and returns the largest one.
fn max_key<T, F>(input: &[T], key: &F) -> Result<i64, SortError>
where
    F: Fn(&T) -> i64,
{
    let mut max: Option<i64> = None;
    for (index, item) in input.iter().enumerate() {
        let value = key(item);
        if value < 0 {
            return Err(SortError::NegativeKey { index, value });
        }
        max = Some(max.map_or(value, |m| m.max(value)));
    }
    max.ok_or(SortError::EmptyInput)
}
