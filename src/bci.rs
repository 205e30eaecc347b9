//! Bidirectional Conditional Insertion Sort (BCIS).
//!
//! Saher Mohammed, Emrah Amrahov and Çelebi, *Bidirectional Conditional
//! Insertion Sort algorithm; An efficient progress on the classical insertion
//! sort* (2016).
//!
//! The sort keeps a single unsorted window `[sl, sr]` inside the requested
//! range and shrinks it from both ends. Each round:
//!
//! 1. Seeds `v[sr]` with the window midpoint and orders `v[sl] <= v[sr]`.
//!    If the two are equal, a differing element is pulled into `v[sl]`; if
//!    there is none the window holds a single value and the sort is done.
//! 2. On wide windows, samples `isqrt(sr - sl)` elements to widen the two
//!    comparators.
//! 3. Classifies the window: elements `>= RC` are inserted into the sorted
//!    suffix, elements `<= LC` into the sorted prefix, everything else stays.
//! 4. Excludes the two comparators from the next round.
//!
//! Everything below `sl` is `<=` everything in the window, and everything
//! above `sr` is `>=` it. Settled elements are never revisited.

use crate::error::SortError;
use log::{debug, trace};

/// Window width (`sr - sl`) from which the comparator pre-pass runs.
pub const PREPASS_THRESHOLD: usize = 100;

/// BCI sort with tunable parameters.
///
/// # Examples
///
/// ```
/// use bcisort::BciSorter;
///
/// let sorter = BciSorter::new().with_prepass_threshold(16);
/// let mut data = vec![9, -2, 7, 7, 0, 3];
/// sorter.sort_all(&mut data);
/// assert_eq!(data, vec![-2, 0, 3, 7, 7, 9]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BciSorter {
    prepass_threshold: usize,
}

impl Default for BciSorter {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of one call, reported through `debug!`.
#[derive(Clone, Copy, Debug, Default)]
struct RunStats {
    rounds: usize,
    uniform_exit: bool,
}

impl BciSorter {
    pub const fn new() -> Self {
        Self {
            prepass_threshold: PREPASS_THRESHOLD,
        }
    }

    /// Sets the window width from which the sampling pre-pass is used.
    pub const fn with_prepass_threshold(mut self, threshold: usize) -> Self {
        self.prepass_threshold = threshold;
        self
    }

    pub const fn prepass_threshold(&self) -> usize {
        self.prepass_threshold
    }

    /// Sorts `v[left..=right]` in place. Elements outside the range are not
    /// touched.
    ///
    /// An empty `v` is a no-op whatever the bounds. `left == right` is a
    /// single element and also a no-op.
    ///
    /// # Errors
    ///
    /// [`SortError::InvalidRange`] if `left > right` or `right >= v.len()`
    /// on a non-empty sequence.
    pub fn sort<T: Ord + Copy>(
        &self,
        v: &mut [T],
        left: usize,
        right: usize,
    ) -> Result<(), SortError> {
        if v.is_empty() {
            return Ok(());
        }
        if left > right || right >= v.len() {
            return Err(SortError::InvalidRange {
                left,
                right,
                len: v.len(),
            });
        }

        let stats = self.sort_range(v, left, right);
        debug!(
            "bci sort [{}, {}]: {} rounds{}",
            left,
            right,
            stats.rounds,
            if stats.uniform_exit {
                ", stopped on uniform window"
            } else {
                ""
            }
        );
        Ok(())
    }

    /// Sorts the whole slice in place.
    pub fn sort_all<T: Ord + Copy>(&self, v: &mut [T]) {
        if v.len() > 1 {
            self.sort_range(v, 0, v.len() - 1);
        }
    }

    fn sort_range<T: Ord + Copy>(&self, v: &mut [T], left: usize, right: usize) -> RunStats {
        let mut stats = RunStats::default();
        let mut sl = left;
        let mut sr = right;

        while sl < sr {
            stats.rounds += 1;
            v.swap(sr, sl + (sr - sl) / 2);

            if v[sl] == v[sr] && !pull_distinct(v, sl, sr) {
                stats.uniform_exit = true;
                return stats;
            }

            if v[sl] > v[sr] {
                v.swap(sl, sr);
            }

            if sr - sl >= self.prepass_threshold {
                let last = sl + (sr - sl).isqrt();
                for i in sl + 1..=last.min(sr - 1) {
                    if v[sr] < v[i] {
                        v.swap(sr, i);
                    } else if v[sl] > v[i] {
                        v.swap(sl, i);
                    }
                }
            }

            let lc = v[sl];
            let rc = v[sr];
            trace!("round {}: window [{}, {}]", stats.rounds, sl, sr);

            let mut i = sl + 1;
            while i < sr {
                let current = v[i];
                if current >= rc {
                    v[i] = v[sr - 1];
                    insert_right(v, current, sr, right);
                    sr -= 1;
                } else if current <= lc {
                    v[i] = v[sl + 1];
                    insert_left(v, current, sl, left);
                    sl += 1;
                    i += 1;
                } else {
                    i += 1;
                }
            }

            sl += 1;
            sr -= 1;
        }

        stats
    }
}

/// Sorts `v[left..=right]` in place with the default parameters.
///
/// # Examples
///
/// ```
/// use bcisort::bci_sort;
///
/// let mut data = vec![5, 3, 4, 1, 2];
/// bci_sort(&mut data, 0, 4).unwrap();
/// assert_eq!(data, vec![1, 2, 3, 4, 5]);
/// ```
pub fn bci_sort<T: Ord + Copy>(v: &mut [T], left: usize, right: usize) -> Result<(), SortError> {
    BciSorter::new().sort(v, left, right)
}

/// Sorts the whole slice in place with the default parameters.
pub fn bci_sort_all<T: Ord + Copy>(v: &mut [T]) {
    BciSorter::new().sort_all(v)
}

/// Called when `v[sl] == v[sr]`. Swaps the first element of the window that
/// differs from `v[sl]` into `sl`.
///
/// Returns `false` when the whole window holds one value.
fn pull_distinct<T: Ord + Copy>(v: &mut [T], sl: usize, sr: usize) -> bool {
    let anchor = v[sl];
    match (sl + 1..sr).find(|&k| v[k] != anchor) {
        Some(k) => {
            v.swap(k, sl);
            true
        }
        None => false,
    }
}

/// Inserts `item` into the sorted run `v[sr..=right]`.
///
/// `v[sr - 1]` is a free slot on entry. Larger run elements shift one step
/// left until `item` fits.
#[inline]
fn insert_right<T: Ord + Copy>(v: &mut [T], item: T, sr: usize, right: usize) {
    let mut hole = sr - 1;
    while hole < right && item > v[hole + 1] {
        v[hole] = v[hole + 1];
        hole += 1;
    }
    v[hole] = item;
}

/// Inserts `item` into the sorted run `v[left..=sl]`.
///
/// `v[sl + 1]` is a free slot on entry. Smaller run elements shift one step
/// right until `item` fits.
#[inline]
fn insert_left<T: Ord + Copy>(v: &mut [T], item: T, sl: usize, left: usize) {
    let mut hole = sl + 1;
    while hole > left && item < v[hole - 1] {
        v[hole] = v[hole - 1];
        hole -= 1;
    }
    v[hole] = item;
}
