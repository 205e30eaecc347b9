//! Input generation and loading for the sorting experiment.

use crate::error::DatasetError;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// The three input orders the experiment runs every algorithm on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Sorted,
    Randomized,
    Reversed,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 3] = [
        DatasetKind::Sorted,
        DatasetKind::Randomized,
        DatasetKind::Reversed,
    ];

    pub fn generate<R: Rng + ?Sized>(self, n: usize, rng: &mut R) -> Vec<i64> {
        match self {
            DatasetKind::Sorted => ascending(n),
            DatasetKind::Randomized => shuffled(n, rng),
            DatasetKind::Reversed => reversed(n),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DatasetKind::Sorted => "sorted",
            DatasetKind::Randomized => "randomized",
            DatasetKind::Reversed => "reversed",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// `1..=n`.
pub fn ascending(n: usize) -> Vec<i64> {
    (1..=n as i64).collect()
}

/// `n..=1`, strictly descending.
pub fn reversed(n: usize) -> Vec<i64> {
    (1..=n as i64).rev().collect()
}

/// A uniform permutation of [`ascending(n)`](ascending).
pub fn shuffled<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<i64> {
    let mut data = ascending(n);
    data.shuffle(rng);
    data
}

/// Reads newline-delimited signed integers.
///
/// Blank lines are skipped and surrounding whitespace is ignored.
pub fn read_dataset<R: BufRead>(reader: R) -> Result<Vec<i64>, DatasetError> {
    let mut data = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let value = trimmed.parse::<i64>().map_err(|_| DatasetError::Parse {
            line: index + 1,
            content: trimmed.to_string(),
        })?;
        data.push(value);
    }
    Ok(data)
}

/// Opens `path` and reads it with [`read_dataset`].
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Vec<i64>, DatasetError> {
    let file = File::open(path)?;
    read_dataset(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::io::Cursor;

    #[test]
    fn test_generated_orders() {
        assert_eq!(ascending(4), vec![1, 2, 3, 4]);
        assert_eq!(reversed(4), vec![4, 3, 2, 1]);
        assert!(ascending(0).is_empty());

        let mut rng = StdRng::seed_from_u64(7);
        let mut data = shuffled(100, &mut rng);
        data.sort();
        assert_eq!(data, ascending(100));
    }

    #[test]
    fn test_read_skips_blank_lines() {
        let input = "3\n\n  -1 \n42\n\n";
        let data = read_dataset(Cursor::new(input)).unwrap();
        assert_eq!(data, vec![3, -1, 42]);
    }

    #[test]
    fn test_read_reports_bad_line() {
        let input = "1\n2\nthree\n4\n";
        match read_dataset(Cursor::new(input)) {
            Err(DatasetError::Parse { line, content }) => {
                assert_eq!(line, 3);
                assert_eq!(content, "three");
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_dataset("/nonexistent/bcisort/dataset.txt").unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
