use bcisort::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// The equal-comparator scan must reach the last unsorted slot: in [1, 1, 0, 1]
// the only differing value sits at `sr - 1`.
#[test]
fn test_equal_comparators_with_last_slot_differing() {
    let mut data = vec![1, 1, 0, 1];
    bci_sort(&mut data, 0, 3).unwrap();
    assert_eq!(data, vec![0, 1, 1, 1]);
}

#[test]
fn test_two_valued_windows() {
    let mut rng = StdRng::seed_from_u64(42);

    for _iter in 0..2_000 {
        let len = rng.random_range(2..64);
        let mut input: Vec<u8> = (0..len).map(|_| rng.random_range(0..2)).collect();
        let original = input.clone();

        let mut expected = input.clone();
        expected.sort();

        bci_sort_all(&mut input);

        if input != expected {
            panic!("Mismatch for input {:?}: got {:?}", original, input);
        }
    }
}
