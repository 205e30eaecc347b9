use bcisort::measure::{TrackingAllocator, current_heap_bytes, measure};
use std::hint::black_box;
use std::panic;

#[global_allocator]
static ALLOC: TrackingAllocator = TrackingAllocator;

const MIB: usize = 1 << 20;

// The counters are process-wide, so every scenario runs in one test to keep
// other test threads from moving the peak underneath it.
#[test]
fn test_peak_tracking_with_installed_allocator() {
    // Reports the high-water mark above the live size at entry.
    let (len, m) = measure("1 MiB", || black_box(vec![0u8; MIB]).len());
    assert_eq!(len, MIB);
    assert!(m.peak_bytes >= MIB, "peak {} below 1 MiB", m.peak_bytes);

    // A panicking closure still releases its scope, and the next
    // measurement starts from the current live size again.
    let result = panic::catch_unwind(|| {
        measure("panics", || {
            let big = black_box(vec![1u8; 2 * MIB]);
            if !big.is_empty() {
                panic!("measured closure failed");
            }
        })
    });
    assert!(result.is_err());

    let (_, small) = measure("small", || black_box(vec![0u8; 64]).len());
    assert!(
        small.peak_bytes < MIB,
        "peak {} leaked from the panicking measurement",
        small.peak_bytes
    );

    // An outer scope keeps its own high-water mark across a nested one,
    // including one that unwinds.
    let (inner, outer) = measure("outer", || {
        let held = black_box(vec![0u8; MIB / 2]);
        let (_, inner) = measure("inner", || black_box(vec![0u8; MIB]).len());
        let _ = panic::catch_unwind(|| {
            measure("inner panics", || {
                let big = black_box(vec![0u8; 3 * MIB]);
                if !big.is_empty() {
                    panic!("nested closure failed");
                }
            })
        });
        drop(held);
        inner
    });
    assert!(inner.peak_bytes >= MIB);
    assert!(outer.peak_bytes >= inner.peak_bytes);
    assert!(outer.peak_bytes >= MIB / 2 + MIB);
    assert!(outer.peak_bytes >= 3 * MIB);

    assert!(current_heap_bytes() > 0);
}
