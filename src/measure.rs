//! Wall-clock and peak-heap instrumentation around a single sort call.
//!
//! Peak tracking needs [`TrackingAllocator`] installed as the global
//! allocator of the final binary:
//!
//! ```ignore
//! use bcisort::measure::TrackingAllocator;
//!
//! #[global_allocator]
//! static ALLOC: TrackingAllocator = TrackingAllocator;
//! ```
//!
//! Without it every [`Measurement::peak_bytes`] reads as zero.

use cuneiform::cuneiform;
use std::alloc::{GlobalAlloc, Layout, System};
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

// Every allocation in the process hits both counters; keep them on their own
// cache line.
#[cuneiform]
struct HeapCounters {
    current: AtomicUsize,
    peak: AtomicUsize,
}

static HEAP: HeapCounters = HeapCounters {
    current: AtomicUsize::new(0),
    peak: AtomicUsize::new(0),
};

/// Global allocator that forwards to [`System`] and tracks live and peak
/// heap bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct TrackingAllocator;

impl TrackingAllocator {
    #[inline(always)]
    fn grow(by: usize) {
        let now = HEAP.current.fetch_add(by, Ordering::Relaxed) + by;
        HEAP.peak.fetch_max(now, Ordering::Relaxed);
    }

    #[inline(always)]
    fn shrink(by: usize) {
        HEAP.current.fetch_sub(by, Ordering::Relaxed);
    }
}

unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY: forwarded unchanged; the caller upholds `alloc`'s contract.
        let ptr = unsafe { System.alloc(layout) };
        if !ptr.is_null() {
            Self::grow(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        // SAFETY: as above.
        let ptr = unsafe { System.alloc_zeroed(layout) };
        if !ptr.is_null() {
            Self::grow(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: `ptr` was returned by this allocator with `layout`.
        unsafe { System.dealloc(ptr, layout) };
        Self::shrink(layout.size());
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        // SAFETY: `ptr` was returned by this allocator with `layout`.
        let new_ptr = unsafe { System.realloc(ptr, layout, new_size) };
        if !new_ptr.is_null() {
            let old_size = layout.size();
            if new_size > old_size {
                Self::grow(new_size - old_size);
            } else {
                Self::shrink(old_size - new_size);
            }
        }
        new_ptr
    }
}

/// Bytes currently allocated through [`TrackingAllocator`].
pub fn current_heap_bytes() -> usize {
    HEAP.current.load(Ordering::Relaxed)
}

/// Restarts peak tracking at the current live size for its lifetime.
///
/// On drop the process-wide peak is restored to at least what it was on
/// entry, so an enclosing scope still sees its own high-water mark. This
/// also runs when the measured closure unwinds.
struct PeakScope {
    baseline: usize,
    outer_peak: usize,
}

impl PeakScope {
    fn enter() -> Self {
        let baseline = HEAP.current.load(Ordering::Relaxed);
        let outer_peak = HEAP.peak.swap(baseline, Ordering::Relaxed);
        Self {
            baseline,
            outer_peak,
        }
    }

    /// Peak bytes allocated above the entry baseline so far.
    fn peak_above_baseline(&self) -> usize {
        HEAP.peak
            .load(Ordering::Relaxed)
            .saturating_sub(self.baseline)
    }
}

impl Drop for PeakScope {
    fn drop(&mut self) {
        HEAP.peak.fetch_max(self.outer_peak, Ordering::Relaxed);
    }
}

/// One timed, heap-tracked call.
#[derive(Clone, Debug, PartialEq)]
pub struct Measurement {
    pub label: String,
    pub elapsed: Duration,
    pub peak_bytes: usize,
}

impl Measurement {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }

    pub fn peak_mib(&self) -> f64 {
        self.peak_bytes as f64 / (1024.0 * 1024.0)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} - Execution Time: {} ms", self.label, self.elapsed_ms())?;
        write!(
            f,
            "{} - Peak Memory Usage: {:.2} MB",
            self.label,
            self.peak_mib()
        )
    }
}

/// Runs `f` once, timing it and recording the heap high-water mark it
/// reached above the live size at entry.
pub fn measure<R, F: FnOnce() -> R>(label: impl Into<String>, f: F) -> (R, Measurement) {
    let scope = PeakScope::enter();
    let start = Instant::now();
    let result = f();
    let elapsed = start.elapsed();
    let peak_bytes = scope.peak_above_baseline();
    drop(scope);

    let measurement = Measurement {
        label: label.into(),
        elapsed,
        peak_bytes,
    };
    (result, measurement)
}
