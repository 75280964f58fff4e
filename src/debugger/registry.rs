use std::sync::atomic::{AtomicU32, Ordering};

/// Process-wide context numbering. Starts at zero, so the first context is
/// numbered 1; numbers are never reset or reused.
static THNUM_CURRENT: AtomicU32 = AtomicU32::new(0);

pub(crate) fn next_thnum() -> u32 {
    THNUM_CURRENT.fetch_add(1, Ordering::Relaxed) + 1
}
