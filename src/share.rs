// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Inter-task data sharing.
//!
//! A [`Share`] carries one value from a single producer task to any number of readers. Every
//! access runs inside a critical section, so a `put` is published as a whole even if the producer
//! is later moved into an interrupt handler. Under the cooperative run loop the critical section
//! is never contended.
//!
//! ```
//! use positrak::share::Share;
//!
//! static POSITION: Share<i32> = Share::new(0);
//!
//! POSITION.put(1024);
//! assert_eq!(POSITION.get(), 1024);
//! ```

use core::cell::Cell;
use core::fmt;

use critical_section::Mutex;

/// Single-writer / multi-reader value cell.
///
/// Each share must have exactly one writer. The type does not serialize competing writers; it only
/// guarantees that readers never observe a partially written value.
pub struct Share<T> {
    value: Mutex<Cell<T>>,
}

impl<T: Copy> Share<T> {
    /// Create a share holding `initial` until the first `put`.
    pub const fn new(initial: T) -> Self {
        Self {
            value: Mutex::new(Cell::new(initial)),
        }
    }

    /// Last published value.
    #[inline]
    pub fn get(&self) -> T {
        critical_section::with(|cs| self.value.borrow(cs).get())
    }

    /// Publish a new value.
    #[inline]
    pub fn put(&self, value: T) {
        critical_section::with(|cs| self.value.borrow(cs).set(value));
    }

    /// Publish a new value and return the one it replaced.
    #[inline]
    pub fn replace(&self, value: T) -> T {
        critical_section::with(|cs| self.value.borrow(cs).replace(value))
    }
}

impl<T: Copy + fmt::Debug> fmt::Debug for Share<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Share").field(&self.get()).finish()
    }
}
