// SPDX-License-Identifier: MIT OR Apache-2.0
/*!
Exclusive spinlock guarding the shared log file.

On the wasm main thread we can't necessarily block, so instead of a mutex we spin.  The lock is
only ever held for the duration of one file operation, never while running caller code
(tokens are rendered before the lock is taken), so it cannot be re-entered from a `Display` impl.
*/

use std::cell::UnsafeCell;
use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering::{Acquire, Relaxed, Release};

pub struct Spinlock<T> {
    data: UnsafeCell<T>,
    locked: AtomicBool,
}

unsafe impl<T: Send> Send for Spinlock<T> {}
unsafe impl<T: Send> Sync for Spinlock<T> {}

impl<T> Spinlock<T> {
    pub const fn new(data: T) -> Self {
        Spinlock {
            data: UnsafeCell::new(data),
            locked: AtomicBool::new(false),
        }
    }

    fn lock(&self) {
        while self
            .locked
            .compare_exchange_weak(false, true, Acquire, Relaxed)
            .is_err()
        {
            std::hint::spin_loop();
        }
    }

    fn unlock(&self) {
        self.locked.store(false, Release);
    }

    pub fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        self.lock();
        // SAFETY: we hold the only lock, so no other reference to data exists
        let result = unsafe { f(&mut *self.data.get()) };
        self.unlock();
        result
    }
}
