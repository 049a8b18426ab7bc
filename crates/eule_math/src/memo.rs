//! Lazily computed, thread-safe cached value
//!
//! A [`Memo`] is either `Stale` or holds a `Valid` value. Readers take the
//! lock, compute if stale, and store the result before releasing it, so a
//! value is never observed half-written. Invalidation needs `&mut self`,
//! which the borrow checker already makes exclusive, so it never locks.

use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone)]
enum CacheState<T> {
    Stale,
    Valid(T),
}

/// A derived value that is recomputed on demand after invalidation
#[derive(Debug)]
pub(crate) struct Memo<T> {
    state: Mutex<CacheState<T>>,
}

impl<T: Clone> Memo<T> {
    /// A memo with nothing cached yet
    pub(crate) fn new() -> Self {
        Self {
            state: Mutex::new(CacheState::Stale),
        }
    }

    /// The cached value, computing and storing it first if stale.
    ///
    /// `compute` runs under the lock and must not touch this memo.
    pub(crate) fn get_or_compute(&self, compute: impl FnOnce() -> T) -> T {
        // A panic in another reader can only poison a lock around a Stale
        // or fully written Valid state, both of which are safe to reuse.
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        match &*state {
            CacheState::Valid(value) => value.clone(),
            CacheState::Stale => {
                let value = compute();
                *state = CacheState::Valid(value.clone());
                value
            }
        }
    }

    /// Mark the cached value stale
    pub(crate) fn invalidate(&mut self) {
        *self.state.get_mut().unwrap_or_else(PoisonError::into_inner) = CacheState::Stale;
    }

    /// Whether a value is currently cached
    pub(crate) fn is_valid(&self) -> bool {
        let state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        matches!(*state, CacheState::Valid(_))
    }
}

impl<T: Clone> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_computes_once() {
        let memo = Memo::new();
        let calls = AtomicUsize::new(0);
        let compute = || {
            calls.fetch_add(1, Ordering::SeqCst);
            42
        };

        assert!(!memo.is_valid());
        assert_eq!(memo.get_or_compute(compute), 42);
        assert_eq!(memo.get_or_compute(compute), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(memo.is_valid());
    }

    #[test]
    fn test_invalidate_recomputes() {
        let mut memo = Memo::new();
        assert_eq!(memo.get_or_compute(|| 1), 1);
        memo.invalidate();
        assert!(!memo.is_valid());
        assert_eq!(memo.get_or_compute(|| 2), 2);
    }

    #[test]
    fn test_concurrent_readers_compute_once() {
        let memo = Memo::new();
        let calls = AtomicUsize::new(0);

        std::thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    let v = memo.get_or_compute(|| {
                        calls.fetch_add(1, Ordering::SeqCst);
                        String::from("cached")
                    });
                    assert_eq!(v, "cached");
                });
            }
        });

        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }
}
