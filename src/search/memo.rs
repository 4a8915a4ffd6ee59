//! Single-slot cache keyed by library generation.

use std::sync::Arc;

use parking_lot::Mutex;

/// Holds one derived value together with the library generation it was
/// computed from. A lookup with a different generation rebuilds it.
#[derive(Debug)]
pub struct Memo<T> {
    slot: Mutex<Option<(u64, Arc<T>)>>,
}

impl<T> Memo<T> {
    pub const fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    /// Cached value for `generation`, building it on a miss.
    pub fn get_or_build(&self, generation: u64, build: impl FnOnce() -> T) -> Arc<T> {
        let mut slot = self.slot.lock();
        match slot.as_ref() {
            Some((cached, value)) if *cached == generation => Arc::clone(value),
            _ => {
                let value = Arc::new(build());
                *slot = Some((generation, Arc::clone(&value)));
                value
            }
        }
    }

    pub fn clear(&self) {
        *self.slot.lock() = None;
    }
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_builds_once_per_generation() {
        let memo = Memo::new();
        let builds = Cell::new(0);
        let build = || {
            builds.set(builds.get() + 1);
            builds.get()
        };

        assert_eq!(*memo.get_or_build(1, build), 1);
        assert_eq!(*memo.get_or_build(1, build), 1);
        assert_eq!(builds.get(), 1);

        assert_eq!(*memo.get_or_build(2, build), 2);
        assert_eq!(*memo.get_or_build(2, build), 2);
        assert_eq!(builds.get(), 2);
    }

    #[test]
    fn test_clear_forces_rebuild() {
        let memo = Memo::new();
        let first = memo.get_or_build(7, || "index".to_string());
        memo.clear();
        let second = memo.get_or_build(7, || "index".to_string());
        assert!(!Arc::ptr_eq(&first, &second));
    }
}
