//! Lock-protected array handle shared by the sort worker and the renderer.

use std::ops::RangeInclusive;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::RwLock;
use rand::Rng;

use super::ArrayModel;
use crate::error::ArrayError;

#[derive(Debug)]
struct Inner {
    model: RwLock<ArrayModel>,
    version: AtomicU64,
}

/// Cloneable handle to an [`ArrayModel`].
///
/// Every mutation takes the write lock for a single element operation and
/// bumps [`SharedArray::version`]; readers copy under the read lock, so a
/// snapshot never contains a half-applied swap. Only one sort worker writes
/// at a time (the runner enforces this).
#[derive(Debug, Clone)]
pub struct SharedArray {
    inner: Arc<Inner>,
}

impl SharedArray {
    /// Wraps a model.
    pub fn new(model: ArrayModel) -> Self {
        Self {
            inner: Arc::new(Inner {
                model: RwLock::new(model),
                version: AtomicU64::new(0),
            }),
        }
    }

    /// Convenience constructor from raw values.
    pub fn from_values(values: Vec<i32>) -> Self {
        Self::new(ArrayModel::from_values(values))
    }

    /// Monotonic counter incremented after every mutation.
    pub fn version(&self) -> u64 {
        self.inner.version.load(Ordering::Acquire)
    }

    fn bump(&self) {
        self.inner.version.fetch_add(1, Ordering::AcqRel);
    }

    /// Owned copy of the contents.
    pub fn snapshot(&self) -> Vec<i32> {
        self.inner.model.read().snapshot()
    }

    /// Copy of an inclusive index range.
    pub fn read_range(&self, range: RangeInclusive<usize>) -> Vec<i32> {
        self.inner.model.read().as_slice()[range].to_vec()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.inner.model.read().len()
    }

    /// Returns true when there are no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The `(min, max)` range of the current array.
    pub fn range(&self) -> (i32, i32) {
        self.inner.model.read().range()
    }

    /// Reads one element.
    pub fn get(&self, index: usize) -> i32 {
        self.inner.model.read().get(index)
    }

    /// Overwrites one element.
    pub fn set(&self, index: usize, value: i32) {
        self.inner.model.write().set(index, value);
        self.bump();
    }

    /// Exchanges two elements.
    pub fn swap(&self, i: usize, j: usize) {
        self.inner.model.write().swap(i, j);
        self.bump();
    }

    /// Regenerates the contents in place.
    pub fn regenerate(&self, length: usize, min: i32, max: i32) -> Result<(), ArrayError> {
        self.inner.model.write().regenerate(length, min, max)?;
        self.bump();
        Ok(())
    }

    /// Regenerates the contents from `rng`.
    pub fn regenerate_with<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        length: usize,
        min: i32,
        max: i32,
    ) -> Result<(), ArrayError> {
        self.inner
            .model
            .write()
            .regenerate_with(rng, length, min, max)?;
        self.bump();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_version_bumps_on_mutation() {
        let array = SharedArray::from_values(vec![1, 2, 3]);
        assert_eq!(array.version(), 0);
        array.swap(0, 2);
        array.set(1, 7);
        assert_eq!(array.version(), 2);
        assert_eq!(array.snapshot(), vec![3, 7, 1]);
    }

    #[test]
    fn test_failed_regenerate_keeps_version() {
        let array = SharedArray::from_values(vec![1, 2, 3]);
        assert!(array.regenerate(5, 9, 1).is_err());
        assert_eq!(array.version(), 0);
        assert_eq!(array.snapshot(), vec![1, 2, 3]);
    }

    #[test]
    fn test_clones_share_state() {
        let array = SharedArray::from_values(vec![4, 5]);
        let other = array.clone();
        other.swap(0, 1);
        assert_eq!(array.snapshot(), vec![5, 4]);
        assert_eq!(array.read_range(0..=0), vec![5]);
    }

    #[test]
    fn test_snapshots_never_torn() {
        // A writer swaps pairs; a reader must always see the same multiset.
        let array = SharedArray::from_values(vec![1, 2, 3, 4]);
        let writer = array.clone();
        let handle = thread::spawn(move || {
            for k in 0..2_000 {
                writer.swap(k % 4, (k + 1) % 4);
            }
        });
        for _ in 0..2_000 {
            let mut seen = array.snapshot();
            seen.sort_unstable();
            assert_eq!(seen, vec![1, 2, 3, 4]);
        }
        handle.join().unwrap();
    }

    #[test]
    fn test_seeded_regenerate_is_reproducible() {
        use rand::SeedableRng;
        use rand::rngs::StdRng;

        let a = SharedArray::from_values(vec![]);
        let b = SharedArray::from_values(vec![]);
        a.regenerate_with(&mut StdRng::seed_from_u64(7), 20, -5, 5)
            .unwrap();
        b.regenerate_with(&mut StdRng::seed_from_u64(7), 20, -5, 5)
            .unwrap();
        assert_eq!(a.snapshot(), b.snapshot());
        assert_eq!(a.range(), (-5, 5));
        assert_eq!(a.version(), 1);
    }
}
