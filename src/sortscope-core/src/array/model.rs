//! The array being sorted.

use rand::Rng;

use crate::error::ArrayError;
use crate::order::SortOrder;

/// Largest array the model accepts.
pub const MAX_ARRAY_LEN: usize = 1000;

/// An ordered sequence of integers plus the value range it was generated from.
///
/// Length and range only change through [`ArrayModel::regenerate`], which the
/// runner refuses while a sort is in progress.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrayModel {
    values: Vec<i32>,
    min: i32,
    max: i32,
}

impl ArrayModel {
    /// Creates a model filled with `length` random values in `[min, max]`.
    pub fn new(length: usize, min: i32, max: i32) -> Result<Self, ArrayError> {
        let mut model = Self::default();
        model.regenerate(length, min, max)?;
        Ok(model)
    }

    /// Wraps existing values. The range becomes the values' own min and max.
    pub fn from_values(values: Vec<i32>) -> Self {
        let min = values.iter().copied().min().unwrap_or(0);
        let max = values.iter().copied().max().unwrap_or(0);
        Self { values, min, max }
    }

    /// Checks a `(length, min, max)` triple without touching any state.
    pub fn validate(length: usize, min: i32, max: i32) -> Result<(), ArrayError> {
        if min > max {
            return Err(ArrayError::InvalidRange { min, max });
        }
        if length == 0 || length > MAX_ARRAY_LEN {
            return Err(ArrayError::InvalidLength {
                length,
                max: MAX_ARRAY_LEN,
            });
        }
        Ok(())
    }

    /// Replaces the contents with `length` uniformly random values in `[min, max]`.
    pub fn regenerate(&mut self, length: usize, min: i32, max: i32) -> Result<(), ArrayError> {
        self.regenerate_with(&mut rand::rng(), length, min, max)
    }

    /// Same as [`ArrayModel::regenerate`] with a caller-provided generator.
    pub fn regenerate_with<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        length: usize,
        min: i32,
        max: i32,
    ) -> Result<(), ArrayError> {
        Self::validate(length, min, max)?;
        self.values = (0..length).map(|_| rng.random_range(min..=max)).collect();
        self.min = min;
        self.max = max;
        Ok(())
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true when there are no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The `(min, max)` range values were drawn from.
    pub fn range(&self) -> (i32, i32) {
        (self.min, self.max)
    }

    /// Reads one element. Panics when `index` is out of range.
    #[inline]
    pub fn get(&self, index: usize) -> i32 {
        self.values[index]
    }

    /// Overwrites one element. Panics when `index` is out of range.
    #[inline]
    pub fn set(&mut self, index: usize, value: i32) {
        self.values[index] = value;
    }

    /// Exchanges two elements. Panics when either index is out of range.
    #[inline]
    pub fn swap(&mut self, i: usize, j: usize) {
        self.values.swap(i, j);
    }

    /// Borrowed view of the contents.
    pub fn as_slice(&self) -> &[i32] {
        &self.values
    }

    /// Owned copy of the contents.
    pub fn snapshot(&self) -> Vec<i32> {
        self.values.clone()
    }

    /// Checks whether the contents are sorted in `order`.
    pub fn is_sorted(&self, order: SortOrder) -> bool {
        order.is_sorted(&self.values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_regenerate_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut model = ArrayModel::default();
        for (length, min, max) in [(1, 0, 0), (50, 50, 400), (1000, -20, 20), (10, 5, 6)] {
            model.regenerate_with(&mut rng, length, min, max).unwrap();
            assert_eq!(model.len(), length);
            assert!(model.as_slice().iter().all(|v| (min..=max).contains(v)));
            assert_eq!(model.range(), (min, max));
        }
    }

    #[test]
    fn test_regenerate_extreme_range() {
        let model = ArrayModel::new(100, i32::MIN, i32::MAX).unwrap();
        assert_eq!(model.len(), 100);
    }

    #[test]
    fn test_regenerate_rejects_inverted_range() {
        let mut model = ArrayModel::from_values(vec![3, 1, 2]);
        let err = model.regenerate(10, 5, 4).unwrap_err();
        assert_eq!(err, ArrayError::InvalidRange { min: 5, max: 4 });
        // Prior contents stay intact
        assert_eq!(model.as_slice(), &[3, 1, 2]);
    }

    #[test]
    fn test_regenerate_rejects_bad_length() {
        assert!(matches!(
            ArrayModel::new(0, 0, 10),
            Err(ArrayError::InvalidLength { length: 0, .. })
        ));
        assert!(matches!(
            ArrayModel::new(MAX_ARRAY_LEN + 1, 0, 10),
            Err(ArrayError::InvalidLength { .. })
        ));
    }

    #[test]
    fn test_swap_and_set() {
        let mut model = ArrayModel::from_values(vec![5, 3, 8, 1]);
        model.swap(0, 3);
        assert_eq!(model.as_slice(), &[1, 3, 8, 5]);
        model.set(1, 9);
        assert_eq!(model.get(1), 9);
        assert_eq!(model.snapshot(), vec![1, 9, 8, 5]);
    }

    #[test]
    #[should_panic]
    fn test_swap_out_of_range_panics() {
        let mut model = ArrayModel::from_values(vec![1, 2]);
        model.swap(0, 2);
    }

    #[test]
    fn test_from_values_range() {
        let model = ArrayModel::from_values(vec![9, -1, 4]);
        assert_eq!(model.range(), (-1, 9));
        assert_eq!(ArrayModel::from_values(Vec::new()).range(), (0, 0));
    }

    #[test]
    fn test_is_sorted() {
        let model = ArrayModel::from_values(vec![8, 5, 3, 1]);
        assert!(model.is_sorted(SortOrder::Descending));
        assert!(!model.is_sorted(SortOrder::Ascending));
    }
}
