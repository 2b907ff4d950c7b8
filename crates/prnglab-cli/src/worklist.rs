//! Caller-owned starting sequence for the additive method.
//!
//! Values are appended or removed by index before the sequence is handed
//! to `AdditiveCongruential`, which only ever reads a copy.

use num_bigint::BigUint;

/// Error from editing a [`WorkingSequence`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WorklistError {
    #[error("cannot remove entry {index}: the sequence has {len} values")]
    OutOfRange { index: usize, len: usize },
}

/// Mutable list of starting values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkingSequence {
    values: Vec<BigUint>,
}

impl WorkingSequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value.
    pub fn push(&mut self, value: BigUint) {
        self.values.push(value);
    }

    /// Remove the value at 0-based `index`, returning it.
    pub fn remove(&mut self, index: usize) -> Result<BigUint, WorklistError> {
        if index >= self.values.len() {
            return Err(WorklistError::OutOfRange {
                index,
                len: self.values.len(),
            });
        }
        Ok(self.values.remove(index))
    }

    /// Remove several 0-based indices, highest first so earlier removals
    /// do not shift later ones. Duplicates are removed once.
    pub fn remove_all(&mut self, indices: &[usize]) -> Result<(), WorklistError> {
        let mut sorted = indices.to_vec();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.dedup();
        if let Some(&index) = sorted.first() {
            if index >= self.values.len() {
                return Err(WorklistError::OutOfRange {
                    index,
                    len: self.values.len(),
                });
            }
        }
        for index in sorted {
            self.values.remove(index);
        }
        Ok(())
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[BigUint] {
        &self.values
    }

    /// Copy of the values, for handing to a generator.
    #[must_use]
    pub fn to_vec(&self) -> Vec<BigUint> {
        self.values.clone()
    }
}

impl FromIterator<BigUint> for WorkingSequence {
    fn from_iter<I: IntoIterator<Item = BigUint>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}
