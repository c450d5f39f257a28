use serde::{Deserialize, Serialize};

/// Sparse term-weight vector over a fitted vocabulary.
///
/// Entries are `(term index, weight)` pairs kept sorted by index with no
/// repeated indices and no zero weights.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Builds a vector from arbitrary entries, sorting them by index and
    /// summing weights that share an index. Zero weights are dropped.
    pub fn from_entries(mut entries: Vec<(usize, f64)>) -> Self {
        entries.sort_by_key(|&(index, _)| index);

        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(entries.len());
        for (index, weight) in entries {
            if let Some((last, total)) = merged.last_mut() {
                if *last == index {
                    *total += weight;
                    continue;
                }
            }
            merged.push((index, weight));
        }
        merged.retain(|&(_, weight)| weight != 0.0);

        Self { entries: merged }
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    /// Number of non-zero entries.
    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.is_empty()
    }

    /// Largest index carried by this vector, if any.
    pub fn max_index(&self) -> Option<usize> {
        self.entries.last().map(|&(index, _)| index)
    }

    pub fn norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(_, w)| w * w)
            .sum::<f64>()
            .sqrt()
    }

    /// Dot product by merging the two sorted entry lists.
    pub fn dot(&self, other: &Self) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.entries.len() && j < other.entries.len() {
            let (a_idx, a_w) = self.entries[i];
            let (b_idx, b_w) = other.entries[j];
            match a_idx.cmp(&b_idx) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    /// Scales the vector to unit Euclidean length. The zero vector is left
    /// untouched.
    #[must_use]
    pub fn l2_normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, weight) in &mut self.entries {
                *weight /= norm;
            }
        }
        self
    }
}
