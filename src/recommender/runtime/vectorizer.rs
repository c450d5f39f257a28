//! TF-IDF vectorizer over skill names.
//!
//! Fitting learns a lexicographically sorted term vocabulary and one smoothed
//! inverse document frequency per term:
//!
//! `idf(t) = ln((1 + n) / (1 + df(t))) + 1`
//!
//! Transforming weights raw term counts by `idf` and scales the result to unit
//! length. Terms never seen during fitting contribute nothing.

use crate::recommender::domain::vector::SparseVector;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Splits text into lower-cased word tokens (runs of alphanumerics and `_`).
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
}

/// A fitted TF-IDF model. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TfidfVectorizer {
    /// Sorted, unique terms. A term's position is its dimension.
    terms: Vec<String>,
    /// Aligned with `terms`.
    idf: Vec<f64>,
}

impl TfidfVectorizer {
    /// Learns the vocabulary and term weights from `corpus`.
    ///
    /// An empty corpus yields a zero-dimension model; it is valid to hold but
    /// every transform against it is the zero vector.
    pub fn fit<S: AsRef<str>>(corpus: &[S]) -> Self {
        let mut doc_freq: BTreeMap<String, usize> = BTreeMap::new();
        for doc in corpus {
            let unique: BTreeSet<String> = tokenize(doc.as_ref()).collect();
            for term in unique {
                *doc_freq.entry(term).or_insert(0) += 1;
            }
        }

        let n_docs = corpus.len() as f64;
        let (terms, idf) = doc_freq
            .into_iter()
            .map(|(term, df)| {
                let idf = ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0;
                (term, idf)
            })
            .unzip();

        Self { terms, idf }
    }

    /// Fits on `corpus` and returns the row vector of every document, in
    /// corpus order.
    pub fn fit_transform<S: AsRef<str>>(corpus: &[S]) -> (Self, Vec<SparseVector>) {
        let vectorizer = Self::fit(corpus);
        let rows = corpus
            .iter()
            .map(|doc| vectorizer.transform(doc.as_ref()))
            .collect();
        (vectorizer, rows)
    }

    /// Projects `text` onto the fitted vocabulary. Never fails.
    pub fn transform(&self, text: &str) -> SparseVector {
        let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
        for token in tokenize(text) {
            if let Ok(index) = self.terms.binary_search(&token) {
                *counts.entry(index).or_insert(0) += 1;
            }
        }

        let entries = counts
            .into_iter()
            .map(|(index, tf)| (index, tf as f64 * self.idf[index]))
            .collect();
        SparseVector::from_entries(entries).l2_normalized()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.terms.len()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn idf_of(&self, term: &str) -> Option<f64> {
        self.terms
            .binary_search_by(|t| t.as_str().cmp(term))
            .ok()
            .map(|index| self.idf[index])
    }

    /// True when terms are strictly sorted and aligned with their weights.
    /// Deserialized models are checked with this before use.
    pub fn is_consistent(&self) -> bool {
        self.terms.len() == self.idf.len()
            && self.terms.windows(2).all(|pair| pair[0] < pair[1])
            && self.idf.iter().all(|w| w.is_finite() && *w > 0.0)
    }
}
