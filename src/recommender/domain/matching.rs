use crate::recommender::domain::vector::SparseVector;

/// Similarity of one known skill (by row index) to a query vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredSkill {
    pub index: usize,
    pub score: f64,
}

/// Ranks every row of a skill vector table against a query vector.
///
/// Implementations return all rows, ordered by descending score. Equal
/// scores are ordered by ascending row index so the ranking is reproducible.
pub trait SimilarityMatcher: Send + Sync + std::fmt::Debug {
    fn score_all(&self, query: &SparseVector, table: &[SparseVector]) -> Vec<ScoredSkill>;
}
