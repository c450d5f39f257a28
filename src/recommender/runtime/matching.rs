use crate::recommender::domain::matching::{ScoredSkill, SimilarityMatcher};
use crate::recommender::domain::vector::SparseVector;

/// Ranks skills by cosine similarity.
#[derive(Debug, Clone, Copy, Default)]
pub struct CosineMatcher;

impl CosineMatcher {
    pub fn new() -> Self {
        Self
    }

    pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
        let norm_a = a.norm();
        let norm_b = b.norm();

        if norm_a == 0.0 || norm_b == 0.0 {
            return 0.0;
        }

        a.dot(b) / (norm_a * norm_b)
    }
}

impl SimilarityMatcher for CosineMatcher {
    fn score_all(&self, query: &SparseVector, table: &[SparseVector]) -> Vec<ScoredSkill> {
        let mut scored: Vec<ScoredSkill> = table
            .iter()
            .enumerate()
            .map(|(index, row)| ScoredSkill {
                index,
                score: Self::cosine_similarity(query, row),
            })
            .collect();

        // Descending score, ties by ascending index.
        scored.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));
        scored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(entries: &[(usize, f64)]) -> SparseVector {
        SparseVector::from_entries(entries.to_vec())
    }

    #[test]
    fn test_cosine_similarity() {
        let a = v(&[(0, 1.0), (1, 1.0)]);
        assert!((CosineMatcher::cosine_similarity(&a, &a) - 1.0).abs() < 1e-12);

        let b = v(&[(1, 2.0)]);
        let expected = 1.0 / 2.0_f64.sqrt();
        assert!((CosineMatcher::cosine_similarity(&a, &b) - expected).abs() < 1e-12);

        let zero = SparseVector::default();
        assert_eq!(CosineMatcher::cosine_similarity(&a, &zero), 0.0);
    }

    #[test]
    fn test_score_all_ranks_descending() {
        let table = vec![v(&[(2, 1.0)]), v(&[(0, 1.0), (1, 1.0)]), v(&[(0, 1.0)])];
        let query = v(&[(0, 1.0)]);

        let ranked = CosineMatcher::new().score_all(&query, &table);
        let order: Vec<usize> = ranked.iter().map(|s| s.index).collect();
        assert_eq!(order, [2, 1, 0]);
        assert!((ranked[0].score - 1.0).abs() < 1e-12);
        assert_eq!(ranked[2].score, 0.0);
    }

    #[test]
    fn test_score_all_breaks_ties_by_index() {
        let table = vec![v(&[(1, 1.0)]), v(&[(0, 1.0)]), v(&[(2, 1.0)]), v(&[(0, 5.0)])];
        let query = v(&[(0, 1.0)]);

        let order: Vec<usize> = CosineMatcher::new()
            .score_all(&query, &table)
            .iter()
            .map(|s| s.index)
            .collect();
        assert_eq!(order, [1, 3, 0, 2]);
    }

    #[test]
    fn test_zero_query_keeps_index_order() {
        let table = vec![v(&[(1, 1.0)]), v(&[(0, 1.0)]), v(&[(2, 1.0)])];
        let ranked = CosineMatcher::new().score_all(&SparseVector::default(), &table);
        let order: Vec<usize> = ranked.iter().map(|s| s.index).collect();
        assert_eq!(order, [0, 1, 2]);
        assert!(ranked.iter().all(|s| s.score == 0.0));
    }
}
