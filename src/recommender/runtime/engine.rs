use crate::recommender::domain::catalog::CategoryStore;
use crate::recommender::domain::matching::SimilarityMatcher;
use crate::recommender::domain::skills::{Recommendation, SkillQuery};
use crate::recommender::domain::vector::SparseVector;
use crate::recommender::runtime::matching::CosineMatcher;
use crate::recommender::runtime::model::{ModelArtifacts, ModelError};
use crate::recommender::runtime::vectorizer::TfidfVectorizer;
use std::collections::{BTreeSet, HashSet};
use std::sync::Arc;
use tracing::debug;

/// Query-time recommendation engine.
///
/// Built once from validated [`ModelArtifacts`] and a [`CategoryStore`]; every
/// method takes `&self`, so a single instance can be shared behind an `Arc`
/// by any number of concurrent callers.
#[derive(Debug)]
pub struct Recommender {
    vectorizer: TfidfVectorizer,
    skills: Vec<String>,
    vectors: Vec<SparseVector>,
    categories: Arc<dyn CategoryStore>,
    matcher: Box<dyn SimilarityMatcher>,
}

impl Recommender {
    pub fn new(
        artifacts: ModelArtifacts,
        categories: Arc<dyn CategoryStore>,
    ) -> Result<Self, ModelError> {
        artifacts.validate()?;
        let ModelArtifacts {
            vectorizer,
            skills,
            vectors,
            ..
        } = artifacts;

        Ok(Self {
            vectorizer,
            skills,
            vectors,
            categories,
            matcher: Box::new(CosineMatcher::new()),
        })
    }

    /// Swaps the similarity strategy.
    #[must_use]
    pub fn with_matcher(mut self, matcher: Box<dyn SimilarityMatcher>) -> Self {
        self.matcher = matcher;
        self
    }

    /// Recommends up to `top_n` skills the query does not already hold.
    ///
    /// Candidates are taken in similarity order. When any held skill has a
    /// known category, only candidates from those categories are accepted;
    /// otherwise every category is eligible.
    pub fn recommend(&self, query: &SkillQuery, top_n: usize) -> Vec<Recommendation> {
        if top_n == 0 {
            return Vec::new();
        }

        let query_vector = self.vectorizer.transform(query.text());
        let ranked = self.matcher.score_all(&query_vector, &self.vectors);

        let held: HashSet<&str> = query.held().iter().map(String::as_str).collect();
        let input_categories: BTreeSet<&str> = query
            .held()
            .iter()
            .filter_map(|skill| self.categories.category_of(skill))
            .collect();

        debug!(
            held = ?query.held(),
            categories = ?input_categories,
            query_terms = query_vector.nnz(),
            "Ranking skills"
        );

        // A custom matcher may hand back unknown or repeated rows; skip them.
        let mut seen = HashSet::with_capacity(self.skills.len());
        let recommendations: Vec<Recommendation> = ranked
            .into_iter()
            .filter(|scored| seen.insert(scored.index))
            .filter_map(|scored| self.skills.get(scored.index).map(String::as_str))
            .filter(|skill| !held.contains(skill))
            .filter_map(|skill| {
                let category = self.categories.category_or_unknown(skill);
                if input_categories.is_empty() || input_categories.contains(category) {
                    Some(Recommendation {
                        skill: skill.to_string(),
                        category: category.to_string(),
                    })
                } else {
                    None
                }
            })
            .take(top_n)
            .collect();

        debug!(count = recommendations.len(), top_n, "Recommendations ready");
        recommendations
    }

    /// Sorted distinct category names known to the engine.
    pub fn categories(&self) -> Vec<String> {
        self.categories.categories()
    }

    /// Vocabulary skills in row order.
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vectorizer.vocabulary_size()
    }
}
