use crate::recommender::domain::skills::{Recommendation, SkillQuery};
use serde::{Deserialize, Serialize};

/// Skills as sent by a client: a list of skill names or one free-form string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SkillsInput {
    Many(Vec<String>),
    One(String),
}

impl SkillsInput {
    pub fn to_query(&self) -> SkillQuery {
        match self {
            Self::Many(skills) => SkillQuery::from_skills(skills),
            Self::One(text) => SkillQuery::from_text(text),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendRequest {
    pub skills: SkillsInput,
    #[serde(default)]
    pub top_n: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendResponse {
    /// Echo of the request's `skills`.
    pub input: SkillsInput,
    pub recommended: Vec<Recommendation>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RootResponse {
    pub message: String,
}

/// Resolves a requested count against the configured default. Zero and
/// negative counts map to zero, which yields an empty result.
pub fn resolve_top_n(requested: Option<i64>, default: i64) -> usize {
    usize::try_from(requested.unwrap_or(default)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skills_input_accepts_list_or_string() {
        let req: RecommendRequest =
            serde_json::from_str(r#"{"skills": ["HTML", "css"], "top_n": 2}"#).unwrap();
        assert_eq!(req.skills.to_query().held(), ["html", "css"]);
        assert_eq!(req.top_n, Some(2));

        let req: RecommendRequest = serde_json::from_str(r#"{"skills": "html css"}"#).unwrap();
        assert_eq!(req.skills, SkillsInput::One("html css".into()));
        assert_eq!(req.top_n, None);
    }

    #[test]
    fn test_resolve_top_n() {
        assert_eq!(resolve_top_n(None, 3), 3);
        assert_eq!(resolve_top_n(Some(7), 3), 7);
        assert_eq!(resolve_top_n(Some(0), 3), 0);
        assert_eq!(resolve_top_n(Some(-4), 3), 0);
    }
}
