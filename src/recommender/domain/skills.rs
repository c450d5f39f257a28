use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Category label reported for skills missing from the category map.
pub const UNKNOWN_CATEGORY: &str = "unknown";

/// Normalizes a raw skill name: surrounding whitespace trimmed, lower-cased.
pub fn normalize_skill(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// A single recommended skill paired with its category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub skill: String,
    pub category: String,
}

/// A normalized recommendation query.
///
/// Holds two views of the caller's input: the individual held skills (used
/// for exclusion and category lookup) and the joined text that gets
/// vectorized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SkillQuery {
    held: Vec<String>,
    text: String,
}

impl SkillQuery {
    /// Builds a query from a list of skill names.
    ///
    /// Every entry is normalized and kept whole, so a multi-word skill such
    /// as `"spring boot"` excludes exactly that skill. Blank entries and
    /// repeats are dropped.
    pub fn from_skills<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let held: Vec<String> = skills
            .into_iter()
            .map(|s| normalize_skill(s.as_ref()))
            .filter(|s| !s.is_empty())
            .filter(|s| seen.insert(s.clone()))
            .collect();
        let text = held.join(" ");
        Self { held, text }
    }

    /// Builds a query from one free-form string.
    ///
    /// The text is vectorized as-is (lower-cased) and its whitespace
    /// separated words become the held skills.
    pub fn from_text(text: &str) -> Self {
        let text = normalize_skill(text);
        let mut query = Self::from_skills(text.split_whitespace());
        query.text = text;
        query
    }

    pub fn held(&self) -> &[String] {
        &self.held
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.held.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_skill() {
        assert_eq!(normalize_skill("  Node.JS "), "node.js");
        assert_eq!(normalize_skill("\tSpring Boot\n"), "spring boot");
        assert_eq!(normalize_skill("   "), "");
    }

    #[test]
    fn test_from_skills_keeps_phrases_whole() {
        let query = SkillQuery::from_skills(["HTML", " Spring Boot ", "html", ""]);
        assert_eq!(query.held(), ["html", "spring boot"]);
        assert_eq!(query.text(), "html spring boot");
    }

    #[test]
    fn test_from_text_splits_words() {
        let query = SkillQuery::from_text("  React   Redux ");
        assert_eq!(query.held(), ["react", "redux"]);
        assert_eq!(query.text(), "react   redux");
    }

    #[test]
    fn test_empty_query() {
        let query = SkillQuery::from_skills(Vec::<String>::new());
        assert!(query.is_empty());
        assert_eq!(query.text(), "");
    }
}
