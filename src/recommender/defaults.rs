use crate::recommender::domain::catalog::CategoryGrouping;

/// Returns the built-in category grouping used when no grouping file is
/// configured.
pub fn default_grouping() -> CategoryGrouping {
    CategoryGrouping::new()
        .with_group(
            "programming",
            [
                "python", "java", "c++", "c#", "javascript", "typescript", "html", "css",
                "react", "vue.js", "angular", "next.js", "node.js", "express.js", "django",
                "flask", "fastapi", "spring boot", "dotnet",
            ],
        )
        .with_group(
            "data",
            [
                "sql", "mongodb", "firebase", "graphql", "rest api", "oop", "data structures",
                "algorithms", "git", "github", "docker", "kubernetes", "linux", "bash scripting",
                "excel", "excel macros", "powerbi", "tableau", "data analysis",
                "data visualization", "machine learning", "deep learning", "statistics",
                "pandas", "numpy", "scikit-learn", "matplotlib", "seaborn", "bigquery", "hadoop",
                "spark", "google analytics", "data storytelling", "data wrangling", "etl",
                "postgresql", "mysql", "snowflake", "airflow",
            ],
        )
        .with_group(
            "design",
            [
                "figma", "adobe xd", "sketch", "photoshop", "illustrator", "canva",
                "web design", "mobile ui design", "wireframing", "prototyping",
                "usability testing", "ux research", "a/b testing", "responsive design",
                "accessibility", "design systems", "color theory", "typography", "animation",
                "motion graphics",
            ],
        )
        .with_group(
            "soft",
            [
                "communication", "public speaking", "presentation skills", "teamwork",
                "leadership", "negotiation", "problem solving", "critical thinking",
                "adaptability", "creativity", "emotional intelligence", "time management",
                "conflict resolution", "collaboration", "decision making", "storytelling",
                "writing", "project management", "productivity",
            ],
        )
        .with_group(
            "business",
            [
                "seo", "sem", "digital marketing", "email marketing", "content writing",
                "copywriting", "market research", "branding", "growth hacking",
                "influencer marketing", "client management", "freelancing", "sales",
                "cold outreach", "pitching", "crm tools", "social media marketing",
                "facebook ads", "google ads",
            ],
        )
        .with_group("tools", ["notion", "trello", "asana", "slack", "figjam"])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommender::domain::catalog::{CategoryStore, DuplicatePolicy};

    #[test]
    fn test_default_grouping_inverts_cleanly() {
        let inverted = default_grouping().invert(DuplicatePolicy::Reject).unwrap();
        assert_eq!(inverted.skills.len(), 121);
        assert_eq!(
            inverted.categories.categories(),
            ["business", "data", "design", "programming", "soft", "tools"]
        );
        assert_eq!(inverted.skills[0], "python");
    }
}
