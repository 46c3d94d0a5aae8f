use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectRecommendation {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub skills_gained: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillRoadmapItem {
    pub skill: String,
    pub priority: Priority,
    pub reason: String,
}

/// What-if advice: achievements to complete and the score range the model
/// expects once they are done.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FutureSimulation {
    #[serde(default)]
    pub if_user_completes: Vec<String>,
    #[serde(default)]
    pub expected_score_range: String,
}

/// Full advisory output of the insight generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CareerInsights {
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub project_recommendations: Vec<ProjectRecommendation>,
    #[serde(default)]
    pub skill_roadmap: Vec<SkillRoadmapItem>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub internship_categories: Vec<String>,
    #[serde(default)]
    pub hackathon_categories: Vec<String>,
    #[serde(default)]
    pub career_explanation: String,
    pub future_simulation: FutureSimulation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_wire_format() {
        assert_eq!(serde_json::to_value(Priority::High).unwrap(), "High");
        let p: Priority = serde_json::from_str("\"Low\"").unwrap();
        assert_eq!(p, Priority::Low);
    }

    #[test]
    fn test_insights_tolerate_sparse_payload() {
        let raw = r#"{
            "strengths": ["systems background"],
            "future_simulation": {"if_user_completes": [], "expected_score_range": "60-70"}
        }"#;
        let insights: CareerInsights = serde_json::from_str(raw).unwrap();
        assert_eq!(insights.strengths.len(), 1);
        assert!(insights.weaknesses.is_empty());
        assert_eq!(insights.future_simulation.expected_score_range, "60-70");
    }
}
