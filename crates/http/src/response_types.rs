//! Response types (Serialize)

use goal_lookup_core::{Goal, description_preview};
use serde::Serialize;

/// One row of the `/goals` listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalSummary {
    pub name: String,
    pub description: String,
    pub levels: String,
    pub difficulty: String,
    pub has_video: bool,
}

impl From<Goal> for GoalSummary {
    fn from(goal: Goal) -> Self {
        Self {
            description: description_preview(&goal.description),
            has_video: goal.has_video(),
            name: goal.name,
            levels: goal.levels,
            difficulty: goal.difficulty,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalListResponse {
    pub total_goals: usize,
    pub goals: Vec<GoalSummary>,
}

impl From<Vec<Goal>> for GoalListResponse {
    fn from(goals: Vec<Goal>) -> Self {
        let goals: Vec<GoalSummary> = goals.into_iter().map(GoalSummary::from).collect();
        Self { total_goals: goals.len(), goals }
    }
}

#[derive(Debug, Serialize)]
pub struct DifficultyResponse {
    pub difficulty: String,
    pub count: usize,
    pub goals: Vec<String>,
}

impl DifficultyResponse {
    pub fn new(difficulty: &str, goals: Vec<Goal>) -> Self {
        let goals: Vec<String> = goals.into_iter().map(|g| g.name).collect();
        Self { difficulty: difficulty.trim().to_owned(), count: goals.len(), goals }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_previews_description_and_flags_video() {
        let long = "x".repeat(120);
        let goal = Goal::from_row("Jano Skip", &long, "1", "★", "https://v").expect("valid");
        let json = serde_json::to_value(GoalSummary::from(goal)).expect("serialize");
        assert_eq!(json["hasVideo"], true);
        assert_eq!(json["description"].as_str().map(str::len), Some(103));
        assert!(json.get("videoLink").is_none());
    }

    #[test]
    fn list_counts_goals() {
        let goals = vec![
            Goal::from_row("A", "a", "", "", "").expect("valid"),
            Goal::from_row("B", "b", "", "", "").expect("valid"),
        ];
        let json = serde_json::to_value(GoalListResponse::from(goals)).expect("serialize");
        assert_eq!(json["totalGoals"], 2);
        assert_eq!(json["goals"][1]["name"], "B");
    }
}
