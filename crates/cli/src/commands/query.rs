use anyhow::Result;
use goal_lookup_core::{Style, format_goal};
use goal_lookup_http::GoalListResponse;
use goal_lookup_service::GoalService;

pub(crate) async fn run_lookup(service: &GoalService, name: &str, compact: bool) -> Result<()> {
    let style = if compact { Style::Compact } else { Style::Full };
    println!("{}", service.lookup(name, style).await?);
    Ok(())
}

pub(crate) async fn run_list(service: &GoalService) -> Result<()> {
    let goals = service.list().await?;
    println!("{}", serde_json::to_string_pretty(&GoalListResponse::from(goals))?);
    Ok(())
}

pub(crate) async fn run_difficulty(service: &GoalService, level: &str) -> Result<()> {
    for goal in service.by_difficulty(level).await? {
        println!("{}", goal.name);
    }
    Ok(())
}

pub(crate) async fn run_random(service: &GoalService) -> Result<()> {
    let goal = service.random().await?;
    println!("{}", format_goal(&goal, Style::Full));
    Ok(())
}
