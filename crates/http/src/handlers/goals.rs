use axum::{
    Json,
    extract::{Path, Query, State},
};
use std::sync::Arc;

use goal_lookup_core::{Style, format_goal};

use crate::AppState;
use crate::api_error::ApiError;
use crate::query_types::GoalQuery;
use crate::response_types::{DifficultyResponse, GoalListResponse};

async fn lookup(state: &AppState, query: &GoalQuery, style: Style) -> Result<String, ApiError> {
    let name = query
        .name()
        .ok_or_else(|| ApiError::BadRequest("name parameter is required".to_owned()))?;
    Ok(state.goal_service.lookup(name, style).await?)
}

pub async fn get_goal(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GoalQuery>,
) -> Result<String, ApiError> {
    lookup(&state, &query, Style::Full).await
}

pub async fn get_goal_compact(
    State(state): State<Arc<AppState>>,
    Query(query): Query<GoalQuery>,
) -> Result<String, ApiError> {
    lookup(&state, &query, Style::Compact).await
}

pub async fn get_random_goal(State(state): State<Arc<AppState>>) -> Result<String, ApiError> {
    let goal = state.goal_service.random().await?;
    Ok(format_goal(&goal, Style::Full))
}

pub async fn list_goals(
    State(state): State<Arc<AppState>>,
) -> Result<Json<GoalListResponse>, ApiError> {
    let goals = state.goal_service.list().await?;
    Ok(Json(GoalListResponse::from(goals)))
}

pub async fn goals_by_difficulty(
    State(state): State<Arc<AppState>>,
    Path(level): Path<String>,
) -> Result<Json<DifficultyResponse>, ApiError> {
    let goals = state.goal_service.by_difficulty(&level).await?;
    Ok(Json(DifficultyResponse::new(&level, goals)))
}
