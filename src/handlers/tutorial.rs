//! Tutorial handlers: list, search, read, create, update, delete.

use crate::error::AppError;
use crate::model::Tutorial;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub title: Option<String>,
}

fn parse_id(id_str: &str) -> Result<i64, AppError> {
    id_str
        .parse()
        .map_err(|_| AppError::BadRequest(format!("invalid id '{}'", id_str)))
}

/// 204 with no body for an empty list, else 200 with the array.
fn list_response(tutorials: Vec<Tutorial>) -> Response {
    if tutorials.is_empty() {
        StatusCode::NO_CONTENT.into_response()
    } else {
        (StatusCode::OK, Json(tutorials)).into_response()
    }
}

pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Response, AppError> {
    let tutorials = state.tutorials.get_all_tutorials(params.title.as_deref()).await?;
    Ok(list_response(tutorials))
}

pub async fn list_published(State(state): State<AppState>) -> Result<Response, AppError> {
    let tutorials = state.tutorials.get_published_tutorials().await?;
    Ok(list_response(tutorials))
}

pub async fn read(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let tutorial = state
        .tutorials
        .get_tutorial_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("tutorial {}", id)))?;
    Ok((StatusCode::OK, Json(tutorial)))
}

pub async fn create(
    State(state): State<AppState>,
    Json(body): Json<Tutorial>,
) -> Result<impl IntoResponse, AppError> {
    let created = state.tutorials.create_tutorial(body).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Json(body): Json<Tutorial>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let updated = state
        .tutorials
        .update_tutorial(id, &body)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("tutorial {}", id)))?;
    Ok((StatusCode::OK, Json(updated)))
}

pub async fn delete(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    state.tutorials.delete_tutorial(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn delete_all(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    state.tutorials.delete_all_tutorials().await?;
    Ok(StatusCode::NO_CONTENT)
}
