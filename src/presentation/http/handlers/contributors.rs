use axum::{
    Json,
    extract::{Path, State},
};

use crate::{
    application::get_contributors::{dto::GetContributorsRequest, use_case::GetContributorsUseCase},
    domain::contributor::entity::ContributorResource,
    presentation::http::{errors::AppError, state::AppState},
};

async fn run(
    state: &AppState,
    request: GetContributorsRequest,
) -> Result<Json<Vec<ContributorResource>>, AppError> {
    let use_case = GetContributorsUseCase::new(state.contributor_source.clone());
    let contributors = use_case.execute(request).await?;
    Ok(Json(contributors))
}

pub async fn list_contributors(
    State(state): State<AppState>,
) -> Result<Json<Vec<ContributorResource>>, AppError> {
    run(&state, GetContributorsRequest::all()).await
}

/// Single contributor lookup; the body is still a one-element array.
pub async fn get_contributor(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ContributorResource>>, AppError> {
    run(&state, GetContributorsRequest::by_id(id)).await
}
