//! Route handlers

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::Uri,
    response::Json,
};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use topicfeed_core::{FeedResponse, SearchResult, Topic};
use topicfeed_feed::FeedQuery;

use crate::error::ApiError;
use crate::state::AppState;

pub const WELCOME: &str = "Welcome to backend!";
pub const MISSING_QUERY: &str = "Query parameter \"q\" is required and cannot be empty";

/// `GET /api`
pub async fn health() -> Json<Value> {
    Json(json!({ "message": WELCOME }))
}

/// `GET /api/topics`
pub async fn topics(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Topic>>, ApiError> {
    let topics = state.catalog.list_topics()?;
    state
        .log
        .info(&format!("Topics API endpoint called, returning {} topics", topics.len()));
    Ok(Json(topics))
}

/// Raw feed parameters; parsed leniently by [`FeedQuery::from_params`]
#[derive(Debug, Default, Deserialize)]
pub struct FeedParams {
    pub page: Option<String>,
    pub limit: Option<String>,
    pub sort: Option<String>,
}

/// `GET /api/feed?page&limit&sort`
pub async fn feed(
    State(state): State<Arc<AppState>>,
    params: Result<Query<FeedParams>, QueryRejection>,
) -> Result<Json<FeedResponse>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::Validation(e.body_text()))?;
    let query = FeedQuery::from_params(
        params.page.as_deref(),
        params.limit.as_deref(),
        params.sort.as_deref(),
    );

    let items = state.catalog.list_feed_items()?;
    let response = query.apply(&items);

    state.log.info(&format!(
        "Feed API endpoint called with page={}, limit={}, sort={}, returning {} items",
        query.page,
        query.limit,
        query.sort,
        response.items.len()
    ));
    Ok(Json(response))
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// `GET /api/search?q`
pub async fn search(
    State(state): State<Arc<AppState>>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<SearchResult>>, ApiError> {
    let Query(params) = params.map_err(|e| ApiError::Validation(e.body_text()))?;
    let query = params.q.as_deref().map(str::trim).unwrap_or_default();

    if query.is_empty() {
        state.log.warn("Search API endpoint called without query parameter");
        return Err(ApiError::Validation(MISSING_QUERY.to_string()));
    }

    let topics = state.catalog.list_topics()?;
    let items = state.catalog.list_feed_items()?;
    let results = topicfeed_search::search(query, &topics, &items);

    state.log.info(&format!(
        "Search API endpoint called with query={query}, found {} results",
        results.len()
    ));
    Ok(Json(results))
}

/// Fallback for every unmatched route
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::RouteNotFound {
        path: uri.path().to_string(),
    }
}
