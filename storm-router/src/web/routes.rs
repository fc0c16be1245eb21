//! HTTP route handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domain::NodeId;
use crate::input::InputError;
use crate::planner::{Planner, SearchConfig, SearchError, SearchOutcome, SearchRequest};

use super::dto::*;
use super::state::{AppState, LoadedNetwork};

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/routes/plan", post(plan_routes))
        .route("/routes/search", post(search_routes))
        .route("/network", put(load_network))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan routes over a network supplied in the request body.
async fn plan_routes(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RoutesResponse>, AppError> {
    let req: PlanRoutesRequest = parse_json(&body)?;

    let mut request = req.input.request()?;
    request.max_results = clamp_max_results(req.max_results);

    let (network, hazards) = req
        .input
        .network
        .into_indices((*state.profile).clone())?;
    let loaded = Arc::new(LoadedNetwork { network, hazards });

    let outcome = run_search(loaded, state.config.clone(), request).await?;
    Ok(Json(routes_response(&outcome)))
}

/// Replace the loaded network.
async fn load_network(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<LoadNetworkResponse>, AppError> {
    let req: LoadNetworkRequest = parse_json(&body)?;
    let loaded = state.load_network(req)?;

    Ok(Json(LoadNetworkResponse {
        edges: loaded.network.edge_count(),
        hazards: loaded.hazards.window_count(),
    }))
}

/// Search routes over the loaded network.
async fn search_routes(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RoutesResponse>, AppError> {
    let req: SearchRoutesRequest = parse_json(&body)?;

    let start = NodeId::parse(&req.start_point).map_err(InputError::from)?;
    let end = NodeId::parse(&req.end_point).map_err(InputError::from)?;
    let mut request = SearchRequest::new(start, end, req.departure_time);
    request.max_results = clamp_max_results(req.max_results);

    let loaded = state.current_network().ok_or_else(|| AppError::Conflict {
        message: "No network loaded".to_string(),
    })?;

    let outcome = run_search(loaded, state.config.clone(), request).await?;
    Ok(Json(routes_response(&outcome)))
}

/// Parse a JSON body, logging it on failure.
fn parse_json<T: DeserializeOwned>(body: &Bytes) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(body), "rejected request body");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })
}

/// Run the planner off the async runtime.
async fn run_search(
    loaded: Arc<LoadedNetwork>,
    config: Arc<SearchConfig>,
    request: SearchRequest,
) -> Result<SearchOutcome, AppError> {
    tokio::task::spawn_blocking(move || {
        Planner::new(&loaded.network, &loaded.hazards, &config).search(&request)
    })
    .await
    .map_err(|e| AppError::Internal {
        message: format!("Search task failed: {e}"),
    })?
    .map_err(AppError::from)
}

fn routes_response(outcome: &SearchOutcome) -> RoutesResponse {
    RoutesResponse {
        routes: outcome.routes.iter().map(RouteResult::from_state).collect(),
        states_explored: outcome.states_explored,
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    Conflict { message: String },
    Internal { message: String },
}

impl From<InputError> for AppError {
    fn from(e: InputError) -> Self {
        match e {
            InputError::Io { .. } => AppError::Internal {
                message: e.to_string(),
            },
            InputError::Json(_) | InputError::Invalid(_) => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        // Both variants stem from the submitted data
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Conflict { message } => (StatusCode::CONFLICT, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hazards::SeverityProfile;

    const HARBOUR: &str = include_str!("../../testdata/harbour.json");

    fn state() -> AppState {
        AppState::new(SearchConfig::default(), SeverityProfile::standard())
    }

    fn status(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    fn harbour_network() -> Bytes {
        let mut json: serde_json::Value = serde_json::from_str(HARBOUR).unwrap();
        let obj = json.as_object_mut().unwrap();
        obj.remove("startPoint");
        obj.remove("endPoint");
        obj.remove("departureTime");
        Bytes::from(json.to_string())
    }

    fn search_body(max_results: Option<i64>) -> Bytes {
        let mut json = serde_json::json!({
            "startPoint": "Harbour",
            "endPoint": "Lighthouse",
            "departureTime": "2024-01-01T08:00:00",
        });
        if let Some(n) = max_results {
            json["maxResults"] = n.into();
        }
        Bytes::from(json.to_string())
    }

    #[tokio::test]
    async fn health_is_ok() {
        assert_eq!(health().await, "ok");
    }

    #[tokio::test]
    async fn plan_inline_network() {
        let Json(res) = plan_routes(State(state()), Bytes::from(HARBOUR))
            .await
            .unwrap();

        let totals: Vec<f64> = res.routes.iter().map(|r| r.total_time).collect();
        assert_eq!(totals.len(), 3);
        assert!((totals[0] - 9.0).abs() < 1e-9);
        assert!((totals[1] - 9.6).abs() < 1e-9);
        assert!((totals[2] - 10.0).abs() < 1e-9);
        assert_eq!(res.routes[0].path, ["Harbour", "Reef", "Lighthouse"]);
        assert!(res.states_explored > 0);
    }

    #[tokio::test]
    async fn plan_with_max_results() {
        let mut json: serde_json::Value = serde_json::from_str(HARBOUR).unwrap();
        json["maxResults"] = 1.into();

        let Json(res) = plan_routes(State(state()), Bytes::from(json.to_string()))
            .await
            .unwrap();

        assert_eq!(res.routes.len(), 1);
    }

    #[tokio::test]
    async fn plan_rejects_malformed_json() {
        let err = plan_routes(State(state()), Bytes::from_static(b"{"))
            .await
            .unwrap_err();

        assert_eq!(status(err), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn plan_rejects_invalid_network() {
        let body = r#"{"startPoint":"A","endPoint":"B","departureTime":"2024-01-01T08:00:00",
                       "routes":[{"from":"A","to":"B","baseTime":-1}]}"#;

        let err = plan_routes(State(state()), Bytes::from(body))
            .await
            .unwrap_err();

        assert_eq!(status(err), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn plan_reports_unknown_severity() {
        let body = r#"{"startPoint":"A","endPoint":"B","departureTime":"2024-01-01T08:00:00",
                       "routes":[{"from":"A","to":"B","baseTime":1}],
                       "storms":[{"routeId":"A-B","startTime":"2024-01-01T07:00:00",
                                  "endTime":"2024-01-01T09:00:00","severity":"extreme"}]}"#;

        let err = plan_routes(State(state()), Bytes::from(body))
            .await
            .unwrap_err();

        match &err {
            AppError::BadRequest { message } => assert!(message.contains("extreme")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(status(err), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn search_without_network_conflicts() {
        let err = search_routes(State(state()), search_body(None))
            .await
            .unwrap_err();

        assert_eq!(status(err), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn load_then_search() {
        let state = state();

        let Json(loaded) = load_network(State(state.clone()), harbour_network())
            .await
            .unwrap();
        assert_eq!(loaded.edges, 5);
        assert_eq!(loaded.hazards, 2);

        let Json(res) = search_routes(State(state), search_body(Some(2)))
            .await
            .unwrap();
        assert_eq!(res.routes.len(), 2);
        assert!((res.routes[1].risk - 6.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn negative_max_results_is_empty() {
        let state = state();
        let Json(loaded) = load_network(State(state.clone()), harbour_network())
            .await
            .unwrap();
        assert_eq!(loaded.edges, 5);

        let Json(res) = search_routes(State(state), search_body(Some(-3)))
            .await
            .unwrap();

        assert!(res.routes.is_empty());
        assert_eq!(res.states_explored, 0);
    }

    #[tokio::test]
    async fn reload_replaces_network() {
        let state = state();
        let Json(loaded) = load_network(State(state.clone()), harbour_network())
            .await
            .unwrap();
        assert_eq!(loaded.edges, 5);

        let Json(loaded) = load_network(
            State(state.clone()),
            Bytes::from(r#"{"routes":[{"from":"Harbour","to":"Lighthouse","baseTime":1}]}"#),
        )
        .await
        .unwrap();
        assert_eq!(loaded.edges, 1);
        assert_eq!(loaded.hazards, 0);

        let Json(res) = search_routes(State(state), search_body(None))
            .await
            .unwrap();
        assert_eq!(res.routes.len(), 1);
        assert_eq!(res.routes[0].path, ["Harbour", "Lighthouse"]);
    }

    #[tokio::test]
    async fn failed_load_keeps_previous_network() {
        let state = state();
        let Json(loaded) = load_network(State(state.clone()), harbour_network())
            .await
            .unwrap();
        assert_eq!(loaded.edges, 5);

        let err = load_network(
            State(state.clone()),
            Bytes::from(r#"{"routes":[{"from":"","to":"B","baseTime":1}]}"#),
        )
        .await
        .unwrap_err();
        assert_eq!(status(err), StatusCode::BAD_REQUEST);

        let current = state.current_network().unwrap();
        assert_eq!(current.network.edge_count(), 5);
    }

    #[tokio::test]
    async fn search_rejects_empty_node() {
        let state = state();
        let Json(loaded) = load_network(State(state.clone()), harbour_network())
            .await
            .unwrap();
        assert_eq!(loaded.edges, 5);

        let body = r#"{"startPoint":"","endPoint":"Lighthouse","departureTime":"2024-01-01T08:00:00"}"#;
        let err = search_routes(State(state), Bytes::from(body))
            .await
            .unwrap_err();

        assert_eq!(status(err), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn router_builds() {
        let _router = create_router(state());
    }
}
