//! HTTP route handlers.

use askama::Template;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse},
    routing::{get, post},
};
use chrono::Local;
use tower_http::services::ServeDir;

use crate::domain::LatLon;
use crate::presenter::{RouteStyle, status_message, step_rows};
use crate::session::{RouteTicket, SessionError, resolve};

use super::dto::*;
use super::state::AppState;
use super::templates::*;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/health", get(health))
        .route("/about", get(about_page))
        .route("/api/zones", get(list_zones))
        .route("/api/locate", post(report_location))
        .route("/api/mode", post(switch_mode))
        .route("/api/route", post(select_destination))
        .nest_service("/static", ServeDir::new(static_dir))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Map page.
async fn index_page(State(state): State<AppState>) -> impl IntoResponse {
    let config = PageConfig::new(&state);
    let template = IndexTemplate {
        config_json: serde_json::to_string(&config).unwrap_or_else(|_| "{}".to_string()),
    };
    Html(
        template
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// About page.
async fn about_page() -> impl IntoResponse {
    Html(
        AboutTemplate
            .render()
            .unwrap_or_else(|e| format!("Template error: {}", e)),
    )
}

/// List the zone catalog.
async fn list_zones(State(state): State<AppState>) -> Json<ZonesResponse> {
    Json(ZonesResponse {
        zones: state.zones.all().to_vec(),
    })
}

/// Accept the device's reported position (or its failure to produce
/// one) and re-route if a destination is already chosen.
async fn report_location(
    State(state): State<AppState>,
    Json(req): Json<LocateRequest>,
) -> Result<Json<SessionView>, AppError> {
    let reported = match (req.lat, req.lon) {
        (Some(lat), Some(lon)) => Some(LatLon::new(lat, lon)),
        _ => None,
    };
    let resolved = resolve(reported);

    let ticket = {
        let mut session = state.session.lock().await;
        session.set_location(resolved)
    };

    if let Some(ticket) = ticket {
        fulfil_ticket(&state, ticket).await;
    }

    Ok(Json(session_view(&state).await))
}

/// Switch travel mode, re-routing if a destination is chosen.
async fn switch_mode(
    State(state): State<AppState>,
    Json(req): Json<ModeRequest>,
) -> Result<Json<SessionView>, AppError> {
    let ticket = {
        let mut session = state.session.lock().await;
        session.set_mode(req.mode)
    };

    if let Some(ticket) = ticket {
        fulfil_ticket(&state, ticket).await;
    }

    Ok(Json(session_view(&state).await))
}

/// Select a destination zone and request a route to it.
async fn select_destination(
    State(state): State<AppState>,
    Json(req): Json<RouteRequest>,
) -> Result<Json<SessionView>, AppError> {
    let ticket = {
        let mut session = state.session.lock().await;
        session.select_zone(&state.zones, &req.zone)?
    };

    fulfil_ticket(&state, ticket).await;

    Ok(Json(session_view(&state).await))
}

/// Run a routing request and feed the outcome back into the session.
///
/// The session mutex is not held across the await; by the time the
/// response lands, a newer request may have superseded this one, in
/// which case `apply_route_result` discards it.
async fn fulfil_ticket(state: &AppState, ticket: RouteTicket) {
    let result = state
        .router
        .route(ticket.start, ticket.end, ticket.mode)
        .await;

    let now = Local::now().naive_local();
    let mut session = state.session.lock().await;
    session.apply_route_result(ticket.seq, result, now);
}

/// Snapshot the session as a response body.
async fn session_view(state: &AppState) -> SessionView {
    let session = state.session.lock().await;

    let route = session.route().map(|summary| RouteView {
        duration_secs: summary.duration_secs,
        distance_m: summary.distance_m,
        source: summary.source,
        style: RouteStyle::for_source(summary.source),
        geometry: summary.geometry.clone(),
        steps: step_rows(summary),
    });

    SessionView {
        status: status_message(&session),
        mode: session.mode(),
        position: session.location(),
        fallback_located: session.located_by_fallback(),
        destination: session.destination().map(|z| z.name.clone()),
        eta: session.eta().map(|eta| eta.to_string()),
        route,
    }
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SessionError> for AppError {
    fn from(e: SessionError) -> Self {
        match e {
            SessionError::LocationUnknown => AppError::BadRequest {
                message: e.to_string(),
            },
            SessionError::UnknownZone(_) => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message.clone()),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message.clone()),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message.clone()),
        };

        tracing::warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{RouteSource, RouteSummary, Step, StepKind, TravelMode, calgary_zones};
    use crate::osrm::MockOsrmClient;
    use crate::session::LocationConfig;
    use crate::web::state::RouteBackend;

    fn mock_state(mock: MockOsrmClient) -> AppState {
        AppState::new(
            RouteBackend::Mock(mock),
            calgary_zones(),
            LocationConfig::default(),
        )
    }

    fn seven_minute_drive() -> RouteSummary {
        RouteSummary {
            duration_secs: 420.0,
            distance_m: 3000.0,
            steps: vec![
                Step::new(StepKind::Depart, "Head out onto 1 St SE", 400.0, 60.0),
                Step::new(StepKind::Right, "Turn right onto 9 Ave SE", 2400.0, 330.0),
                Step::new(StepKind::Arrive, "Arrive at your destination", 200.0, 30.0),
            ],
            source: RouteSource::Routed,
            geometry: vec![],
        }
    }

    async fn locate_downtown(state: &AppState) {
        report_location(
            State(state.clone()),
            Json(LocateRequest {
                lat: Some(51.0526),
                lon: Some(-114.0731),
            }),
        )
        .await
        .unwrap();
    }

    #[tokio::test]
    async fn zones_endpoint_lists_catalog() {
        let state = mock_state(MockOsrmClient::canned());
        let Json(resp) = list_zones(State(state)).await;
        assert_eq!(resp.zones.len(), 5);
        assert_eq!(resp.zones[0].name, "City Hall Parkade");
    }

    #[tokio::test]
    async fn locate_before_route_prompts_for_zone() {
        let state = mock_state(MockOsrmClient::canned());
        locate_downtown(&state).await;

        let view = session_view(&state).await;
        assert_eq!(view.status, "Select a parking zone to meet at.");
        assert!(view.route.is_none());
        assert!(!view.fallback_located);
    }

    #[tokio::test]
    async fn locate_failure_uses_fallback_position() {
        let state = mock_state(MockOsrmClient::canned());
        let Json(view) = report_location(
            State(state),
            Json(LocateRequest {
                lat: None,
                lon: None,
            }),
        )
        .await
        .unwrap();

        assert!(view.fallback_located);
        assert!(view.position.is_some());
        assert!(view.status.starts_with("Couldn't access your location"));
    }

    #[tokio::test]
    async fn routing_success_produces_eta_and_steps() {
        let mock =
            MockOsrmClient::default().with_response(TravelMode::Driving, seven_minute_drive());
        let state = mock_state(mock);
        locate_downtown(&state).await;

        let Json(view) = select_destination(
            State(state),
            Json(RouteRequest {
                zone: "City Hall Parkade".to_string(),
            }),
        )
        .await
        .unwrap();

        assert!(view.status.starts_with("Drive to City Hall Parkade."));
        assert!(view.eta.unwrap().contains("(7 min)"));

        let route = view.route.unwrap();
        assert_eq!(route.source, RouteSource::Routed);
        assert_eq!(route.duration_secs, 420.0);
        assert_eq!(route.distance_m, 3000.0);
        assert_eq!(route.steps.len(), 3);
        assert!(route.style.dash_array.is_none());
    }

    #[tokio::test]
    async fn routing_failure_degrades_to_estimate() {
        let state = mock_state(MockOsrmClient::failing());
        locate_downtown(&state).await;

        // Still a 200: the fallback is the recovery, not an error.
        let Json(view) = select_destination(
            State(state),
            Json(RouteRequest {
                zone: "City Hall Parkade".to_string(),
            }),
        )
        .await
        .unwrap();

        assert!(view.status.contains("straight-line estimate"));
        assert!(view.eta.unwrap().contains("(3 min)"));

        let route = view.route.unwrap();
        assert_eq!(route.source, RouteSource::Estimated);
        assert!((route.distance_m - 1310.0).abs() < 20.0);
        assert_eq!(route.steps.len(), 3);
        assert_eq!(route.style.dash_array, Some("8 8"));
        assert_eq!(route.geometry.len(), 2);
    }

    #[tokio::test]
    async fn unknown_zone_is_not_found() {
        let state = mock_state(MockOsrmClient::canned());
        locate_downtown(&state).await;

        let err = select_destination(
            State(state),
            Json(RouteRequest {
                zone: "Nowhere Parkade".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn route_before_locate_is_bad_request() {
        let state = mock_state(MockOsrmClient::canned());

        let err = select_destination(
            State(state),
            Json(RouteRequest {
                zone: "City Hall Parkade".to_string(),
            }),
        )
        .await
        .unwrap_err();

        assert!(matches!(err, AppError::BadRequest { .. }));
    }

    #[tokio::test]
    async fn mode_switch_reroutes_with_new_profile() {
        // Driving is programmed, walking is not: switching modes must
        // swap the real route for the straight-line estimate.
        let mock =
            MockOsrmClient::default().with_response(TravelMode::Driving, seven_minute_drive());
        let state = mock_state(mock);
        locate_downtown(&state).await;

        select_destination(
            State(state.clone()),
            Json(RouteRequest {
                zone: "City Hall Parkade".to_string(),
            }),
        )
        .await
        .unwrap();

        let Json(view) = switch_mode(
            State(state),
            Json(ModeRequest {
                mode: TravelMode::Walking,
            }),
        )
        .await
        .unwrap();

        assert_eq!(view.mode, TravelMode::Walking);
        assert!(view.status.starts_with("Walk to City Hall Parkade."));
        assert_eq!(view.route.unwrap().source, RouteSource::Estimated);
    }
}
