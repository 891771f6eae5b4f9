//! HTTP surface tests driven through the router with `oneshot`.

mod support;

use std::fs;
use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use chrono::DateTime;
use curbside::adapter::inbound::http::{router, AppState};
use curbside::error::LookupError;
use curbside::testkit::domain::{arrival_at, utc};
use curbside::testkit::port::{StubFlightLookup, StubRouteEstimator};
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

use support::planner::planner;

const VALID_QUERY: &str = "/when-to-leave?flight=AA100&address=1%20Market%20St%2C%20San%20Francisco&airport_busy=major-hub&holiday=no&checked_bags=no";

fn app_with(flights: StubFlightLookup, routes: StubRouteEstimator) -> Router {
    let planner = planner(&Arc::new(flights), &Arc::new(routes));
    router(AppState::new(Arc::new(planner)), None)
}

fn app() -> Router {
    app_with(
        StubFlightLookup::returning(arrival_at("AA100", 14, 0)),
        StubRouteEstimator::minutes(30),
    )
}

async fn get(app: Router, uri: &str) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, headers, body.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, _, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn when_to_leave_returns_plan() {
    let (status, headers, body) = get(app(), VALID_QUERY).await;
    assert_eq!(status, StatusCode::OK);

    let request_id = headers.get("x-request-id").unwrap().to_str().unwrap();
    assert!(uuid::Uuid::parse_str(request_id).is_ok());

    let json: Value = serde_json::from_slice(&body).unwrap();
    let leave = DateTime::parse_from_rfc3339(json["leave_time"].as_str().unwrap()).unwrap();
    assert_eq!(leave, utc(14, 25));

    let details = &json["details"];
    assert_eq!(details["drive_time_minutes"], 30);
    assert_eq!(details["buffer_minutes"], 20);
    assert_eq!(details["is_past"], false);
    assert_eq!(details["airport"]["code"], "JFK");
    assert_eq!(details["airport"]["timezone"], "UTC");
    assert_eq!(details["display"]["leave_time"], "2:25 PM UTC");
    assert_eq!(details["display"]["airport_exit_time"], "3:15 PM UTC");
    assert_eq!(
        details["display"]["arrival_time"],
        "2:00 PM UTC at JFK International (JFK)"
    );
}

#[tokio::test]
async fn unknown_modifier_is_bad_request() {
    let uri = VALID_QUERY.replace("major-hub", "huge-hub");
    let (status, json) = get_json(app(), &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["kind"], "invalid_input");
    assert!(json["detail"].as_str().unwrap().contains("airport_busy"));
}

#[tokio::test]
async fn missing_field_is_bad_request() {
    let uri = VALID_QUERY.replace("&holiday=no", "");
    let (status, json) = get_json(app(), &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["detail"].as_str().unwrap().contains("holiday"));
}

#[tokio::test]
async fn malformed_flight_is_bad_request() {
    let uri = VALID_QUERY.replace("AA100", "hello");
    let (status, json) = get_json(app(), &uri).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["kind"], "invalid_input");
}

#[tokio::test]
async fn unknown_flight_is_not_found() {
    let app = app_with(
        StubFlightLookup::failing(LookupError::FlightNotFound {
            flight: "AA100".into(),
        }),
        StubRouteEstimator::minutes(30),
    );
    let (status, json) = get_json(app, VALID_QUERY).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["detail"], "Flight AA100 not found");
    assert_eq!(json["kind"], "flight_not_found");
}

#[tokio::test]
async fn provider_outage_is_service_unavailable() {
    let app = app_with(
        StubFlightLookup::failing(LookupError::FlightDataUnavailable {
            flight: "AA100".into(),
            reason: "Flight API error: usage limit".into(),
        }),
        StubRouteEstimator::minutes(30),
    );
    let (status, json) = get_json(app, VALID_QUERY).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(json["kind"], "flight_data_unavailable");
}

#[tokio::test]
async fn unresolvable_route_is_unprocessable() {
    let app = app_with(
        StubFlightLookup::returning(arrival_at("AA100", 14, 0)),
        StubRouteEstimator::failing(LookupError::RouteUnresolvable {
            reason: "ZERO_RESULTS".into(),
        }),
    );
    let (status, json) = get_json(app, VALID_QUERY).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(json["kind"], "route_unresolvable");
}

#[tokio::test]
async fn internal_errors_hide_details() {
    let app = app_with(
        StubFlightLookup::returning(arrival_at("AA100", 14, 0)),
        StubRouteEstimator::minutes(-5),
    );
    let (status, json) = get_json(app, VALID_QUERY).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["kind"], "internal");
    assert!(!json["detail"].as_str().unwrap().contains("-5"));
}

#[tokio::test]
async fn health_is_ok() {
    let (status, json) = get_json(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn root_without_frontend_is_placeholder() {
    let (status, json) = get_json(app(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["message"], "App not ready");
}

#[tokio::test]
async fn frontend_is_served_with_index_fallback() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("index.html"), "<html>curbside</html>").unwrap();
    fs::write(dir.path().join("app.js"), "console.log(1)").unwrap();

    let planner = planner(
        &Arc::new(StubFlightLookup::returning(arrival_at("AA100", 14, 0))),
        &Arc::new(StubRouteEstimator::minutes(30)),
    );
    let app = router(AppState::new(Arc::new(planner)), Some(dir.path()));

    let (status, _, body) = get(app.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("curbside"));

    let (status, _, body) = get(app.clone(), "/app.js").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"console.log(1)");

    let (status, _, body) = get(app.clone(), "/trips/upcoming").await;
    assert_eq!(status, StatusCode::OK);
    assert!(String::from_utf8(body).unwrap().contains("curbside"));

    let (status, json) = get_json(app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn cors_allows_any_origin() {
    let response = app()
        .oneshot(
            Request::get("/health")
                .header(header::ORIGIN, "http://localhost:5173")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
        "*"
    );
}
