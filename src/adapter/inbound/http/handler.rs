//! Request handlers.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info_span, Instrument};
use uuid::Uuid;

use super::error::ApiError;
use super::response::LeaveTimeResponse;
use super::AppState;
use crate::domain::error::DomainError;
use crate::port::PickupRequest;

/// Query string of `GET /when-to-leave`. Every field is required; absence is
/// reported per field rather than as a generic extractor failure.
#[derive(Debug, Default, Deserialize)]
pub struct WhenToLeaveQuery {
    pub flight: Option<String>,
    pub address: Option<String>,
    pub airport_busy: Option<String>,
    pub holiday: Option<String>,
    pub checked_bags: Option<String>,
}

impl TryFrom<WhenToLeaveQuery> for PickupRequest {
    type Error = DomainError;

    fn try_from(query: WhenToLeaveQuery) -> Result<Self, Self::Error> {
        fn required(field: &'static str, value: Option<String>) -> Result<String, DomainError> {
            value.ok_or(DomainError::MissingField { field })
        }

        Ok(Self {
            flight: required("flight", query.flight)?,
            address: required("address", query.address)?,
            airport_busy: required("airport_busy", query.airport_busy)?,
            holiday: required("holiday", query.holiday)?,
            checked_bags: required("checked_bags", query.checked_bags)?,
        })
    }
}

pub async fn when_to_leave(
    State(state): State<Arc<AppState>>,
    query: Result<Query<WhenToLeaveQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let request_id = Uuid::new_v4();
    let span = info_span!("when_to_leave", request_id = %request_id);

    async move {
        let Query(query) = query.map_err(|e| DomainError::MalformedRequest {
            reason: e.body_text(),
        })?;
        let request = PickupRequest::try_from(query)?;
        let plan = state.planner.plan(request).await?;

        Ok::<_, ApiError>((
            [("x-request-id", request_id.to_string())],
            Json(LeaveTimeResponse::from(&plan)),
        ))
    }
    .instrument(span)
    .await
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub async fn not_ready() -> Json<Value> {
    Json(json!({ "message": "App not ready" }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_is_named() {
        let query = WhenToLeaveQuery {
            flight: Some("AA100".into()),
            address: Some("1 Main St".into()),
            airport_busy: Some("major-hub".into()),
            holiday: None,
            checked_bags: Some("no".into()),
        };
        assert_eq!(
            PickupRequest::try_from(query).unwrap_err(),
            DomainError::MissingField { field: "holiday" }
        );
    }

    #[test]
    fn empty_query_reports_flight_first() {
        assert_eq!(
            PickupRequest::try_from(WhenToLeaveQuery::default()).unwrap_err(),
            DomainError::MissingField { field: "flight" }
        );
    }
}
