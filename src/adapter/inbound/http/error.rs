//! Error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::error::{Error, ErrorKind};

/// Body of every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub detail: String,
    pub kind: ErrorKind,
}

/// An [`Error`] rendered as a JSON response.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        status_for(self.0.kind())
    }
}

#[must_use]
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
        ErrorKind::FlightNotFound => StatusCode::NOT_FOUND,
        ErrorKind::FlightDataUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::RouteUnresolvable => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.0.detail(),
            kind: self.0.kind(),
        };
        (self.status(), Json(body)).into_response()
    }
}

impl<E> From<E> for ApiError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
