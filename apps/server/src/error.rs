// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types and handling for the server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use planta_core::Error as LayoutError;
use planta_recommender::RecommendError;
use planta_render::ExportError;
use serde::Serialize;
use thiserror::Error;

/// API error types.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    Validation(String),

    #[error("{0}")]
    Layout(#[from] LayoutError),

    #[error("Export failed: {0}")]
    Export(String),

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("Join error")]
    Join(#[from] tokio::task::JoinError),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

impl ApiError {
    /// HTTP status and machine-readable code for this error
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            ApiError::Validation(_) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            ApiError::Layout(err) => match err {
                LayoutError::UnsupportedTypology(_) => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "UNSUPPORTED_TYPOLOGY")
                }
                LayoutError::DimensionMismatch { .. } => {
                    (StatusCode::UNPROCESSABLE_ENTITY, "DIMENSION_MISMATCH")
                }
                LayoutError::InvalidDimension { .. }
                | LayoutError::PlotTooSmall { .. }
                | LayoutError::InvalidBedroomCount(_)
                | LayoutError::UnknownTypology(_) => (StatusCode::BAD_REQUEST, "INVALID_PLAN"),
                _ => (StatusCode::INTERNAL_SERVER_ERROR, "LAYOUT_ERROR"),
            },
            ApiError::Export(_) => (StatusCode::INTERNAL_SERVER_ERROR, "EXPORT_ERROR"),
            ApiError::Dataset(_) => (StatusCode::INTERNAL_SERVER_ERROR, "DATASET_ERROR"),
            ApiError::Join(_) => (StatusCode::INTERNAL_SERVER_ERROR, "TASK_ERROR"),
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, code, "Request failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<RecommendError> for ApiError {
    fn from(err: RecommendError) -> Self {
        if err.is_validation() {
            ApiError::Validation(err.to_string())
        } else {
            ApiError::Dataset(err.to_string())
        }
    }
}

impl From<ExportError> for ApiError {
    fn from(err: ExportError) -> Self {
        match err {
            ExportError::Layout(err) => ApiError::Layout(err),
            other => ApiError::Export(other.to_string()),
        }
    }
}
