use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::workflows::category::CategoryError;
use crate::workflows::intake::VendorImportError;
use crate::workflows::locale::LanguageError;
use crate::workflows::outreach::OutreachError;
use crate::workflows::research::ChecklistError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Json(serde_json::Error),
    Intake(VendorImportError),
    Category(CategoryError),
    Language(LanguageError),
    Checklist(ChecklistError),
    Outreach(OutreachError),
}

impl AppError {
    /// Whether the caller supplied the bad input, as opposed to an environment fault.
    pub fn is_client_error(&self) -> bool {
        match self {
            AppError::Json(_)
            | AppError::Intake(_)
            | AppError::Category(_)
            | AppError::Language(_)
            | AppError::Checklist(_)
            | AppError::Outreach(_) => true,
            AppError::Config(_) | AppError::Telemetry(_) | AppError::Io(_) => false,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Json(err) => write!(f, "invalid JSON: {}", err),
            AppError::Intake(err) => write!(f, "vendor intake error: {}", err),
            AppError::Category(err) => write!(f, "invalid category: {}", err),
            AppError::Language(err) => write!(f, "invalid language: {}", err),
            AppError::Checklist(err) => write!(f, "checklist error: {}", err),
            AppError::Outreach(err) => write!(f, "follow-up error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::Intake(err) => Some(err),
            AppError::Category(err) => Some(err),
            AppError::Language(err) => Some(err),
            AppError::Checklist(err) => Some(err),
            AppError::Outreach(err) => Some(err),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = if self.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<VendorImportError> for AppError {
    fn from(value: VendorImportError) -> Self {
        Self::Intake(value)
    }
}

impl From<CategoryError> for AppError {
    fn from(value: CategoryError) -> Self {
        Self::Category(value)
    }
}

impl From<LanguageError> for AppError {
    fn from(value: LanguageError) -> Self {
        Self::Language(value)
    }
}

impl From<ChecklistError> for AppError {
    fn from(value: ChecklistError) -> Self {
        Self::Checklist(value)
    }
}

impl From<OutreachError> for AppError {
    fn from(value: OutreachError) -> Self {
        Self::Outreach(value)
    }
}
