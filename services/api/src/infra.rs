use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use vendor_assess::config::ReportingConfig;
use vendor_assess::error::AppError;
use vendor_assess::workflows::{Category, Language};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) reporting: Arc<ReportingConfig>,
}

pub(crate) fn parse_category(raw: &str) -> Result<Category, String> {
    raw.parse::<Category>().map_err(|err| err.to_string())
}

pub(crate) fn parse_language(raw: &str) -> Result<Language, String> {
    raw.parse::<Language>().map_err(|err| err.to_string())
}

/// Reads and deserializes a JSON document such as a vendor attribute file.
pub(crate) fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}
