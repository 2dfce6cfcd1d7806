use axum::http::{Method, StatusCode};
use serde_json::Value;

use crate::models::DataRoot;

/// Data directory, relative to the process working directory
pub const DATA_DIR: &str = "output/geojson";

pub const GEOJSON_SUFFIX: &str = ".geojson";

#[derive(Debug, thiserror::Error)]
pub enum ListingError {
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("Data directory not found")]
    DirectoryMissing,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ListingError {
    pub fn status(&self) -> StatusCode {
        match self {
            ListingError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ListingError::DirectoryMissing => StatusCode::NOT_FOUND,
            ListingError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message returned to the caller. I/O details stay in the log.
    pub fn message(&self) -> String {
        match self {
            ListingError::Io(_) => "Failed to read GeoJSON files".to_string(),
            other => other.to_string(),
        }
    }
}

/// Handle a listing request: `(method, root) -> (status, body)`.
///
/// Failures are converted into their fixed status/body pair; unexpected
/// ones are logged first.
pub fn handle(method: &Method, root: &DataRoot) -> (StatusCode, Value) {
    match list_geojson(method, root) {
        Ok(files) => (StatusCode::OK, Value::from(files)),
        Err(e) => {
            if let ListingError::Io(ref cause) = e {
                tracing::error!("Error reading GeoJSON files: {}", cause);
            }
            (e.status(), serde_json::json!({ "error": e.message() }))
        }
    }
}

/// List `.geojson` entry names under `<root>/output/geojson`, sorted ascending
pub fn list_geojson(method: &Method, root: &DataRoot) -> Result<Vec<String>, ListingError> {
    if *method != Method::GET {
        return Err(ListingError::MethodNotAllowed);
    }

    let data_dir = root.resolve()?.join(DATA_DIR);

    // Any failure to probe the path counts as missing
    if !data_dir.exists() {
        return Err(ListingError::DirectoryMissing);
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(&data_dir)? {
        let name = entry?.file_name().to_string_lossy().into_owned();
        if is_geojson(&name) {
            files.push(name);
        }
    }

    files.sort_unstable();
    tracing::debug!("Listed {} GeoJSON files in {}", files.len(), data_dir.display());

    Ok(files)
}

fn is_geojson(name: &str) -> bool {
    name.ends_with(GEOJSON_SUFFIX)
}
