use axum::{
    extract::State,
    http::Method,
    response::IntoResponse,
    Json,
};

use crate::AppState;

pub mod listing;

pub fn routes() -> axum::Router<AppState> {
    // `any` so that non-GET requests get the JSON 405 body from the handler
    axum::Router::new().route("/", axum::routing::any(list_geojson))
}

/// ANY /api/list-geojson
/// List the GeoJSON files available under output/geojson
async fn list_geojson(State(state): State<AppState>, method: Method) -> impl IntoResponse {
    let (status, body) = listing::handle(&method, &state.data_root);
    (status, Json(body))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DataRoot;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn setup_test_app(root: &std::path::Path) -> Router {
        let state = AppState {
            data_root: DataRoot::Fixed(root.to_path_buf()),
        };

        Router::new()
            .nest("/api/list-geojson", routes())
            .with_state(state)
    }

    async fn send(app: Router, method: Method) -> (StatusCode, Value) {
        let response = app
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri("/api/list-geojson")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_get_lists_files() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let data_dir = temp_dir.path().join(listing::DATA_DIR);
        std::fs::create_dir_all(&data_dir).unwrap();
        std::fs::write(data_dir.join("rome.geojson"), "{}").unwrap();
        std::fs::write(data_dir.join("paris.geojson"), "{}").unwrap();
        std::fs::write(data_dir.join("notes.md"), "").unwrap();

        let (status, body) = send(setup_test_app(temp_dir.path()), Method::GET).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!(["paris.geojson", "rome.geojson"]));
    }

    #[tokio::test]
    async fn test_post_not_allowed() {
        let temp_dir = tempfile::TempDir::new().unwrap();

        let (status, body) = send(setup_test_app(temp_dir.path()), Method::POST).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(body, json!({ "error": "Method not allowed" }));
    }

    #[tokio::test]
    async fn test_missing_directory() {
        let temp_dir = tempfile::TempDir::new().unwrap();

        let (status, body) = send(setup_test_app(temp_dir.path()), Method::GET).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "error": "Data directory not found" }));
    }
}
