//! Generated-image listing and serving handlers.

use atelier_core::fs::ImageStore;
use axum::Router;
use axum::extract::{Path, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;

use super::response::{ImageEntry, ImageListing};
use crate::handler::{Error, ErrorKind, Result};

/// Tracing target for image operations.
const TRACING_TARGET: &str = "atelier_server::handler::images";

fn content_type_for(filename: &str) -> &'static str {
    let extension = filename.rsplit('.').next().unwrap_or_default();
    match extension.to_ascii_lowercase().as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "bmp" => "image/bmp",
        _ => "application/octet-stream",
    }
}

/// Lists all generated images, newest first.
async fn list_images(State(images): State<ImageStore>) -> Result<axum::Json<ImageListing>> {
    let stored = images.list().await.map_err(|error| {
        tracing::error!(target: TRACING_TARGET, error = %error, "Image listing failed");
        Error::new(ErrorKind::Internal).with_message(format!("Error listing images: {error}"))
    })?;

    let entries = stored
        .into_iter()
        .map(|image| ImageEntry {
            url: format!("/api/v1/images/{}", image.filename),
            filename: image.filename,
            size: image.size,
            created: image.created,
        })
        .collect();

    Ok(axum::Json(ImageListing { images: entries }))
}

/// Serves one generated image by filename.
#[tracing::instrument(skip_all, fields(filename = %filename))]
async fn get_image(
    State(images): State<ImageStore>,
    Path(filename): Path<String>,
) -> Result<Response> {
    let Some(path) = images.resolve(&filename).await else {
        return Err(
            Error::new(ErrorKind::NotFound).with_message(format!("Image not found: {filename}"))
        );
    };

    let bytes = tokio::fs::read(&path).await.map_err(|error| {
        tracing::error!(target: TRACING_TARGET, error = %error, "Image read failed");
        Error::new(ErrorKind::Internal).with_message("Error reading image")
    })?;

    let headers = [(header::CONTENT_TYPE, content_type_for(&filename))];
    Ok((headers, bytes).into_response())
}

/// Returns a [`Router`] with all image routes.
///
/// [`Router`]: axum::routing::Router
pub fn routes() -> Router<crate::service::ServiceState> {
    Router::new()
        .route("/api/v1/images", get(list_images))
        .route("/api/v1/images/{filename}", get(get_image))
}

#[cfg(test)]
mod tests {
    use atelier_core::mock::MockConfig;
    use serde_json::json;

    use super::*;
    use crate::handler::test::create_test_server;

    #[test]
    fn content_types_by_extension() {
        assert_eq!(content_type_for("a.png"), "image/png");
        assert_eq!(content_type_for("a.JPG"), "image/jpeg");
        assert_eq!(content_type_for("mystery"), "application/octet-stream");
    }

    #[tokio::test]
    async fn listing_is_empty_before_any_run() {
        let (_dir, server) = create_test_server(MockConfig::default()).await;

        let response = server.get("/api/v1/images").await;
        response.assert_status_ok();

        let listing = response.json::<ImageListing>();
        assert!(listing.images.is_empty());
    }

    #[tokio::test]
    async fn generated_images_are_listed_and_served() {
        let (_dir, server) = create_test_server(MockConfig::default()).await;

        // A design run stores one image per generated concept.
        server
            .post("/api/v1/designs/generate")
            .json(&json!({"garmentType": "dress", "category": "dresses", "count": 1}))
            .await
            .assert_status_ok();

        let listing = server.get("/api/v1/images").await.json::<ImageListing>();
        assert_eq!(listing.images.len(), 1);
        let entry = &listing.images[0];
        assert!(entry.url.starts_with("/api/v1/images/"));

        let image = server.get(&entry.url).await;
        image.assert_status_ok();
        let content_type = image
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_owned();
        assert_eq!(content_type, "image/png");
        // The mock image payload is the PNG signature.
        assert_eq!(image.as_bytes().len(), 8);
    }

    #[tokio::test]
    async fn missing_image_is_not_found() {
        let (_dir, server) = create_test_server(MockConfig::default()).await;

        let response = server.get("/api/v1/images/absent.png").await;
        response.assert_status_not_found();
    }
}
