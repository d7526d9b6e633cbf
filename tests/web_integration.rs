//! End-to-end tests for the upload API.
//!
//! Drives the real router with one-shot requests and hand-built multipart
//! bodies; output files land in per-test temporary directories.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::response::Response;
use http_body_util::BodyExt;
use morse_web::{ServerConfig, WebServer};
use tower::ServiceExt;

const BOUNDARY: &str = "test-boundary";

fn test_server(output_dir: &std::path::Path) -> WebServer {
    WebServer::with_config(ServerConfig::default().with_output_dir(output_dir))
}

fn multipart_body(field: &str, filename: &str, contents: &str) -> String {
    format!(
        "--{BOUNDARY}\r\n\
         Content-Disposition: form-data; name=\"{field}\"; filename=\"{filename}\"\r\n\
         Content-Type: text/plain\r\n\r\n\
         {contents}\r\n\
         --{BOUNDARY}--\r\n"
    )
}

fn upload_request(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/upload")
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

async fn body_text(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn upload_plain_text_returns_both_texts() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_server(dir.path()).router();

    let response = router
        .oneshot(upload_request(multipart_body("myFile", "тест.txt", "ТЕСТ")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Исходный текст:"));
    assert!(body.contains("ТЕСТ"));
    assert!(body.contains("- . ... -"));

    // Exactly one timestamp-named result file is written, carrying the
    // uploaded file's extension.
    let entries: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();
    assert_eq!(entries.len(), 1);
    let name = entries[0].file_name();
    assert!(name.to_str().unwrap().ends_with(".txt"));
    assert_eq!(
        std::fs::read_to_string(entries[0].path()).unwrap(),
        "- . ... -"
    );
}

#[tokio::test]
async fn upload_morse_is_decoded() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_server(dir.path()).router();

    let response = router
        .oneshot(upload_request(multipart_body(
            "myFile",
            "morse.txt",
            "- . ... -",
        )))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("Результат:\nТЕСТ"));
}

#[tokio::test]
async fn upload_without_file_field_fails() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_server(dir.path()).router();

    let response = router
        .oneshot(upload_request(multipart_body("otherField", "x.txt", "ТЕСТ")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Ошибка при получении файла");
}

#[tokio::test]
async fn upload_whitespace_only_fails_conversion() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_server(dir.path()).router();

    let response = router
        .oneshot(upload_request(multipart_body("myFile", "blank.txt", "   ")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Ошибка при конвертации");

    // Nothing is persisted for a failed conversion.
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn non_multipart_request_fails_form_parsing() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_server(dir.path()).router();

    let request = Request::builder()
        .method("POST")
        .uri("/upload")
        .header(header::CONTENT_TYPE, "text/plain")
        .body(Body::from("ТЕСТ"))
        .unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Ошибка при парсинге формы");
}

#[tokio::test]
async fn index_page_is_served() {
    // `cargo test` runs with the package root as working directory, where
    // index.html lives — the same relative lookup the server performs.
    let dir = tempfile::tempdir().unwrap();
    let router = test_server(dir.path()).router();

    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_text(response).await;
    assert!(body.contains("myFile"));
    assert!(body.contains("/upload"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let router = test_server(dir.path()).router();

    let request = Request::builder().uri("/nope").body(Body::empty()).unwrap();
    let response = router.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
