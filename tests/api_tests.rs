//! End-to-end tests for the HTTP surface: build, listings, health, and
//! static serving, all against temporary template/output roots.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use brandkit::api::{create_service_router, AppState};
use brandkit::BuildEngine;

struct TestService {
    app: Router,
    templates: TempDir,
    public: TempDir,
}

fn service() -> TestService {
    let templates = TempDir::new().unwrap();
    let public = TempDir::new().unwrap();

    std::fs::create_dir_all(templates.path().join("js")).unwrap();
    std::fs::write(
        templates.path().join("js/config.js"),
        "window.CONFIG = { base: '{{BASE_URL}}', name: '{{BUSINESS_NAME}}', debug: {{DEBUG}} };\n",
    )
    .unwrap();
    std::fs::create_dir_all(templates.path().join("css")).unwrap();
    std::fs::write(
        templates.path().join("css/base.css"),
        ":root { --main: {{MAIN_COLOR}}; }\n",
    )
    .unwrap();

    let engine = BuildEngine::new(templates.path(), public.path());
    TestService {
        app: create_service_router(AppState::new(engine)),
        templates,
        public,
    }
}

async fn send_raw(app: Router, method: &str, uri: &str, body: Option<String>) -> (StatusCode, Vec<u8>) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::HOST, "test.local");
    let request = match body {
        Some(payload) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(payload))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn send_json(app: Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(app, method, uri, body.map(|v| v.to_string())).await;
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn build_body() -> Value {
    json!({
        "replacements": {
            "BASE_URL": "https://api.acme.example",
            "BUSINESS_NAME": "Acme",
            "DEBUG": "true",
            "MAIN_COLOR": "#0a0a8a"
        },
        "files": ["js/config.js", "css/base.css"]
    })
}

#[tokio::test]
async fn build_writes_substituted_output_and_reports_urls() {
    let svc = service();

    let (status, body) = send_json(
        svc.app.clone(),
        "POST",
        "/build/acme",
        Some(build_body()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["businessId"], "acme");
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));

    let results = body["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["file"], "js/config.js");
    assert_eq!(results[0]["status"], "success");
    assert_eq!(results[0]["outputFile"], "js/acme_config.js");
    assert_eq!(
        results[0]["url"],
        "http://test.local/js/acme_config.js"
    );
    assert_eq!(results[1]["outputFile"], "css/acme_base.css");

    let written =
        std::fs::read_to_string(svc.public.path().join("js/acme_config.js")).unwrap();
    assert!(written.contains("base: 'https://api.acme.example'"));
    assert!(written.contains("name: 'Acme'"));
    assert!(written.contains("debug: true"));
}

#[tokio::test]
async fn missing_template_is_reported_per_file_with_http_200() {
    let svc = service();

    let body = json!({
        "replacements": { "BUSINESS_NAME": "Acme" },
        "files": ["js/missing.js", "js/config.js"]
    });
    let (status, body) = send_json(svc.app.clone(), "POST", "/build/acme", Some(body)).await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results[0]["status"], "error");
    assert_eq!(
        results[0]["message"],
        "Template file not found: js/missing.js"
    );
    assert_eq!(results[1]["status"], "success");
}

#[tokio::test]
async fn empty_body_is_a_validation_error() {
    let svc = service();

    let (status, body) = send_json(svc.app.clone(), "POST", "/build/acme", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        "Invalid request body. Expected replacements object and files array"
    );
}

#[tokio::test]
async fn non_array_files_field_is_a_validation_error() {
    let svc = service();

    let payload = json!({ "replacements": {}, "files": "js/config.js" });
    let (status, _) = send_json(svc.app.clone(), "POST", "/build/acme", Some(payload)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn traversal_in_business_id_is_rejected() {
    let svc = service();

    let (status, body) = send_json(
        svc.app.clone(),
        "POST",
        "/build/..%2Fetc",
        Some(build_body()),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Business ID"));
}

#[tokio::test]
async fn traversal_reference_fails_only_that_file() {
    let svc = service();

    let payload = json!({
        "replacements": {},
        "files": ["../outside.js", "css/base.css"]
    });
    let (status, body) = send_json(svc.app.clone(), "POST", "/build/acme", Some(payload)).await;

    assert_eq!(status, StatusCode::OK);
    let results = body["results"].as_array().unwrap();
    assert_eq!(results[0]["status"], "error");
    assert_eq!(results[0]["message"], "Invalid template path: ../outside.js");
    assert_eq!(results[1]["status"], "success");
}

#[tokio::test]
async fn replacement_order_on_the_wire_drives_substitution() {
    let svc = service();
    std::fs::write(svc.templates.path().join("js/chain.js"), "{{A}}").unwrap();

    // A resolves to B's token first, then B resolves it to X.
    let payload = r#"{"replacements":{"A":"{{B}}","B":"X"},"files":["js/chain.js"]}"#;
    let (status, _) = send_raw(
        svc.app.clone(),
        "POST",
        "/build/acme",
        Some(payload.to_string()),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let chained =
        std::fs::read_to_string(svc.public.path().join("js/acme_chain.js")).unwrap();
    assert_eq!(chained, "X");

    // With B listed first, A's output is never revisited.
    let payload = r#"{"replacements":{"B":"X","A":"{{B}}"},"files":["js/chain.js"]}"#;
    send_raw(
        svc.app.clone(),
        "POST",
        "/build/acme",
        Some(payload.to_string()),
    )
    .await;
    let unchained =
        std::fs::read_to_string(svc.public.path().join("js/acme_chain.js")).unwrap();
    assert_eq!(unchained, "{{B}}");
}

#[tokio::test]
async fn identical_rebuilds_are_byte_identical() {
    let svc = service();

    send_json(svc.app.clone(), "POST", "/build/acme", Some(build_body())).await;
    let first = std::fs::read(svc.public.path().join("css/acme_base.css")).unwrap();

    send_json(svc.app.clone(), "POST", "/build/acme", Some(build_body())).await;
    let second = std::fs::read(svc.public.path().join("css/acme_base.css")).unwrap();

    assert_eq!(first, second);
}

#[tokio::test]
async fn health_reports_service_and_uptime() {
    let svc = service();

    let (status, body) = send_json(svc.app.clone(), "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["service"], "BrandKit Web Service");
    assert!(body["uptime"].as_f64().unwrap() >= 0.0);
    assert!(body["version"].as_str().is_some());
}

#[tokio::test]
async fn templates_endpoint_lists_shipped_templates() {
    let svc = service();

    let (status, body) = send_json(svc.app.clone(), "GET", "/templates", None).await;

    assert_eq!(status, StatusCode::OK);
    let js = body["available_templates"]["js"].as_array().unwrap();
    assert!(js.iter().any(|f| f == "config.js"));
    let css = body["available_templates"]["css"].as_array().unwrap();
    assert!(css.iter().any(|f| f == "base.css"));
    assert_eq!(body["usage"]["endpoint"], "POST /build/:businessId");
}

#[tokio::test]
async fn files_endpoint_lists_only_the_given_business() {
    let svc = service();

    send_json(svc.app.clone(), "POST", "/build/acme", Some(build_body())).await;
    send_json(svc.app.clone(), "POST", "/build/other", Some(build_body())).await;

    let (status, body) = send_json(svc.app.clone(), "GET", "/files/acme", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["businessId"], "acme");
    assert_eq!(body["total"], 2);
    let js = body["files"]["js"].as_array().unwrap();
    assert_eq!(js, &vec![Value::from("acme_config.js")]);
    assert_eq!(
        body["urls"]["js"][0],
        "http://test.local/js/acme_config.js"
    );
}

#[tokio::test]
async fn files_endpoint_is_empty_before_any_build() {
    let svc = service();

    let (status, body) = send_json(svc.app.clone(), "GET", "/files/acme", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["total"], 0);
    assert_eq!(body["files"]["js"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn generated_files_are_served_statically() {
    let svc = service();

    send_json(svc.app.clone(), "POST", "/build/acme", Some(build_body())).await;

    let (status, bytes) = send_raw(svc.app.clone(), "GET", "/js/acme_config.js", None).await;
    assert_eq!(status, StatusCode::OK);
    let served = String::from_utf8(bytes).unwrap();
    assert!(served.contains("name: 'Acme'"));

    let (status, _) = send_raw(svc.app.clone(), "GET", "/js/nothing_here.js", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn api_endpoint_describes_the_service() {
    let svc = service();

    let (status, body) = send_json(svc.app.clone(), "GET", "/api", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "BrandKit Web Service");
    assert_eq!(body["endpoints"]["build"], "POST /build/:businessId");
}
