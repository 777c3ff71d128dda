use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use warp::http::StatusCode;

use ai_code_analyzer::enums::ai_provider_error::AiProviderError;
use ai_code_analyzer::helpers::placeholder_analysis::{PLACEHOLDER_OVERALL_EN, PLACEHOLDER_OVERALL_NL};
use ai_code_analyzer::services::analysis_orchestrator::AnalysisOrchestrator;
use ai_code_analyzer::services::report_store::ReportStore;
use ai_code_analyzer::traits::ai_provider::AiProvider;
use ai_code_analyzer::ui::web_server::{routes, AppState};

use crate::common::{analysis_json, StubProvider};

const BOUNDARY: &str = "----analyzer-test-boundary";

struct Field<'a> {
    name: &'a str,
    file_name: Option<&'a str>,
    value: &'a [u8],
}

fn text(name: &'static str, value: &'static str) -> Field<'static> {
    Field { name, file_name: None, value: value.as_bytes() }
}

fn file<'a>(file_name: &'a str, value: &'a [u8]) -> Field<'a> {
    Field { name: "codeFile", file_name: Some(file_name), value }
}

fn multipart(fields: &[Field<'_>]) -> Vec<u8> {
    let mut body = Vec::new();
    for field in fields {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match field.file_name {
            Some(file_name) => body.extend_from_slice(
                format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: application/octet-stream\r\n\r\n",
                    field.name, file_name
                )
                .as_bytes(),
            ),
            None => body.extend_from_slice(format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", field.name).as_bytes()),
        }
        body.extend_from_slice(field.value);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn state(root: &TempDir, orchestrator: AnalysisOrchestrator, max_upload_bytes: u64, show_error_details: bool) -> Arc<AppState> {
    let store = ReportStore::new(root.path().join("uploads"), root.path().join("reports"));
    std::fs::create_dir_all(store.uploads_dir()).unwrap();
    std::fs::create_dir_all(store.reports_dir()).unwrap();
    Arc::new(AppState::new(orchestrator, store, max_upload_bytes, show_error_details))
}

fn placeholder_state(root: &TempDir) -> Arc<AppState> {
    state(root, AnalysisOrchestrator::disabled(), 5 * 1024 * 1024, false)
}

async fn get(state: Arc<AppState>, path: &str) -> (StatusCode, String) {
    let response = warp::test::request().method("GET").path(path).reply(&routes(state)).await;
    (response.status(), String::from_utf8_lossy(response.body()).to_string())
}

async fn post_form(state: Arc<AppState>, body: Vec<u8>) -> (StatusCode, String) {
    let response = warp::test::request()
        .method("POST")
        .path("/analyze")
        .header("content-type", format!("multipart/form-data; boundary={}", BOUNDARY))
        .body(body)
        .reply(&routes(state))
        .await;
    (response.status(), String::from_utf8_lossy(response.body()).to_string())
}

fn stored_report_ids(reports_dir: &Path) -> Vec<String> {
    std::fs::read_dir(reports_dir)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().to_string();
            name.strip_prefix("report-")
                .and_then(|rest| rest.strip_suffix(".json"))
                .map(|id| id.to_string())
        })
        .collect()
}

#[tokio::test]
async fn index_defaults_to_dutch() {
    let root = TempDir::new().unwrap();

    let (status, html) = get(placeholder_state(&root), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Upload je code voor een analyse"));

    let (status, html) = get(placeholder_state(&root), "/?lang=en").await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Upload your code for an analysis"));
}

#[tokio::test]
async fn unknown_paths_render_the_not_found_page() {
    let root = TempDir::new().unwrap();

    let (status, html) = get(placeholder_state(&root), "/admin").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Pagina niet gevonden"));

    let (status, html) = get(placeholder_state(&root), "/admin?lang=en").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Page not found"));
}

#[tokio::test]
async fn not_found_page_honors_language_for_every_method() {
    let root = TempDir::new().unwrap();

    for method in ["POST", "PUT", "DELETE"] {
        let response = warp::test::request()
            .method(method)
            .path("/admin?lang=en")
            .reply(&routes(placeholder_state(&root)))
            .await;
        let html = String::from_utf8_lossy(response.body()).to_string();
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{method}");
        assert!(html.contains("Page not found"), "{method}");
        assert!(html.contains(r#"lang="en""#), "{method}");
    }

    let response = warp::test::request().method("POST").path("/?lang=en").reply(&routes(placeholder_state(&root))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert!(String::from_utf8_lossy(response.body()).contains("Page not found"));
}

#[tokio::test]
async fn missing_report_is_not_found() {
    let root = TempDir::new().unwrap();

    let (status, html) = get(placeholder_state(&root), "/reports/does-not-exist?lang=en").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("Report not found"));
}

#[tokio::test]
async fn upload_without_key_yields_placeholder_report() {
    let root = TempDir::new().unwrap();
    let state = placeholder_state(&root);
    let body = multipart(&[
        file("hello.py", b"print('hi')"),
        text("language", "en"),
    ]);

    let (status, html) = post_form(Arc::clone(&state), body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(PLACEHOLDER_OVERALL_EN));
    assert!(html.contains("print(&#39;hi&#39;)"));

    let ids = stored_report_ids(state.store.reports_dir());
    assert_eq!(ids.len(), 1);

    let (status, html) = get(Arc::clone(&state), &format!("/reports/{}", ids[0])).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains(PLACEHOLDER_OVERALL_EN));

    let (status, html) = get(state, &format!("/reports/{}?lang=nl", ids[0])).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Sterke punten"));
}

#[tokio::test]
async fn upload_with_provider_renders_model_feedback() {
    let root = TempDir::new().unwrap();
    let stub = StubProvider::replying(&analysis_json().to_string());
    let orchestrator = AnalysisOrchestrator::new(Some(stub.clone() as Arc<dyn AiProvider>), "stub");
    let state = state(&root, orchestrator, 5 * 1024 * 1024, false);

    let body = multipart(&[
        file("cart.js", b"let total = 0;"),
        text("language", "nl"),
        text("targetLanguage", "javascript"),
    ]);

    let (status, html) = post_form(state, body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stub.calls(), 1);
    assert!(html.contains("Compact and readable."));
    assert!(html.contains("AI analyse (stub)"));
    assert!(!html.contains(PLACEHOLDER_OVERALL_NL));
}

#[tokio::test]
async fn failed_provider_call_is_recorded_in_the_saved_report() {
    let root = TempDir::new().unwrap();
    let stub = StubProvider::failing(AiProviderError::RateLimited("slow down".to_string()));
    let orchestrator = AnalysisOrchestrator::new(Some(stub.clone() as Arc<dyn AiProvider>), "stub");
    let state = state(&root, orchestrator, 5 * 1024 * 1024, false);

    let body = multipart(&[file("cart.js", b"let total = 0;"), text("language", "en")]);
    let (status, html) = post_form(Arc::clone(&state), body).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stub.calls(), 1);
    assert!(html.contains(PLACEHOLDER_OVERALL_EN));
    assert!(html.contains("AI unavailable, showing demo analysis"));

    let ids = stored_report_ids(state.store.reports_dir());
    assert_eq!(ids.len(), 1);
    let saved = std::fs::read_to_string(state.store.reports_dir().join(format!("report-{}.json", ids[0]))).unwrap();
    let saved: serde_json::Value = serde_json::from_str(&saved).unwrap();
    assert_eq!(saved["aiEnabled"], serde_json::Value::Bool(false));
    assert_eq!(saved["aiAttempted"], serde_json::Value::Bool(true));

    let (status, html) = get(state, &format!("/reports/{}", ids[0])).await;
    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("AI unavailable, showing demo analysis"));
}

#[tokio::test]
async fn unsupported_extension_is_a_localized_error() {
    let root = TempDir::new().unwrap();
    let state = placeholder_state(&root);

    let (status, html) = post_form(Arc::clone(&state), multipart(&[file("tool.exe", b"MZ")])).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(html.contains("Bestandstype .exe is niet toegestaan"));
    assert!(!html.contains("<pre>"));
    assert!(stored_report_ids(state.store.reports_dir()).is_empty());
}

#[tokio::test]
async fn missing_and_empty_files_are_rejected() {
    let root = TempDir::new().unwrap();

    let (status, html) = post_form(placeholder_state(&root), multipart(&[text("language", "en")])).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(html.contains("No file uploaded"));

    let state = state(&root, AnalysisOrchestrator::disabled(), 1024, true);
    let (status, html) = post_form(state, multipart(&[file("empty.js", b""), text("language", "en")])).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(html.contains("The file is empty"));
    assert!(html.contains("<pre>"));
}

#[tokio::test]
async fn oversized_files_are_rejected() {
    let root = TempDir::new().unwrap();

    // Over the validator limit but within the form limit.
    let state_small = state(&root, AnalysisOrchestrator::disabled(), 16, false);
    let (status, html) = post_form(state_small, multipart(&[file("big.js", &[b'a'; 32])])).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(html.contains("Bestand is te groot (max 16 bytes)"));
    assert!(!html.contains("5MB"));

    // Over the form limit: rejected before the handler runs.
    let state_small = state(&root, AnalysisOrchestrator::disabled(), 16, false);
    let huge = vec![b'a'; 128 * 1024];
    let (status, html) = post_form(state_small, multipart(&[file("huge.js", &huge)])).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert!(html.contains("Bestand is te groot (max 16 bytes)"));
}

#[tokio::test]
async fn size_limit_message_follows_the_configured_limit() {
    let root = TempDir::new().unwrap();
    let state = state(&root, AnalysisOrchestrator::disabled(), 1024 * 1024, false);

    let big = vec![b'a'; 1024 * 1024 + 1];
    let (status, html) = post_form(state, multipart(&[file("big.js", &big), text("language", "en")])).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(html.contains("File is too large (max 1MB)"));
}
