use std::collections::HashMap;
use std::convert::Infallible;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use futures::TryStreamExt;
use tokio::sync::oneshot;
use warp::http::{Method, StatusCode};
use warp::hyper::body::Buf;
use warp::multipart::{FormData, Part};
use warp::path::FullPath;
use warp::reply::{Html, WithStatus};
use warp::{Filter, Rejection, Reply};

use crate::config::constants::{FORM_OVERHEAD_BYTES, SERVER_SHUTDOWN_GRACE_PERIOD_MS, sleep_duration_millis};
use crate::enums::ui_language::UiLanguage;
use crate::enums::upload_error_kind::UploadErrorKind;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::helpers::file_helper::resolve_target_language;
use crate::helpers::labels::labels;
use crate::services::analysis_orchestrator::AnalysisOrchestrator;
use crate::services::report_store::ReportStore;
use crate::services::upload_validator::UploadValidator;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::config::Config;
use crate::structs::report::Report;
use crate::ui::html_renderer::{render_error, render_index, render_results};

const CODE_FILE_FIELD: &str = "codeFile";
const LANGUAGE_FIELD: &str = "language";
const TARGET_LANGUAGE_FIELD: &str = "targetLanguage";

type HtmlReply = WithStatus<Html<String>>;

/// Everything a request handler needs, shared read-only between requests.
pub struct AppState {
    pub orchestrator: AnalysisOrchestrator,
    pub store: ReportStore,
    pub validator: UploadValidator,
    pub max_upload_bytes: u64,
    pub show_error_details: bool,
}

impl AppState {
    pub fn new(orchestrator: AnalysisOrchestrator, store: ReportStore, max_upload_bytes: u64, show_error_details: bool) -> Self {
        Self {
            orchestrator,
            store,
            validator: UploadValidator::new(max_upload_bytes),
            max_upload_bytes,
            show_error_details,
        }
    }

    pub fn from_config(config: &Config, orchestrator: AnalysisOrchestrator) -> Self {
        Self::new(
            orchestrator,
            ReportStore::from_config(&config.storage),
            config.storage.max_upload_bytes,
            config.server.show_error_details,
        )
    }
}

pub struct WebServer {
    state: Arc<AppState>,
    host: String,
    port: u16,
    address: Option<SocketAddr>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl WebServer {
    pub fn new(state: AppState, host: &str, port: u16) -> Self {
        Self {
            state: Arc::new(state),
            host: host.to_string(),
            port,
            address: None,
            shutdown_tx: None,
        }
    }

    pub fn url(&self) -> Option<String> {
        self.address.map(|address| format!("http://{}", address))
    }

    pub async fn start(&mut self) -> AnalyzerResult<SocketAddr> {
        self.state.store.ensure_directories().await?;

        let ip: IpAddr = self.host.parse().map_err(|_| {
            AnalyzerError::config_error(
                &format!("Invalid server host '{}'", self.host),
                Some("server.host"),
                Some("Use an IP address such as 127.0.0.1 or 0.0.0.0"),
            )
        })?;

        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        self.shutdown_tx = Some(shutdown_tx);

        let (address, server) = warp::serve(routes(Arc::clone(&self.state)))
            .try_bind_with_graceful_shutdown((ip, self.port), async {
                shutdown_rx.await.ok();
            })
            .map_err(|e| AnalyzerError::system_error(&format!("binding {}:{}", self.host, self.port), &e.to_string()))?;

        tokio::spawn(server);
        self.address = Some(address);

        log::info!("🌐 Web server listening on http://{}", address);
        if self.state.orchestrator.is_enabled() {
            log::info!("🤖 AI analysis enabled via {}", self.state.orchestrator.provider_name());
        } else {
            log::warn!("🎭 No API key found, serving placeholder analyses");
        }

        Ok(address)
    }

    pub async fn shutdown(&mut self) -> AnalyzerResult<()> {
        log::info!("🛑 Shutting down web server...");

        if let Some(shutdown_tx) = self.shutdown_tx.take() {
            shutdown_tx.send(()).map_err(|_|
                AnalyzerError::system_error("shutdown", "Failed to send shutdown signal")
            )?;
        }

        tokio::time::sleep(sleep_duration_millis(SERVER_SHUTDOWN_GRACE_PERIOD_MS)).await;
        log::info!("✅ Web server shutdown complete");

        Ok(())
    }
}

/// All routes, with rejections turned into HTML error pages.
pub fn routes(state: Arc<AppState>) -> impl Filter<Extract = (impl Reply,), Error = Infallible> + Clone {
    let max_upload_bytes = state.max_upload_bytes;
    let form_limit = max_upload_bytes + FORM_OVERHEAD_BYTES;
    let state_filter = warp::any().map(move || Arc::clone(&state));

    let index = warp::path::end()
        .and(warp::get())
        .and(warp::query::<HashMap<String, String>>())
        .and_then(index_handler);

    let analyze = warp::path("analyze")
        .and(warp::path::end())
        .and(warp::post())
        .and(warp::multipart::form().max_length(form_limit))
        .and(state_filter.clone())
        .and_then(analyze_handler);

    let report = warp::path!("reports" / String)
        .and(warp::get())
        .and(warp::query::<HashMap<String, String>>())
        .and(state_filter)
        .and_then(report_handler);

    let fallback = warp::method()
        .and(warp::path::full())
        .and(warp::query::<HashMap<String, String>>())
        .and_then(not_found_handler);

    index
        .or(analyze)
        .or(report)
        .or(fallback)
        .recover(move |rejection: Rejection| handle_rejection(rejection, max_upload_bytes))
}

fn is_upload_route(method: &Method, path: &FullPath) -> bool {
    *method == Method::POST && path.as_str().trim_end_matches('/') == "/analyze"
}

fn html_page(body: String, status: StatusCode) -> HtmlReply {
    warp::reply::with_status(warp::reply::html(body), status)
}

fn requested_language(query: &HashMap<String, String>) -> Option<UiLanguage> {
    query.get("lang").and_then(|code| code.parse().ok())
}

async fn index_handler(query: HashMap<String, String>) -> Result<HtmlReply, Infallible> {
    let language = requested_language(&query).unwrap_or_default();
    Ok(html_page(render_index(language), StatusCode::OK))
}

async fn not_found_handler(method: Method, path: FullPath, query: HashMap<String, String>) -> Result<HtmlReply, Rejection> {
    // Upload rejections (body too large, bad form) must reach `handle_rejection`.
    if is_upload_route(&method, &path) {
        return Err(warp::reject::not_found());
    }

    let language = requested_language(&query).unwrap_or_default();
    let message = labels(language).page_not_found;
    Ok(html_page(render_error(message, language, None), StatusCode::NOT_FOUND))
}

#[derive(Debug, Default)]
struct UploadForm {
    file_name: Option<String>,
    contents: Option<Vec<u8>>,
    language: Option<String>,
    target_language: Option<String>,
}

async fn read_part(part: Part) -> Result<Vec<u8>, warp::Error> {
    part.stream()
        .try_fold(Vec::new(), |mut bytes, chunk| async move {
            bytes.extend_from_slice(chunk.chunk());
            Ok(bytes)
        })
        .await
}

fn part_text(bytes: Vec<u8>) -> Option<String> {
    let text = String::from_utf8_lossy(&bytes).trim().to_string();
    (!text.is_empty()).then_some(text)
}

async fn read_form(mut form: FormData) -> Result<UploadForm, warp::Error> {
    let mut upload = UploadForm::default();

    while let Some(part) = form.try_next().await? {
        let name = part.name().to_string();
        let file_name = part.filename().map(|f| f.to_string());

        match name.as_str() {
            CODE_FILE_FIELD => {
                upload.file_name = file_name;
                upload.contents = Some(read_part(part).await?);
            }
            LANGUAGE_FIELD => upload.language = part_text(read_part(part).await?),
            TARGET_LANGUAGE_FIELD => upload.target_language = part_text(read_part(part).await?),
            other => log::debug!("Ignoring form field {}", other),
        }
    }

    Ok(upload)
}

async fn analyze_handler(form: FormData, state: Arc<AppState>) -> Result<HtmlReply, Infallible> {
    let form = match read_form(form).await {
        Ok(form) => form,
        Err(e) => {
            log::error!("❌ Could not read upload form: {}", e);
            let error = AnalyzerError::system_error("reading upload form", &e.to_string());
            return Ok(analysis_error_page(&state, &error, UiLanguage::default()));
        }
    };

    let language = UiLanguage::from_param(form.language.as_deref());

    match process_upload(&state, form, language).await {
        Ok(report) => {
            log::info!("✨ Analysis of {} ready as report {}", report.file_name, report.id);
            Ok(html_page(render_results(&report, language), StatusCode::OK))
        }
        Err(error) => {
            log::error!("❌ Analysis request failed: {}", error);
            Ok(analysis_error_page(&state, &error, language))
        }
    }
}

async fn process_upload(state: &AppState, form: UploadForm, language: UiLanguage) -> AnalyzerResult<Report> {
    let upload = state.validator.validate(form.file_name.as_deref(), form.contents.as_deref())?;
    let raw = form.contents.as_deref().unwrap_or_default();

    log::info!("📥 Received {} ({} bytes)", upload.file_name, raw.len());
    let stored = state.store.save_upload(&upload.file_name, raw).await?;

    let target_language = resolve_target_language(form.target_language.as_deref(), &upload.file_name);
    let request = AnalysisRequest::new(upload.code, upload.file_name, language, target_language);

    let result = state.orchestrator.analyze(&request).await;
    let report = Report::new(&request, result, state.orchestrator.provider_name());

    if let Err(error) = state.store.save_report(&report).await {
        state.store.remove_upload(&stored).await;
        return Err(error);
    }

    Ok(report)
}

fn analysis_error_page(state: &AppState, error: &AnalyzerError, language: UiLanguage) -> HtmlReply {
    let details = state.show_error_details.then(|| error.to_string());
    let body = render_error(&error.user_message(language), language, details.as_deref());
    html_page(body, StatusCode::INTERNAL_SERVER_ERROR)
}

async fn report_handler(id: String, query: HashMap<String, String>, state: Arc<AppState>) -> Result<HtmlReply, Infallible> {
    let requested = requested_language(&query);

    match state.store.load_report(&id).await {
        Ok(report) => {
            let language = requested.unwrap_or(report.language);
            Ok(html_page(render_results(&report, language), StatusCode::OK))
        }
        Err(AnalyzerError::ReportNotFound { .. }) => {
            let language = requested.unwrap_or_default();
            let message = labels(language).report_not_found;
            Ok(html_page(render_error(message, language, None), StatusCode::NOT_FOUND))
        }
        Err(error) => {
            log::error!("❌ Could not load report {}: {}", id, error);
            let language = requested.unwrap_or_default();
            let details = state.show_error_details.then(|| error.to_string());
            let body = render_error(labels(language).report_load_error, language, details.as_deref());
            Ok(html_page(body, StatusCode::INTERNAL_SERVER_ERROR))
        }
    }
}

/// Unknown paths are answered by `not_found_handler`, so what lands here comes
/// from the upload route, whose form fields (and language) were never read.
async fn handle_rejection(rejection: Rejection, max_upload_bytes: u64) -> Result<HtmlReply, Infallible> {
    let language = UiLanguage::default();
    let l = labels(language);

    let (status, message) = if rejection.find::<warp::reject::PayloadTooLarge>().is_some() {
        let kind = UploadErrorKind::FileTooLarge { max_bytes: max_upload_bytes };
        (StatusCode::PAYLOAD_TOO_LARGE, kind.user_message(language))
    } else if rejection.is_not_found() || rejection.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::NOT_FOUND, l.page_not_found.to_string())
    } else {
        log::error!("❌ Unhandled rejection: {:?}", rejection);
        (StatusCode::INTERNAL_SERVER_ERROR, l.internal_error.to_string())
    };

    Ok(html_page(render_error(&message, language, None), status))
}
