use std::path::{Path, PathBuf};
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::enums::ui_language::UiLanguage;
use crate::errors::{AnalyzerError, AnalyzerResult};
use crate::helpers::file_helper::resolve_target_language;
use crate::logger::report_logger::ReportLogger;
use crate::services::analysis_orchestrator::AnalysisOrchestrator;
use crate::services::report_store::ReportStore;
use crate::services::upload_validator::UploadValidator;
use crate::structs::analysis_request::AnalysisRequest;
use crate::structs::config::config::Config;
use crate::structs::report::Report;
use crate::ui::web_server::{AppState, WebServer};

pub struct CommandRunner {
    config_path: Option<PathBuf>,
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new(config_path: Option<PathBuf>) -> Self {
        Self {
            config_path,
            start_time: None,
        }
    }

    pub async fn run_command(&mut self, command: Commands) -> AnalyzerResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Serve { port, open } => self.serve_command(port, open).await,
            Commands::Analyze { file, lang, target, json, save } => self.analyze_command(&file, lang, target, json, save).await,
            Commands::Show { id } => self.show_command(&id).await,
            Commands::Init => self.init_command(),
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::debug!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn load_config(&self) -> AnalyzerResult<Config> {
        match ConfigManager::load(self.config_path.as_deref()) {
            Ok(config) => Ok(config),
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'ai-code-analyzer init' to create a configuration file.");
                Err(e)
            }
        }
    }

    fn load_valid_config(&self) -> AnalyzerResult<Config> {
        let config = self.load_config()?;

        if let Err(errors) = ConfigManager::validate_config(&config) {
            for error in &errors {
                log::error!("  ❌ {}", error);
            }
            return Err(AnalyzerError::config_error(
                &format!("{} configuration problem(s) found", errors.len()),
                None,
                Some("Run 'ai-code-analyzer validate' for details"),
            ));
        }

        Ok(config)
    }

    async fn serve_command(&self, port: Option<u16>, open: bool) -> AnalyzerResult<()> {
        let mut config = self.load_valid_config()?;
        if let Some(port) = port {
            config.server.port = port;
        }

        let orchestrator = AnalysisOrchestrator::from_config(&config)?;
        let state = AppState::from_config(&config, orchestrator);
        let mut server = WebServer::new(state, &config.server.host, config.server.port);
        server.start().await?;

        if open || config.server.open_browser {
            if let Some(url) = server.url() {
                if let Err(e) = webbrowser::open(&url) {
                    log::warn!("⚠️ Could not open browser: {}", e);
                    log::info!("🔗 Open {} manually", url);
                }
            }
        }

        log::info!("⌨️  Press Ctrl-C to stop");
        tokio::signal::ctrl_c()
            .await
            .map_err(|e| AnalyzerError::system_error("waiting for Ctrl-C", &e.to_string()))?;

        server.shutdown().await
    }

    async fn analyze_command(&self, file: &Path, language: UiLanguage, target: Option<String>, json: bool, save: bool) -> AnalyzerResult<()> {
        let config = self.load_valid_config()?;

        let file_name = file
            .file_name()
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_default();
        let contents = tokio::fs::read(file)
            .await
            .map_err(|e| AnalyzerError::file_error(&file.display().to_string(), "read", &e.to_string()))?;

        let upload = UploadValidator::new(config.storage.max_upload_bytes).validate(Some(file_name.as_str()), Some(contents.as_slice()))?;
        let target_language = resolve_target_language(target.as_deref(), &upload.file_name);
        log::info!("🔍 Analyzing {} as {}", upload.file_name, target_language);

        let orchestrator = AnalysisOrchestrator::from_config(&config)?;
        let request = AnalysisRequest::new(upload.code, upload.file_name, language, target_language);
        let result = orchestrator.analyze(&request).await;
        let report = Report::new(&request, result, orchestrator.provider_name());

        if save {
            let store = ReportStore::from_config(&config.storage);
            store.ensure_directories().await?;
            store.save_report(&report).await?;
        }

        if json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            ReportLogger::print_report(&report, language);
        }

        Ok(())
    }

    async fn show_command(&self, id: &str) -> AnalyzerResult<()> {
        let config = self.load_config()?;
        let store = ReportStore::from_config(&config.storage);

        let report = store.load_report(id).await?;
        ReportLogger::print_report(&report, report.language);
        Ok(())
    }

    fn init_command(&self) -> AnalyzerResult<()> {
        log::info!("🚀 Initializing ai-code-analyzer configuration...");

        let path = ConfigManager::create_sample_config(self.config_path.as_deref())?;
        log::info!("📝 Edit {} to adjust the server, storage and AI settings.", path.display());
        log::info!("🔧 Run 'ai-code-analyzer validate' to check your configuration.");
        Ok(())
    }

    fn validate_command(&self) -> AnalyzerResult<()> {
        log::info!("🔍 Validating configuration...");
        let config = self.load_config()?;

        match ConfigManager::validate_config(&config) {
            Ok(()) => {
                log::info!("✅ Configuration is valid");
                if config.ai_enabled() {
                    log::info!("🤖 AI analysis enabled: {} / {}", config.ai.provider, config.ai.model);
                } else {
                    log::warn!("🎭 {} is not set, analyses will use placeholder results", config.ai.api_key_env);
                }
                Ok(())
            }
            Err(errors) => {
                log::error!("❌ Configuration validation failed:");
                for error in &errors {
                    log::error!("  • {}", error);
                }
                Err(AnalyzerError::config_error(
                    &format!("{} configuration problem(s) found", errors.len()),
                    None,
                    None,
                ))
            }
        }
    }
}
