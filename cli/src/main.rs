//! CLI entrypoint for jobscout
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use jobscout_application::{
    CredentialPolicy, CredentialStore, LlmGateway, ResultCache, SearchClient, SessionConfig,
    SessionController,
};
use jobscout_domain::Model;
use jobscout_infrastructure::{ConfigLoader, EnvCredentialSource, FileConfig, GeminiGateway};
use jobscout_presentation::{Cli, ConsoleFormatter, TuiApp, run_once};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // The form owns the terminal, so only headless runs log to stderr
    let _log_guard = init_logging(cli.verbose, cli.is_headless());

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    ConsoleFormatter::set_plain(cli.plain);

    if cli.list_categories {
        print!("{}", ConsoleFormatter::format_categories());
        return Ok(());
    }

    info!("Starting jobscout");

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    for warning in file_config.validate() {
        warn!("Config: {}", warning);
    }

    let session = resolve_session(&cli, &file_config);
    info!(
        policy = %session.credential_policy,
        model = %session.model,
        web_search = session.web_search,
        "Session configuration resolved"
    );

    // === Dependency Injection ===
    let gateway: Arc<dyn LlmGateway> = Arc::new(
        GeminiGateway::new(
            file_config.gemini.base_url.clone(),
            file_config.gemini.validate_on_connect,
        )
        .context("Failed to initialize the Gemini client")?,
    );

    let store = match session.credential_policy {
        CredentialPolicy::ProcessScoped => {
            EnvCredentialSource::load_dotenv();
            let source = EnvCredentialSource::from_config(&file_config.gemini);
            let credential = source.resolve()?;
            CredentialStore::process_scoped(gateway, credential)
                .await
                .with_context(|| {
                    format!("Failed to initialize Gemini with the key from {}", source.var())
                })?
        }
        policy => CredentialStore::new(gateway, policy),
    };

    let cache = Arc::new(ResultCache::new());
    let search = SearchClient::new(session.model.clone()).with_web_search(session.web_search);
    let model_name = session.model.to_string();
    let mut controller = SessionController::new(store, cache, search, session.regate);

    match cli.category {
        Some(category) => {
            let mut stdout = std::io::stdout();
            let result =
                run_once(&mut controller, category, &model_name, cli.quiet, &mut stdout).await?;
            match result {
                None => bail!("No Gemini API key available"),
                Some(result) if result.is_fallback => bail!("Search failed for {}", result.label),
                Some(_) => {}
            }
        }
        None => {
            TuiApp::new(controller, model_name).run().await?;
        }
    }

    Ok(())
}

/// Merge CLI flags over the file configuration
fn resolve_session(cli: &Cli, file_config: &FileConfig) -> SessionConfig {
    let mut session = file_config.to_session_config();

    if let Some(policy) = cli.credential_source {
        session = session.with_credential_policy(policy);
    }

    if let Some(model) = &cli.model {
        let Ok(model) = model.parse::<Model>();
        session = session.with_model(model);
    }

    // Headless runs have no form to type a key into
    if cli.is_headless() && session.credential_policy != CredentialPolicy::ProcessScoped {
        info!("Headless run: reading the API key from the environment");
        session = session.with_credential_policy(CredentialPolicy::ProcessScoped);
    }

    session
}

/// Initialize logging based on verbosity level.
///
/// Interactive runs write to `<data dir>/jobscout/jobscout.log`; the returned
/// guard flushes the non-blocking writer on drop. When the log file cannot be
/// opened a one-line warning goes to stderr before the form takes over the
/// terminal, and events are discarded.
fn init_logging(verbose: u8, headless: bool) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    if headless {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return None;
    }

    let appender = dirs::data_dir()
        .context("No data directory on this platform")
        .and_then(|dir| open_log_appender(&dir.join("jobscout")));

    match appender {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(writer)
                .init();
            Some(guard)
        }
        Err(e) => {
            eprintln!("warning: file logging disabled: {:#}", e);
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::sink)
                .init();
            None
        }
    }
}

/// Open `<dir>/jobscout.log`, creating `dir` if needed
fn open_log_appender(dir: &Path) -> Result<RollingFileAppender> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix("jobscout.log")
        .build(dir)
        .with_context(|| format!("Failed to open log file in {}", dir.display()))
}
